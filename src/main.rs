// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_blog::config::{CommandLineInput, InputSource, RunConfig, Task};
use notion_blog::{
    colorize, decode_by_name, decode_rows, pending_user_ids, select_collection_rows, tag_classes,
    tag_colors, AppError, CollectionSchema, RawDecoratedValue, RowBlock,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;

/// Sets up logging configuration.
///
/// Console output goes to stderr so stdout carries only JSON results.
fn setup_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_blog.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Input document of the `rows` command.
#[derive(Debug, Deserialize)]
struct CollectionDump {
    schema: CollectionSchema,
    blocks: Vec<RowBlock>,
}

#[derive(Debug, Serialize)]
struct RowsReport<'a> {
    rows: &'a [notion_blog::DecodedRow],
    pending_user_ids: Vec<String>,
}

fn read_input(source: &InputSource) -> Result<String, AppError> {
    match source {
        InputSource::File(path) => Ok(fs::read_to_string(path)?),
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn parse_input<T: serde::de::DeserializeOwned>(source: &InputSource) -> Result<T, AppError> {
    let text = read_input(source)?;
    serde_json::from_str(&text).map_err(|source_err| AppError::JsonParseError {
        path: match source {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        },
        source: source_err,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs one resolved task and prints its result to stdout.
fn execute(task: &Task) -> Result<()> {
    match task {
        Task::Decode {
            column_type,
            owner_id,
            input,
        } => {
            let raw: RawDecoratedValue = parse_input(input)?;
            let decoded = decode_by_name(&raw, column_type, owner_id);
            print_json(&decoded)
        }
        Task::Rows {
            collection_id,
            input,
        } => {
            let dump: CollectionDump = parse_input(input)?;
            let selected = select_collection_rows(&dump.blocks, collection_id);
            log::info!(
                "{} of {} block(s) belong to collection {}",
                selected.len(),
                dump.blocks.len(),
                collection_id
            );
            let rows = decode_rows(&selected, &dump.schema);
            let pending = pending_user_ids(&rows, &dump.schema);
            print_json(&RowsReport {
                rows: &rows,
                pending_user_ids: pending,
            })
        }
        Task::Color { key, options } => {
            let color = colorize(key.clone(), options).context("colorize failed")?;
            println!("{}", color);
            Ok(())
        }
        Task::Tag { tag } => {
            let colors = tag_colors(tag).context("tag colors failed")?;
            print_json(&serde_json::json!({
                "tag": tag,
                "foreground": colors.foreground,
                "background": colors.background,
                "classes": tag_classes(tag),
            }))
        }
        Task::PageId { id } => {
            println!("{}", id.to_hyphenated());
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("failed to initialise logging")?;

    let config = RunConfig::resolve(cli)?;

    execute(&config.task)
}
