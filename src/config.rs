// src/config.rs
use crate::color::{ColorKey, ColorOptions, ColorProfile, Generator, ProfileChoice};
use crate::constants::{DEFAULT_PRIME_WALK_HUE_DISTANCE, DEFAULT_PROFILE_NAME};
use crate::error::AppError;
use crate::types::{parse_page_id, NotionId};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Decode one raw column value (JSON runs) into its typed value
    Decode {
        /// Declared column type, e.g. "title", "multi_select", "file"
        #[arg(long = "type")]
        column_type: String,

        /// Id of the row block owning the value (used by file columns)
        #[arg(long, default_value = "")]
        owner: String,

        /// JSON file holding the raw value (reads stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Decode the rows of a collection: input is `{"schema": …, "blocks": […]}`
    Rows {
        /// Collection id the rows must belong to
        #[arg(long)]
        collection: String,

        /// JSON file holding schema and blocks (reads stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Print the deterministic color of a key
    Color(ColorArgs),

    /// Print the foreground/background pair and classes of a tag
    Tag {
        tag: String,
    },

    /// Print the canonical hyphenated form of a page id, slug or URL
    PageId {
        input: String,
    },
}

#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Tag text or number to colorize
    pub key: String,

    /// Treat the key as a number even when quoted digits would hash differently
    #[arg(long, default_value_t = false)]
    pub numeric: bool,

    /// Named color profile
    #[arg(long, env = "NOTION_BLOG_COLOR_PROFILE", default_value = DEFAULT_PROFILE_NAME)]
    pub profile: String,

    /// Custom profile "space,sMin,sMax,lMin,lMax"; overrides --profile
    #[arg(long)]
    pub custom_profile: Option<ColorProfile>,

    /// Component generator: "halton" or "primeWalk"
    #[arg(long, default_value = "halton")]
    pub generator: Generator,

    /// Degrees added to the hue
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub hue_center: f64,

    /// Factor applied to the centred hue
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub hue_scale: f64,

    /// Prime used by the primeWalk hue step
    #[arg(long, default_value_t = DEFAULT_PRIME_WALK_HUE_DISTANCE)]
    pub prime: f64,
}

/// Where JSON input comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::File)
    }
}

/// A validated unit of work for the binary.
#[derive(Debug, Clone)]
pub enum Task {
    Decode {
        column_type: String,
        owner_id: String,
        input: InputSource,
    },
    Rows {
        collection_id: String,
        input: InputSource,
    },
    Color {
        key: ColorKey,
        options: ColorOptions,
    },
    Tag {
        tag: String,
    },
    PageId {
        id: NotionId,
    },
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub verbose: bool,
    pub task: Task,
}

impl RunConfig {
    /// Resolves CLI input into a validated configuration.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let task = match cli.command {
            CliCommand::Decode {
                column_type,
                owner,
                input,
            } => Task::Decode {
                column_type,
                owner_id: owner,
                input: input.into(),
            },
            CliCommand::Rows { collection, input } => Task::Rows {
                collection_id: parse_page_id(&collection)?,
                input: input.into(),
            },
            CliCommand::Color(args) => Task::Color {
                key: args.key(),
                options: args.options(),
            },
            CliCommand::Tag { tag } => Task::Tag { tag },
            CliCommand::PageId { input } => Task::PageId {
                id: NotionId::parse(&input)?,
            },
        };

        Ok(RunConfig {
            verbose: cli.verbose,
            task,
        })
    }
}

impl ColorArgs {
    fn key(&self) -> ColorKey {
        if self.numeric {
            if let Ok(n) = self.key.trim().parse::<f64>() {
                return ColorKey::Number(n);
            }
            log::warn!("--numeric given but '{}' is not a number; hashing it", self.key);
        }
        ColorKey::Text(self.key.clone())
    }

    fn options(&self) -> ColorOptions {
        let profile = match self.custom_profile {
            Some(custom) => ProfileChoice::Custom(custom),
            None => ProfileChoice::Named(self.profile.clone()),
        };
        ColorOptions::default()
            .with_profile(profile)
            .with_generator(self.generator)
            .with_hue(self.hue_center, self.hue_scale)
            .with_prime_walk_hue_distance(self.prime)
    }
}
