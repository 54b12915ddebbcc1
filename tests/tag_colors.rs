//! Deterministic colorization across profiles and generators.

use notion_blog::color::builtin_profile_names;
use notion_blog::{
    colorize, hsl_components, tag_colors, ColorError, ColorOptions, ColorProfile, ColorSpace,
    Generator,
};
use pretty_assertions::assert_eq;

const SAMPLE_TAGS: [&str; 8] = [
    "Day Hike",
    "Overnight",
    "Alpine",
    "Coastal",
    "Multi-Day",
    "polygenelubricants",
    "Ünïcødé 🏔",
    "",
];

#[test]
fn colorize_is_idempotent() {
    let options = ColorOptions::default()
        .with_profile("default")
        .with_generator(Generator::Halton);
    for tag in SAMPLE_TAGS {
        assert_eq!(
            colorize(tag, &options).unwrap(),
            colorize(tag, &options).unwrap()
        );
    }
}

#[test]
fn components_stay_inside_profile_bounds() {
    for name in builtin_profile_names() {
        for generator in [Generator::Halton, Generator::PrimeWalk] {
            let options = ColorOptions::default()
                .with_profile(name)
                .with_generator(generator);
            for tag in SAMPLE_TAGS {
                let (hsl, profile) = hsl_components(tag, &options).unwrap();
                let (s_min, s_max) = profile.saturation();
                let (l_min, l_max) = profile.lightness();
                assert!((0.0..360.0).contains(&hsl.h), "{} {:?} {}", name, generator, tag);
                assert!(hsl.s >= s_min && hsl.s <= s_max, "{} {:?} {}", name, generator, tag);
                assert!(hsl.l >= l_min && hsl.l <= l_max, "{} {:?} {}", name, generator, tag);
            }
        }
    }
}

#[test]
fn negative_numeric_keys_stay_in_bounds() {
    for generator in [Generator::Halton, Generator::PrimeWalk] {
        let options = ColorOptions::default()
            .with_profile("hsldefault")
            .with_generator(generator)
            .with_hue(-45.0, 3.0);
        for key in [-1, -17, -359, -100_000] {
            let (hsl, _) = hsl_components(key, &options).unwrap();
            assert!((0.0..360.0).contains(&hsl.h));
            assert!((65.0..=95.0).contains(&hsl.s));
            assert!((45.0..=75.0).contains(&hsl.l));
        }
    }
}

#[test]
fn generators_differ_for_the_same_key() {
    let halton = ColorOptions::default().with_profile("hsldefault");
    let prime = halton.clone().with_generator(Generator::PrimeWalk);
    assert_ne!(
        colorize("Alpine", &halton).unwrap(),
        colorize("Alpine", &prime).unwrap()
    );
}

#[test]
fn prime_walk_spreads_small_integers() {
    let options = ColorOptions::default().with_generator(Generator::PrimeWalk);
    let hues: Vec<f64> = (0..=10)
        .map(|key| hsl_components(key, &options).unwrap().0.h)
        .collect();
    for (i, a) in hues.iter().enumerate() {
        for b in &hues[i + 1..] {
            assert!((a - b).abs() > 1e-9, "hues collide: {:?}", hues);
        }
    }

    let (zero, _) = hsl_components(0, &options).unwrap();
    let (last, _) = hsl_components(359, &options).unwrap();
    assert_ne!(zero, last);
}

#[test]
fn hsl_profiles_render_css() {
    let options = ColorOptions::default().with_profile("greyscale");
    let color = colorize("Coastal", &options).unwrap();
    assert!(color.starts_with("hsl(") && color.ends_with("%)"), "{}", color);
    assert!(color.contains(",0%,"), "greyscale has no saturation: {}", color);

    insta::assert_snapshot!(
        colorize(0, &ColorOptions::default().with_profile("saturated")).unwrap(),
        @"hsl(0,100%,40%)"
    );
}

#[test]
fn numeric_strings_match_numbers() {
    let options = ColorOptions::default();
    assert_eq!(
        colorize("42", &options).unwrap(),
        colorize(42, &options).unwrap()
    );
    assert_eq!(
        colorize(" 0x10 ", &options).unwrap(),
        colorize(16, &options).unwrap()
    );
}

#[test]
fn custom_profile_does_not_leak_between_calls() {
    let custom = ColorProfile::new(ColorSpace::Hsl, (5.0, 5.0), (50.0, 50.0)).unwrap();
    let with_custom = ColorOptions::default().with_profile(custom);
    assert_eq!(colorize(0, &with_custom).unwrap(), "hsl(0,5%,50%)");

    assert_eq!(
        colorize(0, &ColorOptions::default().with_profile("user")),
        Err(ColorError::UnknownProfile("user".into()))
    );
}

#[test]
fn unknown_profile_is_an_error() {
    assert_eq!(
        colorize("x", &ColorOptions::default().with_profile("neon")),
        Err(ColorError::UnknownProfile("neon".into()))
    );
}

#[test]
fn concurrent_calls_agree() {
    let expected: Vec<String> = SAMPLE_TAGS
        .iter()
        .map(|tag| tag_colors(*tag).unwrap().background)
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                scope.spawn(move || {
                    let custom =
                        ColorProfile::new(ColorSpace::Hsl, (f64::from(i), 50.0), (10.0, 20.0))
                            .unwrap();
                    let _ = colorize("noise", &ColorOptions::default().with_profile(custom));
                    SAMPLE_TAGS
                        .iter()
                        .map(|tag| tag_colors(*tag).unwrap().background)
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
