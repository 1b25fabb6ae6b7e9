//! End-to-end generation tests: config in, SVG out.

use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use blot::{generate_composition, ColourMode, GenerationConfig, SvgDocument};

fn generate_svg(config: &GenerationConfig, seed: u64) -> String {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut doc = SvgDocument::new();
    generate_composition(config, &mut rng, &mut doc).unwrap();
    doc.to_svg()
}

#[test]
fn seeded_generation_is_reproducible() {
    let config = GenerationConfig {
        count: 10,
        ..Default::default()
    };

    assert_eq!(generate_svg(&config, 77), generate_svg(&config, 77));
}

#[test]
fn different_seeds_differ() {
    let config = GenerationConfig::default();
    assert_ne!(generate_svg(&config, 1), generate_svg(&config, 2));
}

#[test]
fn svg_structure_matches_request() {
    let config = GenerationConfig {
        count: 6,
        density: 1.0,
        canvas: 900.0,
        ..Default::default()
    };
    let svg = generate_svg(&config, 5);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains(r#"viewBox="-450 -450 900 900""#), "{}", svg);
    assert_eq!(svg.matches("<path ").count(), 6);
    assert_eq!(svg.matches("fill-rule=\"nonzero\"").count(), 6);
}

#[test]
fn manual_colours_appear_in_output() {
    let config = GenerationConfig {
        count: 4,
        mode: ColourMode::Manual,
        colours: vec!["#12AB34".to_string(), "#FA0070".to_string()],
        ..Default::default()
    };
    let svg = generate_svg(&config, 9);

    assert_eq!(svg.matches(r##"fill="#12AB34""##).count(), 2);
    assert_eq!(svg.matches(r##"fill="#FA0070""##).count(), 2);
}

#[test]
fn config_file_drives_generation() {
    use std::io::Write as _;

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "count: 3\npreset: pastel\ncanvas: 640").unwrap();

    let config = GenerationConfig::load(file.path()).unwrap();
    let svg = generate_svg(&config, 123);

    assert!(svg.contains(r#"viewBox="-320 -320 640 640""#));
    assert_eq!(svg.matches("<path ").count(), 3);
}

#[test]
fn written_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");

    let svg = generate_svg(&GenerationConfig::default(), 4);
    std::fs::write(&path, &svg).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), svg);
}
