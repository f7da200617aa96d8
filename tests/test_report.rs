use std::fs;

use evotsp::{
    evolution::{EvolutionLauncher, EvolutionOptions},
    point::Point,
    report::SolutionManifest,
    GeneticError,
};

fn solved() -> evotsp::EvolutionResult {
    let points = vec![
        Point::planar("A", 0.0, 0.0),
        Point::planar("B", 0.0, 2.0),
        Point::planar("C", 2.0, 2.0),
        Point::planar("D", 2.0, 0.0),
    ];
    let options = EvolutionOptions::builder()
        .population_size(20)
        .seed(11)
        .build();
    EvolutionLauncher::new(points, options)
        .unwrap()
        .run(25)
        .unwrap()
}

#[test]
fn test_manifest_layout() {
    let result = solved();
    let manifest = SolutionManifest::from_result("square", &result);
    let text = manifest.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Dataset: square");
    assert_eq!(lines[1], "Total distance: 8.0000");
    assert_eq!(lines[2], "Generations: 25");
    assert_eq!(lines[3], "-".repeat(20));
    assert_eq!(lines[4], "Route:");

    let route: Vec<&str> = lines[5].split(" -> ").collect();
    assert_eq!(route.len(), 5);
    assert_eq!(route.first(), route.last());
    let expected: Vec<String> = result.best.points().map(|p| p.name().to_string()).collect();
    assert_eq!(&route[..4], expected.as_slice());
    assert_eq!(manifest.history().len(), 26);
}

#[test]
fn test_write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square_solution.txt");

    let manifest = SolutionManifest::from_result("square", &solved());
    manifest.write_to(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), manifest.to_string());
}

#[test]
fn test_write_to_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("solution.txt");

    let manifest = SolutionManifest::from_result("square", &solved());
    match manifest.write_to(&path) {
        Err(GeneticError::Other(message)) => {
            assert!(message.starts_with("Failed to write manifest to"), "{message}");
        }
        other => panic!("expected a write error, got {other:?}"),
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_manifest_serializes() {
    let manifest = SolutionManifest::from_result("square", &solved());
    let json = serde_json::to_string(&manifest).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["dataset"], "square");
    assert_eq!(value["generations"], 25);
    assert_eq!(value["route"].as_array().unwrap().len(), 4);
    assert_eq!(value["history"].as_array().unwrap().len(), 26);

    let back: SolutionManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, manifest);
}
