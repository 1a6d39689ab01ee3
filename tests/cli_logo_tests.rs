//! End-to-end tests for `brandkit logo`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_logo_to_stdout() {
    let output = run(&["logo", "--name", "Acme", "--vibe", "futuristic"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let svg = stdout(&output);
    assert!(svg.starts_with(r#"<svg width="350" height="80""#));
    assert!(svg.contains(">ACME</text>"));
    assert!(svg.contains(r#"letter-spacing="0.1em""#));
}

#[test]
fn test_logo_stacked_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logo.svg");

    let output = run(&[
        "logo",
        "--name",
        "R&D",
        "--tagline",
        "fast labs",
        "--layout",
        "stacked",
        "--output",
        path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains(r#"width="300" height="120""#));
    assert!(svg.contains(">r&amp;d</text>"));
    assert!(svg.contains(">FAST LABS</text>"));
}

#[test]
fn test_logo_validation_errors() {
    let output = run(&["logo", "--name", "  "]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Brand name is required"));

    let output = run(&["logo", "--name", "Acme", "--vibe", "grunge"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["logo", "--name", "Acme", "--layout", "diagonal"]);
    assert_eq!(output.status.code(), Some(1));
}
