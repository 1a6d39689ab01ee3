//! End-to-end tests for `brandkit kit`.

use std::fs::File;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_kit_json_with_preset_palette() {
    let output = run(&[
        "kit", "--name", "Acme", "--vibe", "elegant", "--palette", "sunset",
    ]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let json = stdout_json(&output);
    assert_eq!(json["brandName"], "Acme");
    assert_eq!(json["vibe"], "elegant");
    assert_eq!(json["colors"]["primary"]["hex"], "#f59e0b");
    assert_eq!(json["typography"]["primary"], "Playfair Display, serif");
    assert_eq!(json["logos"].as_array().unwrap().len(), 3);
    assert!(json["tagline"].is_null());
}

#[test]
fn test_kit_custom_colors() {
    let output = run(&[
        "kit", "--name", "Acme", "--primary", "#ff0000", "--accent", "0000ff",
    ]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let json = stdout_json(&output);
    assert_eq!(json["colors"]["primary"]["hsl"], "hsl(0, 100%, 50%)");
    assert_eq!(json["colors"]["accent"]["rgb"], "rgb(0, 0, 255)");
}

#[test]
fn test_kit_zip_archive() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("acme.zip");

    let output = run(&[
        "kit",
        "--name",
        "Acme",
        "--tagline",
        "Build different",
        "--zip",
        path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("sha256: "));

    let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let mut names: Vec<_> = archive.file_names().map(ToString::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "brand-kit.json",
            "favicon.svg",
            "logos/horizontal.svg",
            "logos/stacked.svg",
            "logos/wordmark.svg",
            "social-card.svg",
        ]
    );
    assert!(archive.by_name("logos/stacked.svg").is_ok());
}

#[test]
fn test_kit_validation_errors() {
    let output = run(&["kit", "--name", "Acme", "--palette", "Neon"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown palette"));

    let output = run(&["kit", "--name", "Acme", "--primary", "red", "--accent", "#000000"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["kit", "--name", " "]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("Brand name and variants are required"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_kit_zip_unwritable_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing-dir").join("kit.zip");

    let output = run(&["kit", "--name", "Acme", "--zip", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}
