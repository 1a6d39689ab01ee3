//! End-to-end tests for `brandkit style`.

mod fixtures;
use fixtures::*;

#[test]
fn test_style_brutalist_json() {
    let output = run(&["style", "brutalist", "--json"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let json = stdout_json(&output);
    assert_eq!(json["vibe"], "brutalist");
    assert_eq!(json["fontFamily"], "Arial Black, sans-serif");
    assert_eq!(json["fontWeight"], "900");
    assert_eq!(json["letterSpacing"], "0.08em");
    assert_eq!(json["textCase"], "uppercase");
}

#[test]
fn test_style_human_readable() {
    let output = run(&["style", "monospace"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert!(stdout.contains("JetBrains Mono, monospace"));
    assert!(stdout.contains("lowercase"));
}

#[test]
fn test_style_unknown_vibe() {
    let output = run(&["style", "grunge"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown vibe"));

    let output = run(&["style", "grunge", "--lenient", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["vibe"], "minimalist");
    assert_eq!(json["fontFamily"], "Inter, sans-serif");
}

#[test]
fn test_style_list() {
    let output = run(&["style", "--list", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    let vibes: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["vibe"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        vibes,
        vec!["minimalist", "futuristic", "elegant", "rounded", "brutalist", "monospace"]
    );
}
