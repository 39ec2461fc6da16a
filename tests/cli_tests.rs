mod common;

use assert_cmd::Command;
use common::DocFixture;
use std::fs;
use thaikey::api::load_report;
use thaikey::profiles::TypistProfile;

fn thaikey() -> Command {
    Command::cargo_bin("thaikey").expect("binary should build")
}

fn analyze(fx: &DocFixture, extra: &[&str]) -> std::process::Output {
    let out_dir = fx.out_dir();
    let mut cmd = thaikey();
    cmd.arg("analyze")
        .arg(&fx.path)
        .arg("--output")
        .arg(&out_dir)
        .args(extra);
    cmd.output().expect("failed to run thaikey")
}

#[test]
fn test_analyze_writes_json_and_prints_tables() {
    let fx = DocFixture::sample();
    let output = analyze(&fx, &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CURRENT"));
    assert!(stdout.contains("Thai + Kedmanee"));
    assert!(stdout.contains("Digit costs"));
    assert!(stdout.contains("560.0"));

    let report = load_report(fx.out_dir().join("analysis.json")).unwrap();
    assert_eq!(report.analysis_results.len(), 1);
    assert_eq!(report.analysis_results[0].profile, TypistProfile::Average);
}

#[test]
fn test_analyze_compare_all_with_extra_json() {
    let fx = DocFixture::sample();
    let output = analyze(&fx, &["--compare-all", "--format", "json", "--output-json", "copy"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved:"));

    let copy = load_report(fx.out_dir().join("copy.json")).unwrap();
    assert_eq!(copy.analysis_results.len(), 4);
}

#[test]
fn test_analyze_markdown() {
    let fx = DocFixture::sample();
    let output = analyze(&fx, &["--format", "markdown"]);
    assert!(output.status.success());

    let md_files: Vec<_> = fs::read_dir(fx.out_dir())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("Thai_Numbers_Analysis_Report_") && n.ends_with(".md"))
        .collect();
    assert_eq!(md_files.len(), 1);

    let md = fs::read_to_string(fx.out_dir().join(&md_files[0])).unwrap();
    assert!(md.starts_with("# Thai Numbers Typing Cost Analysis"));
    assert!(md.contains("## Key Findings"));
    assert!(md.contains("## Impact Projections"));
    assert!(md.contains("| Scenario | Minutes |"));
    assert!(md.contains("| ๒ | 4 | 560.0 | 2.24 |"));
}

#[test]
fn test_compare_all_rejects_keystroke_time() {
    let fx = DocFixture::sample();
    let output = analyze(&fx, &["--compare-all", "--keystroke-time", "0.5"]);
    assert!(!output.status.success());
    assert!(!fx.out_dir().join("analysis.json").exists());
}

#[test]
fn test_keystroke_override() {
    let fx = DocFixture::new("๑");
    let output = analyze(&fx, &["--keystroke-time", "0.5", "--format", "json"]);
    assert!(output.status.success());

    let report = load_report(fx.out_dir().join("analysis.json")).unwrap();
    let results = &report.analysis_results[0];
    assert_eq!(results.keystroke_time, 0.5);
}

#[test]
fn test_config_file_with_cli_override() {
    let fx = DocFixture::sample();
    let config_path = fx.dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "analysis": { "typist": "expert", "compare_all": false }, "output": { "format": "json" } }"#,
    )
    .unwrap();

    let output = analyze(
        &fx,
        &["--config", config_path.to_str().unwrap(), "--typist", "worst"],
    );
    assert!(output.status.success());

    let report = load_report(fx.out_dir().join("analysis.json")).unwrap();
    assert_eq!(report.analysis_results[0].profile, TypistProfile::Worst);
    // Format came from the file.
    assert!(String::from_utf8_lossy(&output.stdout).contains("Saved:"));
}

#[test]
fn test_missing_document_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    thaikey()
        .arg("analyze")
        .arg(dir.path().join("missing.txt"))
        .arg("--output")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_unknown_typist_exits_nonzero() {
    let fx = DocFixture::sample();
    let output = analyze(&fx, &["--typist", "robot"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("robot"));
}

#[test]
fn test_render_saved_analysis() {
    let fx = DocFixture::sample();
    assert!(analyze(&fx, &["--format", "json"]).status.success());

    let output = thaikey()
        .arg("render")
        .arg(fx.out_dir().join("analysis.json"))
        .arg("--format")
        .arg("console")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("OPTIMAL"));
}

#[test]
fn test_render_markdown_named_after_analysis() {
    let fx = DocFixture::sample();
    assert!(analyze(&fx, &["--format", "json"]).status.success());
    let analysis = fx.out_dir().join("analysis.json");
    let report = load_report(&analysis).unwrap();
    let render_dir = fx.dir.path().join("rendered");

    let output = thaikey()
        .arg("render")
        .arg(&analysis)
        .args(["--format", "markdown", "--output"])
        .arg(&render_dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stamp = report.metadata.generated_at.format("%Y%m%d_%H%M%S");
    let expected = render_dir.join(format!("analysis_report_{}.md", stamp));
    assert!(expected.exists(), "missing {}", expected.display());
}

#[test]
fn test_render_rejects_analysis_flags() {
    let fx = DocFixture::sample();
    assert!(analyze(&fx, &["--format", "json"]).status.success());

    for flag in [["--typist", "worst"], ["--keystroke-time", "0.5"]] {
        thaikey()
            .arg("render")
            .arg(fx.out_dir().join("analysis.json"))
            .args(flag)
            .assert()
            .failure()
            .code(2);
    }
}

#[test]
fn test_layouts_command() {
    let output = thaikey()
        .args(["layouts", "--keystroke-time", "0.28"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kedmanee"));
    assert!(stdout.contains("pattajoti"));
    assert!(stdout.contains("0.56"));
}

#[test]
fn test_typists_command() {
    let output = thaikey().arg("typists").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in ["expert", "skilled", "average", "worst"] {
        assert!(stdout.contains(key), "missing {}", key);
    }
}
