//! Runs the `favigen` binary as a process.

use std::process::Command;

#[test]
fn missing_source_exits_with_failure() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_favigen"))
        .current_dir(dir.path())
        .output()
        .expect("failed to run favigen");

    assert!(!output.status.success(), "missing source should fail the run");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("bulk-watermarker.svg"),
        "error should name the source, got {stderr}"
    );
    let written = std::fs::read_dir(dir.path().join("static/img"))
        .expect("output directory should have been created")
        .count();
    assert_eq!(written, 0, "no icons should be written");
}

#[test]
fn renders_icons_into_static_img() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let output_dir = dir.path().join("static/img");
    std::fs::create_dir_all(&output_dir).expect("failed to create static/img");
    std::fs::write(
        output_dir.join("bulk-watermarker.svg"),
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><rect width="64" height="64"/></svg>"#,
    )
    .expect("failed to write logo SVG");

    let output = Command::new(env!("CARGO_BIN_EXE_favigen"))
        .current_dir(dir.path())
        .output()
        .expect("failed to run favigen");

    assert!(output.status.success(), "run should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().filter(|line| line.starts_with("Saved: ")).count(),
        14,
        "one confirmation per file, got {stdout}"
    );
    assert!(output_dir.join("favicon.ico").is_file(), "favicon.ico written");
}
