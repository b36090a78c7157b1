//! End-to-end tests for the gallery-verify binary.
//!
//! Each test builds a small project tree in a temporary directory with an
//! `examples/snapshots` directory and a `.gh-pages` directory of markdown pages.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("examples/snapshots")).unwrap();
        std::fs::create_dir_all(dir.path().join(".gh-pages")).unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn snapshot(&self, name: &str) -> &Self {
        std::fs::write(self.root().join("examples/snapshots").join(name), "---\n").unwrap();
        self
    }

    fn page(&self, name: &str, content: impl AsRef<[u8]>) -> &Self {
        std::fs::write(self.root().join(".gh-pages").join(name), content).unwrap();
        self
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gallery-verify").unwrap();
        cmd.arg("--root").arg(self.root());
        cmd
    }

    fn json(&self, extra: &[&str]) -> (serde_json::Value, i32) {
        let output = self.cmd().arg("--json").args(extra).output().unwrap();
        let value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
        (value, output.status.code().unwrap())
    }
}

#[test]
fn test_unreferenced_chart_snapshot_fails() {
    let project = Project::new();
    project.snapshot("a.snap").page("index.md", "# Gallery\n");

    let (report, code) = project.json(&[]);
    assert_eq!(code, 1);
    assert_eq!(report["missing_chart_refs"], serde_json::json!(["a.snap"]));
    assert_eq!(report["unreferenced_snapshots"], serde_json::json!(["a.snap"]));
    assert_eq!(report["total_snapshots"], 1);
}

#[test]
fn test_referenced_chart_snapshot_passes() {
    let project = Project::new();
    project
        .snapshot("a.snap")
        .page("index.md", "![a](examples/snapshots/a.snap.svg)\n");

    let (report, code) = project.json(&[]);
    assert_eq!(code, 0);
    assert_eq!(report["missing_chart_refs"], serde_json::json!([]));
    assert_eq!(
        report["snapshots"],
        serde_json::json!([{
            "snap": "a.snap",
            "is_audio": false,
            "chart_referenced": true,
            "audio_referenced": false
        }])
    );
}

#[test]
fn test_audio_snapshot_requires_svg_only_when_asked() {
    let project = Project::new();
    project.snapshot("b@audio.snap").page(
        "audio.md",
        "<audio src=\"examples/snapshots/b@audio.snap.wav\"></audio>\n",
    );

    let (_, code) = project.json(&[]);
    assert_eq!(code, 0);

    let (report, code) = project.json(&["--require-audio-svg"]);
    assert_eq!(code, 1);
    assert_eq!(
        report["missing_audio_svg_refs"],
        serde_json::json!(["b@audio.snap"])
    );
}

#[test]
fn test_orphan_reference_fails() {
    let project = Project::new();
    project.page("index.md", "![c](examples/snapshots/c.snap.svg)\n");

    let (report, code) = project.json(&[]);
    assert_eq!(code, 1);
    assert_eq!(report["orphan_references"], serde_json::json!(["c.snap.svg"]));
}

#[test]
fn test_pending_reference_ignored() {
    let project = Project::new();
    project.page("index.md", "![d](examples/snapshots/d.snap.new.svg)\n");

    let (report, code) = project.json(&[]);
    assert_eq!(code, 0);
    for field in [
        "missing_chart_refs",
        "missing_audio_refs",
        "missing_audio_svg_refs",
        "orphan_references",
        "unreferenced_snapshots",
    ] {
        assert_eq!(report[field], serde_json::json!([]), "{field} should be empty");
    }
}

#[test]
fn test_strict_mode() {
    let project = Project::new();
    project.snapshot("a.snap").snapshot("b@audio.snap").page(
        "index.md",
        "examples/snapshots/a.snap.svg examples/snapshots/b@audio.snap.wav",
    );
    project.cmd().arg("--strict").assert().success();

    project.snapshot("c.snap");
    let (report, code) = project.json(&["--strict"]);
    assert_eq!(code, 1);
    assert_eq!(report["unreferenced_snapshots"], serde_json::json!(["c.snap"]));
}

#[test]
fn test_text_report() {
    let project = Project::new();
    project
        .snapshot("a.snap")
        .snapshot("b.snap")
        .page("index.md", "examples/snapshots/a.snap.svg examples/snapshots/gone.snap.svg");

    project
        .cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Gallery Verification Report"))
        .stdout(predicate::str::contains("Total snapshots: 2"))
        .stdout(predicate::str::contains("  - b.snap"))
        .stdout(predicate::str::contains("  - gone.snap.svg"))
        .stdout(predicate::str::contains("Result: FAIL"))
        .stdout(predicate::str::contains("Unreferenced snapshots").not());
}

#[test]
fn test_verbose_text_report() {
    let project = Project::new();
    project
        .snapshot("a.snap")
        .page("index.md", "examples/snapshots/a.snap.svg");

    project
        .cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unreferenced snapshots (informational)"))
        .stdout(predicate::str::contains("(none)"))
        .stdout(predicate::str::contains("Result: OK"));
}

#[test]
fn test_missing_snapshot_directory() {
    let project = Project::new();
    std::fs::remove_dir(project.root().join("examples/snapshots")).unwrap();

    project
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Snapshot directory not found"));
}

#[test]
fn test_missing_pages_directory() {
    let project = Project::new();
    std::fs::remove_dir(project.root().join(".gh-pages")).unwrap();

    project
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Markdown directory not found"));
}

#[test]
fn test_invalid_utf8_page_still_scanned() {
    let project = Project::new();
    let mut content = b"\xff\xfe broken ".to_vec();
    content.extend_from_slice(b"examples/snapshots/a.snap.svg");
    project.snapshot("a.snap").page("index.md", content);

    project.cmd().assert().success();
}

#[test]
fn test_only_markdown_pages_scanned() {
    let project = Project::new();
    project
        .snapshot("a.snap")
        .page("notes.txt", "examples/snapshots/a.snap.svg");

    let (report, code) = project.json(&[]);
    assert_eq!(code, 1);
    assert_eq!(report["missing_chart_refs"], serde_json::json!(["a.snap"]));
}

#[test]
fn test_custom_layout_file() {
    let project = Project::new();
    std::fs::create_dir_all(project.root().join("golden")).unwrap();
    std::fs::create_dir_all(project.root().join("docs")).unwrap();
    std::fs::write(project.root().join("golden/a.gold"), "").unwrap();
    std::fs::write(project.root().join("docs/index.md"), "golden/a.gold.svg").unwrap();

    let layout = project.root().join("layout.json");
    std::fs::write(
        &layout,
        r#"{"snapshot_dir": "golden", "pages_dir": "docs", "snapshot_suffix": ".gold"}"#,
    )
    .unwrap();

    project
        .cmd()
        .arg("--layout")
        .arg(&layout)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total snapshots: 1"));
}
