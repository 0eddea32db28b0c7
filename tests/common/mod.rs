use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory; the default input path resolves inside it.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pattern-stats");
        cmd.current_dir(&self.root).env_remove("PATTERN_STATS_LOG");
        cmd
    }

    /// Writes `example_input/shirt.json`, the path read when no `--input` is given.
    pub fn write_default(&self, doc: &Value) -> PathBuf {
        self.write_raw("example_input/shirt.json", &doc.to_string())
    }

    pub fn write_raw(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, body).expect("write fixture");
        path
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn path_arg(p: &Path) -> &str {
    p.to_str().expect("fixture path utf8")
}

/// Two blocks holding three entities, plus one top-level insert.
pub fn shirt_fixture() -> Value {
    serde_json::json!({
        "id": 42,
        "pattern_json": {
            "blocks": {
                "front": {
                    "layer": "1",
                    "centroid": {"x": 10.0, "y": 20.0},
                    "entities": [
                        {"entity_type": "LINE", "layer": "1",
                         "vertices": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}]},
                        {"entity_type": "POINT", "layer": "1", "position": {"x": 2.0, "y": 3.0}}
                    ]
                },
                "back": {
                    "layer": "2",
                    "centroid": {"x": 0.0, "y": 0.0},
                    "entities": [
                        {"entity_type": "TEXT", "layer": "2", "text": "BACK", "text_height": 12.0}
                    ]
                }
            },
            "entities": [
                {"entity_type": "INSERT", "name": "front", "layer": "1",
                 "position": {"x": 0.0, "y": 0.0}}
            ]
        }
    })
}
