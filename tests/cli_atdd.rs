#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CONFIG: &str = r#"
red_flags = ["contaminated_site"]

[stewardship]
weight = 0.25
min_acreage = 0.25
flood_risk_penalty = 1.0

[housing]
weight = 0.25
habitability_min_score = 60
adu_viability_weight = 1.0

[rehab]
weight = 0.25
cosmetic_tier_weight = 1.0
systems_tier_weight = 1.0
structural_tier_weight = 1.0
permit_complexity_penalty = 1.0

[risk]
weight = 0.25
title_risk_penalty = 1.0
zoning_ambiguity_penalty = 1.0
environmental_red_flag_penalty = 1.0
"#;

const CANDIDATES: &str = r#"[
  {"id": "ff-003", "address": "3 Cedar Court", "lot_size_acres": 1.0, "flood_risk": "None",
   "habitability_score": 70, "adu_viability": true, "rehab_tier": "cosmetic",
   "permit_complexity": "low", "title_risk": "clear", "zoning_ambiguity": "low",
   "environmental_flags": [], "red_flags": []},
  {"id": "ff-001", "address": "1 Birch Way", "lot_size_acres": 0.1},
  {"id": "ff-002", "address": "2 Aspen Row", "lot_size_acres": 1.0, "flood_risk": "None",
   "habitability_score": 70, "adu_viability": true, "rehab_tier": "cosmetic",
   "permit_complexity": "low", "title_risk": "clear", "zoning_ambiguity": "low",
   "red_flags": ["contaminated_site"]},
  {"id": "ff-004", "address": "4 Maple Ave", "lot_size_acres": 2.5,
   "habitability_score": 95, "adu_viability": true, "rehab_tier": "systems",
   "title_risk": "clear"}
]"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("scout.toml"), CONFIG).expect("config should write");
        fs::write(dir.path().join("candidates.json"), CANDIDATES)
            .expect("candidates should write");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn scout(&self) -> Command {
        let mut cmd = Command::cargo_bin("scout").expect("binary should compile");
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        cmd
    }
}

fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).expect("json artifact should exist");
    serde_json::from_str(&content).expect("artifact should be valid json")
}

#[test]
fn score_publishes_report_shortlist_and_manifest() {
    let ws = Workspace::new();

    ws.scout()
        .args(["score", "candidates.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Shortlist generated with 2 properties.",
        ));

    let shortlist = read_json(&ws.path("output/shortlist.json"));
    let ids = shortlist["shortlist"]
        .as_array()
        .expect("shortlist array")
        .iter()
        .map(|entry| entry["id"].as_str().expect("id").to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["ff-003", "ff-004"]);
    assert_eq!(shortlist["shortlist"][0]["score"], 62);
    assert_eq!(shortlist["evaluated"], 4);

    let report = fs::read_to_string(ws.path("output/weekly-shortlist.md"))
        .expect("report should exist");
    assert!(report.starts_with("# Weekly Property Shortlist"));
    assert!(report.contains("_Generated: "));
    assert!(report.contains("## 3 Cedar Court\n**Score:** 62/100"));
    assert!(report.contains("- Title appears clear."));
    assert!(!report.contains("2 Aspen Row"));
    assert!(!report.contains("1 Birch Way"));
    assert!(report.find("3 Cedar Court") < report.find("4 Maple Ave"));

    let manifest = read_json(&ws.path("output/run-manifest.json"));
    assert_eq!(manifest["shortlisted"], 2);
    assert_eq!(manifest["excluded"], 1);
    assert_eq!(
        manifest["candidates_sha256"].as_str().map(str::len),
        Some(64)
    );
}

#[test]
fn score_honors_out_dir() {
    let ws = Workspace::new();

    ws.scout()
        .args(["score", "candidates.json", "--out-dir", "runs/week-01"])
        .assert()
        .code(0);

    assert!(ws.path("runs/week-01/weekly-shortlist.md").exists());
    assert!(!ws.path("output").exists());
}

#[test]
fn score_stdout_json_prints_structured_shortlist() {
    let ws = Workspace::new();

    ws.scout()
        .args(["score", "candidates.json", "--stdout", "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"shortlist\""))
        .stdout(predicate::str::contains("\"ff-004\""))
        .stderr(predicate::str::contains("Shortlist generated with 2"));

    assert!(!ws.path("output").exists());
}

#[test]
fn score_rejects_incomplete_config_before_writing() {
    let ws = Workspace::new();
    fs::write(
        ws.path("scout.toml"),
        CONFIG.replace("zoning_ambiguity_penalty = 1.0\n", ""),
    )
    .expect("config should write");

    ws.scout()
        .args(["score", "candidates.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config parse error"))
        .stderr(predicate::str::contains("zoning_ambiguity_penalty"));

    assert!(!ws.path("output").exists());
}

#[test]
fn score_reports_missing_config() {
    let ws = Workspace::new();

    ws.scout()
        .args(["score", "candidates.json", "--config", "missing.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn score_rejects_malformed_candidates_before_writing() {
    let ws = Workspace::new();
    fs::write(ws.path("candidates.json"), "[{\"id\": \"a\"},").expect("candidates should write");

    ws.scout()
        .args(["score", "candidates.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("candidates parse error"));

    assert!(!ws.path("output/weekly-shortlist.md").exists());
}

#[test]
fn score_reports_missing_candidates() {
    let ws = Workspace::new();

    ws.scout()
        .args(["score", "nope.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("candidates file not found"));
}

#[test]
fn score_accepts_json_lines() {
    let ws = Workspace::new();
    fs::write(
        ws.path("candidates.jsonl"),
        "{\"id\": \"a\", \"address\": \"1 First St\"}\n{\"id\": \"b\", \"address\": \"2 Second St\"}\n",
    )
    .expect("candidates should write");

    ws.scout()
        .args(["score", "candidates.jsonl"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Shortlist generated with 0 properties.",
        ));
}

#[test]
fn score_warns_when_nothing_is_shortlisted() {
    let ws = Workspace::new();
    fs::write(
        ws.path("weak.json"),
        r#"[{"id": "w-1", "address": "1 Fen Lane"}, {"id": "w-2", "address": "2 Fen Lane", "lot_size_acres": 0.1}]"#,
    )
    .expect("candidates should write");

    ws.scout()
        .args(["score", "weak.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Shortlist generated with 0 properties.",
        ))
        .stderr(predicate::str::contains(
            "no properties scored at or above 60",
        ));

    let shortlist = read_json(&ws.path("output/shortlist.json"));
    assert_eq!(shortlist["shortlist"].as_array().map(Vec::len), Some(0));
}

#[test]
fn score_warns_on_duplicate_ids() {
    let ws = Workspace::new();
    fs::write(
        ws.path("candidates.json"),
        r#"[{"id": "a", "address": "1 First St"}, {"id": "a", "address": "1 First St"}]"#,
    )
    .expect("candidates should write");

    ws.scout()
        .args(["score", "candidates.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("candidate ids are not unique"));
}

#[test]
fn explain_prints_rationale_for_excluded_candidate() {
    let ws = Workspace::new();

    ws.scout()
        .args(["explain", "candidates.json", "--id", "ff-002"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("**Score:** 0/100"))
        .stdout(predicate::str::contains(
            "Red flag present: contaminated_site. Excluded from shortlist.",
        ))
        .stdout(predicate::str::contains("excluded (red flags: contaminated_site)"));
}

#[test]
fn explain_rejects_unknown_id() {
    let ws = Workspace::new();

    ws.scout()
        .args(["explain", "candidates.json", "--id", "ff-999"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("candidate not found: ff-999"));
}

#[test]
fn normalize_maps_reso_response_into_candidates() {
    let ws = Workspace::new();
    fs::write(
        ws.path("reso.json"),
        r#"{"value": [
            {"ListingKey": "MLS-1", "UnparsedAddress": "10 Creek Rd", "LotSizeAcres": 3.0,
             "FloodZone": "Low", "WaterSource": ["Well"]},
            {"UnparsedAddress": "missing key"}
        ]}"#,
    )
    .expect("response should write");

    ws.scout()
        .args(["normalize", "reso.json", "--out", "ingested/candidates.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Ingested 1 properties"))
        .stderr(predicate::str::contains("skipped 1 record(s)"));

    let candidates = read_json(&ws.path("ingested/candidates.json"));
    assert_eq!(candidates[0]["id"], "MLS-1");
    assert_eq!(candidates[0]["source"], "mls");
    assert_eq!(candidates[0]["water_access"], true);

    ws.scout()
        .args(["score", "ingested/candidates.json", "--stdout"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Shortlist generated with 0"));
}

#[test]
fn normalize_reports_missing_response() {
    let ws = Workspace::new();

    ws.scout()
        .args(["normalize", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn check_accepts_valid_config() {
    let ws = Workspace::new();

    ws.scout()
        .arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("config ok"))
        .stdout(predicate::str::contains("- risk: weight 0.25"))
        .stdout(predicate::str::contains("- red_flags: contaminated_site"));
}

#[test]
fn check_rejects_negative_penalty() {
    let ws = Workspace::new();
    fs::write(
        ws.path("scout.toml"),
        CONFIG.replace("title_risk_penalty = 1.0", "title_risk_penalty = -2.0"),
    )
    .expect("config should write");

    ws.scout()
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("risk.title_risk_penalty must be non-negative"));
}

#[test]
fn check_applies_overlay() {
    let ws = Workspace::new();
    fs::write(ws.path("local.toml"), "[risk]\nweight = 0.5\n").expect("overlay should write");

    ws.scout()
        .args(["check", "--overlay", "local.toml"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- risk: weight 0.50"));
}
