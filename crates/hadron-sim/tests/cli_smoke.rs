use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

const CONFIG: &str = "\
dt: 0.5
steps: 8
seed_policy:
  master_seed: 17
particles:
  - { pdg: 2214, count: 40 }
  - { pdg: 113, count: 20 }
  - { pdg: 211, count: 5 }
";

fn hadron_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hadron-sim"))
        .args(args)
        .output()
        .expect("spawn hadron-sim")
}

fn run_config(dir: &Path, config: &str, out: &str) -> Value {
    let config_path = dir.join("run.yaml");
    fs::write(&config_path, config).expect("write config");
    let out_dir = dir.join(out);
    let output = hadron_sim(&[
        "run",
        "--config",
        config_path.to_str().expect("utf8 path"),
        "--out",
        out_dir.to_str().expect("utf8 path"),
    ]);
    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let summary = fs::read_to_string(out_dir.join("summary.json")).expect("summary");
    serde_json::from_str(&summary).expect("summary json")
}

#[test]
fn run_decays_every_resonance() {
    let dir = tempfile::tempdir().expect("tempdir");
    let summary = run_config(dir.path(), CONFIG, "out");

    assert_eq!(summary["initial_particles"], 65);
    let decays = summary["step_decays"].as_u64().unwrap() + summary["final_decays"].as_u64().unwrap();
    assert_eq!(decays, 60);
    for key in summary["multiplicities"].as_object().unwrap().keys() {
        assert!(
            ["211", "111", "-211", "2212", "2112", "11", "-11"].contains(&key.as_str()),
            "unexpected survivor {key}"
        );
    }
    assert_eq!(summary["provenance"]["seed"], 17);
    assert_eq!(summary["provenance"]["steps"], 8);
    assert_eq!(summary["provenance"]["parallel"], false);
    assert_eq!(summary["provenance"]["config_hash"].as_str().unwrap().len(), 64);
    assert!(dir.path().join("out/decays.json").exists());
    assert!(dir.path().join("out/config.yaml").exists());
}

#[test]
fn run_is_reproducible_for_a_seed() {
    let dir = tempfile::tempdir().expect("tempdir");
    run_config(dir.path(), CONFIG, "a");
    run_config(dir.path(), CONFIG, "b");
    let a = fs::read_to_string(dir.path().join("a/decays.json")).unwrap();
    let b = fs::read_to_string(dir.path().join("b/decays.json")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_step_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("bad.yaml");
    fs::write(&config_path, "dt: -1.0\n").unwrap();
    let output = hadron_sim(&[
        "run",
        "--config",
        config_path.to_str().unwrap(),
        "--out",
        dir.path().join("out").to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid-dt"));
}

#[test]
fn cg_prints_coefficients() {
    let output = hadron_sim(&["cg", "0", "0", "0", "0", "0", "0"]);
    assert!(output.status.success());
    let value: f64 = String::from_utf8_lossy(&output.stdout).trim().parse().unwrap();
    assert_eq!(value, 1.0);

    let output = hadron_sim(&["cg", "1", "1", "0", "1", "-1", "0", "--json"]);
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    let coefficient = report["coefficient"].as_f64().unwrap();
    assert!((coefficient - 0.5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn cg_rejects_oversized_spins() {
    let output = hadron_sim(&["cg", "66", "0", "66", "0", "0", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("spin-out-of-range"));

    let output = hadron_sim(&["tabulate", "--max-j", "40"]);
    assert!(!output.status.success());
}

#[test]
fn tabulate_writes_the_warm_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("table.txt");
    let output = hadron_sim(&["tabulate", "--max-j", "3", "--out", path.to_str().unwrap()]);
    assert!(output.status.success());
    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text.lines().count(), hadron_cg::WARM_TABLE.len());
}

#[test]
fn survival_check_passes_for_delta() {
    let output = hadron_sim(&["survival", "--count", "20000", "--seed", "3"]);
    assert!(
        output.status.success(),
        "survival failed: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["decayed"].as_u64().unwrap() > 0);
}

#[test]
fn version_prints_package_version() {
    let output = hadron_sim(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}
