use assert_cmd::Command;
use predicates::prelude::*;

fn adsmith() -> Command {
    Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_adsmith")))
}

#[test]
fn generate_validate_stats_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset = dir.path().join("dataset.csv");

    adsmith()
        .args(["generate", "--seed", "42", "--output"])
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("rows across"));

    assert!(dataset.exists());

    adsmith()
        .arg("validate")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("all invariants hold"));

    adsmith()
        .arg("stats")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("Channel performance"));
}

#[test]
fn generate_with_config_file_honors_campaign_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");
    let dataset = dir.path().join("out.csv");

    std::fs::write(
        &config,
        r#"
[generation]
start_date = "2024-01-01"
end_date = "2024-01-03"
campaign_count = 2
seed = 7
"#,
    )
    .expect("write config");

    adsmith()
        .arg("generate")
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 campaigns"));

    let contents = std::fs::read_to_string(&dataset).expect("read dataset");
    // Header plus 2 campaigns x 3 days.
    assert_eq!(contents.lines().count(), 7);
}

#[test]
fn star_schema_flag_writes_dimension_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset = dir.path().join("dataset.csv");

    adsmith()
        .current_dir(dir.path())
        .args(["generate", "--star-schema", "--output"])
        .arg(&dataset)
        .assert()
        .success();

    for file in [
        "dim_date.csv",
        "dim_channel.csv",
        "dim_campaign.csv",
        "fact_performance.csv",
    ] {
        assert!(dir.path().join(file).exists(), "{file} missing");
    }
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[channels.weights]\nsearch = 0.9\n",
    )
    .expect("write config");

    adsmith()
        .arg("generate")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("sum to 1.0"));
}

#[test]
fn validate_flags_corrupted_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset = dir.path().join("dataset.csv");

    adsmith()
        .args(["generate", "--seed", "1", "--output"])
        .arg(&dataset)
        .assert()
        .success();

    // Append a row where clicks exceed impressions.
    let mut contents = std::fs::read_to_string(&dataset).expect("read dataset");
    contents.push_str("CMP-9999,Broken row,search,2024-01-01,10,500,40.00,2,100.00\n");
    std::fs::write(&dataset, contents).expect("rewrite dataset");

    adsmith()
        .arg("validate")
        .arg(&dataset)
        .assert()
        .failure()
        .stderr(predicate::str::contains("clicks exceed impressions"));
}

#[test]
fn stats_json_is_parseable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dataset = dir.path().join("dataset.csv");

    adsmith()
        .args(["generate", "--seed", "3", "--output"])
        .arg(&dataset)
        .assert()
        .success();

    let output = adsmith()
        .arg("stats")
        .arg(&dataset)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stats --json emits valid JSON");
    assert!(value["rows"].as_u64().unwrap() > 0);
    assert!(value["channels"].as_array().unwrap().len() > 0);
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");

    adsmith()
        .arg("init")
        .arg("--path")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));

    adsmith()
        .arg("check")
        .arg("config")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration is valid"));

    adsmith()
        .arg("init")
        .arg("--path")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
