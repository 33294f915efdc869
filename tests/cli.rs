use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn strokepad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("strokepad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_script(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("events.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn strokepad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    strokepad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vector sketch pad"));
}

#[test]
fn replay_reports_committed_shapes() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "tool rectangle\ndown 10 10\nmove 20 20\nup 40 30\n\ntool circle\ncolor #ff0000\ndown 0 0\nup 3 4\n",
    );

    strokepad_cmd(&temp)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 shape(s)"))
        .stdout(predicate::str::contains("rectangle (10, 10) 30x20 #000000"))
        .stdout(predicate::str::contains("circle (0, 0) r=5 #ff0000"));
}

#[test]
fn cli_tool_and_color_override_config() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("strokepad");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[drawing]\ndefault_tool = \"circle\"\ndefault_color = \"green\"\n",
    )
    .unwrap();
    let script = write_script(&temp, "down 0 0\nmove 1 1\nmove 2 0\nup 2 0\n");

    strokepad_cmd(&temp)
        .args(["--tool", "pencil", "--color", "blue"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("pencil 3 points #0000ff"));
}

#[test]
fn trace_prints_final_primitives() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "down 1 2\nup 3 4\n");

    strokepad_cmd(&temp)
        .arg("--trace")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("clear\n"))
        .stdout(predicate::str::contains("move_to 1 2"))
        .stdout(predicate::str::contains("line_to 3 4"))
        .stdout(predicate::str::contains("line_width 5"));
}

#[test]
fn bad_script_line_fails_with_line_number() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "down 1 1\ntool spray\n");

    strokepad_cmd(&temp)
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown tool 'spray'"));
}

#[test]
fn unknown_tool_flag_is_rejected() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "");

    strokepad_cmd(&temp)
        .args(["--tool", "spray"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tool"));
}
