use crate::common::{
    SAMPLE_CONFIG, make_temp_dir, normalized_lines, read_log_contents, run_in, write_config,
};

#[test]
fn binds_tokens_and_prints_each_parameter() {
    let dir = make_temp_dir("argbind-cli");
    write_config(&dir, SAMPLE_CONFIG);

    let output = run_in(&dir, &["tp", "Steve", "1", "64.5", "-3"]);
    assert!(output.status.success(), "bind should succeed");
    assert_eq!(
        normalized_lines(&output.stdout),
        vec![
            "target (string) = \"Steve\"",
            "x (double) = 1",
            "y (double) = 64.5",
            "z (double) = -3",
        ]
    );
}

#[test]
fn line_mode_uses_quote_aware_tokenizer() {
    let dir = make_temp_dir("argbind-cli");
    write_config(&dir, SAMPLE_CONFIG);

    let output = run_in(&dir, &["--line", r#"broadcast "server restart"   in 5"#]);
    assert!(output.status.success());
    assert_eq!(
        normalized_lines(&output.stdout),
        vec!["message (string) = \"server restart in 5\""]
    );
}

#[test]
fn defaults_and_choices_come_from_config() {
    let dir = make_temp_dir("argbind-cli");
    write_config(&dir, SAMPLE_CONFIG);

    let output = run_in(&dir, &["walk", "NORTH"]);
    assert!(output.status.success());
    assert_eq!(
        normalized_lines(&output.stdout),
        vec!["dir (direction) = \"north\"", "steps (int) = 1"]
    );
}

#[test]
fn binding_failure_exits_two_with_usage() {
    let dir = make_temp_dir("argbind-cli");
    write_config(&dir, SAMPLE_CONFIG);

    let output = run_in(&dir, &["teleport", "Steve", "1", "up"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = normalized_lines(&output.stderr);
    assert_eq!(stderr[0], "Parameter #2 'y' (of 4): Invalid double: 'up'");
    assert_eq!(stderr[1], "Usage: teleport <target> <x> <y> <z>");
}

#[test]
fn missing_tokens_exit_two() {
    let dir = make_temp_dir("argbind-cli");
    write_config(&dir, SAMPLE_CONFIG);

    let output = run_in(&dir, &["broadcast"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no arguments remain"));
}

#[test]
fn unknown_command_and_missing_config_exit_one() {
    let dir = make_temp_dir("argbind-cli");
    let output = run_in(&dir, &["tp", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));

    write_config(&dir, SAMPLE_CONFIG);
    let output = run_in(&dir, &["fly"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command: fly"));
}

#[test]
fn list_prints_usage_lines() {
    let dir = make_temp_dir("argbind-cli");
    write_config(&dir, SAMPLE_CONFIG);

    let output = run_in(&dir, &["--list"]);
    assert!(output.status.success());
    assert_eq!(
        normalized_lines(&output.stdout),
        vec![
            "teleport <target> <x> <y> <z>",
            "walk <dir> [steps]",
            "broadcast <message...>",
        ]
    );
}

#[test]
fn file_logging_writes_pass_outcome_to_logs_dir() {
    let dir = make_temp_dir("argbind-cli");
    let config = SAMPLE_CONFIG.replace(
        r#""file_logging_enabled": { "value": false"#,
        r#""file_logging_enabled": { "value": true"#,
    );
    let config_path = write_config(&dir, &config);
    let logs = dir.join("traces");

    let output = run_in(
        &dir,
        &[
            "--config",
            config_path.to_str().unwrap(),
            "--logs",
            logs.to_str().unwrap(),
            "walk",
            "east",
            "4",
        ],
    );
    assert!(output.status.success());
    let contents = read_log_contents(&logs).expect("log file should exist");
    assert!(contents.contains("bound 2 parameter(s) for 'walk'"));
}
