use std::io::Write;
use std::process::{Command, Output, Stdio};

fn am_intent(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_am-intent"))
        .args(args)
        .output()
        .expect("failed to run am-intent")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn stdout_text(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_bare_package_gives_launcher_descriptor() {
    let json = stdout_json(&am_intent(&["parse", "--", "com.example.app"]));
    assert_eq!(json["action"], "android.intent.action.MAIN");
    assert_eq!(
        json["categories"],
        serde_json::json!(["android.intent.category.LAUNCHER"])
    );
    assert_eq!(json["package"], "com.example.app");
    assert_eq!(json["flags"], 0);
    assert!(json.get("component").is_none());
}

#[test]
fn parse_reports_typed_extras() {
    let json = stdout_json(&am_intent(&[
        "parse", "--", "-a", "A", "--ei", "n", "0x10", "--ez", "b", "t", "--eial", "ids", "1,2",
    ]));
    assert_eq!(json["action"], "A");
    assert_eq!(json["extras"]["n"], serde_json::json!({"type": "int", "value": 16}));
    assert_eq!(json["extras"]["b"], serde_json::json!({"type": "bool", "value": true}));
    assert_eq!(json["extras"]["ids"]["type"], "int_list");
}

#[test]
fn parse_args_format_renders_command_line() {
    let output = am_intent(&[
        "parse", "--format", "args", "--", "-a", "A", "--ei", "n", "3", "com.x",
    ]);
    assert_eq!(stdout_text(&output).trim(), "-a A -p com.x --ei n 3");
}

#[test]
fn parse_args_output_parses_back() {
    let tokens = [
        "--activity-clear-top",
        "--es",
        "rom",
        "/sdcard/My Roms/a b.gba",
        "--selector",
        "-t",
        "audio/*",
        "com.emu/.Main",
    ];
    let mut first = vec!["parse", "--"];
    first.extend(tokens);
    let original = stdout_json(&am_intent(&first));

    let mut rendered = vec!["parse", "--format", "args", "--"];
    rendered.extend(tokens);
    let line = stdout_text(&am_intent(&rendered));

    let reparsed = stdout_json(&am_intent(&["parse-line", "--line", line.trim()]));
    assert_eq!(reparsed, original);
}

#[test]
fn parse_uri_format_parses_back() {
    let original = stdout_json(&am_intent(&["parse", "--", "-a", "GO", "-c", "c", "-p", "com.x"]));
    let uri = stdout_text(&am_intent(&[
        "parse", "--format", "uri", "--", "-a", "GO", "-c", "c", "-p", "com.x",
    ]));
    assert!(uri.starts_with("intent:#Intent;"), "{uri}");

    let reparsed = stdout_json(&am_intent(&["parse", "--", uri.trim()]));
    assert_eq!(reparsed, original);
}

#[test]
fn parse_table_format() {
    let text = stdout_text(&am_intent(&[
        "parse", "--format", "table", "--", "-n", "com.emu/.Main",
    ]));
    assert!(text.contains("Component:"), "{text}");
    assert!(text.contains("com.emu/.Main"), "{text}");
}

#[test]
fn parse_without_tokens_fails() {
    let output = am_intent(&["parse"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("error: no intent supplied"));
}

#[test]
fn parse_unknown_option_fails() {
    let output = am_intent(&["parse", "--", "-a", "A", "--frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("error: unknown option: --frobnicate"));
}

#[test]
fn parse_missing_operand_names_option() {
    let output = am_intent(&["parse", "--", "-a", "A", "--es", "key"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("error: option --es requires an argument"));
}

// ---------------------------------------------------------------------------
// parse-line
// ---------------------------------------------------------------------------

#[test]
fn parse_line_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_am-intent"))
        .arg("parse-line")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run am-intent");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"-n com.emu/.Main --es rom '/sdcard/My Roms/a.gba'\n")
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait for am-intent");

    let json = stdout_json(&output);
    assert_eq!(
        json["component"],
        serde_json::json!({"package": "com.emu", "class": "com.emu.Main"})
    );
    assert_eq!(json["extras"]["rom"]["value"], "/sdcard/My Roms/a.gba");
}

// ---------------------------------------------------------------------------
// start
// ---------------------------------------------------------------------------

#[test]
fn start_adds_default_launch_flags() {
    let json = stdout_json(&am_intent(&["start", "--", "-p", "com.x"]));
    assert_eq!(json["package"], "com.x");
    // FLAG_ACTIVITY_NEW_TASK | FLAG_GRANT_READ_URI_PERMISSION
    assert_eq!(json["flags"], 0x1000_0001);
}

#[test]
fn start_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("host.yml");
    std::fs::write(
        &path,
        "version: \"1.0\"\nlaunch:\n  new_task: false\n  grant_read_uri_permission: false\n",
    )
    .unwrap();

    let json = stdout_json(&am_intent(&[
        "start",
        "--config",
        path.to_str().unwrap(),
        "--",
        "--activity-clear-top",
        "-p",
        "com.x",
    ]));
    assert_eq!(json["flags"], 0x0400_0000);
}

#[test]
fn start_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yml");
    let output = am_intent(&["start", "--config", path.to_str().unwrap(), "--", "-p", "com.x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("Failed to load config"));
}

#[test]
fn start_rejects_empty_selector() {
    let output = am_intent(&["start", "--", "-a", "A", "--selector"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).contains("error: invalid descriptor: selector has no content"));
}

// ---------------------------------------------------------------------------
// options
// ---------------------------------------------------------------------------

#[test]
fn options_table_lists_flag_options() {
    let text = stdout_text(&am_intent(&["options"]));
    assert!(text.contains("--activity-clear-top"));
    assert!(text.contains("--selector"));
}

#[test]
fn options_json_has_operand_counts() {
    let json = stdout_json(&am_intent(&["options", "--format", "json"]));
    let rows = json.as_array().expect("option rows");
    let es = rows
        .iter()
        .find(|row| row["name"] == "--es")
        .expect("--es row");
    assert_eq!(es["operands"], 2);
    let esn = rows
        .iter()
        .find(|row| row["name"] == "--esn")
        .expect("--esn row");
    assert_eq!(esn["operands"], 1);
}

#[test]
fn options_reject_descriptor_formats() {
    let output = am_intent(&["options", "--format", "args"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_text(&output).starts_with("error: "));
}
