use assert_cmd::Command;
use std::io::Write;

#[test]
fn show_help() {
    Command::cargo_bin("lexi-stream")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn parse_reads_stdin() {
    Command::cargo_bin("lexi-stream")
        .unwrap()
        .arg("parse")
        .write_stdin("random: Not included\ndata: Included\n\ndata: {\"content\":\"too\"}\n")
        .assert()
        .success()
        .stdout("Included too\n");
}

#[test]
fn parse_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "data: Hello\n\ndata: World\n\n").unwrap();
    Command::cargo_bin("lexi-stream")
        .unwrap()
        .args(["parse", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Hello World\n");
}

#[test]
fn history_prints_transcript() {
    let json = r#"{
        "user": "reader@example.com",
        "messages": [
            {"id": "1", "role": "user", "content": "Recommend a book"},
            {"id": "2", "role": "assistant", "content": "data: Try\ndata: Dune\n"}
        ]
    }"#;
    Command::cargo_bin("lexi-stream")
        .unwrap()
        .arg("history")
        .write_stdin(json)
        .assert()
        .success()
        .stdout("[user] Recommend a book\n[assistant] Try Dune\n");
}

#[test]
fn history_rejects_bad_json() {
    Command::cargo_bin("lexi-stream")
        .unwrap()
        .arg("history")
        .write_stdin("{\"messages\": 3}")
        .assert()
        .failure();
}

#[test]
fn ago_without_timestamp_prints_empty_line() {
    Command::cargo_bin("lexi-stream")
        .unwrap()
        .arg("ago")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn ago_rejects_malformed_timestamp() {
    Command::cargo_bin("lexi-stream")
        .unwrap()
        .args(["ago", "yesterday"])
        .assert()
        .failure();
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("lexi-stream")
        .unwrap()
        .args(["parse", "-i", "/definitely/not/here.txt"])
        .assert()
        .failure();
}
