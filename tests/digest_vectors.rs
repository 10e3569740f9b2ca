use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> String {
    env!("CARGO_BIN_EXE_sm3guard").to_string()
}

#[test]
fn digest_command_matches_known_vectors() {
    let cases: &[(&[u8], &str)] = &[
        (
            b"",
            "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b",
        ),
        (
            b"abc",
            "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0",
        ),
    ];

    let dir = tempfile::tempdir().unwrap();
    for (i, (content, expected)) in cases.iter().enumerate() {
        let path = dir.path().join(format!("vector_{i}"));
        fs::write(&path, content).unwrap();

        let output = Command::new(bin())
            .arg("digest")
            .arg(path.to_str().unwrap())
            .output()
            .expect("run");
        assert!(
            output.status.success(),
            "stderr:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
        let line = String::from_utf8_lossy(&output.stdout).to_string();
        assert!(line.starts_with(expected), "got: {line}");
    }
}

#[test]
fn digest_command_reads_stdin_for_dash() {
    let mut child = Command::new(bin())
        .arg("digest")
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child.stdin.take().unwrap().write_all(b"abc").unwrap();
    let output = child.wait_with_output().expect("wait");
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let line = String::from_utf8_lossy(&output.stdout).to_string();
    assert_eq!(
        line.trim_end(),
        "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0  -"
    );
}

#[test]
fn digest_command_handles_multiple_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"first").unwrap();
    fs::write(&b, b"second").unwrap();

    let output = Command::new(bin())
        .arg("digest")
        .arg(a.to_str().unwrap())
        .arg(b.to_str().unwrap())
        .output()
        .expect("run");
    assert!(output.status.success());

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        let (hash, _path) = line.split_once("  ").expect("digest  path");
        assert_eq!(hash.len(), 64);
        assert!(hash.bytes().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
    assert_ne!(lines[0].split_once("  ").unwrap().0, lines[1].split_once("  ").unwrap().0);
}

#[test]
fn digest_command_errors_on_missing_file() {
    let output = Command::new(bin())
        .arg("digest")
        .arg("/definitely/not/a/real/path")
        .output()
        .expect("run");
    assert!(!output.status.success());
}
