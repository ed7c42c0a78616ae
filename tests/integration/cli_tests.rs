use std::fs;
use std::io::Write;
use std::ffi::OsStr;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn run_binary<P: AsRef<OsStr>>(args: &[P], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dirdupe"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_cli_target_is_file_exits_one() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, b"x").unwrap();

    let output = run_binary(&[&file], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Target must be a directory"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_missing_target_exits_one() {
    let dir = tempdir().unwrap();
    let output = run_binary(&[&dir.path().join("nope")], "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_empty_directory() {
    let dir = tempdir().unwrap();
    let output = run_binary(&[dir.path()], "");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Duplicate groups found: 0\n"
    );
}

#[test]
fn test_cli_delete_all_scenario() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(dir.path().join("b.txt"), b"hello").unwrap();
    fs::write(dir.path().join("c.txt"), b"world").unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();

    let output = run_binary(&[dir.path()], "XX\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    let deleting: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("Deleting: "))
        .collect();
    assert_eq!(
        deleting,
        vec![
            format!("Deleting: {}", root.join("a.txt").display()),
            format!("Deleting: {}", root.join("b.txt").display()),
        ]
    );
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_cli_quit_exits_zero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"same").unwrap();
    fs::write(dir.path().join("b"), b"same").unwrap();

    let output = run_binary(&[dir.path()], "q\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Deleting:"));
}

#[test]
fn test_cli_json_errors() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, b"x").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dirdupe"))
        .arg("--json-errors")
        .arg(&file)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["code"], "DD001");
}

#[cfg(unix)]
#[test]
fn test_cli_unreadable_input_exits_two() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"same").unwrap();
    fs::write(dir.path().join("b"), b"same").unwrap();

    // Reading a directory handle fails with EISDIR for every user.
    let stdin = fs::File::open(dir.path()).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_dirdupe"))
        .arg(dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::from(stdin))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("DD002"));
}

#[cfg(unix)]
#[test]
#[ignore = "root bypasses permission bits; run as an unprivileged user with --ignored"]
fn test_cli_unreadable_file_exits_two() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::write(dir.path().join("open"), b"data").unwrap();
    fs::write(&locked, b"data").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let output = run_binary(&[dir.path()], "");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
