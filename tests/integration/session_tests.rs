use dirdupe::resolver::LineConsole;
use dirdupe::session::{run, Session, SessionConfig, SessionError};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn console(input: &str) -> LineConsole<Cursor<String>, Vec<u8>> {
    LineConsole::new(Cursor::new(input.to_string()), Vec::new())
}

#[test]
fn test_session_delete_all_scenario() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    fs::write(dir.path().join("b.txt"), b"hello").unwrap();
    fs::write(dir.path().join("c.txt"), b"world").unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();

    let mut c = console("XX\n");
    let outcome = run(dir.path(), &mut c).unwrap();

    let lines: Vec<String> = outcome.reports.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            format!("Deleting: {}", root.join("a.txt").display()),
            format!("Deleting: {}", root.join("b.txt").display()),
        ]
    );
    assert!(!outcome.aborted);

    let output = String::from_utf8(c.into_output()).unwrap();
    assert!(output.starts_with("Duplicate groups found: 1\n"));
    for line in &lines {
        assert!(output.contains(&format!("{}\n", line)));
    }
    assert!(!output.contains("c.txt"));
}

#[test]
fn test_session_index_selects_exactly_one() {
    let dir = tempdir().unwrap();
    for name in ["f1", "f2", "f3", "f4", "f5"] {
        fs::write(dir.path().join(name), b"same bytes").unwrap();
    }
    let root = fs::canonicalize(dir.path()).unwrap();

    let mut c = console("7\n3\n");
    let outcome = run(dir.path(), &mut c).unwrap();

    assert_eq!(outcome.reports.len(), 1);
    assert_eq!(outcome.reports[0].path, root.join("f3"));

    let output = String::from_utf8(c.into_output()).unwrap();
    assert_eq!(output.matches("Delete which?").count(), 2);
}

#[test]
fn test_session_reports_in_group_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("m1"), b"second").unwrap();
    fs::write(dir.path().join("m2"), b"second").unwrap();
    fs::write(dir.path().join("a1"), b"first").unwrap();
    fs::write(dir.path().join("a2"), b"first").unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();

    let outcome = run(dir.path(), &mut console("1\nxx\n")).unwrap();

    let paths: Vec<_> = outcome.reports.iter().map(|r| r.path.clone()).collect();
    assert_eq!(paths, vec![root.join("a1"), root.join("m1"), root.join("m2")]);
    assert_eq!(outcome.groups_resolved, 2);
}

#[test]
fn test_session_quit_keeps_earlier_reports() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a1"), b"first").unwrap();
    fs::write(dir.path().join("a2"), b"first").unwrap();
    fs::write(dir.path().join("b1"), b"second").unwrap();
    fs::write(dir.path().join("b2"), b"second").unwrap();
    fs::write(dir.path().join("c1"), b"third").unwrap();
    fs::write(dir.path().join("c2"), b"third").unwrap();

    let mut c = console("xx\nQ\n");
    let outcome = run(dir.path(), &mut c).unwrap();

    assert!(outcome.aborted);
    assert_eq!(outcome.reports.len(), 2);
    let output = String::from_utf8(c.into_output()).unwrap();
    assert!(output.contains("Group 2 of 3"));
    assert!(!output.contains("Group 3 of 3"));
}

#[test]
fn test_session_mixed_case_keep_all() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"x").unwrap();
    fs::write(dir.path().join("b"), b"x").unwrap();

    let outcome = run(dir.path(), &mut console("n\n")).unwrap();
    assert!(outcome.reports.is_empty());
    assert!(!outcome.aborted);
}

#[test]
fn test_session_invalid_target() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, b"x").unwrap();

    let result = Session::new(SessionConfig { color: false }).run(&file, &mut console("xx\n"));
    assert!(matches!(result, Err(SessionError::InvalidTarget(_))));
}

#[test]
fn test_session_summary_counts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), b"12345").unwrap();
    fs::write(dir.path().join("b"), b"12345").unwrap();
    fs::write(dir.path().join("c"), b"12345").unwrap();
    fs::write(dir.path().join("d"), b"other").unwrap();

    let outcome = run(dir.path(), &mut console("n\n")).unwrap();

    assert_eq!(outcome.summary.total_files, 4);
    assert_eq!(outcome.summary.duplicate_groups, 1);
    assert_eq!(outcome.summary.duplicate_files, 2);
    assert_eq!(outcome.summary.reclaimable_space, 10);
}
