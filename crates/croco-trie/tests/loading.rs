//! File-based loading through `CrocoHandle`.

use std::path::PathBuf;

use croco_trie::{CrocoHandle, LoadError, LoadSummary};
use tempfile::TempDir;

/// Write `contents` to `name` inside `dir`.
fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const DICTIONARY: &str = "\
\u{30CD}\u{30B3}\t10\t11\t1\t\u{732B}
\u{30A4}\u{30CC}\t12\t13\t1\t\u{72AC}
\u{30B7}\u{30DF}\u{30E5}\u{30EC}\u{30FC}\u{30B7}\u{30E7}\u{30F3}\t14\t14\t2\t\u{30B7}\u{30DF}\u{30E5}\u{30EC}\u{30FC}\u{30B7}\u{30E7}\u{30F3}
";

const CONNECTION: &str = "\
20 20
0 10 100
0 12 -50
10 0 999
";

#[test]
fn load_both_tables_and_query() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write_file(&dir, "dictionary.txt", DICTIONARY.as_bytes());
    let conn = write_file(&dir, "connection.txt", CONNECTION.as_bytes());

    let mut handle = CrocoHandle::new();
    assert_eq!(
        handle.load_dictionary(&dict).unwrap(),
        LoadSummary { loaded: 3, skipped: 0 }
    );
    assert_eq!(
        handle.load_cost_table(&conn).unwrap(),
        LoadSummary { loaded: 3, skipped: 0 }
    );
    assert_eq!(handle.costs().dimensions(), Some((20, 20)));

    let cat = handle.search("\u{732B}", 0);
    assert_eq!(cat.len(), 1);
    // distance 0 + cost(0, 10) + (0 - 1) * 5000
    assert_eq!(cat[0].score, 100 - 5000);

    let dog = handle.search("\u{72AC}", 0);
    assert_eq!(dog[0].score, -50 - 5000);

    let entry = handle
        .trie()
        .find("\u{72AC}")
        .and_then(|id| handle.trie().entry(id))
        .unwrap();
    assert_eq!((entry.left_id, entry.right_id, entry.priority), (12, 13, 1));
}

#[test]
fn missing_files_fail_without_panicking() {
    let mut handle = CrocoHandle::new();
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("missing");
    assert!(matches!(
        handle.load_dictionary(dir.join("dictionary.txt")),
        Err(LoadError::Open { .. })
    ));
    assert!(matches!(
        handle.load_cost_table(dir.join("connection.txt")),
        Err(LoadError::Open { .. })
    ));
    assert!(handle.search("anything", 3).is_empty());
}

#[test]
fn malformed_records_are_skipped() {
    let mut contents = Vec::new();
    contents.extend_from_slice(b"cat\t1\t2\t3\tcat\nno fields here\ncat\tx\t2\t3\tcats\n");
    // Truncated multi-byte surface.
    contents.extend_from_slice(b"r\t1\t1\t1\t");
    contents.extend_from_slice(&"\u{732B}".as_bytes()[..2]);
    contents.extend_from_slice(b"\ndog\t4\t4\t0\tdog\n");
    let dir = tempfile::tempdir().unwrap();
    let dict = write_file(&dir, "malformed.txt", &contents);

    let mut handle = CrocoHandle::new();
    let summary = handle.load_dictionary(&dict).unwrap();
    assert_eq!(summary, LoadSummary { loaded: 2, skipped: 3 });
    assert_eq!(handle.trie().len(), 2);
    assert!(handle.exact_match("cats").iter().all(|m| m.word != "cats"));
}

#[test]
fn cost_reload_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let conn = write_file(&dir, "connection.txt", CONNECTION.as_bytes());
    let mut once = CrocoHandle::new();
    once.load_cost_table(&conn).unwrap();
    let mut twice = CrocoHandle::new();
    twice.load_cost_table(&conn).unwrap();
    twice.load_cost_table(&conn).unwrap();
    for (left, right) in [(0, 10), (0, 12), (10, 0), (3, 3)] {
        assert_eq!(once.costs().cost(left, right), twice.costs().cost(left, right));
    }
    assert_eq!(once.costs().len(), twice.costs().len());
}

#[test]
fn dictionary_reload_layers_until_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(&dir, "first.txt", b"a\t1\t1\t0\tcat\n");
    let second = write_file(&dir, "second.txt", b"a\t1\t1\t0\tdog\n");

    let mut handle = CrocoHandle::new();
    handle.load_dictionary(&first).unwrap();
    handle.load_dictionary(&second).unwrap();
    assert_eq!(handle.trie().len(), 2);

    handle.clear_dictionary();
    handle.load_dictionary(&second).unwrap();
    assert_eq!(handle.trie().len(), 1);
    assert!(handle.exact_match("cat").is_empty());
}

#[test]
fn fixtures_are_removed_with_their_directory() {
    let dir = tempfile::tempdir().unwrap();
    let dict = write_file(&dir, "dictionary.txt", DICTIONARY.as_bytes());
    let mut handle = CrocoHandle::new();
    handle.load_dictionary(&dict).unwrap();

    let root = dir.path().to_path_buf();
    dir.close().unwrap();
    assert!(!root.exists());
    // The loaded trie owns its data.
    assert_eq!(handle.trie().len(), 3);
}
