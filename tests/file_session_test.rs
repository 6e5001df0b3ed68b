//! Editing sessions against files on disk.

use inifile::{Editor, IniError, TextSource};
use std::fs::OpenOptions;
use std::io::Write;

#[test]
fn test_update_file_rewrites_in_place() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[server]\nport = 8080\n").unwrap();

    Editor::update_file(file.path(), |editor| {
        editor.set("server", "port", "9090");
        Ok(())
    })
    .unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(contents, "[server]\nport = 9090\n");
}

#[test]
fn test_update_file_leaves_file_alone_on_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[server]\nport = 8080\n").unwrap();

    let result = Editor::update_file(file.path(), |editor| {
        editor.set("server", "port", "9090");
        Err(IniError::custom("abandon the session"))
    });

    assert!(result.is_err());
    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(contents, "[server]\nport = 8080\n");
}

#[test]
fn test_update_file_reports_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.ini");

    let result = Editor::update_file(&missing, |_| Ok(()));
    match result {
        Err(IniError::Io { path, .. }) => {
            assert_eq!(path.as_deref(), Some(missing.display().to_string().as_str()));
        }
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_open_file_as_text_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a = 1\nb = 2\nc = 3\n").unwrap();

    let mut handle = OpenOptions::new()
        .read(true)
        .write(true)
        .open(file.path())
        .unwrap();

    Editor::update(&mut handle, |editor| {
        editor.set("main", "a", "0");
        Ok(())
    })
    .unwrap();

    let contents = handle.read_text().unwrap();
    assert_eq!(contents, "[main]\na = 0\nb = 2\nc = 3\n");
}

#[test]
fn test_file_source_shrinking_rewrite() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "padding padding padding padding\n").unwrap();

    let mut handle = OpenOptions::new()
        .read(true)
        .write(true)
        .open(file.path())
        .unwrap();
    handle.replace_text("x = 1\n").unwrap();

    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "x = 1\n");
}
