//! End-to-end tests: scan a folder, filter, open, and render.

mod common;

use common::{build_xlsx, people_xlsx, Cell};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use xlfind::finder::{Finder, Notice, Opened, Picked, DEFAULT_WORKBOOK_PATH};
use xlfind::render::render_page;
use xlfind::{CellValue, FileHandle, PathPicker, SelectedFile};

fn write(root: &Path, relative: &str, data: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, data).unwrap();
}

fn sorted_paths(finder: &Finder) -> Vec<String> {
    let mut paths: Vec<String> = finder
        .visible()
        .iter()
        .map(|e| e.path().to_string())
        .collect();
    paths.sort();
    paths
}

#[test]
fn test_scan_finds_supported_files_recursively() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a/x.xlsx", &people_xlsx());
    write(dir.path(), "b.csv", b"h\n1\n");
    write(dir.path(), "c.txt", b"not a sheet");
    write(dir.path(), "a/deeper/old.XLS", b"");
    write(dir.path(), "a/deeper/notes.docx", b"");

    let mut finder = Finder::new();
    let picked = finder.pick_folder(&PathPicker::new(dir.path()));

    assert_eq!(picked, Picked::Scanned(3));
    assert_eq!(
        sorted_paths(&finder),
        vec!["a/deeper/old.XLS", "a/x.xlsx", "b.csv"]
    );
    assert_eq!(finder.count_label(), "3 files found");
    assert!(finder.notices().is_empty());
}

#[test]
fn test_scan_empty_folder() {
    let dir = tempfile::tempdir().unwrap();

    let mut finder = Finder::new();
    assert_eq!(
        finder.pick_folder(&PathPicker::new(dir.path())),
        Picked::Scanned(0)
    );
    assert_eq!(finder.count_label(), "No files found");
}

#[test]
fn test_scan_missing_folder_raises_alert() {
    let dir = tempfile::tempdir().unwrap();

    let mut finder = Finder::new();
    let picked = finder.pick_folder(&PathPicker::new(dir.path().join("gone")));

    assert_eq!(picked, Picked::Failed);
    assert_eq!(
        finder.take_notices(),
        vec![Notice::Alert("Folder pick cancelled or failed.".to_string())]
    );
}

#[test]
fn test_filter_then_open_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "reports/people.xlsx", &people_xlsx());
    write(dir.path(), "reports/budget.csv", b"Item,Cost\nTea,3\n");

    let mut finder = Finder::new();
    finder.pick_folder(&PathPicker::new(dir.path()));
    finder.set_query("PEOPLE");

    assert_eq!(finder.count_label(), "1 file found");
    assert_eq!(finder.open(0), Opened::Rendered);

    let html = finder.display().unwrap();
    assert!(html.starts_with(
        "<table class=\"spec-table\"><thead><tr><th>Name</th><th>Age</th></tr></thead>"
    ));
    assert!(html.contains("<tbody><tr><td>Ann</td><td>30</td></tr></tbody>"));
    assert!(finder.info().starts_with("Showing: reports/people.xlsx — "));

    let sheet = finder.worksheet().unwrap();
    assert_eq!(sheet.name, "People");
    assert_eq!(sheet.rows[1][1], CellValue::Float(30.0));
}

#[test]
fn test_filter_matches_path_segments() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "2024/q1.csv", b"a\n");
    write(dir.path(), "2025/q1.csv", b"a\n");
    write(dir.path(), "2025/q2.csv", b"a\n");

    let mut finder = Finder::new();
    finder.pick_folder(&PathPicker::new(dir.path()));

    finder.set_query("2025/");
    assert_eq!(sorted_paths(&finder), vec!["2025/q1.csv", "2025/q2.csv"]);

    finder.set_query("  ");
    assert_eq!(finder.visible().len(), 3);
}

#[test]
fn test_cells_are_escaped() {
    let data = build_xlsx(&[(
        "Sheet1",
        vec![
            vec![Cell::Text("Col")],
            vec![Cell::Text("<script>alert(1)</script>")],
        ],
    )]);

    let mut finder = Finder::new();
    finder.pick_files(vec![SelectedFile::new("evil.xlsx", data)]);
    assert_eq!(finder.open(0), Opened::Rendered);

    let html = finder.display().unwrap();
    assert!(html.contains("<td>&lt;script&gt;alert(1)&lt;/script&gt;</td>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_empty_first_sheet_shows_no_data() {
    let data = build_xlsx(&[
        ("Empty", vec![]),
        ("Full", vec![vec![Cell::Text("ignored")]]),
    ]);

    let mut finder = Finder::new();
    finder.pick_files(vec![SelectedFile::new("empty.xlsx", data)]);

    assert_eq!(finder.open(0), Opened::Rendered);
    assert_eq!(finder.display(), Some("<p>No data.</p>"));
    assert!(finder.info().starts_with("Showing: empty.xlsx"));
}

#[test]
fn test_failed_decode_keeps_previous_table() {
    let mut finder = Finder::new();
    finder.pick_files(vec![
        SelectedFile::new("good.xlsx", people_xlsx()),
        SelectedFile::new("broken.xlsx", b"PK\x03\x04not really a zip".to_vec()),
    ]);

    assert_eq!(finder.open(0), Opened::Rendered);
    let before = finder.display().unwrap().to_string();
    let info = finder.info().to_string();

    finder.set_query("broken");
    assert_eq!(finder.open(0), Opened::Failed);

    assert_eq!(finder.display(), Some(before.as_str()));
    assert_eq!(finder.info(), info);

    let notices = finder.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].to_string().starts_with("Could not open file. "));
}

#[test]
fn test_vanished_file_raises_one_alert() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "keep.csv", b"Name\nAnn\n");
    write(dir.path(), "gone.csv", b"Name\nBob\n");

    let mut finder = Finder::new();
    finder.pick_folder(&PathPicker::new(dir.path()));

    finder.set_query("keep");
    assert_eq!(finder.open(0), Opened::Rendered);
    let before = finder.display().unwrap().to_string();

    fs::remove_file(dir.path().join("gone.csv")).unwrap();
    finder.set_query("gone");
    assert_eq!(finder.open(0), Opened::Failed);

    assert_eq!(finder.display(), Some(before.as_str()));
    let notices = finder.take_notices();
    assert_eq!(notices.len(), 1);
    let message = notices[0].to_string();
    assert!(message.starts_with("Could not open file. No file handle available: "));
    assert!(message.ends_with("gone.csv"));
}

#[test]
fn test_legacy_encoded_csv_files() {
    let mut utf16 = vec![0xFF, 0xFE];
    utf16.extend("a,b\n1,2\n".encode_utf16().flat_map(u16::to_le_bytes));

    let mut finder = Finder::new();
    finder.pick_files(vec![
        SelectedFile::new("menu.csv", b"Name\nCaf\xE9\n".to_vec()),
        SelectedFile::new("wide.csv", utf16),
    ]);

    finder.set_query("menu");
    assert_eq!(finder.open(0), Opened::Rendered);
    assert_eq!(
        finder.display(),
        Some(concat!(
            "<table class=\"spec-table\"><thead><tr><th>Name</th></tr></thead>",
            "<tbody><tr><td>Café</td></tr></tbody></table>"
        ))
    );

    finder.set_query("wide");
    assert_eq!(finder.open(0), Opened::Rendered);
    assert!(finder
        .display()
        .unwrap()
        .contains("<th>a</th><th>b</th></tr></thead><tbody><tr><td>1</td><td>2</td>"));
    assert!(finder.notices().is_empty());
}

#[test]
fn test_selection_excludes_unsupported_extensions() {
    let mut finder = Finder::new();
    let count = finder.pick_files(vec![
        SelectedFile::new("a.xlsx", people_xlsx()).with_relative_path("set/a.xlsx"),
        SelectedFile::new("b.pdf", b"%PDF".to_vec()),
        SelectedFile::new("c", b"x".to_vec()),
        SelectedFile::new("d.CSV", b"h\n".to_vec()),
    ]);

    assert_eq!(count, 2);
    let names: Vec<&str> = finder.visible().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["a.xlsx", "d.CSV"]);
    assert_eq!(finder.visible()[0].path(), "set/a.xlsx");
    assert_eq!(finder.visible()[1].path(), "d.CSV");
}

#[test]
fn test_open_out_of_range_is_silent() {
    let mut finder = Finder::new();
    finder.pick_files(vec![SelectedFile::new("a.csv", b"h\n".to_vec())]);

    assert_eq!(finder.open(5), Opened::NoSuchEntry);
    assert!(finder.display().is_none());
    assert!(finder.notices().is_empty());
}

#[test]
fn test_load_default_workbook() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), DEFAULT_WORKBOOK_PATH, &people_xlsx());

    let mut finder = Finder::new();
    let source = FileHandle::new(dir.path().join(DEFAULT_WORKBOOK_PATH));
    assert_eq!(finder.load_default(&source), Opened::Rendered);
    assert!(finder.info().starts_with("Showing: sample.xlsx — "));
}

#[test]
fn test_load_default_missing_raises_alert() {
    let dir = tempfile::tempdir().unwrap();

    let mut finder = Finder::new();
    let source = FileHandle::new(dir.path().join(DEFAULT_WORKBOOK_PATH));
    assert_eq!(finder.load_default(&source), Opened::Failed);
    assert_eq!(finder.take_notices().len(), 1);
    assert!(finder.display().is_none());
}

#[test]
fn test_rescan_replaces_registry() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    write(first.path(), "one.csv", b"a\n");
    write(first.path(), "two.csv", b"a\n");
    write(second.path(), "three.csv", b"a\n");

    let mut finder = Finder::new();
    finder.pick_folder(&PathPicker::new(first.path()));
    finder.open(0);
    assert!(finder.display().is_some());

    finder.pick_folder(&PathPicker::new(second.path()));
    assert_eq!(sorted_paths(&finder), vec!["three.csv"]);
    assert!(finder.display().is_none());
}

#[test]
fn test_page_for_scanned_folder() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "people.xlsx", &people_xlsx());

    let mut finder = Finder::new();
    finder.pick_folder(&PathPicker::new(dir.path()));
    finder.open(0);

    let page = render_page(&finder, "Excel Finder");
    assert!(page.contains("<p id=\"fileCount\">1 file found</p>"));
    assert!(page.contains("<th>Name</th><th>Age</th>"));
    assert!(page.contains("<td>Ann</td><td>30</td>"));
}
