//! Integration tests for project scaffolding
//!
//! These tests create real project trees in temporary directories and check
//! the layout and rendered files for every language.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeSet;
use tempfile::TempDir;
use vextra_projects::{Error, Language, Scaffolder};

const DIRECTORIES: [&str; 8] = [
    "src",
    "include",
    "core",
    "resources",
    "bin",
    "doc",
    "tests",
    "libs",
];

fn scratch() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let base = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, base)
}

/// Relative paths of every entry below `root`, directories with a trailing `/`
fn tree(root: &Utf8Path) -> BTreeSet<String> {
    fn walk(root: &Utf8Path, dir: &Utf8Path, out: &mut BTreeSet<String>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = Utf8PathBuf::try_from(entry.unwrap().path()).unwrap();
            let relative = path.strip_prefix(root).unwrap().to_string();
            if path.is_dir() {
                out.insert(format!("{}/", relative));
                walk(root, &path, out);
            } else {
                out.insert(relative);
            }
        }
    }

    let mut out = BTreeSet::new();
    walk(root, root, &mut out);
    out
}

fn read(path: Utf8PathBuf) -> String {
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path, e))
}

#[test]
fn test_neutral_project_has_exact_layout() {
    let (_guard, base) = scratch();
    let scaffolder = Scaffolder::new().unwrap();

    scaffolder.create(&base, "X", Language::Neutral).unwrap();

    let mut expected: BTreeSet<String> = DIRECTORIES.iter().map(|d| format!("{}/", d)).collect();
    for file in [
        "README.md",
        ".gitignore",
        ".X-Info",
        "src/Makefile",
        "src/main.txt",
    ] {
        expected.insert(file.to_string());
    }

    assert_eq!(tree(&base.join("X")), expected);
    assert!(read(base.join("X/README.md")).contains("# X"));
}

#[test]
fn test_cpp_project() {
    let (_guard, base) = scratch();
    let scaffolder = Scaffolder::new().unwrap();

    let report = scaffolder.create(&base, "X", Language::Cpp).unwrap();

    assert_eq!(report.entry_point, base.join("X/src/main.cpp"));
    assert!(read(base.join("X/src/main.cpp")).contains("Hello from X!"));

    let makefile = read(base.join("X/src/Makefile"));
    assert!(makefile.contains("g++"));
    assert!(makefile.contains("BIN = ../bin/X"));
    assert!(makefile.contains("\n\t$(CXX) $(OBJ) -o $(BIN)\n"));
    assert!(!base.join("X/src/main.txt").exists());
}

#[test]
fn test_c_project() {
    let (_guard, base) = scratch();
    let scaffolder = Scaffolder::new().unwrap();

    scaffolder.create(&base, "X", Language::C).unwrap();

    assert!(read(base.join("X/src/main.c")).contains("Hello from X!"));
    assert!(read(base.join("X/src/Makefile")).contains("gcc"));
}

#[test]
fn test_java_project() {
    let (_guard, base) = scratch();
    let scaffolder = Scaffolder::new().unwrap();

    scaffolder.create(&base, "X", Language::Java).unwrap();

    let main = read(base.join("X/src/Main.java"));
    assert!(main.contains("public class Main"));
    assert!(main.contains("System.out.println(\"Hello from X!\");"));
    assert!(read(base.join("X/src/Makefile")).contains("javac"));
}

#[test]
fn test_unrecognized_flag_uses_neutral_template() {
    let (_guard, base) = scratch();
    let scaffolder = Scaffolder::new().unwrap();

    let language = Language::resolve(Some("-rust"));
    scaffolder.create(&base, "X", language).unwrap();

    assert!(base.join("X/src/main.txt").is_file());
    assert_eq!(
        read(base.join("X/src/Makefile")),
        "# Empty Makefile (no language specified)\n"
    );
}

#[test]
fn test_existing_project_is_not_modified() {
    let (_guard, base) = scratch();
    let scaffolder = Scaffolder::new().unwrap();
    std::fs::create_dir(base.join("X")).unwrap();
    std::fs::write(base.join("X/keep.txt"), "mine").unwrap();

    let err = scaffolder.create(&base, "X", Language::Java).unwrap_err();

    assert!(matches!(err, Error::ProjectExists { .. }));
    assert_eq!(tree(&base.join("X")), BTreeSet::from(["keep.txt".to_string()]));
}

#[test]
fn test_two_projects_side_by_side() {
    let (_guard, base) = scratch();
    let scaffolder = Scaffolder::new().unwrap();

    scaffolder.create(&base, "First", Language::C).unwrap();
    scaffolder.create(&base, "Second", Language::Java).unwrap();

    assert!(base.join("First/.First-Info").is_file());
    assert!(base.join("Second/.Second-Info").is_file());
    assert!(!base.join("First/src/Main.java").exists());
}

#[test]
fn test_project_name_with_placeholder_is_kept_verbatim() {
    let (_guard, base) = scratch();
    let scaffolder = Scaffolder::new().unwrap();

    let report = scaffolder.create(&base, "{date}", Language::Cpp).unwrap();

    let root = base.join("{date}");
    assert_eq!(report.root, root);
    assert!(root.join(".{date}-Info").is_file());
    assert!(read(root.join("README.md")).starts_with("# {date}\n"));
    assert!(read(root.join("src/main.cpp")).contains("Hello from {date}!"));
    assert!(read(root.join("src/Makefile")).contains("../bin/{date}"));
}
