mod common;

use std::fs;

use common::init_logging;
use runic::parse;
use walkdir::WalkDir;

/// Yields every `.expr` file below `dir` with its non-blank, non-comment lines.
fn cases(dir: &str) -> Vec<(String, Vec<String>)> {
    let mut files = Vec::new();
    for entry in
        WalkDir::new(dir).sort_by_file_name()
                         .into_iter()
                         .filter_map(Result::ok)
                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        files.push((path.display().to_string(), extract_cases(&content)));
    }
    files
}

fn extract_cases(content: &str) -> Vec<String> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(str::to_string)
           .collect()
}

#[test]
fn valid_cases_parse_and_round_trip() {
    init_logging();
    let mut count = 0;

    for (path, lines) in cases("tests/cases/valid") {
        for (i, src) in lines.iter().enumerate() {
            count += 1;
            let tree = parse(src).unwrap_or_else(|e| {
                                     panic!("case {} in {path} failed:\n{src}\nError: {e}", i + 1)
                                 });
            let reparsed = parse(&tree.to_string()).unwrap_or_else(|e| {
                panic!("case {} in {path} printed as {tree} which fails: {e}", i + 1)
            });
            assert_eq!(reparsed, tree, "case {} in {path}", i + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/cases/valid");
}

#[test]
fn invalid_cases_fail() {
    init_logging();
    let mut count = 0;

    for (path, lines) in cases("tests/cases/invalid") {
        for (i, src) in lines.iter().enumerate() {
            count += 1;
            if let Ok(tree) = parse(src) {
                panic!("case {} in {path} parsed as {tree:?} but was expected to fail:\n{src}",
                       i + 1);
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases/invalid");
}
