//! End-to-end tests: a source directory with no fragments.

mod common;

use common::TestProject;

#[test]
fn missing_source_writes_empty_primary_only() {
    let project = TestProject::new();

    let result = project.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(project.read(".clinerules"), "");
    assert!(!project.exists(".github/copilot-instructions.md"));
    assert!(result.stderr.contains("not found; treating it as empty"));
    assert!(result.stderr.contains("No rule fragments"));
}

#[test]
fn directory_without_matching_files_writes_empty_primary_only() {
    let project = TestProject::new();
    project
        .rule("README.md", "not a fragment")
        .write(".github/copilot-instructions.md", "keep me");

    let result = project.run(&["build"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(project.read(".clinerules"), "");
    assert_eq!(project.read(".github/copilot-instructions.md"), "keep me");
}

#[test]
fn empty_source_truncates_existing_primary() {
    let project = TestProject::new();
    project.write(".clinerules", "old rules\n");
    std::fs::create_dir_all(project.path(".cursor/rules")).unwrap();

    let result = project.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(project.read(".clinerules"), "");
}
