//! End-to-end tests for multiple destinations.

mod common;

use common::TestProject;

#[test]
fn identical_content_lands_in_every_destination() {
    let project = TestProject::new();
    project.rule("base.mdc", "# Base").rule("git.mdc", "commit often");

    let result = project.run(&[
        "-o",
        ".clinerules",
        "-o",
        ".github/copilot-instructions.md",
        "-o",
        "deep/nested/dir/AGENTS.md",
    ]);

    assert!(result.success, "{}", result.combined_output());
    let primary = project.read(".clinerules");
    assert_eq!(project.read(".github/copilot-instructions.md"), primary);
    assert_eq!(project.read("deep/nested/dir/AGENTS.md"), primary);
    assert!(primary.starts_with("--- START: base.mdc\n"));
}

#[test]
fn same_destination_twice_is_written_once_with_full_content() {
    let project = TestProject::new();
    project.rule("base.mdc", "only");

    let result = project.run(&["-o", "out.md", "-o", "out.md"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        project.read("out.md"),
        "--- START: base.mdc\nonly\n--- END: base.mdc\n"
    );
}

#[test]
fn verbose_reports_created_directories_and_writes() {
    let project = TestProject::new();
    project.rule("base.mdc", "b");

    let result = project.run(&["-v"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("created directory"), "{}", result.stdout);
    assert!(result.stdout.contains("wrote"), "{}", result.stdout);
    assert!(result.stdout.contains("read #1"), "{}", result.stdout);
}

#[test]
fn best_effort_policy_writes_remaining_destinations() {
    let project = TestProject::new();
    project
        .rule("base.mdc", "b")
        .write(
            "rulemerge.toml",
            "[output]\ndestinations = [\"blocked\", \"ok.md\"]\non_error = \"best-effort\"\n",
        );
    // A directory where the first destination file should go
    std::fs::create_dir_all(project.path("blocked")).unwrap();

    let result = project.run(&[]);

    assert!(!result.success);
    assert!(project.exists("ok.md"));
    assert!(result.stderr.contains("Failed to write"), "{}", result.stderr);
}

#[test]
fn fail_fast_policy_stops_at_first_failed_destination() {
    let project = TestProject::new();
    project
        .rule("base.mdc", "b")
        .write("rulemerge.toml", "[output]\ndestinations = [\"blocked\", \"ok.md\"]\n");
    std::fs::create_dir_all(project.path("blocked")).unwrap();

    let result = project.run(&[]);

    assert!(!result.success);
    assert!(!project.exists("ok.md"));
}
