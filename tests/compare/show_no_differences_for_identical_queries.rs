use crate::common::command::{kqldiff_compare, stdout_of, workspace_dir};
use crate::common::file::{generate_query, write_query_pair};
use assert_fs::TempDir;
use fake::Fake;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_no_differences_for_identical_queries(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let line_count = (1..=8).fake::<usize>();
    let query = generate_query(line_count);
    write_query_pair(workspace_dir.path(), &query, &query);

    let actual_output = stdout_of(&mut kqldiff_compare(
        workspace_dir.path(),
        &["--view", "stacked", "--no-legend"],
    ))?;

    let footer = if line_count == 1 {
        "1 line, no differences\n".to_string()
    } else {
        format!("{line_count} lines, no differences\n")
    };
    assert!(predicate::str::ends_with(footer).eval(&actual_output));
    assert!(!actual_output.contains(" ~ "));
    assert!(!actual_output.contains(" + "));

    Ok(())
}
