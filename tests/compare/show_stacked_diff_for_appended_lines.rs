use crate::common::command::{kqldiff_compare, stdout_of, workspace_dir};
use crate::common::file::write_query_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_stacked_diff_for_appended_lines(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_query_pair(workspace_dir.path(), "a\nb", "a\nb\nc");

    let expected_output = "Original\n========\n1   a\n2   b\n3 +  \n\nUpdated\n=======\n1   a\n2   b\n3 + c\n\n3 lines: 1 added, 0 removed, 0 modified\n";
    let actual_output = stdout_of(&mut kqldiff_compare(
        workspace_dir.path(),
        &["--view", "stacked", "--no-legend"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
