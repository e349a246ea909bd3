use crate::common::command::{kqldiff_compare, stdout_of, workspace_dir};
use crate::common::file::write_query_pair;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&[], "2 +  ", "2 + b")]
#[case(&["--distinct-blank-lines"], "2 ~ ", "2 ~ b")]
fn show_stacked_diff_with_distinct_blank_lines(
    workspace_dir: TempDir,
    #[case] extra_args: &[&str],
    #[case] original_row: &str,
    #[case] updated_row: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_query_pair(workspace_dir.path(), "a\n\nc", "a\nb\nc");

    let mut args = vec!["--view", "stacked", "--no-legend"];
    args.extend_from_slice(extra_args);
    let actual_output = stdout_of(&mut kqldiff_compare(workspace_dir.path(), &args))?;

    let lines = actual_output.lines().collect::<Vec<_>>();
    assert_eq!(lines[3], original_row);
    assert_eq!(lines[8], updated_row);

    Ok(())
}
