use crate::common::command::{run_kqldiff_command, stdout_of, workspace_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("select x", "select y", "- select x\n         ^\n+ select y\n         ^\n")]
#[case("| take 10", "| take 10", "- | take 10\n+ | take 10\n")]
fn align_marks_changed_characters(
    workspace_dir: TempDir,
    #[case] original: &str,
    #[case] updated: &str,
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut run_kqldiff_command(
        workspace_dir.path(),
        &["align", original, updated],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
