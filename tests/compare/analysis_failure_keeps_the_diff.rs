use crate::common::command::{kqldiff_compare, rule_revisions_dir, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[cfg(unix)]
#[rstest]
#[case("exit 1")]
#[case("cat > /dev/null")]
#[case("definitely-not-a-summarizer-binary")]
fn analysis_failure_keeps_the_diff(
    rule_revisions_dir: TempDir,
    #[case] summarizer: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(&mut kqldiff_compare(
        rule_revisions_dir.path(),
        &["--view", "stacked", "--analyze", "--summarizer", summarizer],
    ))?;

    assert!(actual_output.contains("4 ~ | where count_ > 10\n"));
    assert!(actual_output.contains("5 lines: 1 added, 0 removed, 2 modified\n"));
    assert!(actual_output.ends_with(
        "\nAnalysis\nFailed to generate analysis. Please try again.\n"
    ));

    Ok(())
}
