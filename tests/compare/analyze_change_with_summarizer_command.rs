use crate::common::command::{kqldiff_compare, rule_revisions_dir, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[cfg(unix)]
#[rstest]
fn analyze_change_with_summarizer_command(
    rule_revisions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let summarizer = "grep -q 'UPDATED QUERY' && printf '## Overview\\nAdds 4771.\\n## Impact\\nMore alerts.\\n'";

    let actual_output = stdout_of(&mut kqldiff_compare(
        rule_revisions_dir.path(),
        &["--view", "stacked", "--analyze", "--summarizer", summarizer],
    ))?;

    assert!(actual_output.contains("5 lines: 1 added, 0 removed, 2 modified\n"));
    assert!(actual_output.ends_with(
        "\nAnalysis\nOverview\n    Adds 4771.\n\nImpact\n    More alerts.\n"
    ));

    Ok(())
}

#[cfg(unix)]
#[rstest]
fn analyze_uses_summarizer_from_environment(
    rule_revisions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = kqldiff_compare(rule_revisions_dir.path(), &["--analyze"]);
    cmd.env("KQLDIFF_SUMMARIZER", "cat > /dev/null; echo 'Threshold doubled.'");

    let actual_output = stdout_of(&mut cmd)?;

    assert!(actual_output.ends_with("\nAnalysis\nSummary\n    Threshold doubled.\n"));

    Ok(())
}
