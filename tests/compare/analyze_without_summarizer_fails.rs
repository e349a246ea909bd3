use crate::common::command::{kqldiff_compare, rule_revisions_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn analyze_without_summarizer_fails(
    rule_revisions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    kqldiff_compare(rule_revisions_dir.path(), &["--analyze"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--analyze needs --summarizer or KQLDIFF_SUMMARIZER",
        ));

    Ok(())
}
