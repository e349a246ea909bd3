use crate::common::command::{kqldiff_compare, rule_revisions_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn compare_rejects_unknown_theme(
    rule_revisions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    kqldiff_compare(rule_revisions_dir.path(), &["--theme", "solarized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unknown theme solarized, expected one of: dark, light",
        ));

    Ok(())
}
