use crate::common::command::{kqldiff_compare, workspace_dir};
use crate::common::file::write_query_pair;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("   \n\t", "SecurityEvent")]
#[case("SecurityEvent", "")]
fn compare_rejects_blank_query(
    workspace_dir: TempDir,
    #[case] original: &str,
    #[case] updated: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_query_pair(workspace_dir.path(), original, updated);

    kqldiff_compare(workspace_dir.path(), &[])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "both the original and the updated query must be non-empty",
        ));

    Ok(())
}
