use crate::common::command::{run_kqldiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn compare_reads_updated_query_from_stdin(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("original.kql"),
        "SigninLogs\n| take 10".to_string(),
    ));

    let expected_output = "Original\n========\n1   SigninLogs\n2 ~ | take 10\n\nUpdated\n=======\n1   SigninLogs\n2 ~ | take 25\n\n2 lines: 0 added, 0 removed, 1 modified\n";
    let actual_output = run_kqldiff_command(
        workspace_dir.path(),
        &[
            "compare",
            "original.kql",
            "-",
            "--view",
            "stacked",
            "--no-legend",
            "--color",
            "never",
        ],
    )
    .write_stdin("SigninLogs\n| take 25")
    .assert()
    .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
