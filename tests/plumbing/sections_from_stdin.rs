use crate::common::command::{run_kqldiff_command, stdout_of, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn sections_from_stdin(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = run_kqldiff_command(workspace_dir.path(), &["sections"]);
    cmd.write_stdin("Intro\n## Impact\nbroader\n");

    let actual_output = stdout_of(&mut cmd)?;

    pretty_assertions::assert_eq!(actual_output, "[1] Summary\n    Intro\n[2] Impact\n    broader\n");

    Ok(())
}

#[rstest]
fn sections_from_file(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("analysis.md"),
        "1. **Overview**: EventID 4771 is now matched\n2. **Impact**: more alerts\n".to_string(),
    ));

    let actual_output = stdout_of(&mut run_kqldiff_command(
        workspace_dir.path(),
        &["sections", "analysis.md"],
    ))?;

    pretty_assertions::assert_eq!(
        actual_output,
        "[1] Overview\n    EventID 4771 is now matched\n[2] Impact\n    more alerts\n"
    );

    Ok(())
}
