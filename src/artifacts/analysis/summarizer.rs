use anyhow::Context;
use derive_new::new;
use std::future::Future;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// External collaborator that turns an analyst prompt into free-form text.
pub trait Summarizer {
    fn summarize(&self, prompt: &str) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Summarizer backed by a shell command.
///
/// The prompt is written to the command's stdin and its stdout is taken as the
/// analysis. A non-zero exit status or an empty stdout is an error.
#[derive(Debug, Clone, new)]
pub struct CommandSummarizer {
    command: String,
}

impl CommandSummarizer {
    fn shell(&self) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&self.command);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(&self.command);
            cmd
        }
    }
}

impl Summarizer for CommandSummarizer {
    async fn summarize(&self, prompt: &str) -> anyhow::Result<String> {
        tracing::debug!(command = %self.command, "spawning summarizer");

        let mut child = self
            .shell()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn summarizer `{}`", self.command))?;

        // stdout must be drained while the prompt is written or a streaming
        // filter such as `cat` blocks on a full pipe
        let stdin = child.stdin.take();
        let write_prompt = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            match stdin.write_all(prompt.as_bytes()).await {
                // the command may exit without reading its input
                Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                result => result,
            }
        };

        let (written, output) = tokio::join!(write_prompt, child.wait_with_output());
        let output = output.context("failed to wait for summarizer")?;
        written.context("failed to write prompt to summarizer")?;

        if !output.status.success() {
            anyhow::bail!(
                "summarizer exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let text = String::from_utf8(output.stdout).context("summarizer output is not UTF-8")?;
        if text.trim().is_empty() {
            anyhow::bail!("summarizer produced no output");
        }

        Ok(text.trim_end().to_string())
    }
}
