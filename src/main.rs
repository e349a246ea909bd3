use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use kqldiff::areas::session::Session;
use kqldiff::artifacts::analysis::summarizer::CommandSummarizer;
use kqldiff::artifacts::core::PagerWriter;
use kqldiff::artifacts::render::theme::{DEFAULT_THEME, Theme};
use kqldiff::artifacts::render::{DEFAULT_WIDTH, ViewOptions};
use kqldiff::{BlankLinePolicy, ColorMode, ViewMode};
use minus::Pager;
use std::io::Read;
use std::path::{Path, PathBuf};

const SUMMARIZER_ENV: &str = "KQLDIFF_SUMMARIZER";
const LOG_ENV: &str = "KQLDIFF_LOG";
const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(
    name = "kqldiff",
    version = "0.1.0",
    about = "Compare revisions of a KQL analytic rule",
    long_about = "Compares two revisions of a KQL query line by line and highlights \
    the characters that changed inside modified lines. \
    An external summarizer command can be asked to describe the change.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, help = "Log debug information to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Show the differences between two query revisions",
        long_about = "This command compares the original and the updated query file line by line. \
        Use - to read one of them from stdin."
    )]
    Compare {
        #[arg(index = 1, help = "The original query file")]
        original: PathBuf,
        #[arg(index = 2, help = "The updated query file")]
        updated: PathBuf,
        #[arg(long, value_enum, default_value_t = ViewMode::SideBySide, help = "How to lay out the panes")]
        view: ViewMode,
        #[arg(long, default_value_t = DEFAULT_WIDTH, help = "Total width of the side-by-side view")]
        width: usize,
        #[arg(long, default_value = DEFAULT_THEME, help = "Color theme (light or dark)")]
        theme: String,
        #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to use colors")]
        color: ColorMode,
        #[arg(long, help = "Do not print the legend")]
        no_legend: bool,
        #[arg(
            long,
            help = "Report an empty line facing a non-empty one as modified instead of added/removed"
        )]
        distinct_blank_lines: bool,
        #[arg(short, long, help = "Ask the summarizer to analyze the change")]
        analyze: bool,
        #[arg(long, help = "Summarizer shell command (defaults to $KQLDIFF_SUMMARIZER)")]
        summarizer: Option<String>,
    },
    #[command(
        name = "align",
        about = "Print the character alignment of two strings",
        long_about = "This command marks with a caret every character that the aligner reports as changed."
    )]
    Align {
        #[arg(index = 1)]
        original: String,
        #[arg(index = 2)]
        updated: String,
    },
    #[command(
        name = "sections",
        about = "Split an analysis text into titled sections",
        long_about = "This command reads an analysis text from a file, or from stdin when no file is given, \
        and prints the sections found in it."
    )]
    Sections {
        #[arg(index = 1, help = "The analysis file")]
        file: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if verbose { "kqldiff=debug" } else { "warn" })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn use_color(mode: ColorMode) -> bool {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    };
    colored::control::set_override(enabled);
    enabled
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let pager = (std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none())
        .then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    match cli.command {
        Commands::Compare {
            original,
            updated,
            view,
            width,
            theme,
            color,
            no_legend,
            distinct_blank_lines,
            analyze,
            summarizer,
        } => {
            if original == updated && original == Path::new(STDIN_PATH) {
                anyhow::bail!("only one of the queries can be read from stdin");
            }

            let summarizer = if analyze {
                let command = summarizer
                    .or_else(|| std::env::var(SUMMARIZER_ENV).ok())
                    .filter(|command| !command.trim().is_empty())
                    .with_context(|| {
                        format!("--analyze needs --summarizer or {SUMMARIZER_ENV}")
                    })?;
                Some(CommandSummarizer::new(command))
            } else {
                None
            };

            let view = ViewOptions {
                mode: view,
                width,
                color: use_color(color),
                theme: Theme::by_name(&theme)?,
                legend: !no_legend,
            };
            let policy = if distinct_blank_lines {
                BlankLinePolicy::Distinct
            } else {
                BlankLinePolicy::Collapse
            };

            let mut session = Session::new(writer).with_policy(policy);
            session.set_original(read_input(&original)?);
            session.set_updated(read_input(&updated)?);

            session.compare(&view)?;
            if let Some(summarizer) = summarizer {
                session.analyze(&summarizer, &view).await?;
            }
        }
        Commands::Align { original, updated } => {
            Session::new(writer).align(&original, &updated)?;
        }
        Commands::Sections { file } => {
            let text = read_input(file.as_deref().unwrap_or(Path::new(STDIN_PATH)))?;
            Session::new(writer).sections(&text)?;
        }
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
