use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jot::areas::repository::{Repository, StorageMode};
use jot::artifacts::core::{PagerWriter, should_page};
use jot::commands::plumbing::word_diff::WordDiffOptions;
use jot::commands::porcelain::history::HistoryOptions;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    about = "A word-level snapshot tracker for a single text document",
    long_about = "jot keeps a history of saved versions of one text document. \
    Each save records which words were added and removed compared to the \
    previous version, using a bag-of-words comparison rather than a \
    positional diff.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new jot repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "save",
        about = "Save a new version of the text",
        long_about = "This command saves a new snapshot of the tracked text and records the \
        word-level changes against the previously saved version."
    )]
    Save {
        #[arg(index = 1, help = "The file to read the new text from (stdin if omitted)")]
        file: Option<String>,
    },
    #[command(
        name = "history",
        about = "Show the version history, newest first",
        long_about = "This command lists saved versions in reverse chronological order, with \
        the words added and removed by each save."
    )]
    History {
        #[arg(long, help = "Show one line per version")]
        oneline: bool,
        #[arg(short = 'n', long, help = "Limit the number of versions shown")]
        limit: Option<usize>,
    },
    #[command(
        name = "show",
        about = "Show a single version entry",
        long_about = "This command prints one version entry, looked up by its id or a unique \
        prefix of it."
    )]
    Show {
        #[arg(index = 1, help = "The version id (or unique prefix) to show")]
        id: String,
    },
    #[command(
        name = "current",
        about = "Print the current text",
        long_about = "This command prints the most recently saved text, the one the next save \
        will be compared against."
    )]
    Current,
    #[command(
        name = "word-diff",
        about = "Diff two text files without saving anything",
        long_about = "This command runs the word-level comparison on two files and prints the \
        added and removed words. It does not read or write the repository."
    )]
    WordDiff {
        #[arg(index = 1, help = "The file holding the old text")]
        old_file: String,
        #[arg(index = 2, help = "The file holding the new text")]
        new_file: String,
        #[arg(long, help = "Emit the diff as JSON")]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = StorageMode::from_env();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, mode, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), mode, Box::new(std::io::stdout()))?
                }
            };

            repository.init().await?
        }
        Commands::Save { file } => {
            let text = read_text_input(file.as_deref())?;
            let mut repository = repository_in_pwd(mode)?;

            repository.save(&text).await?
        }
        Commands::History { oneline, limit } => {
            let opts = HistoryOptions {
                oneline: *oneline,
                limit: *limit,
            };

            if should_page() {
                let pager = minus::Pager::new();
                let writer = PagerWriter::new(pager.clone());
                let pwd = std::env::current_dir()?;
                let repository =
                    Repository::new(&pwd.to_string_lossy(), mode, Box::new(writer))?;

                repository.history(&opts).await?;
                minus::page_all(pager)?
            } else {
                let repository = repository_in_pwd(mode)?;

                repository.history(&opts).await?
            }
        }
        Commands::Show { id } => {
            let repository = repository_in_pwd(mode)?;

            repository.show(id).await?
        }
        Commands::Current => {
            let repository = repository_in_pwd(mode)?;

            repository.current().await?
        }
        Commands::WordDiff {
            old_file,
            new_file,
            json,
        } => {
            let old_text = std::fs::read_to_string(old_file)
                .with_context(|| format!("failed to read {}", old_file))?;
            let new_text = std::fs::read_to_string(new_file)
                .with_context(|| format!("failed to read {}", new_file))?;
            let repository = repository_in_pwd(mode)?;

            repository
                .word_diff(&old_text, &new_text, &WordDiffOptions { json: *json })
                .await?
        }
    }

    Ok(())
}

fn repository_in_pwd(mode: StorageMode) -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(&pwd.to_string_lossy(), mode, Box::new(std::io::stdout()))
}

/// Read the new text from a file argument, or from stdin when none is given
fn read_text_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(file) if Path::new(file).exists() => {
            std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file))
        }
        Some(file) => anyhow::bail!("file {} does not exist", file),
        None => std::io::read_to_string(std::io::stdin()).context("failed to read stdin"),
    }
}
