use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use branch_diff::config::{flag_override, positional_directory, DiffConfig, FindConfig, ListConfig, Settings};
use branch_diff::{find_commit, list_branches, report, DiffOrchestrator, RefScope, SystemGit};

#[derive(Parser)]
#[command(name = "branch-diff")]
#[command(about = "List branches, find commits by date, and diff branches over time")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to settings file (default: <directory>/.branch-diff.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List branches in [directory]
    List {
        /// Repository directory (default: current directory)
        #[arg(num_args = 0..=3, value_name = "DIRECTORY")]
        directory: Vec<String>,

        /// List remote-tracking branches instead of local ones
        #[arg(short, long)]
        remotes: bool,

        /// Show verbose logging
        #[arg(short, long)]
        verbose: bool,

        /// Print the list as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Find the commit on <branch> as of [date]
    Find {
        /// [DATE] BRANCH [DIRECTORY]
        #[arg(required = true, num_args = 1..=3, value_name = "ARGS")]
        args: Vec<String>,

        /// Show verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Diff two commits, for one branch or all of them
    Diff {
        /// Repository directory (default: current directory)
        #[arg(num_args = 0..=2, value_name = "DIRECTORY")]
        directory: Vec<String>,

        /// Commit to start diff from
        #[arg(short = '1', long)]
        commit1: Option<String>,

        /// Commit to end diff at
        #[arg(short = '2', long)]
        commit2: Option<String>,

        /// Diff start date
        #[arg(short, long)]
        start_date: Option<String>,

        /// Diff end date
        #[arg(short, long)]
        end_date: Option<String>,

        /// Branch to diff
        #[arg(short, long)]
        branch: Option<String>,

        /// Show file names only instead of changes
        #[arg(short, long, overrides_with = "no_name_only")]
        name_only: bool,

        /// Show full changes even when the settings file enables name-only
        #[arg(long, overrides_with = "name_only")]
        no_name_only: bool,

        /// Diff every branch
        #[arg(short, long)]
        all: bool,

        /// With --all, diff remote-tracking branches
        #[arg(short, long)]
        remotes: bool,

        /// Show verbose logging
        #[arg(short, long)]
        verbose: bool,

        /// Check out and pull each branch before diffing
        #[arg(short, long)]
        pull: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings_path = cli.config.as_deref();

    match cli.command {
        Commands::List {
            directory,
            remotes,
            verbose,
            json,
        } => {
            let directory = positional_directory(&directory, &["branches", "in"])?;
            let settings = Settings::discover(settings_path, directory.as_deref())?;
            let config = ListConfig {
                directory,
                scope: RefScope::from_remotes_flag(remotes),
                json,
            };
            cmd_list(&settings, &config, verbose)
        }
        Commands::Find { args, verbose } => {
            let config = FindConfig::from_positionals(&args)?;
            let settings = Settings::discover(settings_path, config.directory.as_deref())?;
            cmd_find(&settings, &config, verbose)
        }
        Commands::Diff {
            directory,
            commit1,
            commit2,
            start_date,
            end_date,
            branch,
            name_only,
            no_name_only,
            all,
            remotes,
            verbose,
            pull,
        } => {
            let directory = positional_directory(&directory, &["commits"])?;
            let settings = Settings::discover(settings_path, directory.as_deref())?;
            let scope = if remotes {
                RefScope::Remote
            } else {
                settings.diff.all_scope
            };
            let config = DiffConfig {
                directory,
                commit1,
                commit2,
                start_date,
                end_date,
                branch,
                name_only: flag_override(name_only, no_name_only, settings.diff.name_only),
                all,
                scope,
                pull,
            };
            cmd_diff(&settings, &config, verbose)
        }
    }
}

fn system_git(settings: &Settings, verbose: bool) -> SystemGit {
    SystemGit::new(settings.git_binary()).with_verbose(verbose || settings.git.verbose)
}

fn describe(directory: Option<&Path>) -> String {
    directory
        .map(|d| d.display().to_string())
        .unwrap_or_else(|| "current directory".to_string())
}

fn cmd_list(settings: &Settings, config: &ListConfig, verbose: bool) -> Result<()> {
    let git = system_git(settings, verbose);
    let directory = config.directory.as_deref();

    let branches = list_branches(&git, directory, config.scope)
        .with_context(|| format!("Could not list branches in {}", describe(directory)))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_branch_list(&mut out, &branches, config.json)?;

    Ok(())
}

fn cmd_find(settings: &Settings, config: &FindConfig, verbose: bool) -> Result<()> {
    let git = system_git(settings, verbose);

    let commit = find_commit(
        &git,
        config.directory.as_deref(),
        config.date.as_deref(),
        &config.branch,
    )
    .with_context(|| format!("Could not find a commit on {}", config.branch))?;

    println!("{commit}");

    Ok(())
}

fn cmd_diff(settings: &Settings, config: &DiffConfig, verbose: bool) -> Result<()> {
    let git = system_git(settings, verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = DiffOrchestrator::new(&git, config)
        .run(&mut out)
        .with_context(|| {
            format!(
                "Could not determine branches to diff in {}",
                describe(config.directory.as_deref())
            )
        })?;
    out.flush()?;

    // Every branch has been processed; only now reflect partial failure.
    if !summary.all_succeeded() && settings.diff.fail_on_error {
        std::process::exit(1);
    }

    Ok(())
}
