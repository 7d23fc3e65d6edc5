//! convlog - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use git2::Repository;
use tracing::info;
use tracing_subscriber::EnvFilter;

use convlog::changelog::{
    RenderContext, generate_summary, is_unreleased, pr_preview_title, prepend_changelog,
    render_json, render_markdown, write_output,
};
use convlog::commit::group_commits;
use convlog::config::{DEFAULT_CONFIG_PATH, default_repo_url, load_config};
use convlog::error::GitError;
use convlog::git::{
    DEFAULT_BASE_REF, count_commits, fetch_pr_commits, fetch_squash_commit, resolve_pr_range,
};
use convlog::version::{
    VERSION_UNRELEASED, calc_next_version, is_toml_config, update_project_version,
};

/// Conventional commit changelogs and branch-driven version bumps for CI.
#[derive(Parser, Debug)]
#[command(name = "convlog")]
#[command(about = "Conventional commit changelogs and branch-driven version bumps for CI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a changelog from conventional commits
    Changelog(ChangelogArgs),
    /// Calculate the next version from branch rules
    Version(VersionArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Commits of a PR branch, each linked by SHA
    Pr,
    /// The squash commit at HEAD, split into its original commits
    Release,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Markdown,
    Json,
}

#[derive(clap::Args, Debug)]
struct ChangelogArgs {
    /// Mode of changelog generation
    #[arg(long, value_enum)]
    mode: Mode,

    /// Branch name
    #[arg(long)]
    branch: String,

    /// Branch the PR is compared against
    #[arg(long, default_value = DEFAULT_BASE_REF)]
    base: String,

    /// Release version or UNRELEASED
    #[arg(long = "version")]
    version: Option<String>,

    /// PR number of the changelog
    #[arg(long)]
    pr_number: Option<u64>,

    /// Output file path
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Repository URL used for commit and PR links
    #[arg(long)]
    repo_url: Option<String>,

    /// Changelog file the release section is prepended to
    #[arg(long, default_value = "CHANGELOG.md")]
    changelog: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,
}

#[derive(clap::Args, Debug)]
struct VersionArgs {
    /// Current branch name
    #[arg(long)]
    branch: String,

    /// Flag to indicate prerelease ("true" or "false")
    #[arg(long, default_value = "false")]
    prerelease: String,

    /// Path to config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Changelog(args) => run_changelog(args),
        Command::Version(args) => run_version(args),
    }
}

fn run_changelog(args: ChangelogArgs) -> Result<()> {
    let repo = Repository::open(".")
        .context("Not a git repository. Run convlog from within a git repository.")?;

    let repo_url = args.repo_url.clone().unwrap_or_else(default_repo_url);
    let version = args
        .version
        .clone()
        .unwrap_or_else(|| VERSION_UNRELEASED.to_string());
    let unreleased = is_unreleased(Some(version.as_str()));

    let (rendered, markdown) = match args.mode {
        Mode::Pr => {
            let range = resolve_pr_range(&repo, &args.branch, &args.base)
                .context("Failed to resolve PR commit range")?;
            let commits = fetch_pr_commits(&repo, &range).context("Failed to fetch commits")?;
            let grouping = group_commits(&commits);
            info!("{}", generate_summary(&grouping));

            let ctx = RenderContext {
                version: if unreleased {
                    pr_preview_title(&args.branch, &version)
                } else {
                    version
                },
                repo_url: &repo_url,
                squash: None,
                is_unreleased: unreleased,
                pr_number: None,
                date: None,
            };
            let markdown = render_markdown(&ctx, &grouping);
            let rendered = match args.format {
                Format::Markdown => markdown.clone(),
                Format::Json => render_json(&ctx, &grouping)?,
            };
            (rendered, markdown)
        }
        Mode::Release => {
            let squash = fetch_squash_commit(&repo).context("Failed to read squash commit")?;
            let grouping = group_commits(&squash.commits);
            info!(sha = %squash.short_sha, "{}", generate_summary(&grouping));

            let ctx = RenderContext {
                version,
                repo_url: &repo_url,
                squash: Some(&squash),
                is_unreleased: unreleased,
                pr_number: args.pr_number,
                date: Some(chrono::Utc::now().format("%Y-%m-%d").to_string()),
            };
            let markdown = render_markdown(&ctx, &grouping);
            prepend_changelog(&args.changelog, &markdown)
                .with_context(|| format!("Failed to update {}", args.changelog.display()))?;

            let rendered = match args.format {
                Format::Markdown => markdown.clone(),
                Format::Json => render_json(&ctx, &grouping)?,
            };
            (rendered, markdown)
        }
    };

    write_output(&args.output, &rendered).context("Failed to write changelog output")?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    info!(
        output = %args.output.display(),
        bytes = markdown.len(),
        "Changelog written"
    );

    Ok(())
}

fn run_version(args: VersionArgs) -> Result<()> {
    let config = load_config(&args.config).context("Failed to load semantic branch config")?;
    let prerelease = args.prerelease.eq_ignore_ascii_case("true");

    let next = calc_next_version(
        &config.semantic_branch,
        &args.branch,
        prerelease,
        &config.current_version,
        || {
            let repo = Repository::open(".").map_err(GitError::OpenRepository)?;
            Ok(count_commits(&repo)?)
        },
    )
    .context("Failed to calculate next version")?;

    if next.deploy && is_toml_config(&config.path) {
        update_project_version(&config.path, &next.version)
            .with_context(|| format!("Failed to update {}", config.path.display()))?;
        info!(version = %next.version, path = %config.path.display(), "Updated project version");
    }

    println!("version={}", next.version);
    println!("deploy={}", next.deploy);

    Ok(())
}
