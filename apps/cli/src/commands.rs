//! CLI definition, tracing setup, and the console status reporter.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use llmsgen_core::assembler::ArtifactMeta;
use llmsgen_core::pipeline::{GenerateConfig, GenerateResult, StatusReporter, generate};
use llmsgen_shared::{LlmsGenError, load_config};
use tracing::debug;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// llmsgen: build llms.txt files from a markdown wiki.
#[derive(Parser, Debug)]
#[command(
    name = "llmsgen",
    version,
    about = "Generate llms.txt and llms-full.txt from a directory of markdown wiki pages.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Wiki directory to scan; both outputs are written into it.
    #[arg(value_name = "WIKI_DIR", default_value = "wiki")]
    pub dir: PathBuf,

    /// Wiki directory to scan (takes precedence over WIKI_DIR).
    #[arg(long, value_name = "DIR")]
    pub wiki_dir: Option<PathBuf>,

    /// Display name for the document headers (skips manifest lookup).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Path to a TOML config file.
    #[arg(short, long, value_name = "FILE", env = "LLMSGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The directory to scan, after applying `--wiki-dir`.
    pub(crate) fn target_dir(&self) -> &Path {
        self.wiki_dir.as_deref().unwrap_or(&self.dir)
    }
}

/// Log output format.
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "llmsgen=info",
        1 => "llmsgen=debug",
        _ => "llmsgen=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Run the generator. Missing directories and empty wikis are reported and
/// turned into a failing exit code; anything else propagates as an error.
pub(crate) fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(name) = &cli.name {
        config.name = Some(name.clone());
    }

    let wiki_dir = cli.target_dir().to_path_buf();
    debug!(wiki_dir = %wiki_dir.display(), ?config, "resolved configuration");

    let generate_config = GenerateConfig::new(&wiki_dir, &config);

    match generate(&generate_config, &ConsoleStatus) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(LlmsGenError::WikiDirMissing { path }) => {
            eprintln!("Error: Wiki directory '{}' does not exist", path.display());
            Ok(ExitCode::FAILURE)
        }
        Err(LlmsGenError::NoPages { .. }) => {
            eprintln!("Warning: No wiki pages found");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// Console status reporter
// ---------------------------------------------------------------------------

/// Prints one status line per pipeline step to stdout.
struct ConsoleStatus;

impl StatusReporter for ConsoleStatus {
    fn scanning(&self, wiki_dir: &Path) {
        println!("Scanning wiki directory: {}", wiki_dir.display());
    }

    fn pages_found(&self, count: usize) {
        println!("Found {count} wiki pages");
    }

    fn repo_name(&self, name: &str) {
        println!("Repository name: {name}");
    }

    fn generated(&self, artifact: &ArtifactMeta) {
        println!("Generated: {}", artifact.path.display());
    }

    fn done(&self, result: &GenerateResult) {
        for skipped in &result.skipped {
            debug!(path = %skipped.path.display(), reason = %skipped.reason, "skipped file");
        }
        debug!(elapsed = ?result.elapsed, "run finished");
        if !result.skipped.is_empty() {
            println!("Skipped {} unreadable file(s)", result.skipped.len());
        }
        println!("Done!");
    }
}
