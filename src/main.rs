//! CLI entry point for sumtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use sumtree::{
    FilterChain, FilterConfig, OutputConfig, ScanConfig, SymlinkPolicy, TreeFormatter, TreeScanner,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sumtree")]
#[command(about = "Show a directory tree with file sizes and valid/blank line counts")]
#[command(version)]
struct Args {
    /// Directory to summarize
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Exclude entries with this exact name (can be used multiple times)
    #[arg(short = 'n', long = "exclude-name", value_name = "NAME")]
    exclude_name: Vec<String>,

    /// Exclude the entry at this exact path relative to the root (can be used multiple times)
    #[arg(short = 'P', long = "exclude-path", value_name = "PATH")]
    exclude_path: Vec<String>,

    /// Exclude entries matching this regular expression (can be used multiple times).
    /// Patterns containing a path separator match the relative path, others the name
    #[arg(short = 'r', long = "exclude-regex", value_name = "REGEX")]
    exclude_regex: Vec<String>,

    /// Load additional exclusions from a JSON file
    /// ({"names": [...], "paths": [...], "patterns": [...]})
    #[arg(long = "filters", value_name = "FILE")]
    filters: Option<PathBuf>,

    /// Do not apply the built-in exclusions (.git, .gitignore, *.pyc)
    #[arg(long = "no-default-filters")]
    no_default_filters: bool,

    /// Record symbolic links without following them
    #[arg(long = "no-follow")]
    no_follow: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Assemble the exclusion chain: defaults, then the filter file, then flags.
fn build_filters(args: &Args) -> sumtree::Result<FilterChain> {
    let mut config = if args.no_default_filters {
        FilterConfig::default()
    } else {
        FilterConfig::defaults()
    };
    if let Some(ref path) = args.filters {
        config.extend(FilterConfig::load(path)?);
    }
    config.extend(FilterConfig {
        names: args.exclude_name.clone(),
        paths: args.exclude_path.clone(),
        patterns: args.exclude_regex.clone(),
    });
    tracing::debug!(?config, "filter configuration");
    config.to_chain()
}

fn fail(err: sumtree::Error) -> ! {
    eprintln!("sumtree: {}: {}", err.kind(), err);
    process::exit(1);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let filters = build_filters(&args).unwrap_or_else(|e| fail(e));

    let scan_config = ScanConfig {
        symlinks: if args.no_follow {
            SymlinkPolicy::LinkOnly
        } else {
            SymlinkPolicy::Follow
        },
    };
    let tree = TreeScanner::new(scan_config, &filters)
        .scan(&args.path)
        .unwrap_or_else(|e| fail(e));

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
        ..Default::default()
    });
    if let Err(e) = formatter.print(&tree) {
        eprintln!("sumtree: error writing output: {}", e);
        process::exit(1);
    }
}
