use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use repocleaner::{clean_tree, RetentionPolicy, VersionMatcher};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prune old version directories from a build-artifact repository tree",
    long_about = None
)]
struct Args {
    /// Root of the repository tree to clean
    path: PathBuf,

    /// Number of most recently modified version directories to keep per parent directory
    #[arg(long, short, default_value_t = 10)]
    keep: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Both checks run before any filesystem access.
    let policy = RetentionPolicy::new(args.keep)?;
    let matcher = VersionMatcher::new()?;

    clean_tree(&args.path, &matcher, &policy)
        .with_context(|| format!("unable to clean repository tree '{}'", args.path.display()))?;

    Ok(())
}
