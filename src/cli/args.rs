use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    /// Protocol files or directories containing protocols
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Compute without writing to the frontmatter
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Show how each scored line contributes
    #[arg(long, short)]
    pub explain: bool,
}
