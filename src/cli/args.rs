use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trc")]
#[command(about = "Caching line-by-line translation CLI")]
#[command(version)]
pub struct Args {
    /// Text to translate (wrap in quotes)
    pub text: Option<String>,

    /// Path to an input text file (translates every line)
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Write translations to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Read input lines from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Source language code (default: auto-detect)
    #[arg(long)]
    pub source: Option<String>,

    /// Target language code (default: es)
    #[arg(long)]
    pub target: Option<String>,

    /// Translation endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Cache file path (default: next to the executable)
    #[arg(long)]
    pub cache_file: Option<PathBuf>,

    /// Do not persist error placeholders to the cache
    #[arg(long)]
    pub no_cache_errors: bool,
}
