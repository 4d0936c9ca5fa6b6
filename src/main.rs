use anyhow::Result;
use clap::Parser;

use trc_cli::cli::Args;
use trc_cli::cli::commands::translate::{self, TranslateOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let options = TranslateOptions {
        text: args.text,
        file: args.file,
        output: args.output,
        stdin: args.stdin,
        source: args.source,
        target: args.target,
        endpoint: args.endpoint,
        cache_file: args.cache_file,
        no_cache_errors: args.no_cache_errors,
    };
    translate::run_translate(options).await
}
