use anyhow::Context;
use capvocab::{BuildSummary, VocabBuilderOptions, build_vocab};
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build a token-to-id vocabulary from a COCO-style captions file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the captions JSON (e.g. `captions_train2017.json`).
    #[arg(long, alias = "captions_json")]
    pub captions_json: PathBuf,

    /// Where to write the token-to-id JSON.
    #[arg(long, alias = "output_vocab", default_value = capvocab::DEFAULT_OUTPUT_PATH)]
    pub output_vocab: PathBuf,

    /// How many top tokens to keep (after specials).
    #[arg(long, alias = "max_tokens", default_value = "10000")]
    pub max_tokens: NonZeroUsize,

    /// Enable verbose output.
    #[arg(long, default_value = "false")]
    pub verbose: bool,
}

impl Args {
    /// Builder options for these args.
    pub fn options(&self) -> VocabBuilderOptions {
        VocabBuilderOptions::default().with_max_tokens(self.max_tokens.get())
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build and write the vocabulary described by `args`.
fn run(args: &Args) -> anyhow::Result<BuildSummary> {
    let summary = build_vocab(&args.captions_json, &args.output_vocab, args.options())
        .with_context(|| {
            format!(
                "failed to build vocab from {}",
                args.captions_json.display()
            )
        })?;
    log::debug!("{:?}", summary.stats);
    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    if args.verbose {
        println!("{:#?}", args);
    }

    let summary = run(&args)?;
    println!("{summary}");

    Ok(())
}
