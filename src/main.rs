use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::{Env, Target};
use random_trivia::{ReqwestClient, Trivia, DEFAULT_ENDPOINT};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Trivia endpoint returning a JSON array of questions
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// File to write logs to; logging is off without it
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let client = ReqwestClient::new()?;
    let trivia = Trivia::new(client, args.endpoint)?;
    trivia.run().await?;

    log::info!("session ended");
    Ok(())
}

/// The terminal belongs to the UI, so log records go to a file instead.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
