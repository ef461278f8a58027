//! # mito-calling
//!
//! CLI launcher for the mitochondrial variant-calling pipeline. Collects run
//! parameters, merges them with the sidecar `.env`, writes the Snakemake
//! configuration artifact and invokes the engine, passing its exit status
//! through unchanged.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use mitocall_core::launch;
use mitocall_core::params::{LaunchContext, RawArgs, DEFAULT_CORES};
use mitocall_core::runner::Snakemake;

#[derive(Parser)]
#[command(author, version, about = "Mito Calling Pipeline")]
struct Args {
    /// Input csv, header: sample,r1,r2
    infile: PathBuf,
    /// Project name
    project: String,
    /// Output directory (default: mito-calling-<YYYYMMDD>)
    #[arg(long)]
    outdir: Option<PathBuf>,
    /// CPU cores handed to the workflow engine
    #[arg(long, default_value_t = DEFAULT_CORES)]
    cores: u32,
    /// Env file with deployment secrets (default: .env next to the binary)
    #[arg(long)]
    env: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let exe = std::env::current_exe().context("cannot locate the launcher executable")?;
    let base_dir = exe
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let ctx = LaunchContext {
        today: chrono::Local::now().date_naive(),
        base_dir,
    };

    let raw = RawArgs {
        infile: args.infile,
        project: args.project,
        outdir: args.outdir,
        cores: Some(args.cores),
        env_file: args.env,
    };

    let runner = Snakemake::new(&ctx.base_dir);
    let status = launch::run(raw, &ctx, &runner).await?;

    // The engine's exit status is this program's exit status. A child killed
    // by a signal has no code; report a generic failure then.
    std::process::exit(status.code().unwrap_or(1));
}
