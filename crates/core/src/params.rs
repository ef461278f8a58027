//! # Run Parameters
//!
//! Resolves raw CLI input into the immutable parameter set for a single run.
//! Ambient state (today's date, the launcher's own directory) is injected via
//! [`LaunchContext`] instead of being read inside this module, so tests can
//! pin both deterministically.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::fs;

use crate::error::{LaunchError, Result};

/// Prefix of the default, date-stamped output directory.
pub const DEFAULT_OUTDIR_PREFIX: &str = "mito-calling";

/// Default number of parallel execution slots handed to the workflow engine.
pub const DEFAULT_CORES: u32 = 50;

/// Name of the sidecar secrets file expected next to the launcher binary.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Ambient state captured once at startup.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// Calendar date used for the default output directory name.
    pub today: NaiveDate,
    /// Directory the launcher runs from. The sidecar `.env` and the workflow
    /// definition are resolved relative to it.
    pub base_dir: PathBuf,
}

/// Raw, unresolved CLI input. `None` means "use the default".
#[derive(Debug, Clone)]
pub struct RawArgs {
    pub infile: PathBuf,
    pub project: String,
    pub outdir: Option<PathBuf>,
    pub cores: Option<u32>,
    pub env_file: Option<PathBuf>,
}

/// Validated parameters for a single run. Immutable after [`RunParameters::resolve`].
#[derive(Debug, Clone)]
pub struct RunParameters {
    /// Sample manifest (header `sample,r1,r2`), absolute. Not parsed here;
    /// the workflow consumes it.
    pub infile: PathBuf,
    /// Output directory, absolute, guaranteed to exist.
    pub outdir: PathBuf,
    pub project: String,
    pub cores: u32,
    /// Secrets file to merge into the run configuration. May not exist.
    pub env_file: PathBuf,
}

/// Name of the default output directory for a given date,
/// e.g. `mito-calling-20260831`.
pub fn default_outdir_name(today: NaiveDate) -> String {
    format!("{}-{}", DEFAULT_OUTDIR_PREFIX, today.format("%Y%m%d"))
}

impl RunParameters {
    /// Resolve raw arguments against the captured ambient state.
    ///
    /// Creates the output directory if absent (idempotent) and absolutizes
    /// `infile` and `outdir`, so every later stage is independent of the
    /// caller's working directory.
    pub async fn resolve(args: RawArgs, ctx: &LaunchContext) -> Result<Self> {
        let cores = args.cores.unwrap_or(DEFAULT_CORES);
        if cores == 0 {
            return Err(LaunchError::Usage(
                "--cores must be a positive integer".into(),
            ));
        }

        let outdir = args
            .outdir
            .unwrap_or_else(|| PathBuf::from(default_outdir_name(ctx.today)));
        fs::create_dir_all(&outdir).await?;

        let env_file = args
            .env_file
            .unwrap_or_else(|| ctx.base_dir.join(DEFAULT_ENV_FILE));

        let params = Self {
            infile: absolutize(&args.infile)?,
            outdir: absolutize(&outdir)?,
            project: args.project,
            cores,
            env_file,
        };
        tracing::debug!(
            outdir = %params.outdir.display(),
            cores = params.cores,
            "run parameters resolved"
        );
        Ok(params)
    }
}

/// Absolutize against the CWD without resolving symlinks or requiring the
/// path to exist.
fn absolutize(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
