//! # Mitocall Core
//!
//! Configuration assembly and invocation orchestration for the mito-calling
//! pipeline launcher. The pipeline itself lives in an external Snakemake
//! workflow; this crate resolves run parameters, merges them with the sidecar
//! secrets file, writes the YAML artifact Snakemake consumes, and hands
//! control to the engine.
//!
//! ## Architecture
//!
//! - `params` - CLI input resolution: defaults, directory creation, absolutization
//! - `secrets` - tolerant loading of the optional `key=value` env file
//! - `config` - merge with documented precedence + YAML artifact
//! - `runner` - the `WorkflowRunner` seam around the Snakemake process
//! - `launch` - the linear Collect -> Merge -> Write -> Invoke driver
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mitocall_core::{launch, params::LaunchContext, runner::Snakemake};
//!
//! let runner = Snakemake::new(&ctx.base_dir);
//! let status = launch::run(raw_args, &ctx, &runner).await?;
//! ```

pub mod config;
pub mod error;
pub mod launch;
pub mod params;
pub mod runner;
pub mod secrets;
