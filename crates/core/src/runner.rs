//! # Workflow Runner
//!
//! The seam between the launcher and the external workflow engine. The
//! engine is an opaque collaborator: it gets a configuration artifact and a
//! core count and comes back with an exit status. Abstracting it behind a
//! trait keeps the launch path testable without spawning real processes.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::Result;

/// Location of the workflow definition relative to the launcher's directory.
pub const SNAKEFILE: &str = "workflow/Snakefile";

#[async_trait]
pub trait WorkflowRunner: Send + Sync {
    /// Execute the workflow against a written configuration artifact,
    /// blocking until the engine terminates.
    async fn run(&self, config_path: &Path, cores: u32) -> Result<ExitStatus>;
}

/// Production runner that shells out to `snakemake`.
pub struct Snakemake {
    snakefile: PathBuf,
}

impl Snakemake {
    /// `base_dir` is the launcher's own directory; the workflow definition
    /// lives at a fixed path relative to it.
    pub fn new(base_dir: &Path) -> Self {
        Self {
            snakefile: base_dir.join(SNAKEFILE),
        }
    }

    fn command_line(&self, config_path: &Path, cores: u32) -> Vec<String> {
        vec![
            "snakemake".to_string(),
            "-s".to_string(),
            self.snakefile.display().to_string(),
            "--configfile".to_string(),
            config_path.display().to_string(),
            "-c".to_string(),
            cores.to_string(),
        ]
    }
}

#[async_trait]
impl WorkflowRunner for Snakemake {
    async fn run(&self, config_path: &Path, cores: u32) -> Result<ExitStatus> {
        let argv = self.command_line(config_path, cores);
        // Echo the exact invocation so a run can be reproduced by hand.
        println!("{}", argv.join(" "));

        // stdin/stdout/stderr are inherited so engine output streams live.
        let status = Command::new(&argv[0]).args(&argv[1..]).status().await?;
        tracing::info!(code = ?status.code(), "workflow engine terminated");
        Ok(status)
    }
}
