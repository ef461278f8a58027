//! # Merged Run Configuration
//!
//! Builds the flat key/value map handed to the workflow engine and writes it
//! as the YAML artifact that is the sole contract surface between launcher
//! and engine.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;

use crate::error::Result;
use crate::params::RunParameters;

/// File name of the configuration artifact inside the output directory.
pub const ARTIFACT_FILE: &str = "mito-calling.input.yaml";

/// Flat string-to-string configuration. BTreeMap keeps key order
/// deterministic so reruns produce byte-identical artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergedConfig(BTreeMap<String, String>);

impl MergedConfig {
    /// Merge secrets with the derived run parameters.
    ///
    /// Precedence is explicit: secrets go in first, then `infile`, `outdir`
    /// and `project` are applied on top. A secrets key colliding with one of
    /// those loses to the value the operator passed on the command line.
    pub fn merge(secrets: BTreeMap<String, String>, params: &RunParameters) -> Self {
        let mut map = secrets;
        map.insert("infile".to_string(), params.infile.display().to_string());
        map.insert("outdir".to_string(), params.outdir.display().to_string());
        map.insert("project".to_string(), params.project.clone());
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Artifact path for a given output directory.
    pub fn artifact_path(outdir: &Path) -> PathBuf {
        outdir.join(ARTIFACT_FILE)
    }

    /// Serialize to block-style YAML and write the artifact, replacing any
    /// previous contents at that path.
    pub async fn write_artifact(&self, outdir: &Path) -> Result<PathBuf> {
        let path = Self::artifact_path(outdir);
        let yaml = serde_yaml::to_string(self)?;
        fs::write(&path, yaml).await?;
        tracing::info!(path = %path.display(), keys = self.0.len(), "wrote run configuration");
        Ok(path)
    }
}
