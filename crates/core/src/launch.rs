//! # Launch Orchestration
//!
//! Drives one run end to end: resolve parameters, load secrets, merge, write
//! the artifact, invoke the workflow engine. Strictly linear; no retries, no
//! branching, no timeout. An unresponsive engine blocks the launcher for as
//! long as it runs.

use std::process::ExitStatus;

use crate::config::MergedConfig;
use crate::error::Result;
use crate::params::{LaunchContext, RawArgs, RunParameters};
use crate::runner::WorkflowRunner;
use crate::secrets;

/// Run the full launch sequence and return the engine's exit status
/// untouched. The written artifact is left in place whether the engine
/// succeeds or not.
pub async fn run(
    args: RawArgs,
    ctx: &LaunchContext,
    runner: &dyn WorkflowRunner,
) -> Result<ExitStatus> {
    let params = RunParameters::resolve(args, ctx).await?;
    let secrets = secrets::load(&params.env_file);
    let config = MergedConfig::merge(secrets, &params);
    let artifact = config.write_artifact(&params.outdir).await?;

    tracing::info!(
        project = %params.project,
        artifact = %artifact.display(),
        cores = params.cores,
        "invoking workflow engine"
    );
    runner.run(&artifact, params.cores).await
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::ARTIFACT_FILE;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::os::unix::process::ExitStatusExt;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Records the invocation instead of spawning anything.
    struct FakeRunner {
        seen: Mutex<Option<(PathBuf, u32)>>,
        exit_code: i32,
    }

    impl FakeRunner {
        fn new(exit_code: i32) -> Self {
            Self {
                seen: Mutex::new(None),
                exit_code,
            }
        }
    }

    #[async_trait]
    impl WorkflowRunner for FakeRunner {
        async fn run(&self, config_path: &Path, cores: u32) -> Result<ExitStatus> {
            *self.seen.lock().unwrap() = Some((config_path.to_path_buf(), cores));
            Ok(ExitStatus::from_raw(self.exit_code << 8))
        }
    }

    fn args(tmp: &Path) -> RawArgs {
        RawArgs {
            infile: tmp.join("samples.csv"),
            project: "demo".to_string(),
            outdir: Some(tmp.join("out")),
            cores: None,
            env_file: None,
        }
    }

    fn ctx(tmp: &Path) -> LaunchContext {
        LaunchContext {
            today: chrono::NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            base_dir: tmp.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_with_absent_env_file() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new(0);

        let status = run(args(tmp.path()), &ctx(tmp.path()), &runner)
            .await
            .unwrap();
        assert!(status.success());

        let artifact = tmp.path().join("out").join(ARTIFACT_FILE);
        let (seen_path, seen_cores) = runner.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen_path, artifact);
        assert_eq!(seen_cores, 50);

        let parsed: BTreeMap<String, String> =
            serde_yaml::from_str(&std::fs::read_to_string(&artifact).unwrap()).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed["project"], "demo");
        assert!(Path::new(&parsed["infile"]).is_absolute());
        assert!(Path::new(&parsed["outdir"]).is_absolute());
    }

    #[tokio::test]
    async fn test_secrets_flow_into_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let env_path = tmp.path().join("run.env");
        std::fs::write(&env_path, "REF=/data/ref/chrM.fa\nbroken line\n").unwrap();

        let mut raw = args(tmp.path());
        raw.env_file = Some(env_path);
        let runner = FakeRunner::new(0);

        run(raw, &ctx(tmp.path()), &runner).await.unwrap();

        let artifact = tmp.path().join("out").join(ARTIFACT_FILE);
        let parsed: BTreeMap<String, String> =
            serde_yaml::from_str(&std::fs::read_to_string(&artifact).unwrap()).unwrap();
        assert_eq!(parsed["REF"], "/data/ref/chrM.fa");
        assert_eq!(parsed.len(), 4);
    }

    #[tokio::test]
    async fn test_engine_failure_passes_through() {
        let tmp = tempfile::tempdir().unwrap();
        let runner = FakeRunner::new(3);

        let status = run(args(tmp.path()), &ctx(tmp.path()), &runner)
            .await
            .unwrap();
        assert_eq!(status.code(), Some(3));

        // No rollback: the artifact stays in place on engine failure.
        assert!(tmp.path().join("out").join(ARTIFACT_FILE).exists());
    }
}
