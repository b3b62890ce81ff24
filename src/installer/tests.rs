// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use std::sync::Mutex;

fn context_in(root: &Path, extra_yaml: &str, name: &str) -> InstallContext {
    let yaml = format!(
        "install_dir: {}\nbuild_dir: {}\n{extra_yaml}",
        root.join("install").display(),
        root.join("build").display()
    );
    let config = Arc::new(ConfigDocument::from_yaml_str(&yaml, "<test>").unwrap());
    let environment = Arc::new(Environment::build("gnu_ubuntu", &config));
    InstallContext::new(name, config, environment)
}

/// Writes a marker file during `install` and records every stage it runs.
struct RecordingInstaller {
    ctx: InstallContext,
    fail_at: Option<Stage>,
    stages: Mutex<Vec<Stage>>,
}

impl RecordingInstaller {
    fn new(ctx: InstallContext, fail_at: Option<Stage>) -> Self {
        Self {
            ctx,
            fail_at,
            stages: Mutex::new(Vec::new()),
        }
    }

    fn step(&self, stage: Stage) -> Result<()> {
        self.stages.lock().unwrap().push(stage);
        if self.fail_at == Some(stage) {
            anyhow::bail!("simulated {stage} failure");
        }
        Ok(())
    }

    fn recorded(&self) -> Vec<Stage> {
        self.stages.lock().unwrap().clone()
    }
}

impl Installer for RecordingInstaller {
    fn context(&self) -> &InstallContext {
        &self.ctx
    }

    fn prepare(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { self.step(Stage::Prepare) })
    }

    fn download(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.step(Stage::Download)?;
            std::fs::create_dir_all(self.ctx.source_dir())?;
            Ok(())
        })
    }

    fn configure(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { self.step(Stage::Configure) })
    }

    fn build(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move { self.step(Stage::Build) })
    }

    fn install(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.step(Stage::Install)?;
            std::fs::create_dir_all(self.ctx.install_dir())?;
            std::fs::write(self.ctx.install_dir().join("marker"), "ok")?;
            Ok(())
        })
    }
}

#[test]
fn test_stage_order_and_names() {
    let names: Vec<_> = Stage::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        names,
        ["prepare", "download", "configure", "build", "install", "cleanup"]
    );
}

#[test]
fn test_context_derives_directories() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context_in(
        dir.path(),
        "parallel_jobs: 4\ndependencies:\n  hdf5: {version: '1.14.4.3'}\n",
        "hdf5",
    );

    assert_eq!(ctx.name(), "hdf5");
    assert_eq!(ctx.version(), Some("1.14.4.3"));
    assert_eq!(ctx.install_dir(), dir.path().join("install/hdf5-gnu-v1.14.4.3"));
    assert_eq!(ctx.source_dir(), dir.path().join("build/hdf5"));
    assert_eq!(ctx.parallel_jobs(), 4);
    assert_eq!(ctx.cmp(), "gnu");
}

#[test]
fn test_context_honours_explicit_install_dir_and_compilers() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context_in(
        dir.path(),
        "cc: gcc\ndependencies:\n  rcm_f90: {install_dir: /custom/rcm}\n",
        "rcm_f90",
    );

    assert_eq!(ctx.install_dir(), Path::new("/custom/rcm"));
    assert_eq!(ctx.version(), None);
    assert_eq!(ctx.version_or("main"), "main");
    assert_eq!(ctx.compiler(Compiler::Cc), "gcc");
    assert_eq!(ctx.compiler(Compiler::Fc), "mpifort");
    assert_eq!(ctx.dependency_dir("rcm_f90"), Some(PathBuf::from("/custom/rcm")));
}

#[test]
fn test_context_for_unconfigured_dependency() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context_in(dir.path(), "", "makedepf90");

    assert_eq!(ctx.settings(), &DependencyConfig::default());
    assert_eq!(ctx.install_dir(), dir.path().join("install/makedepf90-gnu"));
}

#[tokio::test]
async fn test_run_executes_all_stages_and_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let installer = RecordingInstaller::new(context_in(dir.path(), "", "demo"), None);

    let verified = installer.run().await.unwrap();

    assert!(verified);
    assert_eq!(installer.recorded(), Stage::ALL[..5].to_vec());
    // default cleanup removed the source tree
    assert!(!installer.context().source_dir().exists());
    assert!(installer.context().install_dir().join("marker").exists());
}

#[tokio::test]
async fn test_run_stops_at_failing_stage() {
    let dir = tempfile::tempdir().unwrap();
    let installer =
        RecordingInstaller::new(context_in(dir.path(), "", "demo"), Some(Stage::Configure));

    let err = installer.run().await.unwrap_err();

    assert_eq!(
        installer.recorded(),
        [Stage::Prepare, Stage::Download, Stage::Configure]
    );
    let message = format!("{err:#}");
    assert!(message.contains("demo: configure stage failed"), "{message}");
    assert!(message.contains("simulated configure failure"), "{message}");
    assert!(!installer.context().install_dir().exists());
}

#[tokio::test]
async fn test_default_verify_requires_non_empty_install_dir() {
    let dir = tempfile::tempdir().unwrap();
    let installer = RecordingInstaller::new(context_in(dir.path(), "", "demo"), None);
    let install_dir = installer.context().install_dir().to_path_buf();

    assert!(!installer.verify().await);
    std::fs::create_dir_all(&install_dir).unwrap();
    assert!(!installer.verify().await);
    std::fs::write(install_dir.join("lib"), "").unwrap();
    assert!(installer.verify().await);
}
