// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Python tooling installed into a virtual environment.
//!
//! ```text
//! download   (nothing to fetch)
//! configure  python3 -m venv <prefix>
//! build      (nothing to build)
//! install    <prefix>/bin/pip install --upgrade pip
//!            <prefix>/bin/pip install <package>      for each package
//!            <prefix>/activate.sh, <prefix>/activate.csh (0755)
//! cleanup    (no source tree)
//! ```

use std::path::Path;

use crate::error::{FsError, Result};
use futures_util::future::BoxFuture;
use tracing::info;

use crate::core::process::builder::ProcessBuilder;
use crate::installer::{InstallContext, Installer};

pub const NAME: &str = "python_deps";
pub const DEFAULT_PACKAGES: &[&str] = &["pyyaml", "lit", "flinter", "fprettify"];

/// Contents of the POSIX activation script.
#[must_use]
pub fn activate_sh(venv: &Path) -> String {
    format!(
        "#!/bin/bash\n# Add Python venv bin directory to PATH\nexport PATH=\"{}/bin:$PATH\"\n",
        venv.display()
    )
}

/// Contents of the C shell activation script.
#[must_use]
pub fn activate_csh(venv: &Path) -> String {
    format!(
        "#!/bin/csh\n# Add Python venv bin directory to PATH\nsetenv PATH \"{}/bin:$PATH\"\n",
        venv.display()
    )
}

async fn write_executable(path: &Path, content: &str) -> Result<()> {
    let io_error = |source| FsError::IoError {
        path: path.display().to_string(),
        source,
    };
    tokio::fs::write(path, content).await.map_err(io_error)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .await
            .map_err(io_error)?;
    }
    Ok(())
}

#[derive(Debug)]
pub struct PythonDepsInstaller {
    ctx: InstallContext,
}

impl PythonDepsInstaller {
    #[must_use]
    pub const fn new(ctx: InstallContext) -> Self {
        Self { ctx }
    }

    /// Packages from `packages`, or the default tool set.
    #[must_use]
    pub fn packages(&self) -> Vec<String> {
        self.ctx.settings().packages.clone().unwrap_or_else(|| {
            DEFAULT_PACKAGES
                .iter()
                .map(std::string::ToString::to_string)
                .collect()
        })
    }

    /// Writes `activate.sh` and `activate.csh` into the venv.
    ///
    /// # Errors
    ///
    /// Returns an error if a script cannot be written.
    pub async fn write_activation_scripts(venv: &Path) -> Result<()> {
        write_executable(&venv.join("activate.sh"), &activate_sh(venv)).await?;
        write_executable(&venv.join("activate.csh"), &activate_csh(venv)).await?;
        info!(dir = %venv.display(), "Created activation scripts");
        Ok(())
    }

    fn pip(&self) -> ProcessBuilder {
        ProcessBuilder::new(self.ctx.install_dir().join("bin").join("pip")).name("pip")
    }

    async fn do_configure(&self) -> Result<()> {
        let venv = self.ctx.install_dir();
        info!(dir = %venv.display(), "Creating virtual environment");
        ProcessBuilder::which("python3")?
            .args(["-m", "venv"])
            .arg(venv)
            .run()
            .await?;
        Ok(())
    }

    async fn do_install(&self) -> Result<()> {
        self.pip()
            .args(["install", "--upgrade", "pip"])
            .run()
            .await?;

        for package in self.packages() {
            info!(package = %package, "Installing Python package");
            self.pip().args(["install", package.as_str()]).run().await?;
        }

        Self::write_activation_scripts(self.ctx.install_dir()).await
    }
}

impl Installer for PythonDepsInstaller {
    fn context(&self) -> &InstallContext {
        &self.ctx
    }

    fn download(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async { Ok(()) })
    }

    fn configure(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_configure())
    }

    fn build(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async { Ok(()) })
    }

    fn install(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(self.do_install())
    }

    fn cleanup(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests;
