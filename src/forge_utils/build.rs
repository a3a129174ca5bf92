use std::path::{Path, PathBuf};

use tracing::{info, instrument};

#[derive(Default)]
pub struct ForgeBuild {
    cwd: Option<PathBuf>,
}

impl ForgeBuild {
    pub fn new() -> Self {
        Self { cwd: None }
    }

    pub fn with_cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_owned());
        self
    }

    #[instrument(name = "forge_build", skip_all)]
    pub async fn run(&self) -> eyre::Result<()> {
        let mut cmd = tokio::process::Command::new("forge");
        cmd.arg("build");

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        info!("Building contracts with {cmd:#?}");

        let output = cmd.output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            eyre::bail!("forge build failed: {}", stderr);
        }

        Ok(())
    }
}
