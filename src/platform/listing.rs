use crate::config::RunConfig;
use crate::core::traits::ListingSource;
use crate::error::ListingError;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Runs `jps -l` (or whatever the config names) and hands back its stdout.
#[derive(Debug, Clone)]
pub struct JpsListing {
    binary: String,
    args: Vec<String>,
}

impl JpsListing {
    pub fn new(binary: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            args,
        }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.listing_bin.clone(), config.listing_args.clone())
    }
}

#[async_trait]
impl ListingSource for JpsListing {
    async fn list(&self) -> Result<String, ListingError> {
        let path = which::which(&self.binary).map_err(|_| ListingError::NotInstalled {
            binary: self.binary.clone(),
        })?;
        debug!(path = %path.display(), args = ?self.args, "running listing utility");

        let output = Command::new(&path)
            .args(&self.args)
            .output()
            .await
            .map_err(|source| ListingError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ListingError::Failed {
                binary: self.binary.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(lines = stdout.lines().count(), "listing fetched");
        Ok(stdout)
    }
}
