//! Fragments read from a directory on disk

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use super::FragmentSource;
use crate::errors::ContractError;

/// Reads fragments relative to a root directory
///
/// Paths use the same relative form as the web deployment
/// (`./src/data/corpo_do_contrato.html`); nothing outside the root is served.
#[derive(Debug, Clone)]
pub struct FsFragmentSource {
    root: PathBuf,
}

impl FsFragmentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a fragment path to a file under the root
    fn resolve(&self, path: &str) -> Result<PathBuf, ContractError> {
        let relative = Path::new(path);
        let mut resolved = self.root.clone();

        for component in relative.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(part) => resolved.push(part),
                Component::ParentDir => {
                    return Err(ContractError::PathSecurityViolation(
                        "Path traversal with '..' is not allowed".to_string(),
                    ));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(ContractError::PathSecurityViolation(
                        "Absolute paths are not allowed".to_string(),
                    ));
                }
            }
        }

        Ok(resolved)
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, ContractError> {
        let file = self.resolve(path)?;
        tracing::debug!(path, file = %file.display(), "Reading fragment");

        tokio::fs::read(&file).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ContractError::FragmentNotFound(path.to_string()),
            _ => ContractError::Io(e),
        })
    }
}

#[async_trait]
impl FragmentSource for FsFragmentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ContractError> {
        let bytes = self.read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, ContractError> {
        self.read(path).await
    }
}
