use std::path::{Path, PathBuf};

use ethers::abi::Abi;
use ethers::types::Bytes;
use eyre::Context;
use serde::Deserialize;
use tracing::{info, instrument};

use super::ContractSpec;

/// Compiled contract, as emitted by `forge build` or `hardhat compile`.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
    pub source_path: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    abi: Abi,
    bytecode: RawBytecode,
    // hardhat
    #[serde(default)]
    source_name: Option<PathBuf>,
    // foundry
    #[serde(default)]
    ast: Option<RawAst>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAst {
    absolute_path: Option<PathBuf>,
}

impl ContractArtifact {
    pub fn parse(name: impl ToString, content: &str) -> eyre::Result<Self> {
        let name = name.to_string();

        let raw: RawArtifact = serde_json::from_str(content)
            .with_context(|| format!("Parsing artifact for {name}"))?;

        let bytecode = match raw.bytecode {
            RawBytecode::Hex(bytes) => bytes,
            RawBytecode::Object { object } => object,
        };

        eyre::ensure!(
            !bytecode.is_empty(),
            "Artifact for {name} has no bytecode, is it an interface or abstract contract?"
        );

        let source_path = raw
            .source_name
            .or_else(|| raw.ast.and_then(|ast| ast.absolute_path));

        Ok(Self {
            name,
            abi: raw.abi,
            bytecode,
            source_path,
        })
    }

    /// Loads the first existing candidate.
    #[instrument(skip_all, fields(name = %name.to_string()))]
    pub async fn load(
        name: impl ToString,
        candidates: &[PathBuf],
    ) -> eyre::Result<Self> {
        for path in candidates {
            if !path.exists() {
                continue;
            }

            return Self::load_from(name, path).await;
        }

        eyre::bail!(
            "No build artifact found, looked in: {}",
            candidates
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    async fn load_from(
        name: impl ToString,
        path: &Path,
    ) -> eyre::Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Reading from {}", path.display()))?;

        let artifact = Self::parse(name, &content)?;

        info!(
            path = %path.display(),
            bytecode_len = artifact.bytecode.len(),
            "Loaded artifact"
        );

        Ok(artifact)
    }

    pub fn contract_spec(&self) -> ContractSpec {
        match self.source_path.as_ref() {
            Some(path) => ContractSpec::path_name(path.clone(), &self.name),
            None => ContractSpec::name(&self.name),
        }
    }
}
