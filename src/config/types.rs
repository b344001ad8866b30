//! Configuration type definitions.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Workspace configuration document.
///
/// Maps the JSON document stored at the workspace config path. Scalar
/// fields hold host path strings; `data_dirs` and `system_dirs` map a
/// logical name to a host directory. Every field is optional on the wire;
/// unknown top-level keys are carried through `extra` untouched so that a
/// read/write round trip does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// User-facing benchmark run table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_config: Option<String>,

    /// Registry of known VLM models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlm_base: Option<String>,

    /// Docker image used for the evaluation stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_docker_img: Option<String>,

    /// Per-run benchmark configuration file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark_run_cfg: Option<String>,

    /// Requirements file for the model-inference stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlm_run_packages: Option<String>,

    /// Requirements file for the evaluation stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_run_packages: Option<String>,

    /// Data directories by logical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dirs: Option<BTreeMap<String, String>>,

    /// System directories by logical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_dirs: Option<BTreeMap<String, String>>,

    /// Unrecognized top-level fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl BenchConfig {
    /// Directory categories in derivation order.
    ///
    /// `data_dirs` is processed before `system_dirs`; on duplicate host
    /// paths the later entry wins in the volume mapping.
    pub fn dir_categories(&self) -> [(&'static str, Option<&BTreeMap<String, String>>); 2] {
        [
            ("data_dirs", self.data_dirs.as_ref()),
            ("system_dirs", self.system_dirs.as_ref()),
        ]
    }
}

/// Directory layout as seen from inside the container.
///
/// Same two-level shape as the source document's directory categories,
/// with every leaf replaced by its in-container path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerDirs {
    /// Data directories by logical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dirs: Option<BTreeMap<String, String>>,

    /// System directories by logical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_dirs: Option<BTreeMap<String, String>>,
}

/// Benchmark stage with an installable package list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageStage {
    /// Model-inference stage.
    VlmRun,
    /// Evaluation stage.
    EvalRun,
}

impl PackageStage {
    /// Stage token as it appears in field names and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VlmRun => "vlm_run",
            Self::EvalRun => "eval_run",
        }
    }
}

impl std::fmt::Display for PackageStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PackageStage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vlm_run" => Ok(Self::VlmRun),
            "eval_run" => Ok(Self::EvalRun),
            other => Err(Error::UnknownPackageStage {
                value: other.to_string(),
            }),
        }
    }
}
