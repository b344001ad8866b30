//! Workspace configuration manager.

use crate::config::{BenchConfig, ContainerDirs, PackageStage, file, packages};
use crate::constants::{
    DEFAULT_CONTAINER_BASE, DEFAULT_EVAL_DOCKER_IMG, cfg_files, default_dirs, default_files,
};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Owns the workspace configuration document and derives container-side
/// path mappings from it.
///
/// Construction either loads the document from disk or populates the
/// fixed default layout. The volume mapping and container-rooted copy are
/// computed once at construction and kept as snapshots; `get_volumes` and
/// `get_container_config` recompute from the current document. The
/// snapshots are not resynced when the caller mutates `cfg` directly.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    cfg_path: PathBuf,
    /// The configuration document. Mutable in place by the owning caller.
    pub cfg: BenchConfig,
    volumes: BTreeMap<String, String>,
    cfg_container: ContainerDirs,
}

impl ConfigManager {
    /// Create a manager for the config file at `cfg_path`.
    ///
    /// With `use_default` the document is populated from the fixed default
    /// layout and `cfg_path` is retained only as the future write target;
    /// otherwise the document is parsed from the file at `cfg_path`.
    ///
    /// # Errors
    /// - [`Error::ConfigNotFound`] if `use_default` is false and the file
    ///   is absent
    /// - [`Error::ConfigParse`] if the file is not well-formed JSON
    pub fn new(cfg_path: impl Into<PathBuf>, use_default: bool) -> Result<Self> {
        let cfg_path = cfg_path.into();

        let cfg = if use_default {
            Self::default_config()
        } else {
            file::read_config(&cfg_path)?
        };

        let volumes = derive_volumes(&cfg, DEFAULT_CONTAINER_BASE);
        let cfg_container = derive_container_dirs(&cfg);

        Ok(Self {
            cfg_path,
            cfg,
            volumes,
            cfg_container,
        })
    }

    /// The fixed default configuration document.
    ///
    /// Pure and deterministic; performs no I/O. The three run-stage scalar
    /// fields are resolved against the `system_dirs` `cfg` entry with
    /// platform path-join semantics.
    pub fn default_config() -> BenchConfig {
        let data_dirs = BTreeMap::from(
            [
                ("datasets", default_dirs::DATASETS),
                ("model_answers", default_dirs::MODEL_ANSWERS),
                ("model_metrics", default_dirs::MODEL_METRICS),
                ("prompt_collections", default_dirs::PROMPT_COLLECTIONS),
                ("system_prompts", default_dirs::SYSTEM_PROMPTS),
                ("reports", default_dirs::REPORTS),
            ]
            .map(|(k, v)| (k.to_string(), v.to_string())),
        );

        let system_dirs = BTreeMap::from(
            [
                ("cfg", default_dirs::CFG),
                ("bench_stages", default_dirs::BENCH_STAGES),
                ("model_cache", default_dirs::MODEL_CACHE),
                ("wheels", default_dirs::WHEELS),
            ]
            .map(|(k, v)| (k.to_string(), v.to_string())),
        );

        let in_cfg_dir = |file_name: &str| {
            Path::new(default_dirs::CFG)
                .join(file_name)
                .to_string_lossy()
                .into_owned()
        };

        BenchConfig {
            user_config: Some(default_files::USER_CONFIG.to_string()),
            vlm_base: Some(default_files::VLM_BASE.to_string()),
            eval_docker_img: Some(DEFAULT_EVAL_DOCKER_IMG.to_string()),
            benchmark_run_cfg: Some(in_cfg_dir(cfg_files::BENCHMARK_RUN_CFG)),
            vlm_run_packages: Some(in_cfg_dir(cfg_files::VLM_RUN_REQUIREMENTS)),
            eval_run_packages: Some(in_cfg_dir(cfg_files::EVAL_RUN_REQUIREMENTS)),
            data_dirs: Some(data_dirs),
            system_dirs: Some(system_dirs),
            extra: BTreeMap::new(),
        }
    }

    /// Path the document is written to.
    pub fn cfg_path(&self) -> &Path {
        &self.cfg_path
    }

    /// Write the current document to the stored config path.
    ///
    /// Overwrites unconditionally; see [`file::write_config`].
    pub fn write_config(&self) -> Result<()> {
        file::write_config(&self.cfg, &self.cfg_path)
    }

    /// Volume mapping snapshot taken at construction.
    pub fn volumes(&self) -> &BTreeMap<String, String> {
        &self.volumes
    }

    /// Container-rooted directory snapshot taken at construction.
    pub fn container_config(&self) -> &ContainerDirs {
        &self.cfg_container
    }

    /// Derive the host-to-container volume mapping from the current
    /// document.
    ///
    /// One entry per `data_dirs`/`system_dirs` leaf; scalar fields do not
    /// contribute. Container paths are forward-slash joins of
    /// `/<base>/<category>/<name>` regardless of platform. Duplicate host
    /// paths across entries collapse to one mapping; the later-processed
    /// entry wins.
    pub fn get_volumes(&self, base_container_path: &str) -> BTreeMap<String, String> {
        derive_volumes(&self.cfg, base_container_path)
    }

    /// Derive the container-rooted copy of the directory categories.
    ///
    /// Leaves become `/workspace/<category>/<name>`. The base is fixed and
    /// independent of whatever base was passed to [`Self::get_volumes`].
    pub fn get_container_config(&self) -> ContainerDirs {
        derive_container_dirs(&self.cfg)
    }

    /// Load the package list for a benchmark stage.
    ///
    /// Re-reads the referenced requirements file on every call.
    ///
    /// # Errors
    /// - [`Error::PackagesNotConfigured`] if the stage's `*_packages`
    ///   field is absent or empty
    /// - [`Error::PackagesFileNotFound`] if the referenced file does not
    ///   exist
    pub fn load_packages(&self, stage: PackageStage) -> Result<Vec<String>> {
        let field = match stage {
            PackageStage::VlmRun => self.cfg.vlm_run_packages.as_deref(),
            PackageStage::EvalRun => self.cfg.eval_run_packages.as_deref(),
        };

        let path = field
            .filter(|p| !p.is_empty())
            .map(Path::new)
            .ok_or_else(|| Error::PackagesNotConfigured {
                stage: stage.to_string(),
            })?;

        if !path.exists() {
            return Err(Error::PackagesFileNotFound {
                path: path.to_path_buf(),
            });
        }

        packages::read_package_list(path)
    }
}

fn derive_volumes(cfg: &BenchConfig, base_container_path: &str) -> BTreeMap<String, String> {
    let mut volumes = BTreeMap::new();

    for (category, dirs) in cfg.dir_categories() {
        let Some(dirs) = dirs else { continue };
        for (name, host_path) in dirs {
            let container_path = format!("/{base_container_path}/{category}/{name}");
            volumes.insert(host_path.clone(), container_path);
        }
    }

    volumes
}

fn derive_container_dirs(cfg: &BenchConfig) -> ContainerDirs {
    let rebase = |category: &str, dirs: &BTreeMap<String, String>| {
        dirs.keys()
            .map(|name| {
                let path = format!("/{DEFAULT_CONTAINER_BASE}/{category}/{name}");
                (name.clone(), path)
            })
            .collect()
    };

    ContainerDirs {
        data_dirs: cfg.data_dirs.as_ref().map(|d| rebase("data_dirs", d)),
        system_dirs: cfg.system_dirs.as_ref().map(|d| rebase("system_dirs", d)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manager_with_defaults() -> ConfigManager {
        ConfigManager::new("vlmbench/cfg/vlmbench_config.json", true).unwrap()
    }

    #[test]
    fn test_default_config_is_deterministic() {
        assert_eq!(ConfigManager::default_config(), ConfigManager::default_config());
    }

    #[test]
    fn test_default_config_layout() {
        let cfg = ConfigManager::default_config();

        let data_dirs = cfg.data_dirs.unwrap();
        let mut data_names: Vec<_> = data_dirs.keys().map(String::as_str).collect();
        data_names.sort_unstable();
        assert_eq!(
            data_names,
            [
                "datasets",
                "model_answers",
                "model_metrics",
                "prompt_collections",
                "reports",
                "system_prompts",
            ]
        );

        let system_dirs = cfg.system_dirs.unwrap();
        let mut system_names: Vec<_> = system_dirs.keys().map(String::as_str).collect();
        system_names.sort_unstable();
        assert_eq!(
            system_names,
            ["bench_stages", "cfg", "model_cache", "wheels"]
        );

        assert_eq!(cfg.user_config.as_deref(), Some("vlmbench/user_config.csv"));
        assert_eq!(cfg.vlm_base.as_deref(), Some("vlmbench/vlm_base.csv"));
        assert_eq!(
            cfg.eval_docker_img.as_deref(),
            Some("ghcr.io/vlmbench/eval-runner:latest")
        );
    }

    #[test]
    fn test_default_config_run_stage_fields_join_cfg_dir() {
        let cfg = ConfigManager::default_config();
        let cfg_dir = Path::new(default_dirs::CFG);

        assert_eq!(
            cfg.benchmark_run_cfg.as_deref(),
            Some(cfg_dir.join("BenchmarkRunConfig.json").to_str().unwrap())
        );
        assert_eq!(
            cfg.vlm_run_packages.as_deref(),
            Some(cfg_dir.join("vlm_run_requirements.txt").to_str().unwrap())
        );
        assert_eq!(
            cfg.eval_run_packages.as_deref(),
            Some(cfg_dir.join("eval_run_requirements.txt").to_str().unwrap())
        );
    }

    #[test]
    fn test_new_with_default_ignores_missing_file() {
        let manager = ConfigManager::new("/nonexistent/dir/config.json", true).unwrap();
        assert_eq!(manager.cfg, ConfigManager::default_config());
        assert_eq!(
            manager.cfg_path(),
            Path::new("/nonexistent/dir/config.json")
        );
        // Snapshots are populated at construction.
        assert!(!manager.volumes().is_empty());
        assert!(manager.container_config().data_dirs.is_some());
    }

    #[test]
    fn test_new_without_default_requires_file() {
        let result = ConfigManager::new("/nonexistent/dir/config.json", false);
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_new_loads_document_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data_dirs": {{"datasets": "bench/Datasets"}}, "vlm_base": "bench/vlm_base.csv"}}"#
        )
        .unwrap();

        let manager = ConfigManager::new(file.path(), false).unwrap();
        assert_eq!(manager.cfg.vlm_base.as_deref(), Some("bench/vlm_base.csv"));
        assert_eq!(
            manager.volumes().get("bench/Datasets").map(String::as_str),
            Some("/workspace/data_dirs/datasets")
        );
    }

    #[test]
    fn test_get_volumes_covers_both_categories() {
        let manager = manager_with_defaults();
        let volumes = manager.get_volumes("workspace");

        assert_eq!(volumes.len(), 10);
        assert_eq!(
            volumes.get("vlmbench/Datasets").map(String::as_str),
            Some("/workspace/data_dirs/datasets")
        );
        assert_eq!(
            volumes.get("vlmbench/model_cache").map(String::as_str),
            Some("/workspace/system_dirs/model_cache")
        );
        // Scalar fields never become mounts.
        assert!(!volumes.contains_key("vlmbench/vlm_base.csv"));
    }

    #[test]
    fn test_get_volumes_respects_base() {
        let manager = manager_with_defaults();
        let volumes = manager.get_volumes("bench_ws");

        assert_eq!(
            volumes.get("vlmbench/Reports").map(String::as_str),
            Some("/bench_ws/data_dirs/reports")
        );
    }

    #[test]
    fn test_get_volumes_skips_absent_categories() {
        let mut manager = manager_with_defaults();
        manager.cfg.data_dirs = None;

        let volumes = manager.get_volumes("workspace");
        assert_eq!(volumes.len(), 4);
        assert!(volumes.keys().all(|host| host.starts_with("vlmbench/")));

        manager.cfg.system_dirs = None;
        assert!(manager.get_volumes("workspace").is_empty());
    }

    #[test]
    fn test_get_volumes_duplicate_host_path_later_entry_wins() {
        let mut manager = manager_with_defaults();
        // Same host directory aliased in both categories; system_dirs is
        // processed second and takes the mapping.
        manager
            .cfg
            .data_dirs
            .as_mut()
            .unwrap()
            .insert("shared".to_string(), "vlmbench/Shared".to_string());
        manager
            .cfg
            .system_dirs
            .as_mut()
            .unwrap()
            .insert("shared_sys".to_string(), "vlmbench/Shared".to_string());

        let volumes = manager.get_volumes("workspace");
        assert_eq!(
            volumes.get("vlmbench/Shared").map(String::as_str),
            Some("/workspace/system_dirs/shared_sys")
        );
    }

    #[test]
    fn test_container_config_mirrors_document_shape() {
        let manager = manager_with_defaults();
        let container = manager.get_container_config();

        let data_dirs = container.data_dirs.unwrap();
        assert_eq!(
            data_dirs.keys().collect::<Vec<_>>(),
            manager.cfg.data_dirs.as_ref().unwrap().keys().collect::<Vec<_>>()
        );
        assert_eq!(
            data_dirs.get("datasets").map(String::as_str),
            Some("/workspace/data_dirs/datasets")
        );
        assert_eq!(
            container.system_dirs.unwrap().get("cfg").map(String::as_str),
            Some("/workspace/system_dirs/cfg")
        );
    }

    #[test]
    fn test_container_config_base_is_fixed() {
        let manager = manager_with_defaults();
        // A custom volumes base does not leak into the container config.
        let _ = manager.get_volumes("elsewhere");

        let container = manager.get_container_config();
        assert_eq!(
            container.data_dirs.unwrap().get("reports").map(String::as_str),
            Some("/workspace/data_dirs/reports")
        );
    }

    #[test]
    fn test_container_config_absent_category_stays_absent() {
        let mut manager = manager_with_defaults();
        manager.cfg.data_dirs = None;

        let container = manager.get_container_config();
        assert!(container.data_dirs.is_none());
        assert!(container.system_dirs.is_some());
    }

    #[test]
    fn test_snapshots_are_not_resynced_after_mutation() {
        let mut manager = manager_with_defaults();
        manager
            .cfg
            .data_dirs
            .as_mut()
            .unwrap()
            .insert("scratch".to_string(), "vlmbench/Scratch".to_string());

        assert!(!manager.volumes().contains_key("vlmbench/Scratch"));
        assert!(manager.get_volumes("workspace").contains_key("vlmbench/Scratch"));
    }

    #[test]
    fn test_load_packages_reads_trimmed_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\n foo \n\nbar\n").unwrap();

        let mut manager = manager_with_defaults();
        manager.cfg.vlm_run_packages =
            Some(file.path().to_string_lossy().into_owned());

        let packages = manager.load_packages(PackageStage::VlmRun).unwrap();
        assert_eq!(packages, vec!["foo".to_string(), "bar".to_string()]);
    }

    #[test]
    fn test_load_packages_unconfigured_field() {
        let mut manager = manager_with_defaults();
        manager.cfg.eval_run_packages = None;

        let result = manager.load_packages(PackageStage::EvalRun);
        assert!(matches!(result, Err(Error::PackagesNotConfigured { .. })));

        manager.cfg.eval_run_packages = Some(String::new());
        let result = manager.load_packages(PackageStage::EvalRun);
        assert!(matches!(result, Err(Error::PackagesNotConfigured { .. })));
    }

    #[test]
    fn test_load_packages_missing_file() {
        let mut manager = manager_with_defaults();
        manager.cfg.vlm_run_packages = Some("/nonexistent/requirements.txt".to_string());

        let result = manager.load_packages(PackageStage::VlmRun);
        assert!(matches!(result, Err(Error::PackagesFileNotFound { .. })));
    }

    #[test]
    fn test_write_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vlmbench_config.json");

        let mut manager = ConfigManager::new(&path, true).unwrap();
        manager
            .cfg
            .extra
            .insert("pinned".to_string(), serde_json::Value::from(true));
        manager.write_config().unwrap();

        let reloaded = ConfigManager::new(&path, false).unwrap();
        assert_eq!(reloaded.cfg, manager.cfg);
        // Derived views are recomputed fresh on reload, not persisted.
        assert_eq!(reloaded.volumes(), manager.volumes());
    }
}
