//! Application-wide constants.
//!
//! All fixed names and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for the workspace root and user-facing messages.
pub const APP_NAME: &str = "vlmbench";

/// Default path of the workspace configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "vlmbench/cfg/vlmbench_config.json";

/// Base directory inside the container under which workspace directories
/// are mounted. Mounted at `/`, so paths resolve as `/workspace/...`.
pub const DEFAULT_CONTAINER_BASE: &str = "workspace";

/// Docker image used for the evaluation stage.
pub const DEFAULT_EVAL_DOCKER_IMG: &str = "ghcr.io/vlmbench/eval-runner:latest";

/// File names resolved relative to the workspace `cfg` directory.
pub mod cfg_files {
    /// Per-run benchmark configuration produced by the orchestrator.
    pub const BENCHMARK_RUN_CFG: &str = "BenchmarkRunConfig.json";
    /// Requirements file for the model-inference stage.
    pub const VLM_RUN_REQUIREMENTS: &str = "vlm_run_requirements.txt";
    /// Requirements file for the evaluation stage.
    pub const EVAL_RUN_REQUIREMENTS: &str = "eval_run_requirements.txt";
}

/// Default host-side workspace layout.
pub mod default_dirs {
    /// Benchmark datasets.
    pub const DATASETS: &str = "vlmbench/Datasets";
    /// Raw model answers per run.
    pub const MODEL_ANSWERS: &str = "vlmbench/ModelAnswers";
    /// Computed metrics per run.
    pub const MODEL_METRICS: &str = "vlmbench/ModelMetrics";
    /// Prompt collections.
    pub const PROMPT_COLLECTIONS: &str = "vlmbench/PromptCollections";
    /// System prompts.
    pub const SYSTEM_PROMPTS: &str = "vlmbench/SystemPrompts";
    /// Rendered benchmark reports.
    pub const REPORTS: &str = "vlmbench/Reports";

    /// Harness configuration files.
    pub const CFG: &str = "vlmbench/cfg";
    /// Stage entry-point scripts.
    pub const BENCH_STAGES: &str = "vlmbench/bench_stages";
    /// Downloaded model weights cache.
    pub const MODEL_CACHE: &str = "vlmbench/model_cache";
    /// Prebuilt wheels for offline installs.
    pub const WHEELS: &str = "vlmbench/wheels";
}

/// Default scalar path fields of the configuration document.
pub mod default_files {
    /// User-facing benchmark run table.
    pub const USER_CONFIG: &str = "vlmbench/user_config.csv";
    /// Registry of known VLM models and their runtime parameters.
    pub const VLM_BASE: &str = "vlmbench/vlm_base.csv";
}
