use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const ENV_CONVERTER: &str = "PAPERDOC_CONVERTER";
pub const ENV_TIMEOUT_SECS: &str = "PAPERDOC_CONVERT_TIMEOUT_SECS";
pub const ENV_SCRATCH_DIR: &str = "PAPERDOC_SCRATCH_DIR";

/// Default converter executable (LibreOffice)
pub const DEFAULT_PROGRAM: &str = "soffice";

/// Upper bound on a single conversion
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Settings for the external converter and its scratch area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub program: String,
    pub timeout: Duration,
    pub scratch_root: PathBuf,
}

impl ConverterConfig {
    /// Defaults: `soffice`, 120 s, `<tmp>/paperdoc`
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout: DEFAULT_TIMEOUT,
            scratch_root: default_scratch_root(),
        }
    }

    /// Defaults overridden by `PAPERDOC_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(program) = lookup(ENV_CONVERTER).filter(|p| !p.trim().is_empty()) {
            config.program = program.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    variable = ENV_TIMEOUT_SECS,
                    value = %raw,
                    "ignoring invalid timeout, using default"
                ),
            }
        }

        if let Some(dir) = lookup(ENV_SCRATCH_DIR).filter(|d| !d.trim().is_empty()) {
            config.scratch_root = PathBuf::from(dir);
        }

        config
    }

    /// Set the converter executable (name on PATH or absolute path)
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = root.into();
        self
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_scratch_root() -> PathBuf {
    env::temp_dir().join("paperdoc")
}
