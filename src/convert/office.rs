use super::process::run_with_timeout;
use super::{ConvertError, Converter, ConverterConfig};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::{debug, info};

/// LibreOffice-backed converter (`soffice --headless --convert-to ...`)
#[derive(Debug, Clone)]
pub struct OfficeConverter {
    config: ConverterConfig,
}

impl OfficeConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Resolve the executable on PATH (or verify an explicit path)
    pub fn locate(&self) -> Option<PathBuf> {
        which::which(&self.config.program).ok()
    }

    /// Arguments for one headless conversion
    pub fn arguments(source: &Path, target_ext: &str, out_dir: &Path) -> Vec<std::ffi::OsString> {
        vec![
            "--headless".into(),
            "--convert-to".into(),
            target_ext.into(),
            "--outdir".into(),
            out_dir.as_os_str().to_os_string(),
            source.as_os_str().to_os_string(),
        ]
    }
}

impl Default for OfficeConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl Converter for OfficeConverter {
    fn program(&self) -> &str {
        &self.config.program
    }

    fn is_available(&self) -> bool {
        self.locate().is_some()
    }

    fn convert(&self, source: &Path, target_ext: &str, out_dir: &Path) -> Result<(), ConvertError> {
        let executable = self
            .locate()
            .ok_or_else(|| ConvertError::NotFound(self.config.program.clone()))?;

        let mut command = Command::new(&executable);
        command.args(Self::arguments(source, target_ext, out_dir));
        debug!(command = ?command, "running converter");

        let started = Instant::now();
        info!(source = %source.display(), target = target_ext, "converting");
        let output = run_with_timeout(&mut command, self.config.timeout)?;

        if !output.status.success() {
            return Err(ConvertError::Failed {
                code: output.status.code(),
                stderr: output.stderr.trim().to_string(),
            });
        }

        info!(
            source = %source.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "conversion finished"
        );
        Ok(())
    }
}
