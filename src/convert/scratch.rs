use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Process-wide staging area for intermediate conversion artifacts
///
/// The root is created on demand and never removed. Each conversion claims
/// its own [`ScratchSlot`] so concurrent loads of same-named files never
/// share an output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root if needed and reserve a fresh, empty slot in it
    pub fn claim(&self) -> io::Result<ScratchSlot> {
        fs::create_dir_all(&self.root)?;
        let token = Uuid::new_v4().simple().to_string();
        let dir = self.root.join(&token);
        fs::create_dir(&dir)?;
        debug!(slot = %dir.display(), "claimed scratch slot");
        Ok(ScratchSlot { dir, token })
    }
}

/// A per-call subdirectory of the scratch root, removed on drop
///
/// Removal failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct ScratchSlot {
    dir: PathBuf,
    token: String,
}

impl ScratchSlot {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Unique token naming this slot
    pub fn token(&self) -> &str {
        &self.token
    }

    /// `<slot>/<stem of source>.<ext>`
    pub fn artifact_path(&self, source: &Path, ext: &str) -> PathBuf {
        let mut name = source
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "document".into());
        name.push(".");
        name.push(ext);
        self.dir.join(name)
    }
}

impl Drop for ScratchSlot {
    fn drop(&mut self) {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => debug!(slot = %self.dir.display(), "released scratch slot"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(slot = %self.dir.display(), error = %e, "failed to clean up scratch slot"),
        }
    }
}
