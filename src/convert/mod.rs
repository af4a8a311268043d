mod config;
mod error;
mod office;
pub mod process;
mod scratch;


pub use config::{
    ConverterConfig, DEFAULT_PROGRAM, DEFAULT_TIMEOUT, ENV_CONVERTER, ENV_SCRATCH_DIR,
    ENV_TIMEOUT_SECS,
};
pub use error::ConvertError;
pub use office::OfficeConverter;
pub use scratch::{ScratchDir, ScratchSlot};

use std::path::Path;

/// An out-of-process document converter
pub trait Converter: Send + Sync {
    /// Executable name, for messages
    fn program(&self) -> &str;

    /// Whether the converter can currently be run
    ///
    /// Re-evaluated on every call; the environment may change.
    fn is_available(&self) -> bool;

    /// Convert `source` to `target_ext`, writing `<stem>.<target_ext>` into `out_dir`
    ///
    /// Blocks until the converter exits or its timeout passes.
    fn convert(&self, source: &Path, target_ext: &str, out_dir: &Path) -> Result<(), ConvertError>;
}
