//! Test doubles shared by the unit tests

use crate::convert::{ConvertError, Converter};
use crate::document::DocumentBuilder;
use crate::parser::{LoadError, LoadResult, Loaded, Parser, ParserFlags};
use crate::parsers::HtmlParser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub enum Behavior {
    /// Write this content as `<stem>.<ext>` into the output directory
    Write(String),
    /// Exit with this status without writing anything
    Exit(i32),
    /// Report success without writing anything
    NoOutput,
}

/// Converter that never spawns a process
pub struct FakeConverter {
    available: AtomicBool,
    behavior: Behavior,
    calls: AtomicUsize,
}

impl FakeConverter {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            available: AtomicBool::new(true),
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn writing(content: &str) -> Self {
        Self::new(Behavior::Write(content.to_string()))
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Converter for FakeConverter {
    fn program(&self) -> &str {
        "fake-soffice"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn convert(&self, source: &Path, target_ext: &str, out_dir: &Path) -> Result<(), ConvertError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Write(content) => {
                let stem = source.file_stem().unwrap().to_string_lossy();
                fs::write(out_dir.join(format!("{}.{}", stem, target_ext)), content)?;
                Ok(())
            }
            Behavior::Exit(code) => Err(ConvertError::Failed {
                code: Some(*code),
                stderr: "source file could not be loaded".to_string(),
            }),
            Behavior::NoOutput => Ok(()),
        }
    }
}

/// Parser whose extensions can be switched off at runtime
pub struct ToggleParser {
    name: &'static str,
    extensions: Vec<&'static str>,
    enabled: Arc<AtomicBool>,
}

impl ToggleParser {
    pub fn new(name: &'static str, extensions: &[&'static str]) -> Self {
        Self {
            name,
            extensions: extensions.to_vec(),
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Handle that flips the parser on and off after registration
    pub fn switch(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.enabled)
    }
}

impl Parser for ToggleParser {
    fn name(&self) -> &str {
        self.name
    }

    fn extensions(&self) -> &[&'static str] {
        if self.enabled.load(Ordering::SeqCst) {
            self.extensions.as_slice()
        } else {
            &[]
        }
    }

    fn flags(&self) -> ParserFlags {
        ParserFlags::SECTIONS
    }

    fn load(&self, _path: &Path) -> LoadResult {
        let mut builder = DocumentBuilder::new();
        builder.set_title(self.name);
        Ok(Loaded::clean(builder.build()))
    }
}

/// Record of one delegated load: the path and whether it existed at the time
pub type ProbeLog = Arc<Mutex<Vec<(PathBuf, bool)>>>;

/// HTML delegate that records what it was asked to parse
pub struct ProbeParser {
    log: ProbeLog,
    fail: bool,
}

impl ProbeParser {
    pub fn new(fail: bool) -> (Self, ProbeLog) {
        let log = ProbeLog::default();
        (
            Self {
                log: Arc::clone(&log),
                fail,
            },
            log,
        )
    }
}

impl Parser for ProbeParser {
    fn name(&self) -> &str {
        "Probe"
    }

    fn extensions(&self) -> &[&'static str] {
        &["html"]
    }

    fn flags(&self) -> ParserFlags {
        HtmlParser::new().flags()
    }

    fn load(&self, path: &Path) -> LoadResult {
        self.log
            .lock()
            .unwrap()
            .push((path.to_path_buf(), path.is_file()));
        if self.fail {
            return Err(LoadError::input("malformed markup").with_path(path));
        }
        HtmlParser::new().load(path)
    }
}
