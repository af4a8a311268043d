use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Converter not found: {0}")]
    NotFound(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion failed with {}: {stderr}", exit_description(.code))]
    Failed { code: Option<i32>, stderr: String },

    #[error("Converter did not finish within {0:?}")]
    TimedOut(Duration),

    #[error("Converter produced no output at {}", .0.display())]
    MissingOutput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "termination by signal".to_string(),
    }
}
