use std::path::PathBuf;

use thiserror::Error;

pub mod address;
pub mod results;

pub use address::{load_address_book, pack_ipv4};
pub use results::{ResultRecord, list_result_files, read_result_file};

/// Tag value that selects every non-numeric tag of the address book.
pub const ALL_TARGETS: &str = "ALL";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid address book {path}: {msg}")]
    InvalidAddressBook { path: PathBuf, msg: String },
    #[error("invalid IPv4 address for tag {tag}: {addr:?}")]
    InvalidAddress { tag: String, addr: String },
    #[error("target not found: {0}")]
    TargetNotFound(String),
}

impl InputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        InputError::Json {
            path: path.into(),
            source,
        }
    }
}
