use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("{path} has no front matter block")]
    MissingFrontMatter { path: PathBuf },

    #[error("unrecognised date {value:?} in {path}")]
    InvalidDate { path: PathBuf, value: String },

    #[error("xml serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("xml write failed: {0}")]
    XmlWrite(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
