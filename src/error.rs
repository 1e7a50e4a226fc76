//! Typed errors for the crawler library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while crawling a listing page.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Request could not be sent or the response body was not received
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with anything other than 200 OK
    #[error("unexpected HTTP status: {status}")]
    Status { status: u16 },

    /// Page or selector configuration could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Writing a single listing to disk failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    /// Fatal errors abort the whole crawl; write errors only affect one listing.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CrawlError::Write { .. })
    }

    /// HTTP status carried by a protocol error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CrawlError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
