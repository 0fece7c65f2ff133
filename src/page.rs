//! Persisted page index.
//!
//! The page index is the only state that crosses invocations: a single
//! token (`1` or `2`) in a text file, read at the start of a run and
//! overwritten with the toggled value at the end. Runs are assumed
//! non-overlapping (a timer or operator triggers them one at a time), so
//! there is no locking on the file.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Which of the two layouts to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Home security status (persisted token `1`)
    Status,
    /// Next calendar event (persisted token `2`)
    Event,
}

impl Page {
    /// The page to render on the following invocation.
    pub fn next(self) -> Page {
        match self {
            Page::Status => Page::Event,
            Page::Event => Page::Status,
        }
    }

    /// Persisted token for this page.
    pub fn token(self) -> &'static str {
        match self {
            Page::Status => "1",
            Page::Event => "2",
        }
    }

    /// Parse a persisted token, tolerating surrounding whitespace.
    pub fn from_token(token: &str) -> Option<Page> {
        match token.trim() {
            "1" => Some(Page::Status),
            "2" => Some(Page::Event),
            _ => None,
        }
    }
}

/// File-backed page index store.
#[derive(Debug, Clone)]
pub struct PageStore {
    path: PathBuf,
}

impl PageStore {
    /// Create a store over the given token file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The token file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current page.
    ///
    /// A missing, unreadable or corrupt token defaults to the status page
    /// rather than failing the run.
    pub fn load(&self) -> Page {
        match std::fs::read_to_string(&self.path) {
            Ok(token) => Page::from_token(&token).unwrap_or_else(|| {
                tracing::warn!(
                    "corrupt page token {:?} in {}, defaulting to status page",
                    token.trim(),
                    self.path.display()
                );
                Page::Status
            }),
            Err(err) => {
                tracing::debug!(
                    "no page state at {} ({}), defaulting to status page",
                    self.path.display(),
                    err
                );
                Page::Status
            }
        }
    }

    /// Overwrite the token with the given page.
    pub fn save(&self, page: Page) -> Result<(), Error> {
        std::fs::write(&self.path, page.token()).map_err(|err| {
            Error::PageState(format!("{}: {}", self.path.display(), err))
        })
    }
}
