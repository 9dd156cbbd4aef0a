//! Error types for soft assertions

use thiserror::Error;

/// The aggregate error raised by [`SoftAssertions::assert_all`] and by every
/// strict check that fails.
///
/// `report` is the fully rendered failure listing; `Display` prints it verbatim
/// so the error reads well in test output.
///
/// [`SoftAssertions::assert_all`]: crate::SoftAssertions::assert_all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{report}")]
pub struct AssertionError {
    /// Number of failures folded into this error
    pub count: usize,

    /// Rendered report body
    pub report: String,
}

impl AssertionError {
    pub fn new(count: usize, report: String) -> Self {
        Self { count, report }
    }
}

/// Errors from the I/O surfaces around the accumulator (config, report files)
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
