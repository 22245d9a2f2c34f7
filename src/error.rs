//! error handling stuff
use thiserror::Error;

#[derive(Debug, Error)]
/// An error
pub enum ThemeError {
    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// a redb database error
    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    /// a redb transaction error
    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    /// a redb table error
    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    /// a redb storage error
    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    /// a redb commit error
    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    /// a report from color_eyre
    #[error("{0}")]
    EyreReport(#[from] color_eyre::Report),

    /// a report from miette
    #[error("{0}")]
    MietteReport(miette::Report),

    /// a miette hook install error
    #[error("error installing miette hook: {0}")]
    MietteInstall(#[from] miette::InstallError),

    /// a reqwest error
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// an invalid header value
    #[error("invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// an invalid header name
    #[error("invalid header name: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// a url parse error
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// a toml serialization error
    #[error("toml serialization error: {0}")]
    TOMLSer(#[from] toml::ser::Error),

    /// the preference store can't be reached
    #[error("preference store unavailable: {0}")]
    StoreUnavailable(String),

    /// the server answered with something other than success
    #[error("sync rejected ({status}): {message}")]
    SyncRejected {
        /// the http status code
        status: u16,
        /// what the server said, if anything
        message: String,
    },

    /// a custom error
    #[error("error: {0}")]
    Other(String),
}

impl From<String> for ThemeError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

impl From<miette::Report> for ThemeError {
    fn from(value: miette::Report) -> Self {
        Self::MietteReport(value)
    }
}

/// A result using [`ThemeError`] as the `Err` variant
pub type Result<T, U = ThemeError> = miette::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::ThemeError::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::ThemeError::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::ThemeError::from(format!($fmt, $($arg)*)))
    };
}
