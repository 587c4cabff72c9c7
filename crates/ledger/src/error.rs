use thiserror::Error;

/// Terminal errors raised while loading an order feed
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("failed to read order feed '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
