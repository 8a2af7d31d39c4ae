use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Cannot bind the echo server to address: {address}")]
    CannotBind {
        address: String,
        #[source]
        source: io::Error,
    },
    #[error("IO error")]
    IoError(#[from] io::Error),
}
