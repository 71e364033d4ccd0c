use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not connect to {host}:{port} before the deadline: last error: {source}")]
    Exhausted {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
