use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchFmtError {
    #[error("read error: {0}")]
    ReadError(String),
    #[error("write error: {0}")]
    WriteError(String),
    #[error("serialize error: {0}")]
    SerializeError(String),
}

impl BenchFmtError {
    pub fn read<T: Into<String>>(msg: T) -> Self {
        BenchFmtError::ReadError(msg.into())
    }

    pub fn write<T: Into<String>>(msg: T) -> Self {
        BenchFmtError::WriteError(msg.into())
    }

    pub fn serialize<T: Into<String>>(msg: T) -> Self {
        BenchFmtError::SerializeError(msg.into())
    }
}
