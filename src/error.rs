// src/error.rs
use crate::record::Timestamp;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid time window: start {start} exceeds end {end}")]
    InvalidWindow { start: Timestamp, end: Timestamp },
}

pub type Result<T> = std::result::Result<T, GraphError>;
