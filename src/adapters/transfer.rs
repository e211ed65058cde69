//! Cross-boundary transfer representation.
//!
//! Records crossing a process boundary are flattened to a byte sequence and
//! reconstructed losslessly on the other side, nested structure included.
//! The representation rides on the records' own serde derives, so it covers
//! `Project`, `Urls` and every collaborator type without per-type glue.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Transfer encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Transfer decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
}

pub fn write_transfer<T: Serialize>(value: &T) -> Result<Vec<u8>, TransferError> {
    serde_json::to_vec(value).map_err(TransferError::Encode)
}

pub fn read_transfer<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, TransferError> {
    serde_json::from_slice(bytes).map_err(TransferError::Decode)
}
