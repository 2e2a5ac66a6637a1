use thiserror::Error;

/// Why the catalog could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog endpoint responded with status {status}")]
    Status { status: u16 },
    #[error("Catalog request failed: {0}")]
    Transport(String),
    #[error("Catalog payload could not be decoded: {0}")]
    Decode(String),
}
