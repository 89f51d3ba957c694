//! Unified error types used across the crate.

use crate::graph::node::NodeId;

/// Errors raised by graph/model operations.
#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("unknown node '{0}'")]
    UnknownNode(NodeId),

    #[error("entrypoint '{entrypoint}' is not offered by template '{template}'")]
    EntrypointNotOffered { template: String, entrypoint: String },

    #[error("invalid drop payload: {0}")]
    DropPayload(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised at the HTTP boundary to the catalog and workflow services.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {status}: {message}")]
    Server { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}
