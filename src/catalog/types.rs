//! Serde types for the template catalog API.
//!
//! These are the deserialization targets for `GET /api/templates/` and
//! `GET /api/templates/details/`. Loosely-shaped records from the service
//! become explicit structs here; anything that fails to deserialize is
//! rejected at this boundary rather than carried around untyped.

use serde::{Deserialize, Serialize};

use crate::error::ComposerError;

/// One catalog entry: a named template and the entrypoints it offers.
///
/// This is also the exact record the canvas hands over on drop, JSON-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub name: String,
    #[serde(default)]
    pub entrypoints: Vec<String>,
    pub default_entrypoint: Option<String>,
}

impl TemplateSummary {
    /// Decode the drag-and-drop payload produced by the catalog browser.
    pub fn from_drop_payload(json: &str) -> Result<Self, ComposerError> {
        serde_json::from_str(json).map_err(|e| ComposerError::DropPayload(e.to_string()))
    }
}

/// A scalar configuration input of an entrypoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDef {
    pub name: String,
    pub required: bool,
    pub default: Option<String>,
}

/// A data-dependency slot that must be bound to an upstream output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDef {
    pub name: String,
    pub required: bool,
}

/// A named data product an entrypoint offers to downstream nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDef {
    pub name: String,
}

/// Full schema for one (template, entrypoint) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TemplateSchema {
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactDef>,
    #[serde(default)]
    pub outputs: Vec<OutputDef>,
}
