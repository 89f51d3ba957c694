//! Template catalog boundary: wire types, HTTP client, schema cache.

pub mod cache;
pub mod client;
pub mod types;

pub use cache::{SchemaCache, TemplateCatalog};
pub use client::CatalogClient;
pub use types::{ArtifactDef, OutputDef, ParameterDef, TemplateSchema, TemplateSummary};
