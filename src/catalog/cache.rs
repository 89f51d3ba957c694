//! Lazy, memoized schema resolution keyed by (template, entrypoint).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::catalog::types::{TemplateSchema, TemplateSummary};
use crate::error::CatalogError;

/// Source of template metadata. Implemented by `CatalogClient`; tests
/// substitute an in-memory catalog.
#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    async fn list_templates(&self) -> Result<Vec<TemplateSummary>, CatalogError>;

    async fn template_details(
        &self,
        name: &str,
        entrypoint: &str,
    ) -> Result<TemplateSchema, CatalogError>;
}

pub struct SchemaCache {
    catalog: Arc<dyn TemplateCatalog>,
    resolved: Mutex<HashMap<(String, String), Arc<TemplateSchema>>>,
}

impl SchemaCache {
    pub fn new(catalog: Arc<dyn TemplateCatalog>) -> Self {
        SchemaCache {
            catalog,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the schema for one (template, entrypoint) pair.
    ///
    /// A previously resolved pair is served from memory without touching the
    /// catalog; distinct pairs fetch independently. Failures are not cached,
    /// so a retry issues a fresh fetch. Two concurrent misses for the same
    /// key may both fetch; the results are identical and the second insert
    /// overwrites harmlessly.
    pub async fn resolve(
        &self,
        template: &str,
        entrypoint: &str,
    ) -> Result<Arc<TemplateSchema>, CatalogError> {
        let key = (template.to_string(), entrypoint.to_string());
        if let Some(hit) = self.resolved.lock().await.get(&key) {
            return Ok(Arc::clone(hit));
        }

        debug!(template, entrypoint, "schema cache miss");
        let schema = Arc::new(self.catalog.template_details(template, entrypoint).await?);
        self.resolved
            .lock()
            .await
            .insert(key, Arc::clone(&schema));
        Ok(schema)
    }
}
