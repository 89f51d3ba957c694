#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use composer::catalog::cache::{SchemaCache, TemplateCatalog};
use composer::catalog::types::{
    ArtifactDef, OutputDef, ParameterDef, TemplateSchema, TemplateSummary,
};
use composer::error::CatalogError;

// =============================================================================
// Template/schema builders
// =============================================================================

pub fn template(name: &str, entrypoints: &[&str]) -> TemplateSummary {
    TemplateSummary {
        name: name.into(),
        entrypoints: entrypoints.iter().map(|e| e.to_string()).collect(),
        default_entrypoint: entrypoints.first().map(|e| e.to_string()),
    }
}

pub fn param(name: &str, required: bool, default: Option<&str>) -> ParameterDef {
    ParameterDef {
        name: name.into(),
        required,
        default: default.map(String::from),
    }
}

pub fn artifact(name: &str, required: bool) -> ArtifactDef {
    ArtifactDef {
        name: name.into(),
        required,
    }
}

pub fn output(name: &str) -> OutputDef {
    OutputDef { name: name.into() }
}

/// Schema of the `Loader` template used across scenario tests:
/// no inputs, a single `dataset` output.
pub fn loader_schema() -> TemplateSchema {
    TemplateSchema {
        parameters: vec![param("path", true, None)],
        artifacts: vec![],
        outputs: vec![output("dataset")],
    }
}

/// Schema of the `Trainer` template: one required `input` artifact plus a
/// defaulted and a required parameter.
pub fn trainer_schema() -> TemplateSchema {
    TemplateSchema {
        parameters: vec![param("epochs", false, Some("10")), param("lr", true, None)],
        artifacts: vec![artifact("input", true)],
        outputs: vec![output("model")],
    }
}

// =============================================================================
// In-memory catalog stub
// =============================================================================

/// In-memory `TemplateCatalog` with per-key failure injection and call
/// counting, so cache behavior is observable without a network.
#[derive(Default)]
pub struct StubCatalog {
    schemas: HashMap<(String, String), TemplateSchema>,
    failing: HashSet<(String, String)>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        StubCatalog::default()
    }

    pub fn with_schema(mut self, template: &str, entrypoint: &str, schema: TemplateSchema) -> Self {
        self.schemas
            .insert((template.into(), entrypoint.into()), schema);
        self
    }

    pub fn with_failure(mut self, template: &str, entrypoint: &str) -> Self {
        self.failing.insert((template.into(), entrypoint.into()));
        self
    }

    /// Number of `template_details` calls made for the given pair.
    pub fn call_count(&self, template: &str, entrypoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, e)| t == template && e == entrypoint)
            .count()
    }
}

#[async_trait]
impl TemplateCatalog for StubCatalog {
    async fn list_templates(&self) -> Result<Vec<TemplateSummary>, CatalogError> {
        Ok(vec![])
    }

    async fn template_details(
        &self,
        name: &str,
        entrypoint: &str,
    ) -> Result<TemplateSchema, CatalogError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.into(), entrypoint.into()));

        let key = (name.to_string(), entrypoint.to_string());
        if self.failing.contains(&key) {
            return Err(CatalogError::Server {
                status: 500,
                message: format!("injected failure for '{name}'"),
            });
        }
        self.schemas
            .get(&key)
            .cloned()
            .ok_or_else(|| CatalogError::Server {
                status: 404,
                message: format!("Entrypoint '{entrypoint}' not found in '{name}'"),
            })
    }
}

/// Cache over a stub catalog, handing back the stub for assertions.
pub fn cache_over(stub: StubCatalog) -> (SchemaCache, Arc<StubCatalog>) {
    let stub = Arc::new(stub);
    (SchemaCache::new(stub.clone()), stub)
}
