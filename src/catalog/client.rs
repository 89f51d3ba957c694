//! HTTP client for the template catalog and workflow services.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::catalog::cache::TemplateCatalog;
use crate::catalog::types::{TemplateSchema, TemplateSummary};
use crate::compile::payload::{Action, RunOutcome, WorkflowPayload};
use crate::error::CatalogError;

pub struct CatalogClient {
    base: Url,
    http: reqwest::Client,
}

/// Error body shape shared by all service endpoints.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct RunBody {
    workflow_name: Option<String>,
    yaml: Option<String>,
}

impl CatalogClient {
    pub fn new(base: Url) -> Self {
        CatalogClient {
            base,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }

    /// `GET /api/templates/` — the full catalog listing.
    pub async fn list_templates(&self) -> Result<Vec<TemplateSummary>, CatalogError> {
        let response = self
            .http
            .get(self.endpoint("api/templates/"))
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    /// `GET /api/templates/details/` — the schema for one (template, entrypoint).
    pub async fn template_details(
        &self,
        name: &str,
        entrypoint: &str,
    ) -> Result<TemplateSchema, CatalogError> {
        debug!(name, entrypoint, "fetching template details");
        let response = self
            .http
            .get(self.endpoint("api/templates/details/"))
            .query(&[("name", name), ("entrypoint", entrypoint)])
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    /// `POST /api/workflows/` — submit the compiled graph, or request its
    /// rendered document depending on the payload's action tag.
    pub async fn run_workflow(
        &self,
        payload: &WorkflowPayload,
    ) -> Result<RunOutcome, CatalogError> {
        debug!(
            nodes = payload.nodes.len(),
            edges = payload.edges.len(),
            action = ?payload.action,
            "dispatching workflow"
        );
        let response = self
            .http
            .post(self.endpoint("api/workflows/"))
            .json(payload)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let response = check_status(response).await?;
        let body: RunBody = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        match payload.action {
            Action::Download => body
                .yaml
                .map(|yaml| RunOutcome::Downloaded { yaml })
                .ok_or_else(|| CatalogError::Decode("missing 'yaml' in download response".into())),
            Action::Submit => Ok(RunOutcome::Submitted {
                workflow_name: body.workflow_name.unwrap_or_else(|| "unknown".into()),
            }),
        }
    }
}

/// Map a non-success response to `CatalogError::Server`, preferring the
/// service's own `{"error": ...}` message when one is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {status}"),
    };
    Err(CatalogError::Server {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TemplateCatalog for CatalogClient {
    async fn list_templates(&self) -> Result<Vec<TemplateSummary>, CatalogError> {
        CatalogClient::list_templates(self).await
    }

    async fn template_details(
        &self,
        name: &str,
        entrypoint: &str,
    ) -> Result<TemplateSchema, CatalogError> {
        CatalogClient::template_details(self, name, entrypoint).await
    }
}
