//! Argo Server REST client.
//!
//! # Security Note - Logging
//!
//! The bearer token is held as a `SecretString` and only exposed when the
//! `Authorization` header is built. Request logging records method, URL and
//! status, never headers.

use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Result, TemplateError};
use crate::types::{TemplateSummary, WorkflowTemplate};

use super::TemplateService;
use super::error::ApiError;

const API_BASE: &str = "api/v1/workflow-templates";

/// `WorkflowTemplateList` response; `items` is null when nothing matches
#[derive(Debug, Deserialize)]
struct TemplateList {
    #[serde(default)]
    items: Option<Vec<WorkflowTemplate>>,
}

/// `WorkflowTemplateCreateRequest` body
#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    namespace: &'a str,
    template: &'a WorkflowTemplate,
}

/// Client for the workflow template endpoints of an Argo Server
pub struct ArgoClient {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
}

impl ArgoClient {
    /// Create a client for `base_url` (no trailing slash)
    pub fn new(
        base_url: impl Into<String>,
        token: Option<SecretString>,
        timeout: std::time::Duration,
        insecure_skip_verify: bool,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(insecure_skip_verify)
            .user_agent(concat!("argo-templates/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.server_url(),
            config.token(),
            config.timeout(),
            config.server.insecure_skip_verify,
        )
    }

    fn collection_url(&self, namespace: &str) -> String {
        format!(
            "{}/{API_BASE}/{}",
            self.base_url,
            urlencoding::encode(namespace)
        )
    }

    fn item_url(&self, namespace: &str, name: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(namespace),
            urlencoding::encode(name)
        )
    }

    fn request(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, authorization_header(token)?);
        }
        Ok(builder)
    }

    /// Send a request, turning non-success statuses into errors
    async fn send(&self, builder: RequestBuilder, what: Option<&str>) -> Result<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.client.execute(request).await?;
        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "argo server request");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_body(status, &body);
        tracing::warn!(%method, %url, %error, "argo server request failed");
        Err(error.into_template_error(what))
    }
}

/// Build the header value; tokens copied from `argo auth token` already carry the scheme
fn authorization_header(token: &SecretString) -> Result<HeaderValue> {
    let raw = token.expose_secret().trim();
    let value = if raw.starts_with("Bearer ") {
        raw.to_string()
    } else {
        format!("Bearer {raw}")
    };
    let mut header = HeaderValue::from_str(&value)
        .map_err(|_| TemplateError::Auth("token contains invalid header characters".to_string()))?;
    header.set_sensitive(true);
    Ok(header)
}

#[async_trait]
impl TemplateService for ArgoClient {
    async fn list(&self, namespace: &str) -> Result<Vec<TemplateSummary>> {
        let builder = self.request(Method::GET, &self.collection_url(namespace))?;
        let response = self.send(builder, None).await?;
        let list: TemplateList = response.json().await?;
        Ok(list
            .items
            .unwrap_or_default()
            .iter()
            .map(WorkflowTemplate::summary)
            .collect())
    }

    async fn create(
        &self,
        namespace: &str,
        template: WorkflowTemplate,
    ) -> Result<WorkflowTemplate> {
        let body = CreateRequest {
            namespace,
            template: &template,
        };
        let builder = self
            .request(Method::POST, &self.collection_url(namespace))?
            .json(&body);
        let response = self.send(builder, None).await?;
        let created: WorkflowTemplate = response.json().await?;
        tracing::info!(template = %created.identity(), "created workflow template");
        Ok(created)
    }

    async fn get(&self, namespace: &str, name: &str) -> Result<WorkflowTemplate> {
        let what = format!("{namespace}/{name}");
        let builder = self.request(Method::GET, &self.item_url(namespace, name))?;
        let response = self.send(builder, Some(&what)).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> ArgoClient {
        ArgoClient::new("https://argo.example.com/", None, Duration::from_secs(5), false).unwrap()
    }

    #[test]
    fn test_urls() {
        let client = client();
        assert_eq!(
            client.collection_url("prod"),
            "https://argo.example.com/api/v1/workflow-templates/prod"
        );
        assert_eq!(
            client.collection_url(""),
            "https://argo.example.com/api/v1/workflow-templates/"
        );
        assert_eq!(
            client.item_url("prod", "etl-1"),
            "https://argo.example.com/api/v1/workflow-templates/prod/etl-1"
        );
    }

    #[test]
    fn test_authorization_header_adds_scheme() {
        let header = authorization_header(&SecretString::from("abc".to_string())).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer abc");
        assert!(header.is_sensitive());

        let header = authorization_header(&SecretString::from("Bearer xyz".to_string())).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer xyz");
    }

    #[test]
    fn test_null_items_is_empty_list() {
        let list: TemplateList = serde_json::from_str(r#"{"metadata":{},"items":null}"#).unwrap();
        assert!(list.items.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_list_items_keep_server_order() {
        let body = r#"{"items":[
            {"metadata":{"name":"b","namespace":"prod","creationTimestamp":"2024-01-02T00:00:00Z"},"spec":{}},
            {"metadata":{"name":"a","namespace":"prod"},"spec":{}}
        ]}"#;
        let list: TemplateList = serde_json::from_str(body).unwrap();
        let summaries: Vec<_> = list
            .items
            .unwrap_or_default()
            .iter()
            .map(WorkflowTemplate::summary)
            .collect();
        assert_eq!(summaries[0].name, "b");
        assert_eq!(
            summaries[0].creation_timestamp.as_deref(),
            Some("2024-01-02T00:00:00Z")
        );
        assert_eq!(summaries[1].name, "a");
    }

    #[test]
    fn test_create_request_shape() {
        let template = WorkflowTemplate::from_manifest(
            "kind: WorkflowTemplate\nmetadata:\n  name: hello\nspec:\n  entrypoint: main\n",
        )
        .unwrap();
        let body = serde_json::to_value(CreateRequest {
            namespace: "prod",
            template: &template,
        })
        .unwrap();
        assert_eq!(body["namespace"], "prod");
        assert_eq!(body["template"]["metadata"]["name"], "hello");
        assert_eq!(body["template"]["kind"], "WorkflowTemplate");
    }
}
