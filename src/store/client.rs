use crate::config::{Config, StoreConfig};
use crate::error::{NidmError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

const SPARQL_QUERY: &str = "application/sparql-query";
const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";
const TURTLE: &str = "text/turtle";

/// HTTP client for one database of a Stardog-style triple store.
///
/// Requests are sent one at a time with HTTP Basic authentication.
pub struct StoreClient {
    client: Client,
    base_url: Url,
    database: String,
    username: String,
    password: String,
}

impl StoreClient {
    /// Create a client for `store` authenticating with `password`.
    pub fn new(store: &StoreConfig, password: String) -> Result<Self> {
        let mut base_url = Url::parse(&store.root)
            .map_err(|e| NidmError::Config(format!("Invalid store root {}: {}", store.root, e)))?;
        base_url
            .set_port(Some(store.port))
            .map_err(|_| NidmError::Config(format!("Store root cannot carry a port: {}", store.root)))?;

        let mut builder = Client::builder();
        if let Some(secs) = store.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| NidmError::Store(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            database: store.database.clone(),
            username: store.username.clone(),
            password,
        })
    }

    /// Create a client reading the password from the configured environment variable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let password = std::env::var(&config.store.password_env).map_err(|_| {
            NidmError::Config(format!(
                "Environment variable {} not set",
                config.store.password_env
            ))
        })?;
        Self::new(&config.store, password)
    }

    /// Database URL followed by `tail` path segments.
    fn database_url(&self, tail: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NidmError::Config(format!("Store root is not a base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend([self.database.as_str(), tail]);
        Ok(url)
    }

    /// `{root}:{port}/{database}/query`
    pub fn query_url(&self) -> Result<Url> {
        self.database_url("query")
    }

    /// `{root}:{port}/{database}/?graph={graph}`
    pub fn graph_url(&self, graph: &str) -> Result<Url> {
        let mut url = self.database_url("")?;
        url.query_pairs_mut().append_pair("graph", graph);
        Ok(url)
    }

    /// Run a SPARQL SELECT and return the raw `sparql-results+json` body.
    pub async fn select(&self, query: &str) -> Result<Vec<u8>> {
        let url = self.query_url()?;
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, SPARQL_QUERY)
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .body(query.to_string())
            .send()
            .await
            .map_err(|e| NidmError::Store(format!("Network error: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            return Err(NidmError::Store(format!("Query failed {}: {}", status, body)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NidmError::Store(format!("Failed to read response: {}", e)))?;

        Ok(body.to_vec())
    }

    /// Load a Turtle document into `graph`.
    ///
    /// Any HTTP response is returned as its status; only transport failures are errors.
    pub async fn upload_turtle(&self, graph: &str, turtle: Vec<u8>) -> Result<StatusCode> {
        let url = self.graph_url(graph)?;
        log::debug!("POST {} ({} bytes)", url, turtle.len());

        let response = self
            .client
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, TURTLE)
            .body(turtle)
            .send()
            .await
            .map_err(|e| NidmError::Store(format!("Network error: {}", e)))?;

        Ok(response.status())
    }
}
