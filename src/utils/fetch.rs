use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request error: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}

/// A document pulled from the upstream server: the declared content type (as
/// received, parameters included) and the full body bytes.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Outbound fetch seam. The relay handler depends on this trait rather than
/// on a concrete client so tests can observe and substitute the dependency.
#[async_trait]
pub trait PdfFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError>;
}

/// Production fetcher: a single GET with reqwest's defaults. No timeout
/// override, no redirect-limit override, no retry; the hosting environment
/// owns invocation deadlines.
pub struct HttpPdfFetcher {
    client: Client,
}

impl HttpPdfFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpPdfFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PdfFetcher for HttpPdfFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError> {
        let response = self.client.get(url).send().await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(|ct| ct.to_string());

        debug!(
            "Upstream responded with status {} and content type {:?}",
            response.status(),
            content_type
        );

        let bytes = response.bytes().await?;

        Ok(FetchedDocument {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}
