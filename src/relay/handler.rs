use std::sync::Arc;

use tracing::{debug, error, info};

use crate::proxy::types::{ProxyRequest, ProxyResponse};
use crate::relay::error::RelayError;
use crate::utils::cors::{OriginAllowList, REJECTED_ORIGIN};
use crate::utils::encode::{base64_encode, gzip_compress};
use crate::utils::fetch::{FetchedDocument, HttpPdfFetcher, PdfFetcher};

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Per-handler configuration. The historical deployments of this relay
/// differed only in whether they gzipped the body and how strictly they
/// checked the upstream content type; both knobs live here.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub allowed_origins: OriginAllowList,
    pub compress: bool,
    pub strict_content_type: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            allowed_origins: OriginAllowList::default(),
            compress: true,
            strict_content_type: true,
        }
    }
}

/// The one functional unit of the relay: turns a proxy event into a proxy
/// response. Terminal failures become well-formed error responses; this
/// never panics the invocation.
pub struct PdfRelayHandler {
    config: RelayConfig,
    fetcher: Arc<dyn PdfFetcher>,
}

impl PdfRelayHandler {
    pub fn new(config: RelayConfig) -> Self {
        Self::with_fetcher(config, Arc::new(HttpPdfFetcher::new()))
    }

    pub fn with_fetcher(config: RelayConfig, fetcher: Arc<dyn PdfFetcher>) -> Self {
        Self { config, fetcher }
    }

    pub async fn handle(&self, request: &ProxyRequest) -> ProxyResponse {
        // Origin gate comes before any other validation or I/O.
        let origin = request.origin();
        let allow_origin = self.config.allowed_origins.resolve(origin);
        if allow_origin == REJECTED_ORIGIN {
            info!("Rejected request from origin {:?}", origin);
            return ProxyResponse::new(412, "Precondition Failed")
                .with_header("Access-Control-Allow-Origin", REJECTED_ORIGIN)
                .with_header("Content-Type", "text/html");
        }

        let disposition = if request.query_param("download").is_some() {
            "inline"
        } else {
            "attachment"
        };
        let title = request.query_param("title").unwrap_or("");

        match self.relay_body(request).await {
            Ok(encoded_body) => {
                let mut response = ProxyResponse::new(200, encoded_body)
                    .base64_encoded()
                    .with_header("Content-Type", PDF_CONTENT_TYPE)
                    .with_header("Access-Control-Allow-Origin", allow_origin)
                    .with_header(
                        "Content-Disposition",
                        format!("{}; filename=\"{}\"", disposition, title),
                    );

                if self.config.compress {
                    response = response
                        .with_header("Content-Encoding", "gzip")
                        .with_header("Cache-Control", "max-age=31536000");
                }

                response
            }
            Err(e) => self.error_response(e, allow_origin),
        }
    }

    /// Fetch, gate, compress, and encode. Any error short-circuits; a
    /// partial or corrupt body is never returned as a success.
    async fn relay_body(&self, request: &ProxyRequest) -> Result<String, RelayError> {
        let pdf_url = request
            .query_param("pdf_url")
            .ok_or(RelayError::MissingPdfUrl)?;
        url::Url::parse(pdf_url)?;

        info!("Relaying PDF from {}", pdf_url);

        let document = self.fetcher.fetch(pdf_url).await?;
        self.check_content_type(&document)?;

        let payload = if self.config.compress {
            gzip_compress(&document.bytes)?
        } else {
            document.bytes
        };

        Ok(base64_encode(&payload))
    }

    fn check_content_type(&self, document: &FetchedDocument) -> Result<(), RelayError> {
        let declared = document.content_type.as_deref().unwrap_or("");

        let accepted = if self.config.strict_content_type {
            declared == PDF_CONTENT_TYPE
        } else {
            // Parameters such as charset are ignored in lenient mode.
            declared
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case(PDF_CONTENT_TYPE)
        };

        if accepted {
            debug!("Upstream content type is {}", declared);
            Ok(())
        } else {
            Err(RelayError::UnexpectedContentType {
                found: declared.to_string(),
            })
        }
    }

    fn error_response(&self, err: RelayError, allow_origin: &str) -> ProxyResponse {
        error!("Relay invocation failed: {}", err);

        let status = if err.is_client_error() { 400 } else { 500 };

        ProxyResponse::new(status, err.to_string())
            .with_header("Access-Control-Allow-Origin", allow_origin)
            .with_header("Content-Type", "text/html")
    }
}
