use anyhow::Result;
use tracing::info;

use super::transport::StdioTransport;
use crate::relay::handler::PdfRelayHandler;

/// Invocation loop: reads proxy events from the transport, invokes the relay
/// handler, and writes the resulting proxy responses back. The handler never
/// fails an invocation; only transport-level errors terminate the loop.
pub struct RelayServer {
    transport: StdioTransport,
    handler: PdfRelayHandler,
}

impl RelayServer {
    pub fn new(handler: PdfRelayHandler) -> Self {
        Self {
            transport: StdioTransport::new(),
            handler,
        }
    }

    pub async fn start(&mut self) -> Result<()> {
        info!("PDF relay started and listening on stdio");

        loop {
            match self.transport.read_event().await? {
                Some(request) => {
                    let response = self.handler.handle(&request).await;
                    self.transport.write_response(response).await?;
                }
                None => {
                    info!("Trigger disconnected");
                    break;
                }
            }
        }

        Ok(())
    }
}
