use anyhow::Result;
use futures::{SinkExt, StreamExt};
use tokio::io::BufReader;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, error};

use super::types::{ProxyRequest, ProxyResponse};

/// Newline-delimited JSON transport: one proxy event in per line on stdin,
/// one proxy response out per line on stdout.
pub struct StdioTransport {
    reader: FramedRead<BufReader<tokio::io::Stdin>, LinesCodec>,
    writer: FramedWrite<tokio::io::Stdout, LinesCodec>,
}

impl StdioTransport {
    pub fn new() -> Self {
        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();

        let reader = FramedRead::new(BufReader::new(stdin), LinesCodec::new());
        let writer = FramedWrite::new(stdout, LinesCodec::new());

        Self { reader, writer }
    }

    pub async fn read_event(&mut self) -> Result<Option<ProxyRequest>> {
        match self.reader.next().await {
            Some(Ok(line)) => {
                debug!("Received: {}", line);

                match serde_json::from_str::<ProxyRequest>(&line) {
                    Ok(request) => Ok(Some(request)),
                    Err(e) => {
                        error!("Failed to parse proxy event: {}", e);
                        Err(anyhow::anyhow!("Invalid proxy event: {}", e))
                    }
                }
            }
            Some(Err(e)) => {
                error!("Error reading from stdin: {}", e);
                Err(anyhow::anyhow!("Transport error: {}", e))
            }
            None => {
                debug!("EOF reached");
                Ok(None)
            }
        }
    }

    pub async fn write_response(&mut self, response: ProxyResponse) -> Result<()> {
        let json = serde_json::to_string(&response)?;
        debug!("Sending: {}", json);

        self.writer.send(json).await?;

        Ok(())
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}
