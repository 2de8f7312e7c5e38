//! Host adapter
//!
//! Drives a [`Provider`] from line-delimited JSON requests. The configured
//! provider data lives here for the lifetime of the process.

pub mod protocol;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::domain::ports::{data_source_type_names, resource_type_names, Provider};
use crate::infrastructure::logging::SecretScrubber;
pub use protocol::{handshake_line, Request, Response, HANDSHAKE_PREFIX, PROTOCOL_VERSION};

/// Failures of the host connection itself
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Reading requests or writing responses failed
    #[error("I/O error on host connection: {0}")]
    Io(#[from] std::io::Error),

    /// A response could not be serialized
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serves one provider to one host
pub struct ProviderServer<P: Provider> {
    provider: P,
    data: Option<P::Data>,
    scrubber: SecretScrubber,
}

impl<P: Provider> ProviderServer<P> {
    /// Wrap an unconfigured provider
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            data: None,
            scrubber: SecretScrubber::new(),
        }
    }

    /// Provider data from the last successful configure
    pub const fn data(&self) -> Option<&P::Data> {
        self.data.as_ref()
    }

    /// Handle one request
    pub fn handle(&mut self, request: &Request) -> Response {
        match request {
            Request::GetMetadata => Response {
                metadata: Some(self.provider.metadata()),
                ..Response::default()
            },
            Request::GetSchema => Response {
                schema: Some(self.provider.schema()),
                ..Response::default()
            },
            Request::ConfigureProvider { config } => match self.provider.configure(config) {
                Ok(data) => {
                    self.data = Some(data);
                    Response {
                        configured: Some(true),
                        ..Response::default()
                    }
                }
                Err(diagnostics) => {
                    // A rejected configuration must not leave an older client usable
                    self.data = None;
                    Response {
                        configured: Some(false),
                        diagnostics,
                        ..Response::default()
                    }
                }
            },
            Request::ListResources => Response {
                type_names: Some(resource_type_names(&self.provider)),
                ..Response::default()
            },
            Request::ListDataSources => Response {
                type_names: Some(data_source_type_names(&self.provider)),
                ..Response::default()
            },
            Request::Stop => Response::default(),
        }
    }

    /// Process requests until end of input or a `stop` request.
    ///
    /// Malformed lines get an `error` response; the loop keeps going.
    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> Result<(), ProviderError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (response, stop) = match serde_json::from_str::<Request>(line) {
                Ok(request) => {
                    debug!(?request, "host request");
                    (self.handle(&request), request == Request::Stop)
                }
                Err(err) => {
                    warn!(
                        error = %err,
                        line = %self.scrubber.scrub_message(line),
                        "malformed host request"
                    );
                    (Response::error(format!("Invalid request: {err}")), false)
                }
            };

            write_line(&mut writer, &serde_json::to_string(&response)?).await?;

            if stop {
                info!("stop requested by host");
                break;
            }
        }

        Ok(())
    }
}

/// Write the handshake, then serve requests from stdin until the host stops
pub async fn serve_stdio<P: Provider>(provider: P) -> Result<(), ProviderError> {
    let mut stdout = tokio::io::stdout();
    write_line(&mut stdout, &handshake_line()).await?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    ProviderServer::new(provider).serve(stdin, stdout).await
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<(), ProviderError> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
