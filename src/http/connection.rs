use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::parse_http_request;
use crate::http::request::QueryPolicy;
use crate::http::response::StatusCode;
use crate::http::writer::ResponseWriter;
use crate::vhost::responder::Responder;

/// Inbound messages larger than this are truncated and parsed as-is.
const MAX_MESSAGE_LEN: usize = 8192;

/// End of the header section.
const MESSAGE_END: &[u8] = b"\r\n\r\n";

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    responder: Responder,
    policy: QueryPolicy,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing,
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, responder: Responder, policy: QueryPolicy) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(1024),
            responder,
            policy,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through one request/response exchange.
    ///
    /// There is no keep-alive: the connection always closes after a single
    /// response. Client faults become 400/404 responses; server faults
    /// (catalog misconfiguration, unreadable files) abort the exchange
    /// without a response.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    if self.read_message().await? {
                        self.state = ConnectionState::Processing;
                    } else {
                        self.state = ConnectionState::Closed;
                    }
                }

                ConnectionState::Processing => {
                    let response = match parse_http_request(&self.buffer, self.policy) {
                        Ok(request) => {
                            tracing::info!(
                                method = ?request.method,
                                target = %request.target,
                                "Request received"
                            );
                            self.responder.build(Some(&request), StatusCode::Ok).await?
                        }
                        Err(e) => {
                            tracing::warn!(error = ?e, "Malformed request");
                            self.responder.build(None, e.status()).await?
                        }
                    };

                    tracing::info!(status = response.status.as_u16(), "Response ready");

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the header terminator is buffered, the buffer reaches
    /// `MAX_MESSAGE_LEN` (the message is truncated and parsing proceeds on
    /// the partial buffer), or the peer closes.
    ///
    /// Returns `false` when the peer closed without sending anything.
    pub async fn read_message(&mut self) -> anyhow::Result<bool> {
        let mut temp = [0u8; 1024];

        loop {
            if contains_terminator(&self.buffer) {
                return Ok(true);
            }

            if self.buffer.len() >= MAX_MESSAGE_LEN {
                self.buffer.truncate(MAX_MESSAGE_LEN);
                return Ok(true);
            }

            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed; parse whatever arrived
                return Ok(!self.buffer.is_empty());
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}

fn contains_terminator(buf: &[u8]) -> bool {
    buf.windows(MESSAGE_END.len()).any(|w| w == MESSAGE_END)
}
