use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::{debug, info};

/// Line-oriented message channel - all we care about is send/receive
#[async_trait]
pub trait Transport: Send {
    /// Send one framed message to the client
    async fn send_message(&mut self, message: String) -> Result<(), SocketError>;

    /// Receive the next message from the client (None if the stream ended)
    async fn receive_message(&mut self) -> Result<Option<String>, SocketError>;

    /// Close the connection
    async fn close(&mut self) -> Result<(), SocketError>;
}

/// Handler for incoming protocol messages
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handle one raw message; `None` means nothing is sent back
    async fn handle_message(&self, message: String) -> Option<String>;
}

#[derive(Debug, Error)]
pub enum SocketError {
    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Receive failed: {0}")]
    ReceiveFailed(String),
}

/// Newline-delimited JSON over a reader/writer pair
///
/// Frames are decoded lossily, so bytes that are not UTF-8 reach the handler
/// as replacement characters and get a parse error reply.
pub struct LineTransport<R, W> {
    reader: R,
    buffer: Vec<u8>,
    writer: W,
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            writer,
        }
    }
}

pub type StdioTransport = LineTransport<BufReader<Stdin>, Stdout>;

impl StdioTransport {
    pub fn stdio() -> Self {
        LineTransport::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait]
impl<R, W> Transport for LineTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn send_message(&mut self, message: String) -> Result<(), SocketError> {
        let mut frame = message.into_bytes();
        frame.push(b'\n');
        self.writer
            .write_all(&frame)
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))?;
        self.writer
            .flush()
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }

    async fn receive_message(&mut self) -> Result<Option<String>, SocketError> {
        loop {
            self.buffer.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buffer)
                .await
                .map_err(|e| SocketError::ReceiveFailed(e.to_string()))?;
            if read == 0 {
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue; // Skip blank keep-alives
            }
            return Ok(Some(line.to_string()));
        }
    }

    async fn close(&mut self) -> Result<(), SocketError> {
        self.writer
            .shutdown()
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }
}

/// Connection represents one client session over a transport
/// Requests are answered in arrival order until the client hangs up
pub struct Connection {
    transport: Box<dyn Transport>,
    message_handler: Arc<dyn MessageHandler>,
}

impl Connection {
    pub fn new(transport: Box<dyn Transport>, message_handler: Arc<dyn MessageHandler>) -> Self {
        Self {
            transport,
            message_handler,
        }
    }

    /// Run the connection until the client disconnects
    pub async fn run(mut self) -> Result<(), SocketError> {
        info!("Connection started");

        while let Some(message) = self.transport.receive_message().await? {
            debug!(length = message.len(), "Received message");

            if let Some(reply) = self.message_handler.handle_message(message).await {
                self.transport.send_message(reply).await?;
            }
        }

        info!("Client disconnected");
        let _ = self.transport.close().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    struct EchoHandler;

    #[async_trait]
    impl MessageHandler for EchoHandler {
        async fn handle_message(&self, message: String) -> Option<String> {
            if message == "quiet" {
                None
            } else {
                Some(format!("echo:{}", message))
            }
        }
    }

    #[tokio::test]
    async fn line_transport_frames_messages() {
        let input: &[u8] = b"first\n\n  \nsecond\n";
        let mut transport = LineTransport::new(input, Vec::new());

        assert_eq!(transport.receive_message().await.unwrap().as_deref(), Some("first"));
        assert_eq!(transport.receive_message().await.unwrap().as_deref(), Some("second"));
        assert_eq!(transport.receive_message().await.unwrap(), None);

        transport.send_message("reply".to_string()).await.unwrap();
        assert_eq!(transport.writer, b"reply\n".to_vec());
    }

    #[tokio::test]
    async fn connection_answers_until_eof() {
        let (client, server) = tokio::io::duplex(1024);
        let (server_read, server_write) = tokio::io::split(server);
        let transport = LineTransport::new(BufReader::new(server_read), server_write);
        let connection = Connection::new(Box::new(transport), Arc::new(EchoHandler));

        let (mut client_read, mut client_write) = tokio::io::split(client);
        client_write.write_all(b"one\nquiet\ntwo\n").await.unwrap();
        client_write.shutdown().await.unwrap();

        connection.run().await.unwrap();

        let mut output = String::new();
        client_read.read_to_string(&mut output).await.unwrap();
        assert_eq!(output, "echo:one\necho:two\n");
    }

    #[tokio::test]
    async fn invalid_utf8_line_does_not_end_the_session() {
        let input: &[u8] = b"one\n\xff\xfe bad\r\ntwo";
        let mut transport = LineTransport::new(input, Vec::new());

        assert_eq!(transport.receive_message().await.unwrap().as_deref(), Some("one"));
        assert_eq!(
            transport.receive_message().await.unwrap().as_deref(),
            Some("\u{FFFD}\u{FFFD} bad")
        );
        assert_eq!(transport.receive_message().await.unwrap().as_deref(), Some("two"));
        assert_eq!(transport.receive_message().await.unwrap(), None);
    }

    #[tokio::test]
    async fn connection_keeps_answering_after_invalid_utf8() {
        let input: &[u8] = b"one\n\xff\xfe bad\ntwo\n";
        let (client, server) = tokio::io::duplex(1024);
        let transport = LineTransport::new(input, server);
        let connection = Connection::new(Box::new(transport), Arc::new(EchoHandler));

        connection.run().await.unwrap();

        let mut output = String::new();
        let mut client = client;
        client.read_to_string(&mut output).await.unwrap();
        assert_eq!(output, "echo:one\necho:\u{FFFD}\u{FFFD} bad\necho:two\n");
    }
}
