//! A decoding session over one TCP connection to a reader.
//!
//! The session owns the socket, frames the byte stream, and hands every
//! complete message to the shared [`Decoder`]. It never writes to the
//! reader; it is a passive observer suitable for taps and monitors as well
//! as for the receive half of a client.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fmt::Debug;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::timeout;

use rust_llrp_common::metrics::LlrpMetrics;
use rust_llrp_common::report::DecodedMessage;
use rust_llrp_common::Decoder;

use crate::config::SessionOptions;
use crate::framing::read_frame;

/// One connection to an LLRP reader, yielding decoded messages.
pub struct LlrpSession {
    stream: TcpStream,
    peer: SocketAddr,
    options: SessionOptions,
    decoder: Arc<Decoder>,
    metrics: Arc<LlrpMetrics>,
}

impl LlrpSession {
    /// Connect to a reader and start a session with a fresh decoder.
    pub async fn connect<A: ToSocketAddrs + Debug>(
        addr: A,
        options: SessionOptions,
    ) -> Result<Self> {
        Self::connect_with_decoder(addr, options, Arc::new(Decoder::new())).await
    }

    /// Connect using a shared decoder (and its vendor registry).
    pub async fn connect_with_decoder<A: ToSocketAddrs + Debug>(
        addr: A,
        options: SessionOptions,
        decoder: Arc<Decoder>,
    ) -> Result<Self> {
        debug!("connecting to {:?}", addr);
        let stream = TcpStream::connect(addr)
            .await
            .context("failed to connect to reader")?;
        let peer = stream.peer_addr().context("peer address unavailable")?;
        info!("connected to reader at {}", peer);
        Ok(Self::build(stream, peer, options, decoder))
    }

    /// Wrap an already-established connection, e.g. one accepted from a
    /// reader-initiated session.
    pub fn from_stream(
        stream: TcpStream,
        options: SessionOptions,
        decoder: Arc<Decoder>,
    ) -> Result<Self> {
        let peer = stream.peer_addr().context("peer address unavailable")?;
        Ok(Self::build(stream, peer, options, decoder))
    }

    fn build(
        stream: TcpStream,
        peer: SocketAddr,
        options: SessionOptions,
        decoder: Arc<Decoder>,
    ) -> Self {
        let metrics = decoder.metrics();
        metrics.sessions_open.increment();
        Self {
            stream,
            peer,
            options,
            decoder,
            metrics,
        }
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    pub fn metrics(&self) -> Arc<LlrpMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Read and decode the next message.
    ///
    /// Returns `Ok(None)` when the reader closes the connection between
    /// messages. Decoding anomalies do not error; they ride on the returned
    /// message as diagnostics.
    pub async fn next_message(&mut self) -> Result<Option<DecodedMessage>> {
        let frame = match self.options.read_timeout_ms {
            Some(ms) => timeout(
                Duration::from_millis(ms),
                read_frame(&mut self.stream, self.options.max_frame_len),
            )
            .await
            .with_context(|| format!("no message from {} within {} ms", self.peer, ms))??,
            None => read_frame(&mut self.stream, self.options.max_frame_len).await?,
        };

        let Some(frame) = frame else {
            info!("reader {} closed the connection", self.peer);
            return Ok(None);
        };

        self.metrics.frames_received.increment();
        self.metrics.bytes_received.add(frame.len() as u64);

        let msg = self
            .decoder
            .decode_frame(&frame)
            .context("failed to decode framed message")?;

        let anomalies = msg.all_diagnostics().len();
        if anomalies > 0 {
            warn!(
                "message id {} from {} decoded with {} anomalies",
                msg.id, self.peer, anomalies
            );
        }

        Ok(Some(msg))
    }

    /// Shut the connection down.
    pub async fn close(mut self) -> Result<()> {
        self.stream
            .shutdown()
            .await
            .context("failed to shut down connection")?;
        self.metrics.sessions_open.decrement();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn keepalive(id: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&((1u16 << 10) | 62).to_be_bytes());
        buf.extend_from_slice(&10u32.to_be_bytes());
        buf.extend_from_slice(&id.to_be_bytes());
        buf
    }

    #[tokio::test]
    async fn session_decodes_a_stream_of_messages() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            sock.write_all(&keepalive(1)).await.unwrap();
            sock.write_all(&keepalive(2)).await.unwrap();
        });

        let mut session = LlrpSession::connect(addr, SessionOptions::default())
            .await
            .unwrap();

        let first = session.next_message().await.unwrap().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.type_name, Some("Keepalive"));

        let second = session.next_message().await.unwrap().unwrap();
        assert_eq!(second.id, 2);

        // Writer task finished; the stream ends cleanly.
        assert!(session.next_message().await.unwrap().is_none());

        let metrics = session.metrics();
        assert_eq!(metrics.frames_received.value(), 2);
        assert_eq!(metrics.bytes_received.value(), 20);
        session.close().await.unwrap();
    }
}
