//! Slicing a byte stream into complete LLRP messages.
//!
//! The 32-bit total-length field lives at offset 2 of the fixed header and
//! includes the header itself. Framing errors are unrecoverable: once a
//! length field is nonsensical there is no way to find the next message
//! boundary, so the stream must be dropped. That is the one place this
//! workspace returns `Err` for malformed input — everything past framing is
//! diagnostics.

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use rust_llrp_common::cursor::ByteCursor;
use rust_llrp_common::message::HEADER_LEN;
use rust_llrp_common::{Error, Result};

/// Read the declared total frame length from a header prefix.
///
/// Needs at least the first six header bytes; returns `None` otherwise.
pub fn peek_frame_len(buf: &[u8]) -> Option<u32> {
    ByteCursor::new(buf).u32(2)
}

fn validate_frame_len(len: usize, max_frame_len: usize) -> Result<()> {
    if len < HEADER_LEN {
        return Err(Error::Frame(format!(
            "declared frame length {} is below the {}-byte header",
            len, HEADER_LEN
        )));
    }
    if len > max_frame_len {
        return Err(Error::Frame(format!(
            "declared frame length {} exceeds the {}-byte limit",
            len, max_frame_len
        )));
    }
    Ok(())
}

/// Incremental frame reassembly over caller-supplied reads.
///
/// Feed raw stream bytes with [`extend`], then drain complete messages with
/// [`next_frame`]. Partial messages stay buffered until their remainder
/// arrives.
///
/// [`extend`]: FrameBuffer::extend
/// [`next_frame`]: FrameBuffer::next_frame
#[derive(Debug)]
pub struct FrameBuffer {
    buf: BytesMut,
    max_frame_len: usize,
}

impl FrameBuffer {
    pub fn new(max_frame_len: usize) -> Self {
        Self {
            buf: BytesMut::new(),
            max_frame_len,
        }
    }

    /// Append raw bytes received from the stream.
    pub fn extend(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Bytes buffered but not yet returned as part of a frame.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Pop the next complete message, if one is fully buffered.
    pub fn next_frame(&mut self) -> Result<Option<Bytes>> {
        if self.buf.len() < HEADER_LEN {
            return Ok(None);
        }
        let len = peek_frame_len(&self.buf).unwrap_or(0) as usize;
        validate_frame_len(len, self.max_frame_len)?;
        if self.buf.len() < len {
            return Ok(None);
        }
        Ok(Some(self.buf.split_to(len).freeze()))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MAX_FRAME_LEN)
    }
}

/// Read one complete message from an async stream.
///
/// Returns `Ok(None)` on a clean end of stream (connection closed between
/// messages); a close mid-frame is an error.
pub async fn read_frame<R: AsyncRead + Unpin>(
    reader: &mut R,
    max_frame_len: usize,
) -> Result<Option<BytesMut>> {
    let mut header = [0u8; HEADER_LEN];
    let mut filled = 0;
    while filled < HEADER_LEN {
        let n = reader.read(&mut header[filled..]).await?;
        if n == 0 {
            if filled == 0 {
                return Ok(None);
            }
            return Err(Error::Frame(format!(
                "connection closed mid-header after {} bytes",
                filled
            )));
        }
        filled += n;
    }

    let len = peek_frame_len(&header).unwrap_or(0) as usize;
    validate_frame_len(len, max_frame_len)?;

    let mut frame = BytesMut::with_capacity(len);
    frame.extend_from_slice(&header);
    frame.resize(len, 0);
    reader.read_exact(&mut frame[HEADER_LEN..]).await?;
    Ok(Some(frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keepalive(id: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&((1u16 << 10) | 62).to_be_bytes());
        buf.extend_from_slice(&10u32.to_be_bytes());
        buf.extend_from_slice(&id.to_be_bytes());
        buf
    }

    #[test]
    fn peek_needs_six_bytes() {
        assert_eq!(peek_frame_len(&[0; 5]), None);
        assert_eq!(peek_frame_len(&keepalive(1)), Some(10));
    }

    #[test]
    fn frames_reassemble_across_partial_feeds() {
        let mut fb = FrameBuffer::default();
        let first = keepalive(1);
        let second = keepalive(2);

        // Feed one and a half messages, then the rest.
        fb.extend(&first);
        fb.extend(&second[..4]);

        let frame = fb.next_frame().unwrap().unwrap();
        assert_eq!(&frame[..], &first[..]);
        assert!(fb.next_frame().unwrap().is_none());

        fb.extend(&second[4..]);
        let frame = fb.next_frame().unwrap().unwrap();
        assert_eq!(&frame[..], &second[..]);
        assert_eq!(fb.pending(), 0);
    }

    #[test]
    fn undersized_length_field_is_fatal() {
        let mut fb = FrameBuffer::default();
        let mut bad = keepalive(1);
        bad[2..6].copy_from_slice(&4u32.to_be_bytes());
        fb.extend(&bad);
        assert!(fb.next_frame().is_err());
    }

    #[test]
    fn oversized_length_field_is_fatal() {
        let mut fb = FrameBuffer::new(64);
        let mut bad = keepalive(1);
        bad[2..6].copy_from_slice(&1_000u32.to_be_bytes());
        fb.extend(&bad);
        assert!(fb.next_frame().is_err());
    }

    #[tokio::test]
    async fn async_read_frame_round_trips() {
        let (mut client, mut server) = tokio::io::duplex(256);
        let payload = keepalive(7);
        tokio::io::AsyncWriteExt::write_all(&mut client, &payload)
            .await
            .unwrap();
        drop(client);

        let frame = read_frame(&mut server, crate::DEFAULT_MAX_FRAME_LEN)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(&frame[..], &payload[..]);

        // Clean EOF after a whole message.
        let end = read_frame(&mut server, crate::DEFAULT_MAX_FRAME_LEN)
            .await
            .unwrap();
        assert!(end.is_none());
    }

    #[tokio::test]
    async fn async_eof_mid_header_is_an_error() {
        let (mut client, mut server) = tokio::io::duplex(256);
        tokio::io::AsyncWriteExt::write_all(&mut client, &[0x04, 0x3E, 0x00])
            .await
            .unwrap();
        drop(client);

        assert!(read_frame(&mut server, crate::DEFAULT_MAX_FRAME_LEN)
            .await
            .is_err());
    }
}
