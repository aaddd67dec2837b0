//! IPC protocol between the hosting runtime and a handler process.
//!
//! The runtime sends invocations on stdin and reads responses on stdout, using
//! a simple length-prefixed JSON protocol: a 4-byte big-endian length followed
//! by that many bytes of JSON.
//!
//! ```text
//! -> [len][{"event": {...}, "context": {"requestId": "abc-123"}}]
//! <- [len][{"statusCode":200,"body":"{\"message\": \"...\"}"}]
//! ```
//!
//! A handler binary only needs:
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     let config = RuntimeConfig::from_env();
//!     telemetry::init(&config)?;
//!     ipc::serve_stdio(&handler::handle, &config)?;
//!     Ok(())
//! }
//! ```

use std::io::{self, Read, Write};

use crate::config::RuntimeConfig;
use crate::event::Invocation;
use crate::handler::Handler;
use crate::{HandlerError, Response};

/// Read one invocation frame.
///
/// Returns `Ok(None)` when the stream ends at a frame boundary; ending inside
/// the length prefix or the payload is an [`HandlerError::Ipc`]. A frame larger
/// than `max_payload_bytes` is drained so the stream stays in sync, then
/// reported as [`HandlerError::PayloadTooLarge`].
pub fn read_invocation<R: Read>(
    reader: &mut R,
    max_payload_bytes: usize,
) -> Result<Option<Invocation>, HandlerError> {
    // Read length prefix (4 bytes, big-endian). Only EOF before its first
    // byte is a frame boundary.
    let mut len_buf = [0u8; 4];
    let mut filled = 0;
    while filled < len_buf.len() {
        match reader.read(&mut len_buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(HandlerError::Ipc("Stream closed inside a length prefix".into())),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                return Err(HandlerError::Ipc(format!(
                    "Failed to read length prefix: {}",
                    e
                )))
            }
        }
    }

    let len = u32::from_be_bytes(len_buf) as usize;

    if len > max_payload_bytes {
        let drained = io::copy(&mut Read::take(&mut *reader, len as u64), &mut io::sink())
            .map_err(|e| HandlerError::Ipc(format!("Failed to discard payload: {}", e)))?;
        if drained < len as u64 {
            return Err(HandlerError::Ipc("Stream closed inside an oversized payload".into()));
        }
        return Err(HandlerError::PayloadTooLarge {
            size: len,
            limit: max_payload_bytes,
        });
    }

    // Read the JSON payload
    let mut payload = vec![0u8; len];
    reader
        .read_exact(&mut payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read payload: {}", e)))?;

    serde_json::from_slice(&payload)
        .map(Some)
        .map_err(|e| HandlerError::InvalidPayload(format!("Failed to parse invocation: {}", e)))
}

/// Write one response frame and flush it.
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(response)?;

    let len = u32::try_from(payload.len())
        .map_err(|_| HandlerError::Ipc(format!("Response of {} bytes cannot be framed", payload.len())))?;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;

    writer
        .write_all(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))?;

    writer
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))?;

    Ok(())
}

/// Answer invocations until the input stream ends.
///
/// Oversized and undecodable frames are answered with an error response and
/// the loop keeps going; I/O failures end it. Returns the number of frames
/// answered.
pub fn serve<R, W, H>(
    reader: &mut R,
    writer: &mut W,
    handler: &H,
    config: &RuntimeConfig,
) -> Result<u64, HandlerError>
where
    R: Read,
    W: Write,
    H: Handler + ?Sized,
{
    let mut answered = 0u64;

    loop {
        let response = match read_invocation(reader, config.max_payload_bytes) {
            Ok(Some(invocation)) => {
                let span = tracing::info_span!(
                    "invocation",
                    request_id = invocation.context.request_id().unwrap_or("-")
                );
                let _enter = span.enter();

                let response = handler.handle(&invocation.event, &invocation.context);
                tracing::debug!(status_code = response.status_code, "Invocation handled");
                response
            }
            Ok(None) => {
                tracing::info!(answered, "Invocation stream closed");
                return Ok(answered);
            }
            Err(err @ (HandlerError::InvalidPayload(_) | HandlerError::PayloadTooLarge { .. })) => {
                tracing::warn!(error = %err, "Rejected invocation");
                err.to_response()
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to read invocation");
                return Err(err);
            }
        };

        if let Err(err) = write_response(writer, &response) {
            tracing::error!(error = %err, "Failed to send response");
            return Err(err);
        }
        answered += 1;
    }
}

/// Run [`serve`] over the process's stdin and stdout.
pub fn serve_stdio<H: Handler + ?Sized>(
    handler: &H,
    config: &RuntimeConfig,
) -> Result<u64, HandlerError> {
    let mut reader = io::stdin().lock();
    let mut writer = io::stdout().lock();
    serve(&mut reader, &mut writer, handler, config)
}
