// ============================================================================
// playprobe-core/src/external/ipc.rs
// ============================================================================
//
// JSON IPC TRANSPORT: Newline-Delimited JSON over a Unix Domain Socket
//
// The player speaks one JSON object per line. Requests carry a numeric
// `request_id` which the player echoes in its reply; unsolicited event lines
// (`{"event": ...}`) are interleaved with replies and are skipped here.
//
// KEY COMPONENTS:
// - IpcTransport: Trait for a request/response channel with a deadline
// - UnixSocketTransport: Concrete implementation over `UnixStream`
//
// Every round trip is bounded. A reply that arrives after its request timed
// out carries a stale `request_id` and is discarded by the next request.

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, timeout_error};

// ---- External crate imports ----
use serde_json::{Value, json};

// ---- Standard library imports ----
use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::time::{Duration, Instant};

/// A request/response channel to the player.
pub trait IpcTransport {
    /// Sends `command` (name followed by arguments) and waits at most `timeout`
    /// for the matching reply. Returns the reply's `data` field.
    fn request(&mut self, command: &[Value], timeout: Duration) -> CoreResult<Value>;
}

/// JSON IPC over a connected Unix domain socket.
#[derive(Debug)]
pub struct UnixSocketTransport {
    reader: BufReader<UnixStream>,
    writer: UnixStream,
    next_request_id: u64,
    // Bytes of a line whose read was cut short by a timeout.
    pending: String,
}

impl UnixSocketTransport {
    /// Connects to a listening socket.
    pub fn connect(path: &Path) -> CoreResult<Self> {
        let stream = UnixStream::connect(path)?;
        Self::from_stream(stream)
    }

    /// Wraps an already connected stream.
    pub fn from_stream(stream: UnixStream) -> CoreResult<Self> {
        let writer = stream.try_clone()?;
        Ok(Self {
            reader: BufReader::new(stream),
            writer,
            next_request_id: 1,
            pending: String::new(),
        })
    }

    fn send(&mut self, command: &[Value], request_id: u64, timeout: Duration) -> CoreResult<()> {
        let mut line = serde_json::to_string(&json!({
            "command": command,
            "request_id": request_id,
        }))?;
        line.push('\n');

        self.writer.set_write_timeout(Some(timeout))?;
        self.writer.write_all(line.as_bytes()).map_err(|e| {
            if is_timeout(&e) {
                timeout_error(format!("writing {}", command_name(command)), timeout)
            } else {
                CoreError::Io(e)
            }
        })?;
        self.writer.flush()?;
        log::trace!("ipc >> {}", line.trim_end());
        Ok(())
    }

    /// Reads one complete line, honouring `deadline`.
    fn read_line(&mut self, deadline: Instant, operation: &str, timeout: Duration) -> CoreResult<String> {
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(timeout_error(operation, timeout));
            }
            self.reader.get_ref().set_read_timeout(Some(remaining))?;

            match self.reader.read_line(&mut self.pending) {
                Ok(0) => {
                    return Err(CoreError::Ipc("player closed the IPC connection".to_string()));
                }
                Ok(_) if self.pending.ends_with('\n') => {
                    let line = std::mem::take(&mut self.pending);
                    return Ok(line);
                }
                // Partial line without newline; keep reading until the deadline.
                Ok(_) => continue,
                Err(e) if is_timeout(&e) => return Err(timeout_error(operation, timeout)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CoreError::Io(e)),
            }
        }
    }
}

impl IpcTransport for UnixSocketTransport {
    fn request(&mut self, command: &[Value], timeout: Duration) -> CoreResult<Value> {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        let operation = command_name(command);
        let deadline = Instant::now() + timeout;

        self.send(command, request_id, timeout)?;

        loop {
            let line = self.read_line(deadline, &operation, timeout)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            log::trace!("ipc << {}", trimmed);

            let message: Value = serde_json::from_str(trimmed)
                .map_err(|e| CoreError::Ipc(format!("malformed reply '{trimmed}': {e}")))?;

            if message.get("event").is_some() {
                continue;
            }
            match message.get("request_id").and_then(Value::as_u64) {
                Some(id) if id == request_id => return parse_reply(message),
                other => {
                    log::debug!(
                        "Discarding reply for request {:?} while waiting for {}",
                        other,
                        request_id
                    );
                }
            }
        }
    }
}

/// Extracts `data` from a reply, or the player's error string.
pub(crate) fn parse_reply(mut message: Value) -> CoreResult<Value> {
    let status = message
        .get("error")
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::Ipc(format!("reply without status: {message}")))?;

    if status == "success" {
        Ok(message.get_mut("data").map(Value::take).unwrap_or(Value::Null))
    } else {
        Err(CoreError::Ipc(status.to_string()))
    }
}

fn command_name(command: &[Value]) -> String {
    match command.first() {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => "<empty command>".to_string(),
    }
}

fn is_timeout(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_success_with_data() {
        let reply = json!({"error": "success", "data": "h264", "request_id": 3});
        assert_eq!(parse_reply(reply).unwrap(), json!("h264"));
    }

    #[test]
    fn test_parse_reply_success_without_data() {
        let reply = json!({"error": "success", "request_id": 3});
        assert_eq!(parse_reply(reply).unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_reply_player_error() {
        let reply = json!({"error": "property unavailable", "request_id": 3});
        match parse_reply(reply) {
            Err(CoreError::Ipc(msg)) => assert_eq!(msg, "property unavailable"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_command_name() {
        assert_eq!(command_name(&[json!("loadfile"), json!("a.mp4")]), "loadfile");
        assert_eq!(command_name(&[]), "<empty command>");
    }
}
