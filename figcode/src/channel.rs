use std::io::Write;

use tracing::warn;

use crate::OutboundMessage;

/// Outbound side of the UI message channel.
///
/// Delivery is at-most-once: a message that cannot be delivered is logged
/// and dropped.
pub trait UiChannel {
    fn post(&mut self, message: OutboundMessage);
}

/// Collects messages in memory.
impl UiChannel for Vec<OutboundMessage> {
    fn post(&mut self, message: OutboundMessage) {
        self.push(message);
    }
}

/// Writes each message as one JSON line.
#[derive(Debug)]
pub struct JsonLines<W: Write> {
    writer: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> UiChannel for JsonLines<W> {
    fn post(&mut self, message: OutboundMessage) {
        let result = serde_json::to_writer(&mut self.writer, &message)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"))
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to deliver UI message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_lines() {
        let mut channel = JsonLines::new(Vec::new());
        channel.post(OutboundMessage::Empty);
        channel.post(OutboundMessage::Error {
            data: "failed".into(),
        });

        let out = String::from_utf8(channel.into_inner()).unwrap();
        assert_eq!(
            out,
            "{\"type\":\"empty\"}\n{\"type\":\"error\",\"data\":\"failed\"}\n"
        );
    }
}
