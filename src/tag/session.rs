use tracing::{debug, warn};

use crate::ndef::{NdefError, NdefMessage, NdefRecord, PayloadKind};
use crate::tag::{TagTechnology, TagTransport, TransportError};

// deliberately distinct from the codec's lowercase "No data found"
// empty-payload placeholder
const NO_MESSAGE: &str = "No Data found";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("tag supports neither NDEF nor NDEF formatting")]
    Connection,

    #[error("tag is read-only")]
    NotWritable,

    #[error("message needs {needed} bytes but the tag holds {capacity}")]
    InsufficientCapacity { needed: u32, capacity: u32 },

    #[error("message cannot be encoded: {0}")]
    Encode(#[from] NdefError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

type Error = SessionError;
type Result<T, E = Error> = std::result::Result<T, E>;

/// A connected tag, good for exactly one operation. Methods consume the
/// session, and dropping it closes the underlying transport, so every
/// exit path releases the tag exactly once.
#[derive(Debug)]
pub struct TagSession {
    transport: Box<dyn TagTransport>,
    technology: TagTechnology,
}

impl TagSession {
    /// Connect to the tag's NDEF interface, or its formattable fallback.
    pub fn connect(transport: Box<dyn TagTransport>) -> Result<Self> {
        let technology = transport.technology();

        if technology == TagTechnology::Unsupported {
            return Err(SessionError::Connection);
        }

        // a failed connect leaves nothing open, so the transport is not
        // wrapped in a session yet
        transport.connect()?;
        debug!("connected to tag, technology: {technology:?}");

        Ok(Self {
            transport,
            technology,
        })
    }

    /// Read and decode the tag's message. A tag without one, or with
    /// bytes that do not form a well-formed NDEF message, reads as
    /// "No Data found".
    pub fn read(self) -> Result<String> {
        if self.technology == TagTechnology::NdefFormatable {
            // blank tags have no NDEF interface to read from
            return Ok(NO_MESSAGE.to_string());
        }

        let Some(bytes) = self.transport.read_message()? else {
            return Ok(NO_MESSAGE.to_string());
        };

        debug!("read {} bytes: {}", bytes.len(), hex::encode(&bytes));

        match NdefMessage::from_bytes(&bytes) {
            Ok(message) => Ok(message.display_text()),
            Err(error) => {
                warn!("tag content is not a readable NDEF message: {error}");
                Ok(NO_MESSAGE.to_string())
            }
        }
    }

    /// Encode the payload into a single record message and write it. A
    /// record the wire format cannot represent fails here, before any
    /// bytes reach the tag.
    pub fn write(self, kind: PayloadKind, text: &str, language: &str) -> Result<()> {
        let record = NdefRecord::encode(kind, text, language);
        let bytes = NdefMessage::single(record).to_bytes()?;

        // formattable tags report no capacity before formatting
        if self.technology == TagTechnology::Ndef {
            let capacity = self.transport.max_size();
            let needed = bytes.len() as u32;

            if needed > capacity {
                return Err(SessionError::InsufficientCapacity { needed, capacity });
            }
        }

        self.write_or_format(bytes)
    }

    /// Write the distinguished empty message, clearing the tag.
    pub fn erase(self) -> Result<()> {
        self.write_or_format(NdefMessage::empty().to_bytes()?)
    }

    fn write_or_format(self, bytes: Vec<u8>) -> Result<()> {
        match self.technology {
            TagTechnology::Ndef => {
                if !self.transport.is_writable() {
                    return Err(SessionError::NotWritable);
                }

                debug!("writing {} bytes", bytes.len());
                self.transport.write_message(bytes)?;
            }

            TagTechnology::NdefFormatable => {
                debug!("formatting tag with {} byte message", bytes.len());
                self.transport.format(bytes)?;
            }

            TagTechnology::Unsupported => unreachable!("rejected at connect"),
        }

        Ok(())
    }
}

impl Drop for TagSession {
    fn drop(&mut self) {
        if let Err(error) = self.transport.close() {
            warn!("failed to close tag connection: {error}");
        }
    }
}
