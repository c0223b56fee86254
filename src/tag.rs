pub mod handler;
pub mod session;

/// How the platform classified the detected tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum TagTechnology {
    /// NDEF formatted, readable and possibly writable
    Ndef,
    /// blank but formattable, becomes NDEF once written
    NdefFormatable,
    /// no NDEF access at all
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TransportError {
    #[error("tag I/O failed: {0}")]
    Io(String),

    #[error("tag left the field: {0}")]
    TagLost(String),

    #[error("tag operation timed out: {0}")]
    Timeout(String),
}

// Callback interface the platform implements for the duration of a
// single tag encounter
#[uniffi::export(callback_interface)]
pub trait TagTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Physical tag identifier bytes.
    fn tag_id(&self) -> Vec<u8>;

    fn technology(&self) -> TagTechnology;

    fn connect(&self) -> Result<(), TransportError>;

    fn close(&self) -> Result<(), TransportError>;

    /// Whether the NDEF interface accepts writes. Meaningless for
    /// formattable tags.
    fn is_writable(&self) -> bool;

    /// NDEF capacity in bytes.
    fn max_size(&self) -> u32;

    /// Raw bytes of the tag's current NDEF message, `None` when the tag
    /// holds no message.
    fn read_message(&self) -> Result<Option<Vec<u8>>, TransportError>;

    fn write_message(&self, message: Vec<u8>) -> Result<(), TransportError>;

    /// Format a blank tag, writing `message` as its initial content.
    fn format(&self, message: Vec<u8>) -> Result<(), TransportError>;
}

/// Tag id bytes as colon separated uppercase hex, e.g. "04:A1:B2:C3".
pub fn format_tag_id(id: &[u8]) -> String {
    id.iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<String>>()
        .join(":")
}
