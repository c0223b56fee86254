use tracing::debug;

use crate::{parser, record::NdefRecord};

/// An ordered, never empty sequence of records, the unit a tag stores
/// and exchanges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NdefError {
    #[error("an NDEF message must contain at least one record")]
    EmptyMessage,

    #[error("record type of {0} bytes does not fit its one byte length field")]
    TypeTooLong(usize),

    #[error("record id of {0} bytes does not fit its one byte length field")]
    IdTooLong(usize),

    #[error("payload of {0} bytes does not fit its four byte length field")]
    PayloadTooLong(usize),

    #[error("not a well-formed NDEF message: {0}")]
    Parse(String),
}

pub type Error = NdefError;
type Result<T, E = Error> = std::result::Result<T, E>;

impl NdefMessage {
    pub fn single(record: NdefRecord) -> Self {
        Self {
            records: vec![record],
        }
    }

    /// The message an erase writes: a single record with every field empty.
    pub fn empty() -> Self {
        Self::single(NdefRecord::empty())
    }

    pub fn from_records(records: Vec<NdefRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(NdefError::EmptyMessage);
        }

        Ok(Self { records })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        debug!("parsing {} byte NDEF message", bytes.len());

        let mut stream = parser::stream::new(bytes);
        let records = parser::parse_message(&mut stream)
            .map_err(|error| NdefError::Parse(error.to_string()))?;

        Self::from_records(records)
    }

    /// Serialize for writing to a tag. The first record carries the
    /// message begin flag, the last the message end flag. Fails when a
    /// record's type, id or payload is larger than its wire length
    /// field can declare.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let last = self.records.len() - 1;

        for (position, record) in self.records.iter().enumerate() {
            record.write_wire(position == 0, position == last, &mut out)?;
        }

        Ok(out)
    }

    /// Every record decoded in order and concatenated, no separators.
    pub fn display_text(&self) -> String {
        self.records.iter().map(NdefRecord::display_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::payload::PayloadKind;

    #[test]
    fn erase_message_bytes_are_canonical() {
        assert_eq!(
            NdefMessage::empty().to_bytes().unwrap(),
            vec![0xD0, 0x00, 0x00]
        );
    }

    #[test]
    fn single_text_message_bytes_are_canonical() {
        let message = NdefMessage::single(NdefRecord::text("Hello", "en"));

        assert_eq!(
            message.to_bytes().unwrap(),
            vec![0xD1, 0x01, 0x08, 0x54, 0x02, b'e', b'n', b'H', b'e', b'l', b'l', b'o']
        );
    }

    #[test]
    fn from_records_rejects_empty_list() {
        assert_eq!(
            NdefMessage::from_records(Vec::new()),
            Err(NdefError::EmptyMessage)
        );
    }

    #[test]
    fn single_record_round_trips_for_every_kind() {
        for kind in [
            PayloadKind::Text,
            PayloadKind::Url,
            PayloadKind::Phone,
            PayloadKind::Email,
        ] {
            let record = NdefRecord::encode(kind, "payload-data", "en");
            let message = NdefMessage::single(record);

            let parsed = NdefMessage::from_bytes(&message.to_bytes().unwrap()).unwrap();
            assert_eq!(parsed, message);
        }
    }

    #[test]
    fn long_payload_round_trips() {
        let message = NdefMessage::single(NdefRecord::text(&"x".repeat(400), "en"));
        let bytes = message.to_bytes().unwrap();

        // flag byte has the short record bit clear
        assert_eq!(bytes[0], 0xC1);
        assert_eq!(NdefMessage::from_bytes(&bytes).unwrap(), message);
    }

    #[test]
    fn oversized_record_type_fails_to_encode() {
        // "mailto:" plus the address lands in the type field, which only
        // gets a single length byte on the wire
        let message = NdefMessage::single(NdefRecord::email(&"a".repeat(300)));

        assert_eq!(message.to_bytes(), Err(NdefError::TypeTooLong(307)));
    }

    #[test]
    fn record_with_id_round_trips() {
        let mut record = NdefRecord::text("hi", "en");
        record.id = Some(vec![0x01, 0x02, 0x03]);

        let message = NdefMessage::single(record);
        assert_eq!(
            NdefMessage::from_bytes(&message.to_bytes().unwrap()).unwrap(),
            message
        );
    }

    #[test]
    fn multi_record_message_round_trips_and_flags_ends() {
        let records = vec![
            NdefRecord::text("one", "en"),
            NdefRecord::text("two", "en"),
            NdefRecord::text("three", "en"),
        ];
        let message = NdefMessage::from_records(records).unwrap();
        let bytes = message.to_bytes().unwrap();

        // first record: MB set, ME clear; middle: neither; last: ME set
        assert_eq!(bytes[0] & 0xC0, 0x80);
        assert_eq!(NdefMessage::from_bytes(&bytes).unwrap(), message);
    }

    #[test]
    fn display_text_concatenates_records_without_separator() {
        let message = NdefMessage::from_records(vec![
            NdefRecord::text("Hello", "en"),
            NdefRecord::text(" World", "en"),
        ])
        .unwrap();

        assert_eq!(message.display_text(), "Hello World");
    }

    #[test]
    fn erase_message_displays_placeholder() {
        assert_eq!(NdefMessage::empty().display_text(), "No data found");
    }

    #[test]
    fn truncated_bytes_fail_to_parse() {
        let mut bytes = NdefMessage::single(NdefRecord::text("Hello", "en"))
            .to_bytes()
            .unwrap();
        bytes.truncate(5);

        assert!(matches!(
            NdefMessage::from_bytes(&bytes),
            Err(NdefError::Parse(_))
        ));
    }

    #[test]
    fn empty_bytes_fail_to_parse() {
        assert!(matches!(
            NdefMessage::from_bytes(&[]),
            Err(NdefError::Parse(_))
        ));
    }
}
