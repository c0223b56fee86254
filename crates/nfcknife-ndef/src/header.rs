use crate::{message::NdefError, ndef_type::TypeNameFormat, record::NdefRecord};

const MESSAGE_BEGIN: u8 = 0b1000_0000;
const MESSAGE_END: u8 = 0b0100_0000;
const CHUNKED: u8 = 0b0010_0000;
const SHORT_RECORD: u8 = 0b0001_0000;
const HAS_ID_LENGTH: u8 = 0b0000_1000;

/// Field level view of a single record's wire header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub type_name_format: TypeNameFormat,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}

impl NdefHeader {
    /// Header for a record serialized at the given message position.
    /// Chunking is never produced, payloads up to 255 bytes use the
    /// short record form. Fails when a field is larger than its wire
    /// length field can declare, so every emitted header matches the
    /// bytes that follow it.
    pub(crate) fn for_record(
        record: &NdefRecord,
        message_begin: bool,
        message_end: bool,
    ) -> Result<Self, NdefError> {
        let type_length = u8::try_from(record.record_type.len())
            .map_err(|_| NdefError::TypeTooLong(record.record_type.len()))?;

        let payload_length = u32::try_from(record.payload.len())
            .map_err(|_| NdefError::PayloadTooLong(record.payload.len()))?;

        let id_length = match &record.id {
            Some(id) => Some(u8::try_from(id.len()).map_err(|_| NdefError::IdTooLong(id.len()))?),
            None => None,
        };

        Ok(Self {
            message_begin,
            message_end,
            chunked: false,
            short_record: payload_length <= u8::MAX as u32,
            has_id_length: record.id.is_some(),
            type_name_format: record.type_name_format,
            type_length,
            payload_length,
            id_length,
        })
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        out.push(self.flag_byte());
        out.push(self.type_length);

        if self.short_record {
            out.push(self.payload_length as u8);
        } else {
            out.extend_from_slice(&self.payload_length.to_be_bytes());
        }

        if let Some(id_length) = self.id_length {
            out.push(id_length);
        }
    }

    fn flag_byte(&self) -> u8 {
        let mut byte = self.type_name_format.wire_code();

        if self.message_begin {
            byte |= MESSAGE_BEGIN;
        }

        if self.message_end {
            byte |= MESSAGE_END;
        }

        if self.chunked {
            byte |= CHUNKED;
        }

        if self.short_record {
            byte |= SHORT_RECORD;
        }

        if self.has_id_length {
            byte |= HAS_ID_LENGTH;
        }

        byte
    }
}
