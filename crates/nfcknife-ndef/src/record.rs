use crate::{
    header::NdefHeader,
    message::NdefError,
    ndef_type::TypeNameFormat,
    payload::{PayloadKind, RTD_TEXT, RTD_URI, uri_prefix},
};

/// A single NDEF record, position independent. Message placement flags
/// live in the wire header and are chosen at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefRecord {
    pub type_name_format: TypeNameFormat,
    pub record_type: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Encode user input of the given kind into a record.
    pub fn encode(kind: PayloadKind, data: &str, language: &str) -> Self {
        match kind {
            PayloadKind::Text => Self::text(data, language),
            PayloadKind::Url => Self::url(data),
            PayloadKind::Phone => Self::phone(data),
            PayloadKind::Email => Self::email(data),
        }
    }

    pub fn text(text: &str, language: &str) -> Self {
        let language = language.as_bytes();

        // status byte: bit 7 clear means UTF-8, low bits hold the
        // language code length
        let mut payload = Vec::with_capacity(1 + language.len() + text.len());
        payload.push(language.len() as u8);
        payload.extend_from_slice(language);
        payload.extend_from_slice(text.as_bytes());

        Self {
            type_name_format: TypeNameFormat::WellKnown,
            record_type: RTD_TEXT.to_vec(),
            id: None,
            payload,
        }
    }

    /// The URL is written out as-is, no abbreviation byte. The prefix
    /// table only participates in decoding.
    pub fn url(url: &str) -> Self {
        Self {
            type_name_format: TypeNameFormat::WellKnown,
            record_type: RTD_URI.to_vec(),
            id: None,
            payload: url.as_bytes().to_vec(),
        }
    }

    pub fn email(address: &str) -> Self {
        Self::absolute_uri(format!("mailto:{address}"))
    }

    pub fn phone(number: &str) -> Self {
        Self::absolute_uri(format!("tel:{number}"))
    }

    /// The URI, scheme included, occupies the type field and the payload
    /// stays empty.
    fn absolute_uri(uri: String) -> Self {
        Self {
            type_name_format: TypeNameFormat::AbsoluteUri,
            record_type: uri.into_bytes(),
            id: None,
            payload: Vec::new(),
        }
    }

    /// The record an erased tag holds: every field empty.
    pub fn empty() -> Self {
        Self {
            type_name_format: TypeNameFormat::Empty,
            record_type: Vec::new(),
            id: None,
            payload: Vec::new(),
        }
    }

    /// Human readable rendition of this record's content. Total: any
    /// record decodes to some string, unreadable ones to a placeholder.
    pub fn display_text(&self) -> String {
        // absolute URI records carry their content in the type field and
        // an empty payload, so they are matched before the empty payload
        // check below
        if self.type_name_format == TypeNameFormat::AbsoluteUri && !self.record_type.is_empty() {
            return String::from_utf8_lossy(&self.record_type).into_owned();
        }

        if self.payload.is_empty() {
            return "No data found".to_string();
        }

        match self.type_name_format {
            TypeNameFormat::WellKnown if self.record_type == RTD_TEXT => self.text_payload(),
            TypeNameFormat::WellKnown if self.record_type == RTD_URI => self.uri_payload(),
            _ => "Unknown NDEF record type".to_string(),
        }
    }

    fn text_payload(&self) -> String {
        // mask off the UTF-16 flag bit, text is decoded as UTF-8 either way
        let language_code_length = (self.payload[0] & 0x3F) as usize;

        match self.payload.get(1 + language_code_length..) {
            Some(text) => String::from_utf8_lossy(text).into_owned(),
            None => "Invalid NDEF text data".to_string(),
        }
    }

    fn uri_payload(&self) -> String {
        let prefix = uri_prefix(self.payload[0]);
        let rest = String::from_utf8_lossy(&self.payload[1..]);
        format!("{prefix}{rest}")
    }

    pub(crate) fn write_wire(
        &self,
        message_begin: bool,
        message_end: bool,
        out: &mut Vec<u8>,
    ) -> Result<(), NdefError> {
        NdefHeader::for_record(self, message_begin, message_end)?.write_into(out);
        out.extend_from_slice(&self.record_type);

        if let Some(id) = &self.id {
            out.extend_from_slice(id);
        }

        out.extend_from_slice(&self.payload);
        Ok(())
    }
}
