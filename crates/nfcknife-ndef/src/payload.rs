use strum::EnumIter;

/// The payload kinds the write screen offers, in display order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, uniffi::Enum, EnumIter, derive_more::Display,
)]
pub enum PayloadKind {
    #[display("Text")]
    Text,
    #[display("URL")]
    Url,
    #[display("Phone Number")]
    Phone,
    #[display("Email")]
    Email,
}

/// Well-known record type markers (NFC Forum RTD)
pub const RTD_TEXT: &[u8] = b"T";
pub const RTD_URI: &[u8] = b"U";

/// URI abbreviation prefixes, indexed by the payload's first byte. Only the
/// web prefixes are recognized; every other code decodes as no prefix.
pub const URI_PREFIXES: &[&str] = &[
    "",             // 0x00 - no prepending
    "http://www.",  // 0x01
    "https://www.", // 0x02
    "http://",      // 0x03
    "https://",     // 0x04
];

pub fn uri_prefix(code: u8) -> &'static str {
    URI_PREFIXES.get(code as usize).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn recognized_prefix_codes() {
        assert_eq!(uri_prefix(0x00), "");
        assert_eq!(uri_prefix(0x01), "http://www.");
        assert_eq!(uri_prefix(0x02), "https://www.");
        assert_eq!(uri_prefix(0x03), "http://");
        assert_eq!(uri_prefix(0x04), "https://");
    }

    #[test]
    fn unrecognized_prefix_codes_decode_as_no_prefix() {
        assert_eq!(uri_prefix(0x05), "");
        assert_eq!(uri_prefix(0x23), "");
        assert_eq!(uri_prefix(0xFF), "");
    }

    #[test]
    fn payload_kinds_display_in_screen_order() {
        let labels: Vec<String> = PayloadKind::iter().map(|kind| kind.to_string()).collect();
        assert_eq!(labels, ["Text", "URL", "Phone Number", "Email"]);
    }
}
