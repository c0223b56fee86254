use strum::IntoEnumIterator as _;

use crate::payload::PayloadKind;

/// Payload kinds for the write screen's selector, in display order.
#[uniffi::export]
pub fn payload_kinds() -> Vec<PayloadKind> {
    PayloadKind::iter().collect()
}

#[uniffi::export]
pub fn payload_kind_label(kind: PayloadKind) -> String {
    kind.to_string()
}
