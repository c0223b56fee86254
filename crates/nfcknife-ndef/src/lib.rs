//! NDEF record codec: encoding user payloads into single-record messages
//! and decoding tag bytes back into display text.

uniffi::setup_scaffolding!();

pub mod ffi;
pub mod header;
pub mod message;
pub mod ndef_type;
pub mod parser;
pub mod payload;
pub mod record;

pub use message::{NdefError, NdefMessage};
pub use ndef_type::TypeNameFormat;
pub use payload::PayloadKind;
pub use record::NdefRecord;
