// Re-export the nfcknife_ndef crate
pub use nfcknife_ndef::*;
