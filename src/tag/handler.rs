use tap::TapFallible as _;
use tracing::{debug, warn};

use crate::ndef::PayloadKind;
use crate::tag::session::{SessionError, TagSession};
use crate::tag::{TagTransport, format_tag_id};

/// Supplies the device's active language code (e.g. "en") for text
/// records; implemented by the platform side.
#[uniffi::export(callback_interface)]
pub trait LocaleProvider: Send + Sync + std::fmt::Debug + 'static {
    fn language_code(&self) -> String;
}

/// The operation the user armed before tapping a tag. Write carries its
/// payload so an encounter needs no further input.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum TagOperation {
    Read,
    Write { kind: PayloadKind, text: String },
    Erase,
}

/// What one tag encounter produced, ready for the UI to render.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct OperationOutcome {
    pub success: bool,
    pub message: String,
    pub decoded_text: Option<String>,
    pub tag_id: Option<String>,
}

// Main interface exposed to the platform
#[derive(Debug, uniffi::Object)]
pub struct TagHandler {
    locale: Box<dyn LocaleProvider>,
}

#[uniffi::export]
impl TagHandler {
    #[uniffi::constructor]
    pub fn new(locale: Box<dyn LocaleProvider>) -> Self {
        crate::logging::init();
        Self { locale }
    }

    /// Run `operation` against a freshly detected tag. Every call
    /// attempts exactly one operation and yields exactly one outcome,
    /// with the tag connection released before it returns.
    pub fn handle_tag(
        &self,
        operation: TagOperation,
        transport: Box<dyn TagTransport>,
    ) -> OperationOutcome {
        let tag_id = format_tag_id(&transport.tag_id());
        debug!("tag {tag_id} detected, operation: {operation:?}");

        match operation {
            TagOperation::Read => self.read(tag_id, transport),
            TagOperation::Write { kind, text } => self.write(tag_id, kind, &text, transport),
            TagOperation::Erase => self.erase(tag_id, transport),
        }
    }
}

impl TagHandler {
    fn read(&self, tag_id: String, transport: Box<dyn TagTransport>) -> OperationOutcome {
        match TagSession::connect(transport)
            .and_then(TagSession::read)
            .tap_err(|error| warn!("tag read failed: {error}"))
        {
            Ok(text) => OperationOutcome {
                success: true,
                message: "Data Read Success".to_string(),
                decoded_text: Some(text),
                tag_id: Some(tag_id),
            },
            Err(error) => OperationOutcome::failure("Data Read Failed", &error, tag_id),
        }
    }

    fn write(
        &self,
        tag_id: String,
        kind: PayloadKind,
        text: &str,
        transport: Box<dyn TagTransport>,
    ) -> OperationOutcome {
        let language = self.locale.language_code();

        match TagSession::connect(transport)
            .and_then(|session| session.write(kind, text, &language))
            .tap_err(|error| warn!("tag write failed: {error}"))
        {
            Ok(()) => OperationOutcome::success("Data Write Success", tag_id),
            Err(error) => OperationOutcome::failure("Data Write Failed", &error, tag_id),
        }
    }

    fn erase(&self, tag_id: String, transport: Box<dyn TagTransport>) -> OperationOutcome {
        match TagSession::connect(transport)
            .and_then(TagSession::erase)
            .tap_err(|error| warn!("tag erase failed: {error}"))
        {
            Ok(()) => OperationOutcome::success("Data Erase Success", tag_id),
            Err(error) => OperationOutcome::failure("Data Erase Failed", &error, tag_id),
        }
    }
}

impl OperationOutcome {
    fn success(message: &str, tag_id: String) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            decoded_text: None,
            tag_id: Some(tag_id),
        }
    }

    fn failure(what: &str, error: &SessionError, tag_id: String) -> Self {
        Self {
            success: false,
            message: format!("{what}: {error}"),
            decoded_text: None,
            tag_id: Some(tag_id),
        }
    }
}
