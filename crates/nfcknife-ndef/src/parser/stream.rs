use winnow::Bytes;

/// Complete-input byte stream. Tag reads hand over the whole message at
/// once, so there is no partial parsing state to resume.
pub type Stream<'i> = &'i Bytes;

pub fn new(bytes: &[u8]) -> Stream<'_> {
    Bytes::new(bytes)
}
