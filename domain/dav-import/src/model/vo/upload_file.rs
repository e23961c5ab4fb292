/// A local file handed over to the upload capability.
///
/// The import client never inspects it, it is moved into the uploader as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content,
        }
    }

    /// Size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
