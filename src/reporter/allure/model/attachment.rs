use mime::Mime;
use serde_derive::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    name: String,
    source: String,
    #[serde(with = "crate::reporter::serialize::mime_type")]
    r#type: Mime,
}

impl Attachment {
    pub fn new(name: String, source: String, r#type: Mime) -> Self {
        Self {
            name,
            source,
            r#type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of the attachment, relative to the results directory.
    pub fn source(&self) -> &str {
        &self.source
    }
}
