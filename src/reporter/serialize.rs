pub mod mime_type {
    use mime::Mime;
    use serde::Serializer;

    /// Writes only the essence (`type/subtype`), parameters are dropped.
    pub fn serialize<S>(mime: &Mime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(mime.essence_str())
    }
}
