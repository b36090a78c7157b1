use crate::core::types::ReferenceKind;

/// A snapshot artifact mentioned in a documentation page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractedReference {
    /// Matched resource name, e.g. `foo.snap.svg`
    pub resource: String,

    /// Chart or audio, from the trailing extension
    pub kind: ReferenceKind,

    /// `resource` with its final extension removed, e.g. `foo.snap`
    pub underlying_key: String,
}

impl ExtractedReference {
    pub fn new(resource: impl Into<String>, kind: ReferenceKind) -> Self {
        let resource = resource.into();
        let underlying_key = match resource.rsplit_once('.') {
            Some((stem, _)) => stem.to_string(),
            None => resource.clone(),
        };
        Self {
            resource,
            kind,
            underlying_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underlying_key_strips_last_extension() {
        let reference = ExtractedReference::new("foo.snap.svg", ReferenceKind::Chart);
        assert_eq!(reference.underlying_key, "foo.snap");

        let reference = ExtractedReference::new("a.b@audio.snap.wav", ReferenceKind::Audio);
        assert_eq!(reference.underlying_key, "a.b@audio.snap");
    }
}
