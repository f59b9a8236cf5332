use std::fmt;

const DIGEST_HEX_LEN: usize = 64;

/// Identifier of a tracked test resource, such as a deployed control plane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wrap an id assigned by an external deployer.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Derive an id from resource content: the blake3 hex digest of `content`.
    pub fn from_content(content: &[u8]) -> Self {
        Self(blake3::hash(content).to_hex().to_string())
    }

    /// True when the id has the shape of a content-derived digest.
    pub fn is_content_derived(&self) -> bool {
        self.0.len() == DIGEST_HEX_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 characters, used for display in lifecycle logs.
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(12)
            .map_or(self.0.len(), |(i, _)| i);
        &self.0[..end]
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_ids_are_stable_digests() {
        let a = ResourceId::from_content(b"suite-a:istio-system");
        let b = ResourceId::from_content(b"suite-a:istio-system");
        let c = ResourceId::from_content(b"suite-b:istio-system");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.is_content_derived());
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn external_ids_are_not_content_derived() {
        assert!(!ResourceId::new("istiod-7f9c").is_content_derived());
        assert!(!ResourceId::new("A".repeat(64)).is_content_derived());
    }

    #[test]
    fn short_truncates_long_ids() {
        let id = ResourceId::from_content(b"x");
        assert_eq!(id.short().len(), 12);
        assert!(id.as_str().starts_with(id.short()));
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn short_keeps_short_ids() {
        assert_eq!(ResourceId::new("abc").short(), "abc");
        assert_eq!(ResourceId::new("").short(), "");
    }
}
