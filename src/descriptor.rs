/// The derived version descriptor for HEAD.
///
/// Holds the release tag (already defaulted by the caller when history has
/// none), the number of commits between the tagged commit and HEAD, and the
/// full HEAD identifier. Constructed once per invocation and rendered
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDescriptor {
    pub tag: String,
    pub distance: usize,
    pub head: String,
}

impl VersionDescriptor {
    pub fn new(tag: impl Into<String>, distance: usize, head: impl Into<String>) -> Self {
        VersionDescriptor {
            tag: tag.into(),
            distance,
            head: head.into(),
        }
    }

    /// Render the descriptor string.
    ///
    /// At distance 0 the tag is returned verbatim; HEAD is the tagged commit
    /// and the hash adds nothing. Otherwise the form is
    /// `{tag}-{distance}-g{abbrev}`, where `abbrev` is the first
    /// `abbrev_length` characters of the HEAD identifier and `g` is the
    /// conventional git-object marker.
    ///
    /// # Example
    /// ```ignore
    /// let d = VersionDescriptor::new("v1.0.0", 3, "abcdef1234567890");
    /// assert_eq!(d.render(7), "v1.0.0-3-gabcdef1");
    /// ```
    pub fn render(&self, abbrev_length: usize) -> String {
        if self.distance == 0 {
            return self.tag.clone();
        }

        let end = abbrev_length.min(self.head.len());
        format!("{}-{}-g{}", self.tag, self.distance, &self.head[..end])
    }
}
