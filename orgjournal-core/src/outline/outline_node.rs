use chrono::NaiveDateTime;

/// One heading of an outline document together with the text below it.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineNode {
    /// Number of leading `*`.
    pub level: usize,
    /// Heading text after the stars, untouched apart from the separating space.
    pub heading: String,
    /// Section text up to the next heading, without planning lines and the property drawer.
    pub body: String,
    /// Timestamps found in the heading, then in the body, in order of appearance.
    pub timestamps: Vec<OutlineTimestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineTimestamp {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    /// `<...>` timestamps are active, `[...]` inactive.
    pub active: bool,
}
