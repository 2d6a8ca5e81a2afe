//! Sort-key and direction whitelists for the list endpoint.
//!
//! Column and direction names cannot be bound as statement parameters,
//! so these enums are the substitute: caller tokens resolve through a
//! fixed lookup, and only the resulting `&'static str` literals are
//! ever spliced into an ORDER BY clause.

/// Caller-facing sort keys for listing notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// The storage-assigned row identifier.
    Note,
    /// The note's creation timestamp. This is the default.
    Date,
    Title,
    Deadline,
    Priority,
}

impl SortKey {
    /// Token used when the caller supplies no `order_by` parameter.
    pub const DEFAULT_TOKEN: &'static str = "date";

    /// Resolve a caller-supplied token, rejecting anything outside the
    /// whitelist.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "note" => Some(Self::Note),
            "date" => Some(Self::Date),
            "title" => Some(Self::Title),
            "deadline" => Some(Self::Deadline),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }

    /// The column literal this key resolves to.
    pub fn column(self) -> &'static str {
        match self {
            Self::Note => "note_id",
            Self::Date => "\"timestamp\"",
            Self::Title => "note_title",
            Self::Deadline => "deadline",
            Self::Priority => "priority",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::Date
    }
}

/// Sort direction for listing notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    /// The default.
    Desc,
}

impl SortDirection {
    /// Token used when the caller supplies no `order` parameter.
    pub const DEFAULT_TOKEN: &'static str = "desc";

    /// Resolve a caller-supplied token, rejecting anything outside the
    /// whitelist.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// The SQL keyword this direction resolves to.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Desc
    }
}
