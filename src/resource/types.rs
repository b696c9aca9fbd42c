//! Resource kind and field rule definitions
//!
//! Every resource kind is described by a `ResourceSpec`: an ordered list of
//! field rules. Validation walks the rules in order and stops at the first
//! violation, so rule order decides which message a caller sees.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const NAME_MESSAGE: &str = "Name is required and should be a string.";
pub const EMAIL_MESSAGE: &str = "Email is required and should be a string.";
pub const TITLE_MESSAGE: &str = "Title is required and should be a string.";
pub const AUTHOR_MESSAGE: &str = "Author is required and should be a string.";
pub const CONTENT_MESSAGE: &str = "Content is required and should be a string.";
// No trailing period; clients match on this text.
pub const USER_ID_MESSAGE: &str = "User Id is required and should be a number";

/// Primitive JSON type a field must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty UTF-8 string
    String,
    /// Any JSON number, integer or float
    Number,
}

impl FieldKind {
    /// Returns the type name for log output
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
        }
    }
}

/// A single required field and the message reported when it is violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// JSON key on the payload
    pub name: &'static str,
    /// Expected type
    pub kind: FieldKind,
    /// Message returned verbatim on violation
    pub message: &'static str,
}

impl FieldRule {
    /// Create a required string rule
    pub const fn required_string(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::String,
            message,
        }
    }

    /// Create a required number rule
    pub const fn required_number(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
            message,
        }
    }
}

/// Ordered field constraints for one resource kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    pub kind: ResourceKind,
    pub fields: &'static [FieldRule],
}

static USER_FIELDS: [FieldRule; 2] = [
    FieldRule::required_string("name", NAME_MESSAGE),
    FieldRule::required_string("email", EMAIL_MESSAGE),
];

static BOOK_FIELDS: [FieldRule; 2] = [
    FieldRule::required_string("title", TITLE_MESSAGE),
    FieldRule::required_string("author", AUTHOR_MESSAGE),
];

static REVIEW_FIELDS: [FieldRule; 2] = [
    FieldRule::required_string("content", CONTENT_MESSAGE),
    FieldRule::required_number("userId", USER_ID_MESSAGE),
];

static USER_SPEC: ResourceSpec = ResourceSpec {
    kind: ResourceKind::User,
    fields: &USER_FIELDS,
};

static BOOK_SPEC: ResourceSpec = ResourceSpec {
    kind: ResourceKind::Book,
    fields: &BOOK_FIELDS,
};

static REVIEW_SPEC: ResourceSpec = ResourceSpec {
    kind: ResourceKind::Review,
    fields: &REVIEW_FIELDS,
};

/// The resource kinds the service can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    User,
    Book,
    Review,
}

impl ResourceKind {
    /// All kinds, in route order
    pub const ALL: [ResourceKind; 3] = [ResourceKind::User, ResourceKind::Book, ResourceKind::Review];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Book => "book",
            ResourceKind::Review => "review",
        }
    }

    /// Path segment under `/api`
    pub fn collection_name(&self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Book => "books",
            ResourceKind::Review => "reviews",
        }
    }

    /// Field constraints for this kind
    pub fn spec(&self) -> &'static ResourceSpec {
        match self {
            ResourceKind::User => &USER_SPEC,
            ResourceKind::Book => &BOOK_SPEC,
            ResourceKind::Review => &REVIEW_SPEC,
        }
    }

    /// Dense index, used for per-kind counter slots
    pub(crate) fn index(&self) -> usize {
        match self {
            ResourceKind::User => 0,
            ResourceKind::Book => 1,
            ResourceKind::Review => 2,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs_match_kind() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.spec().kind, kind);
        }
    }

    #[test]
    fn test_field_order() {
        let names: Vec<_> = ResourceKind::Review.spec().fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["content", "userId"]);

        let names: Vec<_> = ResourceKind::User.spec().fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "email"]);
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(ResourceKind::User.collection_name(), "users");
        assert_eq!(ResourceKind::Book.collection_name(), "books");
        assert_eq!(ResourceKind::Review.collection_name(), "reviews");
    }

    #[test]
    fn test_indexes_are_dense() {
        let mut indexes: Vec<_> = ResourceKind::ALL.iter().map(|k| k.index()).collect();
        indexes.sort();
        assert_eq!(indexes, vec![0, 1, 2]);
    }
}
