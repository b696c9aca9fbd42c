//! Resource definitions and the create pipeline
//!
//! Users, books and reviews share one pipeline, parameterized by a
//! per-kind `ResourceSpec`. Only the field rules and messages differ.

mod errors;
mod pipeline;
mod types;
mod validator;

pub use errors::{CreateError, CreateResult, ValidationError};
pub use pipeline::create;
pub use types::{
    FieldKind, FieldRule, ResourceKind, ResourceSpec, AUTHOR_MESSAGE, CONTENT_MESSAGE,
    EMAIL_MESSAGE, NAME_MESSAGE, TITLE_MESSAGE, USER_ID_MESSAGE,
};
pub use validator::{validate, validate_book, validate_review, validate_user, validate_value};
