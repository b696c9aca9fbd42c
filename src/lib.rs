//! library-api - in-memory HTTP service for users, books and reviews
//!
//! Each resource kind is created through one pipeline: validate the payload
//! against the kind's field rules, assign the next id, append to the kind's
//! collection, and return the stored record.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod resource;
pub mod store;
