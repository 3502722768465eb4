//! Model to entity mappers
//!
//! Rows carry enum columns as text, so conversions are `TryFrom` and fail
//! with a database error on values the schema should never hold.

mod audit_log;
mod recommendation;
mod search;
mod user;
