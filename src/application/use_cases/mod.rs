//! One struct per operation, each enforcing a single rule against its repository.
//!
//! Use cases are stateless: every call re-reads what it needs from the store.

pub mod donation;
pub mod registration;
