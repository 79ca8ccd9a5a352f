//! Domain primitives shared by the store and the HTTP layer.
//!
//! Nothing in here touches the database or the network: it is the error
//! taxonomy, the id type, and the pure rules (filter matching, field
//! validation) that the services apply on top of the store.

pub mod error;
pub mod filter;
pub mod types;
pub mod validation;
