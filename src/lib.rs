//! cdp-wire - Wire-level shapes for a DevTools-style remote debugging client
//!
//! This library provides the JSON envelope and error-object shapes a remote
//! debugging client decodes, including normalization of the inconsistently
//! typed error `code` field and a catalog of well-known failure conditions
//! matched by structural equality.

pub mod inspect;
pub mod protocol;
