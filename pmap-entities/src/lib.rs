#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # pmap-entities
//!
//! Reusable, agnostic domain entities for the place map.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific view logic.

pub mod address;
pub mod category;
pub mod enrichment;
pub mod geo;
pub mod id;
pub mod nonce;
pub mod place;
pub mod rating;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
