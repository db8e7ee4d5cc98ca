//! # pmap-gateways
//!
//! Adapters behind the gateway traits of `pmap-core`: the HTTP client of
//! the business-directory API and the map-widget capabilities.

pub mod directory;
pub mod map;
