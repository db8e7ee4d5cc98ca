//! # pmap-core
//!
//! The reviewable core of the place map: the list view-state, the filter
//! predicate, the map-center heuristic and the traits through which the
//! core drives its external collaborators.
//!
//! All derived values are recomputed by explicit calls; there is no
//! ambient dependency tracking. The crate performs no I/O.

pub mod center;
pub mod filter;
pub mod gateways;
pub mod usecases;
pub mod view;

pub mod entities {
    pub use pmap_entities::{
        address::*, category::*, enrichment::*, geo::*, id::*, place::*, rating::*,
    };
}
