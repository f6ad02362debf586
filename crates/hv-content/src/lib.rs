//! Static world-content tables for Hearthvale.
//!
//! Hand-authored fixtures: each function returns one fully-authored
//! [`Location`] with its buildings, districts, businesses, and
//! per-business quest postings. The derivation passes in `hv-worldgen`
//! run over this data at load time; nothing here is generated.

pub mod locations;

pub use locations::{lantern_hill, saltmere_harbor_ward, stonecrest_town, world};
