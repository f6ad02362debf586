//! Derivation passes for Hearthvale.
//!
//! World initialization runs two passes over the static content tables:
//! vendor resolution tags every location and business with a
//! [`hv_core::VendorType`], then board assembly folds per-business boards
//! together with synthesized canonical, district, and building boards into
//! each location's final board set and flat quest list. Both passes run
//! exactly once, at load time; [`boards::assemble_boards`] enforces this
//! with an explicit guard.

pub mod boards;
pub mod error;
pub mod init;
pub mod vendor;

pub use boards::assemble_boards;
pub use error::{WorldGenError, WorldGenResult};
pub use init::initialize;
pub use vendor::{resolve_business, resolve_location};
