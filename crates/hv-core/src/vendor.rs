//! Vendor capability tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a place can be shopped at.
///
/// `Shop` means proper storefront trade, `Street` means informal stalls
/// and hawkers only, `None` means no trade at all. After the resolution
/// pass every location and business carries exactly one of these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorType {
    /// No vendors of any kind.
    None,
    /// Informal street trade only.
    Street,
    /// Full storefront commerce.
    Shop,
}

impl fmt::Display for VendorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Street => write!(f, "street"),
            Self::Shop => write!(f, "shop"),
        }
    }
}
