//! Parameter structures for tracker operations.
//!
//! Shared parameter types usable across interfaces (CLI today, others
//! later) without framework-specific derives. Interface layers wrap
//! these with their own derives (clap `Args` and so on) and convert
//! via `From` impls, keeping the core interface-agnostic.

use serde::{Deserialize, Serialize};

/// Parameters for operations addressing a single mission.
///
/// Used by toggle, increment, decrement and visibility operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionId {
    /// The ID of the mission to operate on
    pub id: String,
}

/// Parameters for operations addressing a single shop item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemId {
    /// The ID of the item to operate on
    pub id: String,
}

/// Parameters for listing missions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMissions {
    /// Include hidden missions instead of only visible ones
    #[serde(default)]
    pub all: bool,
}

/// Parameters for setting the manual balance adjustment.
///
/// The amount is validated in the core: negative values are rejected
/// without mutating any state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetInitialBalance {
    /// New manual adjustment in BP (must be non-negative)
    pub amount: i64,
}

/// Parameters for changing a mission's visibility flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetVisible {
    /// The ID of the mission to operate on
    pub id: String,
    /// Whether the mission should be shown in the default list
    pub visible: bool,
}
