//! Display formatting wrappers.
//!
//! Newtype wrappers that format engine state as markdown for the
//! terminal renderer, keeping presentation out of the domain models.
//! The same data can be rendered differently depending on context
//! (board lines vs. a single mission's detail, receipts vs. typed
//! rejections) while all output flows through one place.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: board/catalog wrappers (MissionBoard, ShopCatalog)
//! - [`results`]: operation result types (BalanceSheet, PurchaseResult)
//! - [`status`]: confirmation messages (OperationStatus)
//! - [`datetime`]: cooldown countdown formatting

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{MissionBoard, ShopCatalog};
pub use datetime::Cooldown;
pub use results::{BalanceSheet, PurchaseResult};
pub use status::OperationStatus;
