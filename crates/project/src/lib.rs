//! Project inventory model.
//!
//! Types describing a loaded project as the deploy pipeline consumes it:
//! the application name, the optional static-asset settings, and the raw
//! project configuration that the fingerprint resolver reads. The inventory
//! is produced by an external configuration loader — this crate only models
//! its shape.

pub mod fingerprint;
pub mod inventory;
pub mod logical_id;

pub use fingerprint::{FingerprintMode, FingerprintSettings};
pub use inventory::{ProjectInventory, StaticSettings};
pub use logical_id::to_logical_id;
