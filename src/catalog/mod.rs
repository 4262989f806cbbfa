//! Asphalt aging method catalog
//!
//! This module owns the canonical set of aging-simulation methods:
//! - Record types for methods and the auxiliary user entity
//! - The fixed seed list loaded once at startup
//! - The in-memory store that assigns ids and answers lookups
//! - The option lists offered as filter choices
//!
//! # Lifecycle
//!
//! ```text
//! seed entries (literal, ordered)
//!     │  insert, ids 1..N
//!     ▼
//! MemStorage  ──► get_all / get_by_id (copies)
//!     │
//!     ▼
//! read-only for the rest of the process
//! ```

mod model;
pub mod options;
mod seed;
mod store;

pub use model::{
    AsphaltMethod, MaterialType, MethodId, MethodStatus, NewAsphaltMethod, NewUser,
    Sustainability, User, UserId, NO_STANDARDS,
};
pub use seed::{seed_entries, SeedEntry};
pub use store::{MemStorage, Storage};
