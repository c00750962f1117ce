//! Room geometry and furniture collision engine.
//!
//! Walls become a closed, origin-normalized room boundary; openings become
//! clearance zones; placed furniture is checked against other furniture,
//! the room bounds and those zones.

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;
pub mod operations;

pub use config::LayoutConfig;
pub use error::{ConfigError, LayoutError, Result, RoomplanError};
pub use layout::{FurnitureDefinition, FurnitureId, LayoutSession, PlacedItem};
pub use operations::{build_geometry, check_collisions, Collision, RoomGeometry};
