mod item;
mod session;

pub use item::{normalize_degrees, FurnitureDefinition, FurnitureId, PlacedItem};
pub use session::LayoutSession;
