pub mod aabb;
pub mod oriented_rect;
pub mod room;

pub use aabb::Aabb;
pub use oriented_rect::{aabb_of, corners_of, OrientedRect};
pub use room::{Opening, OpeningKind, Room, Wall};
