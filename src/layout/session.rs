use slotmap::SlotMap;

use super::item::{normalize_degrees, FurnitureDefinition, FurnitureId, PlacedItem};
use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::{Opening, Room, Wall};
use crate::math::{Point2, Vector2};
use crate::operations::{build_geometry, check_collisions, Collision, RoomGeometry};

/// The in-memory layout: one room, a furniture catalogue and the items placed in it.
///
/// Derived room geometry is rebuilt on every wall edit, so [`geometry`](Self::geometry)
/// never lags behind [`room`](Self::room).
#[derive(Debug)]
pub struct LayoutSession {
    room: Room,
    config: LayoutConfig,
    catalogue: SlotMap<FurnitureId, FurnitureDefinition>,
    items: Vec<PlacedItem>,
    next_item_id: u32,
    selection: Option<u32>,
    geometry: RoomGeometry,
    geometry_version: u64,
}

impl LayoutSession {
    /// Creates a session for `room` and builds its geometry.
    #[must_use]
    pub fn new(room: Room, config: LayoutConfig) -> Self {
        let geometry = build_geometry(&room, &config);
        Self {
            room,
            config,
            catalogue: SlotMap::with_key(),
            items: Vec::new(),
            next_item_id: 1,
            selection: None,
            geometry,
            geometry_version: 0,
        }
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Geometry derived from the current walls.
    #[must_use]
    pub fn geometry(&self) -> &RoomGeometry {
        &self.geometry
    }

    /// Incremented on every geometry rebuild.
    #[must_use]
    pub fn geometry_version(&self) -> u64 {
        self.geometry_version
    }

    fn rebuild(&mut self) {
        self.geometry = build_geometry(&self.room, &self.config);
        self.geometry_version += 1;
        tracing::trace!(version = self.geometry_version, "room geometry rebuilt");
    }

    // --- Room editing ---

    /// Replaces the room. Placed items are kept.
    pub fn set_room(&mut self, room: Room) {
        self.room = room;
        self.rebuild();
    }

    /// Replaces the config; zone depth may change, so geometry is rebuilt.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.rebuild();
    }

    /// Applies an arbitrary edit to the room, then rebuilds geometry.
    pub fn update_room<F: FnOnce(&mut Room)>(&mut self, edit: F) {
        edit(&mut self.room);
        self.rebuild();
    }

    /// Appends a wall.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidDimension` if the wall length is not positive.
    pub fn add_wall(&mut self, wall: Wall) -> Result<()> {
        check_dimension("wall length", wall.length)?;
        tracing::trace!(wall = %wall.name, length = wall.length, "adding wall");
        self.room.walls.push(wall);
        self.rebuild();
        Ok(())
    }

    /// Removes the wall with the given (case-insensitive) name.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::WallNotFound` if no wall has that name.
    pub fn remove_wall(&mut self, name: &str) -> Result<Wall> {
        let index = self
            .room
            .walls
            .iter()
            .rposition(|w| w.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LayoutError::WallNotFound(name.to_owned()))?;
        let wall = self.room.walls.remove(index);
        self.rebuild();
        Ok(wall)
    }

    /// Changes a wall's length.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::WallNotFound` for an unknown wall and
    /// `LayoutError::InvalidDimension` for a non-positive length.
    pub fn resize_wall(&mut self, name: &str, length: f64) -> Result<()> {
        check_dimension("wall length", length)?;
        let wall = self
            .room
            .wall_mut(name)
            .ok_or_else(|| LayoutError::WallNotFound(name.to_owned()))?;
        wall.length = length;
        self.rebuild();
        Ok(())
    }

    /// Sets (or clears, with `None`) the opening of a wall.
    ///
    /// A wall carries at most one opening through this call; any existing
    /// openings are replaced. Opening extents are not checked against the
    /// wall length.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::WallNotFound` for an unknown wall.
    pub fn set_opening(&mut self, name: &str, opening: Option<Opening>) -> Result<()> {
        let wall = self
            .room
            .wall_mut(name)
            .ok_or_else(|| LayoutError::WallNotFound(name.to_owned()))?;
        wall.openings = opening.into_iter().collect();
        self.rebuild();
        Ok(())
    }

    // --- Catalogue ---

    /// Adds a furniture definition to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidDimension` if width or height is not positive.
    pub fn add_furniture(&mut self, def: FurnitureDefinition) -> Result<FurnitureId> {
        check_dimension("furniture width", def.width)?;
        check_dimension("furniture height", def.height)?;
        Ok(self.catalogue.insert(def))
    }

    /// Returns a catalogue entry.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::FurnitureNotFound` for an unknown id.
    pub fn furniture(&self, id: FurnitureId) -> Result<&FurnitureDefinition> {
        Ok(self
            .catalogue
            .get(id)
            .ok_or(LayoutError::FurnitureNotFound)?)
    }

    pub fn catalogue(&self) -> impl Iterator<Item = (FurnitureId, &FurnitureDefinition)> + '_ {
        self.catalogue.iter()
    }

    /// Removes a catalogue entry together with every item placed from it.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::FurnitureNotFound` for an unknown id.
    pub fn remove_furniture(&mut self, id: FurnitureId) -> Result<FurnitureDefinition> {
        let def = self
            .catalogue
            .remove(id)
            .ok_or(LayoutError::FurnitureNotFound)?;
        let before = self.items.len();
        self.items.retain(|item| item.furniture != id);
        if let Some(selected) = self.selection {
            if !self.items.iter().any(|item| item.id == selected) {
                self.selection = None;
            }
        }
        tracing::trace!(
            furniture = %def.name,
            removed_items = before - self.items.len(),
            "furniture removed"
        );
        Ok(def)
    }

    // --- Placed items ---

    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Returns a placed item.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` for an unknown id.
    pub fn item(&self, id: u32) -> Result<&PlacedItem> {
        Ok(self
            .items
            .iter()
            .find(|item| item.id == id)
            .ok_or(LayoutError::ItemNotFound(id))?)
    }

    fn item_mut(&mut self, id: u32) -> Result<&mut PlacedItem> {
        Ok(self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(LayoutError::ItemNotFound(id))?)
    }

    /// Places a new, unrotated item centered at `position` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::FurnitureNotFound` for an unknown catalogue entry.
    pub fn place_item(&mut self, furniture: FurnitureId, position: Point2) -> Result<u32> {
        let def = self
            .catalogue
            .get(furniture)
            .ok_or(LayoutError::FurnitureNotFound)?;
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.items.push(PlacedItem::new(id, furniture, def, position));
        tracing::trace!(item = id, x = position.x, y = position.y, "item placed");
        Ok(id)
    }

    /// Moves an item's center to `position`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` for an unknown id.
    pub fn move_item(&mut self, id: u32, position: Point2) -> Result<()> {
        self.item_mut(id)?.position = position;
        Ok(())
    }

    /// Moves an item by whole nudge steps along each axis.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` for an unknown id.
    pub fn nudge_item(&mut self, id: u32, steps_x: i32, steps_y: i32) -> Result<()> {
        let step = self.config.nudge_step;
        let item = self.item_mut(id)?;
        item.position += Vector2::new(f64::from(steps_x), f64::from(steps_y)) * step;
        Ok(())
    }

    /// Rotates an item by `delta_degrees`, keeping the result in `[0, 360)`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` for an unknown id.
    pub fn rotate_item(&mut self, id: u32, delta_degrees: f64) -> Result<()> {
        let item = self.item_mut(id)?;
        item.rotation_degrees = normalize_degrees(item.rotation_degrees + delta_degrees);
        Ok(())
    }

    /// Rotates an item by one configured step, clockwise on screen.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` for an unknown id.
    pub fn rotate_item_step(&mut self, id: u32) -> Result<()> {
        self.rotate_item(id, self.config.rotation_step)
    }

    /// Sets an item's absolute rotation.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` for an unknown id.
    pub fn set_rotation(&mut self, id: u32, degrees: f64) -> Result<()> {
        self.item_mut(id)?.rotation_degrees = normalize_degrees(degrees);
        Ok(())
    }

    /// Deletes a placed item.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` for an unknown id.
    pub fn remove_item(&mut self, id: u32) -> Result<PlacedItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(LayoutError::ItemNotFound(id))?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        Ok(self.items.remove(index))
    }

    // --- Selection ---

    #[must_use]
    pub fn selection(&self) -> Option<u32> {
        self.selection
    }

    /// Selects an item, or clears the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` when selecting an unknown id.
    pub fn select(&mut self, id: Option<u32>) -> Result<()> {
        if let Some(id) = id {
            self.item(id)?;
        }
        self.selection = id;
        Ok(())
    }

    // --- Collision queries ---

    /// Every collision of one item against the current layout.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::ItemNotFound` for an unknown id.
    pub fn collisions_for(&self, id: u32) -> Result<Vec<Collision>> {
        let subject = self.item(id)?;
        Ok(check_collisions(
            subject,
            &self.items,
            self.geometry.bounds.as_ref(),
            &self.geometry.opening_zones,
        ))
    }

    /// Ids of all items with at least one collision, in placement order.
    #[must_use]
    pub fn colliding_items(&self) -> Vec<u32> {
        self.items
            .iter()
            .filter(|item| {
                !check_collisions(
                    item,
                    &self.items,
                    self.geometry.bounds.as_ref(),
                    &self.geometry.opening_zones,
                )
                .is_empty()
            })
            .map(|item| item.id)
            .collect()
    }
}

fn check_dimension(what: &'static str, value: f64) -> std::result::Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimension { what, value })
    }
}
