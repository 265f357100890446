//! Draw list entries

use funfair_world::{CoordsXY, CoordsXYZ};
use serde::Serialize;
use smallvec::SmallVec;

use crate::image_id::ImageId;

/// Occlusion box as passed by a paint function, relative to the tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BoundBoxXYZ {
    pub offset: CoordsXYZ,
    pub length: CoordsXYZ,
}

impl BoundBoxXYZ {
    pub const fn new(offset: CoordsXYZ, length: CoordsXYZ) -> Self {
        Self { offset, length }
    }

    /// Swap the x and y axes, as pieces facing odd directions do
    pub const fn swapped_xy(self) -> Self {
        Self {
            offset: swap_xy(self.offset),
            length: swap_xy(self.length),
        }
    }
}

pub(crate) const fn swap_xy(c: CoordsXYZ) -> CoordsXYZ {
    CoordsXYZ::new(c.y, c.x, c.z)
}

/// Pixel position on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScreenCoordsXY {
    pub x: i32,
    pub y: i32,
}

impl ScreenCoordsXY {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// What the player hits when clicking a paint struct
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum InteractionItem {
    #[default]
    None,
    Terrain,
    Ride,
}

/// Handle to a paint struct in a session's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PaintStructId(pub u32);

impl PaintStructId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Occlusion box in world space, ends exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PaintBoundBox {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub x_end: i32,
    pub y_end: i32,
    pub z_end: i32,
}

/// Image drawn on top of its owner with no occlusion box of its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttachedImage {
    pub image: ImageId,
    pub offset: ScreenCoordsXY,
}

/// One sprite in the draw list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintStruct {
    pub image: ImageId,
    pub screen_pos: ScreenCoordsXY,
    pub bounds: PaintBoundBox,
    pub interaction: InteractionItem,
    /// Tile the struct was emitted for
    pub map_pos: CoordsXY,
    /// Root this struct sorts with; `None` for roots
    pub parent: Option<PaintStructId>,
    pub children: SmallVec<[PaintStructId; 2]>,
    pub attached: SmallVec<[AttachedImage; 1]>,
}

/// How a paint function submitted an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaintKind {
    Parent,
    Child,
    Attached,
}

/// A paint call exactly as submitted, before projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaintRecord {
    pub kind: PaintKind,
    pub image: ImageId,
    pub offset: CoordsXYZ,
    pub bound_box: BoundBoxXYZ,
}
