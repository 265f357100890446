//! Paint session
//!
//! A `PaintSession` is the per-viewport draw list plus the per-tile bookkeeping
//! track paint functions write into: segment support heights, the general
//! support height, tunnel edges and placed support posts. A session is owned by
//! whoever renders the viewport and is never shared between viewports.

use funfair_world::{
    direction_flip_x_axis, CoordsXY, CoordsXYZ, Direction, RideId, TileCoordsXY, COORDS_XY_STEP,
};
use serde::Serialize;
use smallvec::SmallVec;

use crate::config::{HeightUnit, PaintConfig, ViewFlags};
use crate::image_id::ImageId;
use crate::paint_struct::{
    swap_xy, AttachedImage, BoundBoxXYZ, InteractionItem, PaintBoundBox, PaintKind, PaintRecord,
    PaintStruct, PaintStructId, ScreenCoordsXY,
};
use crate::segment::{PaintSegment, SupportHeight, SUPPORT_HEIGHT_BLOCKED, SUPPORT_SLOPE_TRACK};
use crate::supports::SupportPost;
use crate::tunnel::{TunnelEntry, TunnelGroup, TunnelList, TunnelSubType, MAX_TUNNELS};

/// Identifies one track element for selection highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementKey {
    pub tile: TileCoordsXY,
    pub base_height: i32,
}

/// Tile corner that sits at the local origin for each view rotation
const TILE_ORIGIN: [CoordsXY; 4] = [
    CoordsXY::new(0, 0),
    CoordsXY::new(COORDS_XY_STEP, 0),
    CoordsXY::new(COORDS_XY_STEP, COORDS_XY_STEP),
    CoordsXY::new(0, COORDS_XY_STEP),
];

/// Project a world position to screen space for a view rotation
pub fn translate_3d_to_2d(rotation: Direction, pos: CoordsXYZ) -> ScreenCoordsXY {
    let rotated = pos.xy().rotate(rotation);
    ScreenCoordsXY::new(rotated.y - rotated.x, ((rotated.x + rotated.y) >> 1) - pos.z)
}

/// Per-viewport draw list and tile bookkeeping
#[derive(Debug)]
pub struct PaintSession {
    pub current_rotation: Direction,
    /// Start of the tile being painted
    pub map_position: CoordsXY,
    /// World position of the tile corner local coordinates are relative to
    pub sprite_position: CoordsXY,
    pub zoom_level: i8,
    pub interaction_type: InteractionItem,
    pub view_flags: ViewFlags,
    pub height_unit: HeightUnit,
    pub track_design_save_ride: Option<RideId>,
    /// Ground surface of the current tile has been painted
    pub passed_surface: bool,
    /// Painting a track piece preview with no terrain
    pub is_track_piece_preview: bool,
    pub track_colours: ImageId,
    pub support_colours: ImageId,
    pub current_ticks: u32,
    pub selected_element: Option<ElementKey>,

    structs: Vec<PaintStruct>,
    roots: Vec<PaintStructId>,
    last_struct: Option<PaintStructId>,
    records: Vec<PaintRecord>,

    support_segments: [SupportHeight; 9],
    general_support: SupportHeight,
    left_tunnels: TunnelList,
    right_tunnels: TunnelList,
    support_posts: Vec<SupportPost>,
}

/// Everything paint calls recorded, for comparing two paint runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintSnapshot {
    pub records: Vec<PaintRecord>,
    pub left_tunnels: Vec<TunnelEntry>,
    pub right_tunnels: Vec<TunnelEntry>,
    pub support_segments: [SupportHeight; 9],
    pub general_support: SupportHeight,
    pub support_posts: Vec<SupportPost>,
}

impl PaintSession {
    pub fn new(rotation: Direction, config: &PaintConfig) -> Self {
        Self {
            current_rotation: rotation & 3,
            map_position: CoordsXY::default(),
            sprite_position: TILE_ORIGIN[(rotation & 3) as usize],
            zoom_level: 0,
            interaction_type: InteractionItem::None,
            view_flags: ViewFlags::from(config),
            height_unit: config.height_unit,
            track_design_save_ride: config.track_design_save_ride,
            passed_surface: false,
            is_track_piece_preview: false,
            track_colours: ImageId::new(0),
            support_colours: ImageId::new(0),
            current_ticks: 0,
            selected_element: None,
            structs: Vec::new(),
            roots: Vec::new(),
            last_struct: None,
            records: Vec::new(),
            support_segments: [SupportHeight::UNSET; 9],
            general_support: SupportHeight::UNSET,
            left_tunnels: TunnelList::new(),
            right_tunnels: TunnelList::new(),
            support_posts: Vec::new(),
        }
    }

    /// Reset per-tile state before painting a tile's elements
    pub fn begin_tile(&mut self, map_position: CoordsXY) {
        self.map_position = map_position.to_tile_start();
        self.sprite_position = self.map_position + TILE_ORIGIN[self.current_rotation as usize];
        self.passed_surface = false;
        self.interaction_type = InteractionItem::None;
        self.last_struct = None;
        self.support_segments = [SupportHeight::UNSET; 9];
        self.general_support = SupportHeight::UNSET;
        self.left_tunnels.clear();
        self.right_tunnels.clear();
    }

    /// Record that the ground surface has been painted at `height`
    pub fn pass_surface(&mut self, height: i32, slope: u8) {
        self.passed_surface = true;
        let ground = SupportHeight::new(height.clamp(0, u16::MAX as i32 - 1) as u16, slope);
        self.support_segments = [ground; 9];
        self.general_support = ground;
    }

    // Draw list

    /// Start a new occlusion root
    pub fn add_image_as_parent(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintStructId> {
        self.records.push(PaintRecord {
            kind: PaintKind::Parent,
            image,
            offset,
            bound_box,
        });
        self.push_parent(image, offset, bound_box)
    }

    /// Start a new occlusion root, swapping axes for odd directions
    pub fn add_image_as_parent_rotated(
        &mut self,
        direction: Direction,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintStructId> {
        if direction & 1 != 0 {
            self.add_image_as_parent(image, swap_xy(offset), bound_box.swapped_xy())
        } else {
            self.add_image_as_parent(image, offset, bound_box)
        }
    }

    /// Attach to the most recent root; becomes a root if there is none
    pub fn add_image_as_child(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintStructId> {
        let Some(last) = self.last_struct else {
            return self.add_image_as_parent(image, offset, bound_box);
        };
        self.records.push(PaintRecord {
            kind: PaintKind::Child,
            image,
            offset,
            bound_box,
        });
        if image.is_undefined() {
            return None;
        }

        let root = self.structs[last.index()].parent.unwrap_or(last);
        let mut ps = self.create_paint_struct(image, offset, bound_box);
        ps.parent = Some(root);
        let id = self.push_struct(ps);
        self.structs[root.index()].children.push(id);
        self.last_struct = Some(id);
        Some(id)
    }

    pub fn add_image_as_child_rotated(
        &mut self,
        direction: Direction,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintStructId> {
        if direction & 1 != 0 {
            self.add_image_as_child(image, swap_xy(offset), bound_box.swapped_xy())
        } else {
            self.add_image_as_child(image, offset, bound_box)
        }
    }

    /// Overlay an image on the last struct added, sharing its sort position
    pub fn attach_to_previous(&mut self, image: ImageId, x: i32, y: i32) -> bool {
        let Some(last) = self.last_struct else {
            return false;
        };
        self.records.push(PaintRecord {
            kind: PaintKind::Attached,
            image,
            offset: CoordsXYZ::new(x, y, 0),
            bound_box: BoundBoxXYZ::default(),
        });
        if image.is_undefined() {
            return false;
        }
        self.structs[last.index()].attached.push(AttachedImage {
            image,
            offset: ScreenCoordsXY::new(x, y),
        });
        true
    }

    fn push_parent(
        &mut self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> Option<PaintStructId> {
        if image.is_undefined() {
            return None;
        }
        let ps = self.create_paint_struct(image, offset, bound_box);
        let id = self.push_struct(ps);
        self.roots.push(id);
        self.last_struct = Some(id);
        Some(id)
    }

    fn push_struct(&mut self, ps: PaintStruct) -> PaintStructId {
        let id = PaintStructId(self.structs.len() as u32);
        self.structs.push(ps);
        id
    }

    fn create_paint_struct(
        &self,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) -> PaintStruct {
        let swapped = direction_flip_x_axis(self.current_rotation);
        let origin = self.sprite_position;

        let world = offset.xy().rotate(swapped) + origin;
        let screen_pos = translate_3d_to_2d(self.current_rotation, world.with_z(offset.z));

        let start = bound_box.offset.xy().rotate(swapped) + origin;
        let end = (bound_box.offset.xy() + bound_box.length.xy()).rotate(swapped) + origin;
        let bounds = PaintBoundBox {
            x: start.x.min(end.x),
            y: start.y.min(end.y),
            z: bound_box.offset.z,
            x_end: start.x.max(end.x),
            y_end: start.y.max(end.y),
            z_end: bound_box.offset.z + bound_box.length.z,
        };

        PaintStruct {
            image,
            screen_pos,
            bounds,
            interaction: self.interaction_type,
            map_pos: self.map_position,
            parent: None,
            children: SmallVec::new(),
            attached: SmallVec::new(),
        }
    }

    pub fn paint_struct(&self, id: PaintStructId) -> Option<&PaintStruct> {
        self.structs.get(id.index())
    }

    pub fn paint_structs(&self) -> &[PaintStruct] {
        &self.structs
    }

    /// Occlusion roots in submission order
    pub fn roots(&self) -> &[PaintStructId] {
        &self.roots
    }

    /// Every paint call made, in order
    pub fn records(&self) -> &[PaintRecord] {
        &self.records
    }

    // Support bookkeeping

    /// Mark segments as covered up to `height`
    pub fn set_segment_support_height(&mut self, segments: u16, height: u16, slope: u8) {
        for (i, segment) in self.support_segments.iter_mut().enumerate() {
            if segments & (1 << i) != 0 {
                segment.height = height;
                if height != SUPPORT_HEIGHT_BLOCKED {
                    segment.slope = slope;
                }
            }
        }
    }

    /// Raise the general support height; never lowers it
    pub fn set_general_support_height(&mut self, height: i32) {
        if self.general_support.height as i32 >= height {
            return;
        }
        self.general_support =
            SupportHeight::new(height.clamp(0, u16::MAX as i32) as u16, SUPPORT_SLOPE_TRACK);
    }

    pub fn force_set_general_support_height(&mut self, height: i32, slope: u8) {
        self.general_support = SupportHeight::new(height.clamp(0, u16::MAX as i32) as u16, slope);
    }

    pub fn segment_support(&self, segment: PaintSegment) -> SupportHeight {
        self.support_segments[segment as usize]
    }

    pub fn support_segments(&self) -> &[SupportHeight; 9] {
        &self.support_segments
    }

    pub fn general_support(&self) -> SupportHeight {
        self.general_support
    }

    pub fn support_posts(&self) -> &[SupportPost] {
        &self.support_posts
    }

    pub(crate) fn record_support_post(&mut self, post: SupportPost) {
        self.support_posts.push(post);
    }

    // Tunnels

    pub fn push_tunnel_left(&mut self, height: i32, group: TunnelGroup, subtype: TunnelSubType) {
        if self.left_tunnels.len() < MAX_TUNNELS {
            self.left_tunnels.push(TunnelEntry::new(height, group, subtype));
        }
    }

    pub fn push_tunnel_right(&mut self, height: i32, group: TunnelGroup, subtype: TunnelSubType) {
        if self.right_tunnels.len() < MAX_TUNNELS {
            self.right_tunnels.push(TunnelEntry::new(height, group, subtype));
        }
    }

    /// Record a tunnel on the edge a piece facing `direction` exits through
    pub fn push_tunnel_rotated(
        &mut self,
        direction: Direction,
        height: i32,
        group: TunnelGroup,
        subtype: TunnelSubType,
    ) {
        if direction & 1 == 0 {
            self.push_tunnel_left(height, group, subtype);
        } else {
            self.push_tunnel_right(height, group, subtype);
        }
    }

    pub fn left_tunnels(&self) -> &[TunnelEntry] {
        &self.left_tunnels
    }

    pub fn right_tunnels(&self) -> &[TunnelEntry] {
        &self.right_tunnels
    }

    /// Capture everything recorded so far
    pub fn snapshot(&self) -> PaintSnapshot {
        PaintSnapshot {
            records: self.records.clone(),
            left_tunnels: self.left_tunnels.to_vec(),
            right_tunnels: self.right_tunnels.to_vec(),
            support_segments: self.support_segments,
            general_support: self.general_support,
            support_posts: self.support_posts.clone(),
        }
    }

    /// Forget the draw list, keeping viewport settings
    pub fn clear(&mut self) {
        self.structs.clear();
        self.roots.clear();
        self.records.clear();
        self.support_posts.clear();
        self.last_struct = None;
    }
}
