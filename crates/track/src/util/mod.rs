//! Shared track paint utilities
//!
//! Station composition, the generic multi-tile turn and diagonal painters,
//! tunnel helpers for turns, the spinning tunnel and on-ride photo overlays.
//! Styles supply the sprite tables; the index resolution and skip handling
//! live here.

mod diag;
mod photo;
mod station;
mod tunnel;
mod turn;

use funfair_paint::{BoundBoxXYZ, ElementKey, ImageId, ImageIndex, PaintSession, PaintStructId};
use funfair_world::{CoordsXY, CoordsXYZ, Direction, TrackElement};

use crate::sprites::SPR_GHOST_TRAIN_SPINNING_TUNNEL;

pub use diag::{
    track_paint_util_diag_tiles_paint, track_paint_util_diag_tiles_paint_extra,
    track_paint_util_eighth_to_diag_tiles_paint, DEFAULT_DIAG_BOUND_LENGTHS,
    DEFAULT_DIAG_TILE_OFFSETS, DIAG_SPRITE_MAP, DIAG_SUPPORT_PLACEMENT, EIGHTH_TO_DIAG_SPRITE_MAP,
    MAP_DIAG_REVERSED, MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL,
};
pub use photo::{
    track_paint_util_onride_photo_paint, track_paint_util_onride_photo_paint_2,
    track_paint_util_onride_photo_small_paint, GENERAL_SUPPORT_HEIGHT_ONRIDE_PHOTO,
};
pub use station::{
    get_station_colour_scheme, track_paint_util_draw_station, track_paint_util_draw_station_2,
    track_paint_util_draw_station_3, track_paint_util_draw_station_covers,
    track_paint_util_draw_station_covers_2, track_paint_util_draw_station_inverted,
    track_paint_util_draw_station_metal_supports, track_paint_util_draw_station_metal_supports_2,
    track_paint_util_has_fence, Edge, StationVariant,
};
pub use tunnel::{
    track_paint_util_left_quarter_turn_1_tile_tunnel,
    track_paint_util_right_quarter_turn_1_tile_tunnel,
    track_paint_util_right_quarter_turn_3_tiles_25_deg_down_tunnel,
    track_paint_util_right_quarter_turn_3_tiles_25_deg_up_tunnel,
    track_paint_util_right_quarter_turn_3_tiles_tunnel,
    track_paint_util_right_quarter_turn_5_tiles_tunnel,
};
pub(crate) use turn::sprite_index;
pub use turn::{
    track_paint_util_left_quarter_turn_1_tile_paint,
    track_paint_util_left_quarter_turn_3_tiles_paint,
    track_paint_util_left_quarter_turn_3_tiles_paint_2,
    track_paint_util_left_quarter_turn_3_tiles_paint_3,
    track_paint_util_left_quarter_turn_3_tiles_paint_4,
    track_paint_util_left_quarter_turn_3_tiles_paint_with_height_offset,
    track_paint_util_left_quarter_turn_5_tiles_paint,
    track_paint_util_left_quarter_turn_5_tiles_paint_2,
    track_paint_util_left_quarter_turn_5_tiles_paint_3,
    track_paint_util_right_quarter_turn_1_tile_paint,
    track_paint_util_right_quarter_turn_3_tiles_paint,
    track_paint_util_right_quarter_turn_3_tiles_paint_2,
    track_paint_util_right_quarter_turn_3_tiles_paint_2_with_height_offset,
    track_paint_util_right_quarter_turn_3_tiles_paint_3,
    track_paint_util_right_quarter_turn_3_tiles_paint_4,
    track_paint_util_right_quarter_turn_5_tiles_paint,
    track_paint_util_right_quarter_turn_5_tiles_paint_2,
    track_paint_util_right_quarter_turn_5_tiles_paint_3,
    DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS,
    DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_OFFSETS, LEFT_QUARTER_TURN_3_TILES_SPRITE_MAP,
    LEFT_QUARTER_TURN_5_TILES_SPRITE_MAP,
    MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES,
    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES,
    RIGHT_QUARTER_TURN_3_TILES_SPRITE_MAP, RIGHT_QUARTER_TURN_5_TILES_SPRITE_MAP,
};

/// One sprite with its offset and occlusion box, z values relative to the
/// track height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteBb {
    pub sprite_id: ImageIndex,
    pub offset: CoordsXYZ,
    pub bb_offset: CoordsXYZ,
    pub bb_size: CoordsXYZ,
}

impl SpriteBb {
    pub const fn new(
        sprite_id: ImageIndex,
        offset: [i32; 3],
        bb_offset: [i32; 3],
        bb_size: [i32; 3],
    ) -> Self {
        Self {
            sprite_id,
            offset: CoordsXYZ::new(offset[0], offset[1], offset[2]),
            bb_offset: CoordsXYZ::new(bb_offset[0], bb_offset[1], bb_offset[2]),
            bb_size: CoordsXYZ::new(bb_size[0], bb_size[1], bb_size[2]),
        }
    }

    fn offset_at(&self, height: i32) -> CoordsXYZ {
        CoordsXYZ::new(self.offset.x, self.offset.y, height + self.offset.z)
    }

    fn bound_box_at(&self, height: i32) -> BoundBoxXYZ {
        BoundBoxXYZ::new(
            CoordsXYZ::new(self.bb_offset.x, self.bb_offset.y, height + self.bb_offset.z),
            self.bb_size,
        )
    }
}

/// Add a table entry as a new occlusion root
pub fn paint_sprite_bb(
    session: &mut PaintSession,
    colours: ImageId,
    sprite: &SpriteBb,
    height: i32,
) -> Option<PaintStructId> {
    session.add_image_as_parent(
        colours.with_index(sprite.sprite_id),
        sprite.offset_at(height),
        sprite.bound_box_at(height),
    )
}

/// Add a table entry attached to the previous root
pub fn paint_sprite_bb_child(
    session: &mut PaintSession,
    colours: ImageId,
    sprite: &SpriteBb,
    height: i32,
) -> Option<PaintStructId> {
    session.add_image_as_child(
        colours.with_index(sprite.sprite_id),
        sprite.offset_at(height),
        sprite.bound_box_at(height),
    )
}

/// Whether `element` on the current tile is the one selected in the editor
pub(crate) fn is_element_selected(session: &PaintSession, element: &TrackElement) -> bool {
    session.selected_element
        == Some(ElementKey {
            tile: session.map_position.to_tile(),
            base_height: element.base_height,
        })
}

/// Supports go on every other tile in a checkerboard
pub fn track_paint_util_should_paint_supports(position: CoordsXY) -> bool {
    (position.x & 32) == (position.y & 32)
}

/// Animated barrel around the track on a spinning tunnel piece
///
/// The back half is a child of the track so it composites over the tunnel
/// mouth; the front half starts its own root.
pub fn track_paint_util_spinning_tunnel_paint(
    session: &mut PaintSession,
    thickness: i32,
    height: i32,
    direction: Direction,
) {
    let frame = ((session.current_ticks >> 2) & 3) as usize;
    let mut colours = session.support_colours;
    if let Some(secondary) = session.track_colours.secondary() {
        colours = colours.with_secondary(secondary);
    }
    let axis = (direction & 1) as usize;

    let image = colours.with_index(SPR_GHOST_TRAIN_SPINNING_TUNNEL[axis][0][frame]);
    if direction == 0 || direction == 2 {
        session.add_image_as_child(
            image,
            CoordsXYZ::new(0, 0, height),
            BoundBoxXYZ::new(CoordsXYZ::new(28, 0, height), CoordsXYZ::new(2, 32, thickness)),
        );
    } else {
        session.add_image_as_child(
            image,
            CoordsXYZ::new(0, 0, height),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 28, height), CoordsXYZ::new(32, 2, thickness)),
        );
    }

    let image = colours.with_index(SPR_GHOST_TRAIN_SPINNING_TUNNEL[axis][1][frame]);
    if direction == 0 || direction == 2 {
        session.add_image_as_parent(
            image,
            CoordsXYZ::new(0, 0, height),
            BoundBoxXYZ::new(CoordsXYZ::new(4, 0, height), CoordsXYZ::new(26, 32, 23)),
        );
    } else {
        session.add_image_as_parent(
            image,
            CoordsXYZ::new(0, 0, height),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, height), CoordsXYZ::new(32, 26, 23)),
        );
    }
}
