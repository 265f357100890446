//! Ghost train
//!
//! Low wooden-supported track that enters show buildings through door
//! tunnels. Only flat pieces, gentle slopes, tight turns, brakes and the
//! spinning tunnel are drawn.

use funfair_paint::{
    wooden_a_supports_paint_setup, BoundBoxXYZ, ImageIndex, PaintSession, TunnelGroup,
    TunnelSubType, WoodenSupportSubType, SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED,
};
use funfair_world::{CoordsXYZ, Direction, Ride, SupportType, TrackElemType, TrackElement};

use crate::dispatch::{track_paint_function_dummy, TrackPaintFunction};
use crate::sprites::{SPR_STATION_BASE_B_NW_SE, SPR_STATION_BASE_B_SW_NE};
use crate::util::{
    get_station_colour_scheme, track_paint_util_draw_station,
    track_paint_util_draw_station_metal_supports, track_paint_util_left_quarter_turn_1_tile_paint,
    track_paint_util_left_quarter_turn_1_tile_tunnel,
    track_paint_util_right_quarter_turn_3_tiles_paint,
    track_paint_util_right_quarter_turn_3_tiles_tunnel, track_paint_util_spinning_tunnel_paint,
    DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS,
    DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_OFFSETS,
    MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES,
};

const TUNNEL_GROUP: TunnelGroup = TunnelGroup::Doors;
const GENERAL_SUPPORT_HEIGHT: i32 = 32;

const GHOST_TRAIN_FLAT: [ImageIndex; 4] = [28821, 28822, 28821, 28822];
const GHOST_TRAIN_BRAKES: [ImageIndex; 4] = [28823, 28824, 28823, 28824];

/// Track then side wall
const GHOST_TRAIN_25_DEG_UP: [[ImageIndex; 2]; 4] =
    [[28825, 28841], [28826, 28842], [28827, 28843], [28828, 28844]];
const GHOST_TRAIN_FLAT_TO_25_DEG_UP: [[ImageIndex; 2]; 4] =
    [[28833, 28845], [28834, 28846], [28835, 28847], [28836, 28848]];
const GHOST_TRAIN_25_DEG_UP_TO_FLAT: [[ImageIndex; 2]; 4] =
    [[28837, 28849], [28838, 28850], [28839, 28851], [28840, 28852]];

const GHOST_TRAIN_QUARTER_TURN_3_TILES: [[ImageIndex; 3]; 4] = [
    [28859, 28858, 28857],
    [28862, 28861, 28860],
    [28865, 28864, 28863],
    [28868, 28867, 28866],
];
const GHOST_TRAIN_QUARTER_TURN_1_TILE: [ImageIndex; 4] = [28881, 28882, 28883, 28884];
const GHOST_TRAIN_SPINNING_TUNNEL_TRACK: [ImageIndex; 4] = [28869, 28870, 28869, 28870];

fn track_bound_box(height: i32) -> BoundBoxXYZ {
    BoundBoxXYZ::new(CoordsXYZ::new(0, 2, height), CoordsXYZ::new(32, 28, 3))
}

fn paint_straight_supports(
    session: &mut PaintSession,
    support_type: SupportType,
    direction: Direction,
    height: i32,
) {
    let colours = session.support_colours;
    wooden_a_supports_paint_setup(
        session,
        support_type.wooden(),
        WoodenSupportSubType::straight(direction),
        height,
        colours,
    );
}

fn ghost_train_track_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let image = session.track_colours.with_index(GHOST_TRAIN_FLAT[direction as usize]);
    session.add_image_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 0, height),
        track_bound_box(height),
    );
    paint_straight_supports(session, support_type, direction, height);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

fn paint_slope(
    session: &mut PaintSession,
    sprites: &[ImageIndex; 2],
    direction: Direction,
    height: i32,
    support_type: SupportType,
) {
    let offset = CoordsXYZ::new(0, 0, height);
    let image = session.track_colours.with_index(sprites[0]);
    session.add_image_as_parent_rotated(direction, image, offset, track_bound_box(height));
    let image = session.track_colours.with_index(sprites[1]);
    session.add_image_as_parent_rotated(
        direction,
        image,
        offset,
        BoundBoxXYZ::new(offset, CoordsXYZ::new(32, 1, 23)),
    );
    paint_straight_supports(session, support_type, direction, height);
}

fn ghost_train_track_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_slope(
        session,
        &GHOST_TRAIN_25_DEG_UP[direction as usize],
        direction,
        height,
        support_type,
    );
    match direction {
        0 => session.push_tunnel_left(height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart),
        1 => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        2 => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        _ => session.push_tunnel_right(height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart),
    }
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + 56);
}

fn ghost_train_track_flat_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_slope(
        session,
        &GHOST_TRAIN_FLAT_TO_25_DEG_UP[direction as usize],
        direction,
        height,
        support_type,
    );
    match direction {
        0 => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
        1 => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        2 => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        _ => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
    }
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + 48);
}

fn ghost_train_track_25_deg_up_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_slope(
        session,
        &GHOST_TRAIN_25_DEG_UP_TO_FLAT[direction as usize],
        direction,
        height,
        support_type,
    );
    match direction {
        0 => session.push_tunnel_left(height - 8, TUNNEL_GROUP, TunnelSubType::Flat),
        1 => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::FlatTo25Deg),
        2 => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::FlatTo25Deg),
        _ => session.push_tunnel_right(height - 8, TUNNEL_GROUP, TunnelSubType::Flat),
    }
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + 40);
}

fn ghost_train_track_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    ghost_train_track_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

fn ghost_train_track_flat_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    ghost_train_track_25_deg_up_to_flat(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

fn ghost_train_track_25_deg_down_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    ghost_train_track_flat_to_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

fn ghost_train_track_station(
    session: &mut PaintSession,
    ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    _support_type: SupportType,
) {
    const BASE: [ImageIndex; 4] = [
        SPR_STATION_BASE_B_SW_NE,
        SPR_STATION_BASE_B_NW_SE,
        SPR_STATION_BASE_B_SW_NE,
        SPR_STATION_BASE_B_NW_SE,
    ];

    let base = get_station_colour_scheme(session, element).with_index(BASE[direction as usize]);
    session.add_image_as_parent_rotated(
        direction,
        base,
        CoordsXYZ::new(0, 0, height - 2),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 2, height), CoordsXYZ::new(32, 28, 2)),
    );
    let track = session.track_colours.with_index(GHOST_TRAIN_FLAT[direction as usize]);
    session.add_image_as_parent_rotated(
        direction,
        track,
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 2, height), CoordsXYZ::new(32, 28, 1)),
    );

    let support_colours = session.support_colours;
    track_paint_util_draw_station_metal_supports(session, direction, height, support_colours);
    track_paint_util_draw_station(session, ride, direction, height, element);
    session.push_tunnel_rotated(direction, height, TunnelGroup::Square, TunnelSubType::Flat);
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

fn ghost_train_track_right_quarter_turn_3_tiles(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let colours = session.track_colours;
    track_paint_util_right_quarter_turn_3_tiles_paint(
        session,
        3,
        height,
        direction,
        track_sequence,
        colours,
        &GHOST_TRAIN_QUARTER_TURN_3_TILES,
        None,
        &DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_LENGTHS,
        Some(&DEFAULT_RIGHT_QUARTER_TURN_3_TILES_BOUND_OFFSETS),
    );
    track_paint_util_right_quarter_turn_3_tiles_tunnel(
        session,
        TUNNEL_GROUP,
        TunnelSubType::Flat,
        height,
        direction,
        track_sequence,
    );

    let sub_type = match track_sequence {
        0 => Some(WoodenSupportSubType::straight(direction)),
        2 => Some(WoodenSupportSubType::corner(direction)),
        3 => Some(WoodenSupportSubType::straight(direction + 1)),
        _ => None,
    };
    if let Some(sub_type) = sub_type {
        let colours = session.support_colours;
        wooden_a_supports_paint_setup(session, support_type.wooden(), sub_type, height, colours);
        session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    }
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

fn ghost_train_track_left_quarter_turn_3_tiles(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let track_sequence =
        MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES[track_sequence as usize & 3];
    ghost_train_track_right_quarter_turn_3_tiles(
        session,
        ride,
        track_sequence,
        (direction + 1) & 3,
        height,
        element,
        support_type,
    );
}

fn ghost_train_track_left_quarter_turn_1_tile(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let colours = session.track_colours;
    track_paint_util_left_quarter_turn_1_tile_paint(
        session,
        3,
        height,
        0,
        direction,
        colours,
        &GHOST_TRAIN_QUARTER_TURN_1_TILE,
    );
    let colours = session.support_colours;
    wooden_a_supports_paint_setup(
        session,
        support_type.wooden(),
        WoodenSupportSubType::corner(direction),
        height,
        colours,
    );
    track_paint_util_left_quarter_turn_1_tile_tunnel(
        session,
        TUNNEL_GROUP,
        direction,
        height,
        0,
        TunnelSubType::Flat,
        0,
        TunnelSubType::Flat,
    );
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

fn ghost_train_track_right_quarter_turn_1_tile(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    ghost_train_track_left_quarter_turn_1_tile(
        session,
        ride,
        track_sequence,
        (direction + 3) % 4,
        height,
        element,
        support_type,
    );
}

fn ghost_train_track_spinning_tunnel(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let image = session
        .track_colours
        .with_index(GHOST_TRAIN_SPINNING_TUNNEL_TRACK[direction as usize]);
    session.add_image_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 0, height),
        track_bound_box(height),
    );
    track_paint_util_spinning_tunnel_paint(session, 3, height, direction);

    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    paint_straight_supports(session, support_type, direction, height);
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

fn ghost_train_track_brakes(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let image = session.track_colours.with_index(GHOST_TRAIN_BRAKES[direction as usize]);
    session.add_image_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 0, height),
        track_bound_box(height),
    );
    paint_straight_supports(session, support_type, direction, height);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

pub fn get_track_paint_function(element: TrackElemType) -> TrackPaintFunction {
    use TrackElemType::*;
    match element {
        Flat => ghost_train_track_flat,

        EndStation | BeginStation | MiddleStation => ghost_train_track_station,

        Up25 => ghost_train_track_25_deg_up,
        FlatToUp25 => ghost_train_track_flat_to_25_deg_up,
        Up25ToFlat => ghost_train_track_25_deg_up_to_flat,
        Down25 => ghost_train_track_25_deg_down,
        FlatToDown25 => ghost_train_track_flat_to_25_deg_down,
        Down25ToFlat => ghost_train_track_25_deg_down_to_flat,

        LeftQuarterTurn3Tiles => ghost_train_track_left_quarter_turn_3_tiles,
        RightQuarterTurn3Tiles => ghost_train_track_right_quarter_turn_3_tiles,
        LeftQuarterTurn1Tile => ghost_train_track_left_quarter_turn_1_tile,
        RightQuarterTurn1Tile => ghost_train_track_right_quarter_turn_1_tile,

        Brakes => ghost_train_track_brakes,
        SpinningTunnel => ghost_train_track_spinning_tunnel,

        _ => track_paint_function_dummy,
    }
}
