//! Loops, twists and corkscrews
//!
//! Every inversion claims the whole tile. Pieces that end where they began
//! on the other hand are drawn from one hand walked backwards.

use funfair_paint::{MetalSupportPlace, PaintSession, TunnelGroup, TunnelSubType};
use funfair_world::{Direction, Ride, SupportType, TrackElement};

use super::{block_all, paint_support, TUNNEL_GROUP};
use crate::util::{paint_sprite_bb, paint_sprite_bb_child, sprite_index, SpriteBb};

const VERTICAL_LOOP_SPRITE_MAP: [i8; 10] = [0, 1, 2, 3, -1, -1, 4, 5, 6, 7];
const VERTICAL_LOOP_GENERAL_SUPPORT: [i32; 10] = [56, 72, 168, 168, 168, 168, 168, 168, 72, 56];
const HALF_LOOP_GENERAL_SUPPORT: [i32; 4] = [56, 72, 168, 160];
const TWIST_GENERAL_SUPPORT: [i32; 3] = [64, 64, 56];
const CORKSCREW_GENERAL_SUPPORT: [i32; 3] = [48, 88, 72];

const LEFT_VERTICAL_LOOP: [[SpriteBb; 8]; 4] = [
    [
        SpriteBb::new(26801, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26802, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26803, [0, 0, 29], [0, 20, 0], [32, 2, 119]),
        SpriteBb::new(26804, [0, 0, 29], [0, 0, 32], [32, 26, 3]),
        SpriteBb::new(26805, [0, 0, 29], [0, 16, 32], [32, 16, 3]),
        SpriteBb::new(26806, [0, 0, 29], [0, 20, 0], [32, 2, 119]),
        SpriteBb::new(26807, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26808, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26809, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26810, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26811, [0, 0, 29], [20, 0, 0], [2, 32, 119]),
        SpriteBb::new(26812, [0, 0, 29], [0, 0, 32], [26, 32, 3]),
        SpriteBb::new(26813, [0, 0, 29], [16, 0, 32], [16, 32, 3]),
        SpriteBb::new(26814, [0, 0, 29], [20, 0, 0], [2, 32, 119]),
        SpriteBb::new(26815, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26816, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26817, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26818, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26819, [0, 0, 29], [0, 10, 0], [32, 2, 119]),
        SpriteBb::new(26820, [0, 0, 29], [0, 6, 32], [32, 26, 3]),
        SpriteBb::new(26821, [0, 0, 29], [0, 0, 32], [32, 16, 3]),
        SpriteBb::new(26822, [0, 0, 29], [0, 10, 0], [32, 2, 119]),
        SpriteBb::new(26823, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26824, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26825, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26826, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26827, [0, 0, 29], [10, 0, 0], [2, 32, 119]),
        SpriteBb::new(26828, [0, 0, 29], [6, 0, 32], [26, 32, 3]),
        SpriteBb::new(26829, [0, 0, 29], [0, 0, 32], [16, 32, 3]),
        SpriteBb::new(26830, [0, 0, 29], [10, 0, 0], [2, 32, 119]),
        SpriteBb::new(26831, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26832, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
];

const RIGHT_VERTICAL_LOOP: [[SpriteBb; 8]; 4] = [
    [
        SpriteBb::new(26833, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26834, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26835, [0, 0, 29], [0, 10, 0], [32, 2, 119]),
        SpriteBb::new(26836, [0, 0, 29], [0, 6, 32], [32, 26, 3]),
        SpriteBb::new(26837, [0, 0, 29], [0, 0, 32], [32, 16, 3]),
        SpriteBb::new(26838, [0, 0, 29], [0, 10, 0], [32, 2, 119]),
        SpriteBb::new(26839, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26840, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26841, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26842, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26843, [0, 0, 29], [10, 0, 0], [2, 32, 119]),
        SpriteBb::new(26844, [0, 0, 29], [6, 0, 32], [26, 32, 3]),
        SpriteBb::new(26845, [0, 0, 29], [0, 0, 32], [16, 32, 3]),
        SpriteBb::new(26846, [0, 0, 29], [10, 0, 0], [2, 32, 119]),
        SpriteBb::new(26847, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26848, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26849, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26850, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26851, [0, 0, 29], [0, 20, 0], [32, 2, 119]),
        SpriteBb::new(26852, [0, 0, 29], [0, 0, 32], [32, 26, 3]),
        SpriteBb::new(26853, [0, 0, 29], [0, 16, 32], [32, 16, 3]),
        SpriteBb::new(26854, [0, 0, 29], [0, 20, 0], [32, 2, 119]),
        SpriteBb::new(26855, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26856, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26857, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26858, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26859, [0, 0, 29], [20, 0, 0], [2, 32, 119]),
        SpriteBb::new(26860, [0, 0, 29], [0, 0, 32], [26, 32, 3]),
        SpriteBb::new(26861, [0, 0, 29], [16, 0, 32], [16, 32, 3]),
        SpriteBb::new(26862, [0, 0, 29], [20, 0, 0], [2, 32, 119]),
        SpriteBb::new(26863, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26864, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
];

const HALF_LOOP_UP: [[SpriteBb; 4]; 4] = [
    [
        SpriteBb::new(26865, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26866, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26867, [0, 0, 29], [28, 6, 0], [3, 20, 119]),
        SpriteBb::new(26868, [0, 0, 29], [0, 6, 32], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26869, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26870, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26871, [0, 0, 29], [6, 1, 0], [20, 3, 119]),
        SpriteBb::new(26872, [0, 0, 29], [6, 0, 32], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26873, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26874, [0, 0, 29], [0, 6, 45], [32, 20, 7]),
        SpriteBb::new(26875, [0, 0, 29], [1, 6, 0], [3, 20, 119]),
        SpriteBb::new(26876, [0, 0, 29], [0, 6, 32], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26877, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26878, [0, 0, 29], [6, 0, 45], [20, 32, 7]),
        SpriteBb::new(26879, [0, 0, 29], [6, 28, 0], [20, 3, 119]),
        SpriteBb::new(26880, [0, 0, 29], [6, 0, 32], [20, 32, 3]),
    ],
];

const LEFT_TWIST_DOWN_TO_UP: [[[SpriteBb; 2]; 3]; 4] = [
    [
        [
            SpriteBb::new(26881, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
            SpriteBb::new(26882, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
        [
            SpriteBb::new(26883, [0, 0, 29], [0, 6, 33], [32, 20, 3]),
            SpriteBb::new(26884, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
        [
            SpriteBb::new(26885, [0, 0, 29], [0, 6, 37], [32, 20, 3]),
            SpriteBb::new(26886, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
    ],
    [
        [
            SpriteBb::new(26887, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
            SpriteBb::new(26888, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
        [
            SpriteBb::new(26889, [0, 0, 29], [6, 0, 33], [20, 32, 3]),
            SpriteBb::new(26890, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
        [
            SpriteBb::new(26891, [0, 0, 29], [6, 0, 37], [20, 32, 3]),
            SpriteBb::new(26892, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
    ],
    [
        [
            SpriteBb::new(26893, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
            SpriteBb::new(26894, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
        [
            SpriteBb::new(26895, [0, 0, 29], [0, 6, 33], [32, 20, 3]),
            SpriteBb::new(26896, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
        [
            SpriteBb::new(26897, [0, 0, 29], [0, 6, 37], [32, 20, 3]),
            SpriteBb::new(26898, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
    ],
    [
        [
            SpriteBb::new(26899, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
            SpriteBb::new(26900, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
        [
            SpriteBb::new(26901, [0, 0, 29], [6, 0, 33], [20, 32, 3]),
            SpriteBb::new(26902, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
        [
            SpriteBb::new(26903, [0, 0, 29], [6, 0, 37], [20, 32, 3]),
            SpriteBb::new(26904, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
    ],
];

const RIGHT_TWIST_DOWN_TO_UP: [[[SpriteBb; 2]; 3]; 4] = [
    [
        [
            SpriteBb::new(26905, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
            SpriteBb::new(26906, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
        [
            SpriteBb::new(26907, [0, 0, 29], [0, 6, 33], [32, 20, 3]),
            SpriteBb::new(26908, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
        [
            SpriteBb::new(26909, [0, 0, 29], [0, 6, 37], [32, 20, 3]),
            SpriteBb::new(26910, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
    ],
    [
        [
            SpriteBb::new(26911, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
            SpriteBb::new(26912, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
        [
            SpriteBb::new(26913, [0, 0, 29], [6, 0, 33], [20, 32, 3]),
            SpriteBb::new(26914, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
        [
            SpriteBb::new(26915, [0, 0, 29], [6, 0, 37], [20, 32, 3]),
            SpriteBb::new(26916, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
    ],
    [
        [
            SpriteBb::new(26917, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
            SpriteBb::new(26918, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
        [
            SpriteBb::new(26919, [0, 0, 29], [0, 6, 33], [32, 20, 3]),
            SpriteBb::new(26920, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
        [
            SpriteBb::new(26921, [0, 0, 29], [0, 6, 37], [32, 20, 3]),
            SpriteBb::new(26922, [0, 0, 29], [0, 6, 44], [32, 20, 0]),
        ],
    ],
    [
        [
            SpriteBb::new(26923, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
            SpriteBb::new(26924, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
        [
            SpriteBb::new(26925, [0, 0, 29], [6, 0, 33], [20, 32, 3]),
            SpriteBb::new(26926, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
        [
            SpriteBb::new(26927, [0, 0, 29], [6, 0, 37], [20, 32, 3]),
            SpriteBb::new(26928, [0, 0, 29], [6, 0, 44], [20, 32, 0]),
        ],
    ],
];

const LEFT_CORKSCREW_UP: [[SpriteBb; 3]; 4] = [
    [
        SpriteBb::new(26929, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26930, [0, 0, 29], [6, 6, 45], [20, 20, 3]),
        SpriteBb::new(26931, [0, 0, 29], [6, 0, 61], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26932, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26933, [0, 0, 29], [6, 6, 45], [20, 20, 3]),
        SpriteBb::new(26934, [0, 0, 29], [0, 6, 61], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26935, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26936, [0, 0, 29], [6, 6, 45], [20, 20, 3]),
        SpriteBb::new(26937, [0, 0, 29], [6, 0, 61], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26938, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26939, [0, 0, 29], [6, 6, 45], [20, 20, 3]),
        SpriteBb::new(26940, [0, 0, 29], [0, 6, 61], [32, 20, 3]),
    ],
];

const RIGHT_CORKSCREW_UP: [[SpriteBb; 3]; 4] = [
    [
        SpriteBb::new(26941, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26942, [0, 0, 29], [6, 6, 45], [20, 20, 3]),
        SpriteBb::new(26943, [0, 0, 29], [6, 0, 61], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26944, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26945, [0, 0, 29], [6, 6, 45], [20, 20, 3]),
        SpriteBb::new(26946, [0, 0, 29], [0, 6, 61], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26947, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26948, [0, 0, 29], [6, 6, 45], [20, 20, 3]),
        SpriteBb::new(26949, [0, 0, 29], [6, 0, 61], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26950, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26951, [0, 0, 29], [6, 6, 45], [20, 20, 3]),
        SpriteBb::new(26952, [0, 0, 29], [0, 6, 61], [32, 20, 3]),
    ],
];

fn set_general_support(session: &mut PaintSession, table: &[i32], track_sequence: u8, height: i32) {
    if let Some(&offset) = table.get(track_sequence as usize) {
        session.set_general_support_height(height + offset);
    }
}

fn paint_vertical_loop(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
    sprites: &[[SpriteBb; 8]; 4],
) {
    if let Some(index) = sprite_index(&VERTICAL_LOOP_SPRITE_MAP, track_sequence) {
        let colours = session.track_colours;
        paint_sprite_bb(session, colours, &sprites[(direction & 3) as usize][index], height);
    }
    if matches!(track_sequence, 0 | 9) {
        paint_support(session, support_type, MetalSupportPlace::Centre, height + 62);
    }
    match (track_sequence, direction) {
        (0, 0 | 3) | (9, 1 | 2) => {
            session.push_tunnel_rotated(
                direction,
                height - 8,
                TUNNEL_GROUP,
                TunnelSubType::SlopeStart,
            )
        }
        _ => {}
    }
    block_all(session);
    set_general_support(session, &VERTICAL_LOOP_GENERAL_SUPPORT, track_sequence, height);
}

pub(super) fn compact_inverted_rc_track_left_vertical_loop(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_vertical_loop(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &LEFT_VERTICAL_LOOP,
    );
}

pub(super) fn compact_inverted_rc_track_right_vertical_loop(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_vertical_loop(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &RIGHT_VERTICAL_LOOP,
    );
}

pub(super) fn compact_inverted_rc_track_half_loop_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    if let Some(sprite) = HALF_LOOP_UP[(direction & 3) as usize].get(track_sequence as usize) {
        let colours = session.track_colours;
        paint_sprite_bb(session, colours, sprite, height);
    }
    if track_sequence == 0 {
        paint_support(session, support_type, MetalSupportPlace::Centre, height + 62);
    }
    match (track_sequence, direction) {
        (0, 0 | 3) => {
            session.push_tunnel_rotated(
                direction,
                height - 8,
                TUNNEL_GROUP,
                TunnelSubType::SlopeStart,
            )
        }
        (3, 1 | 2) => {
            session.push_tunnel_rotated(
                direction,
                height + 16,
                TunnelGroup::Standard,
                TunnelSubType::Flat,
            )
        }
        _ => {}
    }
    block_all(session);
    set_general_support(session, &HALF_LOOP_GENERAL_SUPPORT, track_sequence, height);
}

pub(super) fn compact_inverted_rc_track_half_loop_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_half_loop_up(
        session,
        ride,
        3 - (track_sequence & 3),
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

fn paint_twist(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
    sprites: &[[[SpriteBb; 2]; 3]; 4],
) {
    if let Some([parent, child]) = sprites[(direction & 3) as usize].get(track_sequence as usize) {
        let colours = session.track_colours;
        paint_sprite_bb(session, colours, parent, height);
        paint_sprite_bb_child(session, colours, child, height);
    }
    match track_sequence {
        0 => {
            paint_support(session, support_type, MetalSupportPlace::Centre, height + 44);
        }
        2 => {
            paint_support(session, support_type, MetalSupportPlace::Centre, height + 36);
        }
        _ => {}
    }
    match (track_sequence, direction) {
        (0, 0 | 3) => {
            session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat)
        }
        (2, 1 | 2) => {
            session.push_tunnel_rotated(
                direction,
                height,
                TunnelGroup::Standard,
                TunnelSubType::Flat,
            )
        }
        _ => {}
    }
    block_all(session);
    set_general_support(session, &TWIST_GENERAL_SUPPORT, track_sequence, height);
}

pub(super) fn compact_inverted_rc_track_left_twist_down_to_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_twist(session, track_sequence, direction, height, support_type, &LEFT_TWIST_DOWN_TO_UP);
}

pub(super) fn compact_inverted_rc_track_right_twist_down_to_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_twist(session, track_sequence, direction, height, support_type, &RIGHT_TWIST_DOWN_TO_UP);
}

pub(super) fn compact_inverted_rc_track_left_twist_up_to_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_right_twist_down_to_up(
        session,
        ride,
        2u8.saturating_sub(track_sequence),
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_right_twist_up_to_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_left_twist_down_to_up(
        session,
        ride,
        2u8.saturating_sub(track_sequence),
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

/// Shared corkscrew body; `exits` names the directions whose exit edge faces
/// the viewer, left edge first
fn paint_corkscrew(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
    sprites: &[[SpriteBb; 3]; 4],
    exits: (Direction, Direction),
) {
    if let Some(sprite) = sprites[(direction & 3) as usize].get(track_sequence as usize) {
        let colours = session.track_colours;
        paint_sprite_bb(session, colours, sprite, height);
    }
    if track_sequence == 0 {
        paint_support(session, support_type, MetalSupportPlace::Centre, height + 44);
    }
    match track_sequence {
        0 if direction == 0 || direction == 3 => {
            session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat)
        }
        2 if direction == exits.0 => {
            session.push_tunnel_left(height + 24, TunnelGroup::Standard, TunnelSubType::Flat)
        }
        2 if direction == exits.1 => {
            session.push_tunnel_right(height + 24, TunnelGroup::Standard, TunnelSubType::Flat)
        }
        _ => {}
    }
    block_all(session);
    set_general_support(session, &CORKSCREW_GENERAL_SUPPORT, track_sequence, height);
}

pub(super) fn compact_inverted_rc_track_left_corkscrew_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_corkscrew(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &LEFT_CORKSCREW_UP,
        (3, 2),
    );
}

pub(super) fn compact_inverted_rc_track_right_corkscrew_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_corkscrew(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &RIGHT_CORKSCREW_UP,
        (1, 0),
    );
}

pub(super) fn compact_inverted_rc_track_left_corkscrew_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_right_corkscrew_up(
        session,
        ride,
        2u8.saturating_sub(track_sequence),
        (direction + 1) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_right_corkscrew_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_left_corkscrew_up(
        session,
        ride,
        2u8.saturating_sub(track_sequence),
        (direction + 3) & 3,
        height,
        element,
        support_type,
    );
}
