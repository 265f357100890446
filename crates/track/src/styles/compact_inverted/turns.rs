//! Quarter turns and S-bends
//!
//! Sprite tables hold one entry per drawn tile with the box already placed
//! for each direction; sequences without an entry only lift the general
//! support height.

use funfair_paint::{MetalSupportPlace, PaintSession, TunnelSubType};
use funfair_world::{Direction, Ride, SupportType, TrackElement};

use super::{block_segments, paint_support, GENERAL_SUPPORT_HEIGHT, TUNNEL_GROUP};
use crate::util::{
    paint_sprite_bb, track_paint_util_left_quarter_turn_3_tiles_paint_3,
    track_paint_util_left_quarter_turn_5_tiles_paint_2,
    track_paint_util_right_quarter_turn_3_tiles_25_deg_up_tunnel,
    track_paint_util_right_quarter_turn_3_tiles_paint_3,
    track_paint_util_right_quarter_turn_5_tiles_paint_2, SpriteBb,
    MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES,
    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES,
};

const LEFT_QUARTER_TURN_5_TILES: [[SpriteBb; 5]; 4] = [
    [
        SpriteBb::new(26641, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26642, [0, 0, 29], [0, 0, 29], [32, 16, 3]),
        SpriteBb::new(26643, [0, 0, 29], [0, 16, 29], [16, 16, 3]),
        SpriteBb::new(26644, [0, 0, 29], [16, 0, 29], [16, 32, 3]),
        SpriteBb::new(26645, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26646, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26647, [0, 0, 29], [0, 0, 29], [16, 32, 3]),
        SpriteBb::new(26648, [0, 0, 29], [16, 16, 29], [16, 16, 3]),
        SpriteBb::new(26649, [0, 0, 29], [0, 0, 29], [32, 16, 3]),
        SpriteBb::new(26650, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26651, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26652, [0, 0, 29], [0, 16, 29], [32, 16, 3]),
        SpriteBb::new(26653, [0, 0, 29], [16, 0, 29], [16, 16, 3]),
        SpriteBb::new(26654, [0, 0, 29], [0, 0, 29], [16, 32, 3]),
        SpriteBb::new(26655, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26656, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26657, [0, 0, 29], [16, 0, 29], [16, 32, 3]),
        SpriteBb::new(26658, [0, 0, 29], [0, 0, 29], [16, 16, 3]),
        SpriteBb::new(26659, [0, 0, 29], [0, 16, 29], [32, 16, 3]),
        SpriteBb::new(26660, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
];

const BANKED_LEFT_QUARTER_TURN_5_TILES: [[SpriteBb; 5]; 4] = [
    [
        SpriteBb::new(26661, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26662, [0, 0, 29], [0, 0, 29], [32, 16, 3]),
        SpriteBb::new(26663, [0, 0, 29], [0, 16, 29], [16, 16, 3]),
        SpriteBb::new(26664, [0, 0, 29], [16, 0, 29], [16, 32, 3]),
        SpriteBb::new(26665, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26666, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26667, [0, 0, 29], [0, 0, 29], [16, 32, 3]),
        SpriteBb::new(26668, [0, 0, 29], [16, 16, 29], [16, 16, 3]),
        SpriteBb::new(26669, [0, 0, 29], [0, 0, 29], [32, 16, 3]),
        SpriteBb::new(26670, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26671, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26672, [0, 0, 29], [0, 16, 29], [32, 16, 3]),
        SpriteBb::new(26673, [0, 0, 29], [16, 0, 29], [16, 16, 3]),
        SpriteBb::new(26674, [0, 0, 29], [0, 0, 29], [16, 32, 3]),
        SpriteBb::new(26675, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26676, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26677, [0, 0, 29], [16, 0, 29], [16, 32, 3]),
        SpriteBb::new(26678, [0, 0, 29], [0, 0, 29], [16, 16, 3]),
        SpriteBb::new(26679, [0, 0, 29], [0, 16, 29], [32, 16, 3]),
        SpriteBb::new(26680, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
];

const LEFT_QUARTER_TURN_5_TILES_25_DEG_UP: [[SpriteBb; 5]; 4] = [
    [
        SpriteBb::new(26681, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26682, [0, 0, 29], [0, 0, 45], [32, 16, 3]),
        SpriteBb::new(26683, [0, 0, 29], [0, 16, 45], [16, 16, 3]),
        SpriteBb::new(26684, [0, 0, 29], [16, 0, 45], [16, 32, 3]),
        SpriteBb::new(26685, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26686, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26687, [0, 0, 29], [0, 0, 45], [16, 32, 3]),
        SpriteBb::new(26688, [0, 0, 29], [16, 16, 45], [16, 16, 3]),
        SpriteBb::new(26689, [0, 0, 29], [0, 0, 45], [32, 16, 3]),
        SpriteBb::new(26690, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26691, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26692, [0, 0, 29], [0, 16, 45], [32, 16, 3]),
        SpriteBb::new(26693, [0, 0, 29], [16, 0, 45], [16, 16, 3]),
        SpriteBb::new(26694, [0, 0, 29], [0, 0, 45], [16, 32, 3]),
        SpriteBb::new(26695, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26696, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26697, [0, 0, 29], [16, 0, 45], [16, 32, 3]),
        SpriteBb::new(26698, [0, 0, 29], [0, 0, 45], [16, 16, 3]),
        SpriteBb::new(26699, [0, 0, 29], [0, 16, 45], [32, 16, 3]),
        SpriteBb::new(26700, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
    ],
];

const RIGHT_QUARTER_TURN_5_TILES_25_DEG_UP: [[SpriteBb; 5]; 4] = [
    [
        SpriteBb::new(26701, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26702, [0, 0, 29], [0, 16, 45], [32, 16, 3]),
        SpriteBb::new(26703, [0, 0, 29], [0, 0, 45], [16, 16, 3]),
        SpriteBb::new(26704, [0, 0, 29], [16, 0, 45], [16, 32, 3]),
        SpriteBb::new(26705, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26706, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26707, [0, 0, 29], [16, 0, 45], [16, 32, 3]),
        SpriteBb::new(26708, [0, 0, 29], [0, 16, 45], [16, 16, 3]),
        SpriteBb::new(26709, [0, 0, 29], [0, 0, 45], [32, 16, 3]),
        SpriteBb::new(26710, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26711, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26712, [0, 0, 29], [0, 0, 45], [32, 16, 3]),
        SpriteBb::new(26713, [0, 0, 29], [16, 16, 45], [16, 16, 3]),
        SpriteBb::new(26714, [0, 0, 29], [0, 0, 45], [16, 32, 3]),
        SpriteBb::new(26715, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26716, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26717, [0, 0, 29], [0, 0, 45], [16, 32, 3]),
        SpriteBb::new(26718, [0, 0, 29], [16, 0, 45], [16, 16, 3]),
        SpriteBb::new(26719, [0, 0, 29], [0, 16, 45], [32, 16, 3]),
        SpriteBb::new(26720, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
    ],
];

const S_BEND_LEFT: [[SpriteBb; 4]; 4] = [
    [
        SpriteBb::new(26721, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26722, [0, 0, 29], [0, 0, 29], [32, 26, 3]),
        SpriteBb::new(26723, [0, 0, 29], [0, 6, 29], [32, 26, 3]),
        SpriteBb::new(26724, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26725, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26726, [0, 0, 29], [0, 0, 29], [26, 32, 3]),
        SpriteBb::new(26727, [0, 0, 29], [6, 0, 29], [26, 32, 3]),
        SpriteBb::new(26728, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26729, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26730, [0, 0, 29], [0, 6, 29], [32, 26, 3]),
        SpriteBb::new(26731, [0, 0, 29], [0, 0, 29], [32, 26, 3]),
        SpriteBb::new(26732, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26733, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26734, [0, 0, 29], [6, 0, 29], [26, 32, 3]),
        SpriteBb::new(26735, [0, 0, 29], [0, 0, 29], [26, 32, 3]),
        SpriteBb::new(26736, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
];

const S_BEND_RIGHT: [[SpriteBb; 4]; 4] = [
    [
        SpriteBb::new(26737, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26738, [0, 0, 29], [0, 6, 29], [32, 26, 3]),
        SpriteBb::new(26739, [0, 0, 29], [0, 0, 29], [32, 26, 3]),
        SpriteBb::new(26740, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26741, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26742, [0, 0, 29], [6, 0, 29], [26, 32, 3]),
        SpriteBb::new(26743, [0, 0, 29], [0, 0, 29], [26, 32, 3]),
        SpriteBb::new(26744, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26745, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26746, [0, 0, 29], [0, 0, 29], [32, 26, 3]),
        SpriteBb::new(26747, [0, 0, 29], [0, 6, 29], [32, 26, 3]),
        SpriteBb::new(26748, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26749, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26750, [0, 0, 29], [0, 0, 29], [26, 32, 3]),
        SpriteBb::new(26751, [0, 0, 29], [6, 0, 29], [26, 32, 3]),
        SpriteBb::new(26752, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
];

const LEFT_QUARTER_TURN_3_TILES: [[SpriteBb; 3]; 4] = [
    [
        SpriteBb::new(26753, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26754, [0, 0, 29], [16, 0, 29], [16, 16, 3]),
        SpriteBb::new(26755, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26756, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26757, [0, 0, 29], [0, 0, 29], [16, 16, 3]),
        SpriteBb::new(26758, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26759, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26760, [0, 0, 29], [0, 16, 29], [16, 16, 3]),
        SpriteBb::new(26761, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26762, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26763, [0, 0, 29], [16, 16, 29], [16, 16, 3]),
        SpriteBb::new(26764, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
];

const BANKED_LEFT_QUARTER_TURN_3_TILES: [[SpriteBb; 3]; 4] = [
    [
        SpriteBb::new(26765, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26766, [0, 0, 29], [16, 0, 29], [16, 16, 3]),
        SpriteBb::new(26767, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26768, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26769, [0, 0, 29], [0, 0, 29], [16, 16, 3]),
        SpriteBb::new(26770, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26771, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
        SpriteBb::new(26772, [0, 0, 29], [0, 16, 29], [16, 16, 3]),
        SpriteBb::new(26773, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26774, [0, 0, 29], [6, 0, 29], [20, 32, 3]),
        SpriteBb::new(26775, [0, 0, 29], [16, 16, 29], [16, 16, 3]),
        SpriteBb::new(26776, [0, 0, 29], [0, 6, 29], [32, 20, 3]),
    ],
];

const LEFT_QUARTER_TURN_3_TILES_25_DEG_UP: [[SpriteBb; 3]; 4] = [
    [
        SpriteBb::new(26777, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26778, [0, 0, 29], [16, 0, 45], [16, 16, 3]),
        SpriteBb::new(26779, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26780, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26781, [0, 0, 29], [0, 0, 45], [16, 16, 3]),
        SpriteBb::new(26782, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26783, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26784, [0, 0, 29], [0, 16, 45], [16, 16, 3]),
        SpriteBb::new(26785, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26786, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26787, [0, 0, 29], [16, 16, 45], [16, 16, 3]),
        SpriteBb::new(26788, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
    ],
];

const RIGHT_QUARTER_TURN_3_TILES_25_DEG_UP: [[SpriteBb; 3]; 4] = [
    [
        SpriteBb::new(26789, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26790, [0, 0, 29], [16, 16, 45], [16, 16, 3]),
        SpriteBb::new(26791, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26792, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26793, [0, 0, 29], [16, 0, 45], [16, 16, 3]),
        SpriteBb::new(26794, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
    ],
    [
        SpriteBb::new(26795, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
        SpriteBb::new(26796, [0, 0, 29], [0, 0, 45], [16, 16, 3]),
        SpriteBb::new(26797, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
    ],
    [
        SpriteBb::new(26798, [0, 0, 29], [6, 0, 45], [20, 32, 3]),
        SpriteBb::new(26799, [0, 0, 29], [0, 16, 45], [16, 16, 3]),
        SpriteBb::new(26800, [0, 0, 29], [0, 6, 45], [32, 20, 3]),
    ],
];

mod blocked {
    use funfair_paint::{segments, PaintSegment::*};

    pub(super) const LEFT_QUARTER_TURN_5_TILES: [u16; 7] = [
        segments(&[TopRight, BottomLeft, Centre]),
        0,
        segments(&[Top, TopRight, BottomLeft, Left, TopLeft, Centre]),
        segments(&[TopRight, Right, BottomRight, Centre]),
        0,
        segments(&[BottomRight, Bottom, BottomLeft, Left, TopLeft, Centre]),
        segments(&[BottomRight, TopLeft, Centre]),
    ];

    pub(super) const RIGHT_QUARTER_TURN_5_TILES: [u16; 7] = [
        segments(&[TopRight, BottomLeft, Centre]),
        0,
        segments(&[TopRight, Right, BottomRight, Bottom, BottomLeft, Centre]),
        segments(&[Top, TopRight, TopLeft, Centre]),
        0,
        segments(&[BottomRight, Bottom, BottomLeft, Left, TopLeft, Centre]),
        segments(&[BottomRight, TopLeft, Centre]),
    ];

    pub(super) const S_BEND_LEFT: [u16; 4] = [
        segments(&[TopRight, BottomLeft, Centre]),
        segments(&[Top, TopRight, BottomLeft, Left, TopLeft, Centre]),
        segments(&[TopRight, Right, BottomRight, Bottom, BottomLeft, Centre]),
        segments(&[TopRight, BottomLeft, Centre]),
    ];

    pub(super) const S_BEND_RIGHT: [u16; 4] = [
        segments(&[TopRight, BottomLeft, Centre]),
        segments(&[TopRight, Right, BottomRight, Bottom, BottomLeft, Centre]),
        segments(&[Top, TopRight, BottomLeft, Left, TopLeft, Centre]),
        segments(&[TopRight, BottomLeft, Centre]),
    ];

    pub(super) const LEFT_QUARTER_TURN_3_TILES: [u16; 4] = [
        segments(&[TopRight, BottomLeft, Centre]),
        0,
        segments(&[BottomLeft, Left, TopLeft, Centre]),
        segments(&[BottomRight, TopLeft, Centre]),
    ];

    pub(super) const RIGHT_QUARTER_TURN_3_TILES: [u16; 4] = [
        segments(&[TopRight, BottomLeft, Centre]),
        0,
        segments(&[BottomRight, Bottom, BottomLeft, Centre]),
        segments(&[BottomRight, TopLeft, Centre]),
    ];
}

fn paint_left_quarter_turn_5(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
    sprites: &[[SpriteBb; 5]; 4],
) {
    track_paint_util_left_quarter_turn_5_tiles_paint_2(
        session,
        height,
        direction,
        track_sequence,
        sprites,
    );
    if matches!(track_sequence, 0 | 6) {
        paint_support(session, support_type, MetalSupportPlace::Centre, height + 44);
    }
    match (track_sequence, direction) {
        (0, 0 | 3) => {
            session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat)
        }
        (6, 2) => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
        (6, 3) => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
        _ => {}
    }
    block_segments(session, &blocked::LEFT_QUARTER_TURN_5_TILES, track_sequence, direction);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

pub(super) fn compact_inverted_rc_track_left_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_left_quarter_turn_5(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &LEFT_QUARTER_TURN_5_TILES,
    );
}

pub(super) fn compact_inverted_rc_track_right_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let Some(&track_sequence) =
        MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES.get(track_sequence as usize)
    else {
        return;
    };
    compact_inverted_rc_track_left_quarter_turn_5(
        session,
        ride,
        track_sequence,
        (direction + 3) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_banked_left_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_left_quarter_turn_5(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &BANKED_LEFT_QUARTER_TURN_5_TILES,
    );
}

pub(super) fn compact_inverted_rc_track_banked_right_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let Some(&track_sequence) =
        MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES.get(track_sequence as usize)
    else {
        return;
    };
    compact_inverted_rc_track_banked_left_quarter_turn_5(
        session,
        ride,
        track_sequence,
        (direction + 3) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_left_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    track_paint_util_left_quarter_turn_5_tiles_paint_2(
        session,
        height,
        direction,
        track_sequence,
        &LEFT_QUARTER_TURN_5_TILES_25_DEG_UP,
    );
    if matches!(track_sequence, 0 | 6) {
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
        (6, 2) => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        (6, 3) => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        _ => {}
    }
    block_segments(session, &blocked::LEFT_QUARTER_TURN_5_TILES, track_sequence, direction);
    session.set_general_support_height(height + 72);
}

pub(super) fn compact_inverted_rc_track_right_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    track_paint_util_right_quarter_turn_5_tiles_paint_2(
        session,
        height,
        direction,
        track_sequence,
        &RIGHT_QUARTER_TURN_5_TILES_25_DEG_UP,
    );
    if matches!(track_sequence, 0 | 6) {
        paint_support(session, support_type, MetalSupportPlace::Centre, height + 62);
    }
    match (track_sequence, direction) {
        (0, 0) => session.push_tunnel_left(height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart),
        (0, 3) => session.push_tunnel_right(height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart),
        (6, 0) => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        (6, 1) => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        _ => {}
    }
    block_segments(session, &blocked::RIGHT_QUARTER_TURN_5_TILES, track_sequence, direction);
    session.set_general_support_height(height + 72);
}

pub(super) fn compact_inverted_rc_track_left_quarter_turn_5_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_right_quarter_turn_5_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 1) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_right_quarter_turn_5_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_left_quarter_turn_5_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 3) & 3,
        height,
        element,
        support_type,
    );
}

fn paint_s_bend(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
    sprites: &[[SpriteBb; 4]; 4],
    masks: &[u16; 4],
) {
    if let Some(sprite) = sprites[(direction & 3) as usize].get(track_sequence as usize) {
        let colours = session.track_colours;
        paint_sprite_bb(session, colours, sprite, height);
    }
    if matches!(track_sequence, 0 | 3) {
        paint_support(session, support_type, MetalSupportPlace::Centre, height + 44);
    }
    match (track_sequence, direction) {
        (0, 0 | 3) | (3, 1 | 2) => {
            session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat)
        }
        _ => {}
    }
    block_segments(session, masks, track_sequence, direction);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

pub(super) fn compact_inverted_rc_track_s_bend_left(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_s_bend(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &S_BEND_LEFT,
        &blocked::S_BEND_LEFT,
    );
}

pub(super) fn compact_inverted_rc_track_s_bend_right(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_s_bend(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &S_BEND_RIGHT,
        &blocked::S_BEND_RIGHT,
    );
}

fn paint_left_quarter_turn_3(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
    sprites: &[[SpriteBb; 3]; 4],
) {
    let colours = session.track_colours;
    track_paint_util_left_quarter_turn_3_tiles_paint_3(
        session,
        height,
        direction,
        track_sequence,
        colours,
        sprites,
    );
    if matches!(track_sequence, 0 | 3) {
        paint_support(session, support_type, MetalSupportPlace::Centre, height + 44);
    }
    match (track_sequence, direction) {
        (0, 0 | 3) => {
            session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat)
        }
        (3, 2) => session.push_tunnel_right(height, TUNNEL_GROUP, TunnelSubType::Flat),
        (3, 3) => session.push_tunnel_left(height, TUNNEL_GROUP, TunnelSubType::Flat),
        _ => {}
    }
    block_segments(session, &blocked::LEFT_QUARTER_TURN_3_TILES, track_sequence, direction);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

pub(super) fn compact_inverted_rc_track_left_quarter_turn_3(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_left_quarter_turn_3(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &LEFT_QUARTER_TURN_3_TILES,
    );
}

pub(super) fn compact_inverted_rc_track_right_quarter_turn_3(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let Some(&track_sequence) =
        MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES.get(track_sequence as usize)
    else {
        return;
    };
    compact_inverted_rc_track_left_quarter_turn_3(
        session,
        ride,
        track_sequence,
        (direction + 3) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_left_quarter_turn_3_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_left_quarter_turn_3(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &BANKED_LEFT_QUARTER_TURN_3_TILES,
    );
}

pub(super) fn compact_inverted_rc_track_right_quarter_turn_3_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let Some(&track_sequence) =
        MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES.get(track_sequence as usize)
    else {
        return;
    };
    compact_inverted_rc_track_left_quarter_turn_3_bank(
        session,
        ride,
        track_sequence,
        (direction + 3) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_left_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let colours = session.track_colours;
    track_paint_util_left_quarter_turn_3_tiles_paint_3(
        session,
        height,
        direction,
        track_sequence,
        colours,
        &LEFT_QUARTER_TURN_3_TILES_25_DEG_UP,
    );
    if matches!(track_sequence, 0 | 3) {
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
        (3, 2) => session.push_tunnel_right(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        (3, 3) => session.push_tunnel_left(height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd),
        _ => {}
    }
    block_segments(session, &blocked::LEFT_QUARTER_TURN_3_TILES, track_sequence, direction);
    session.set_general_support_height(height + 72);
}

pub(super) fn compact_inverted_rc_track_right_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    let colours = session.track_colours;
    track_paint_util_right_quarter_turn_3_tiles_paint_3(
        session,
        height,
        direction,
        track_sequence,
        colours,
        &RIGHT_QUARTER_TURN_3_TILES_25_DEG_UP,
    );
    if matches!(track_sequence, 0 | 3) {
        paint_support(session, support_type, MetalSupportPlace::Centre, height + 62);
    }
    track_paint_util_right_quarter_turn_3_tiles_25_deg_up_tunnel(
        session,
        TUNNEL_GROUP,
        height,
        direction,
        track_sequence,
        TunnelSubType::SlopeStart,
        TunnelSubType::SlopeEnd,
    );
    block_segments(session, &blocked::RIGHT_QUARTER_TURN_3_TILES, track_sequence, direction);
    session.set_general_support_height(height + 72);
}

pub(super) fn compact_inverted_rc_track_left_quarter_turn_3_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_right_quarter_turn_3_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 1) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_right_quarter_turn_3_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_left_quarter_turn_3_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 3) & 3,
        height,
        element,
        support_type,
    );
}
