//! Eighth turns and diagonal track
//!
//! A diagonal piece spans four tiles but shows its sprite on only one of
//! them; the rest carry supports and segment bookkeeping.

use funfair_paint::{
    blocked, rotate_segments, ImageIndex, MetalSupportPlace, PaintSession, TunnelSubType,
    SUPPORT_HEIGHT_BLOCKED,
};
use funfair_world::{CoordsXY, CoordsXYZ, Direction, Ride, SupportType, TrackElement};

use super::{block_segments, paint_support, GENERAL_SUPPORT_HEIGHT, TRACK_OFFSET, TUNNEL_GROUP};
use crate::util::{
    track_paint_util_diag_tiles_paint, track_paint_util_eighth_to_diag_tiles_paint,
    DEFAULT_DIAG_BOUND_LENGTHS, DEFAULT_DIAG_TILE_OFFSETS, DIAG_SUPPORT_PLACEMENT,
    MAP_DIAG_REVERSED, MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL,
};

const EIGHTH_THICKNESS: [[i32; 4]; 4] = [[3; 4]; 4];

const LEFT_EIGHTH_TO_DIAG: [[ImageIndex; 4]; 4] = [
    [26953, 26954, 26955, 26956],
    [26957, 26958, 26959, 26960],
    [26961, 26962, 26963, 26964],
    [26965, 26966, 26967, 26968],
];

const LEFT_EIGHTH_TO_DIAG_BOUND_LENGTHS: [[CoordsXY; 4]; 4] = [
    [CoordsXY::new(32, 20), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(32, 20), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
];

const LEFT_EIGHTH_TO_DIAG_BOUND_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(16, 16, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(16, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 0),
    ],
];

const RIGHT_EIGHTH_TO_DIAG: [[ImageIndex; 4]; 4] = [
    [26969, 26970, 26971, 26972],
    [26973, 26974, 26975, 26976],
    [26977, 26978, 26979, 26980],
    [26981, 26982, 26983, 26984],
];

const RIGHT_EIGHTH_TO_DIAG_BOUND_LENGTHS: [[CoordsXY; 4]; 4] = [
    [CoordsXY::new(32, 20), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(32, 20), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
];

const RIGHT_EIGHTH_TO_DIAG_BOUND_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(0, 16, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(16, 16, 0),
    ],
];

const LEFT_EIGHTH_BANK_TO_DIAG: [[ImageIndex; 4]; 4] = [
    [26985, 26986, 26987, 26988],
    [26989, 26990, 26991, 26992],
    [26993, 26994, 26995, 26996],
    [26997, 26998, 26999, 27000],
];

const LEFT_EIGHTH_BANK_TO_DIAG_BOUND_LENGTHS: [[CoordsXY; 4]; 4] = [
    [CoordsXY::new(32, 20), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(32, 20), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
];

const LEFT_EIGHTH_BANK_TO_DIAG_BOUND_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(16, 16, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(16, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 0),
    ],
];

const RIGHT_EIGHTH_BANK_TO_DIAG: [[ImageIndex; 4]; 4] = [
    [27001, 27002, 27003, 27004],
    [27005, 27006, 27007, 27008],
    [27009, 27010, 27011, 27012],
    [27013, 27014, 27015, 27016],
];

const RIGHT_EIGHTH_BANK_TO_DIAG_BOUND_LENGTHS: [[CoordsXY; 4]; 4] = [
    [CoordsXY::new(32, 20), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(32, 20), CoordsXY::new(32, 16), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
    [CoordsXY::new(20, 32), CoordsXY::new(16, 32), CoordsXY::new(16, 16), CoordsXY::new(16, 16)],
];

const RIGHT_EIGHTH_BANK_TO_DIAG_BOUND_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(0, 16, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(16, 16, 0),
    ],
];

const DIAG_FLAT: [ImageIndex; 4] = [27017, 27018, 27019, 27020];
const DIAG_FLAT_CHAIN: [ImageIndex; 4] = [27021, 27022, 27023, 27024];
const DIAG_25_DEG_UP: [ImageIndex; 4] = [27025, 27026, 27027, 27028];
const DIAG_25_DEG_UP_CHAIN: [ImageIndex; 4] = [27029, 27030, 27031, 27032];
const DIAG_60_DEG_UP: [ImageIndex; 4] = [27033, 27034, 27035, 27036];
const DIAG_60_DEG_UP_CHAIN: [ImageIndex; 4] = [27037, 27038, 27039, 27040];
const DIAG_FLAT_TO_25_DEG_UP: [ImageIndex; 4] = [27041, 27042, 27043, 27044];
const DIAG_FLAT_TO_25_DEG_UP_CHAIN: [ImageIndex; 4] = [27045, 27046, 27047, 27048];
const DIAG_25_DEG_UP_TO_60_DEG_UP: [ImageIndex; 4] = [27049, 27050, 27051, 27052];
const DIAG_25_DEG_UP_TO_60_DEG_UP_CHAIN: [ImageIndex; 4] = [27053, 27054, 27055, 27056];
const DIAG_60_DEG_UP_TO_25_DEG_UP: [ImageIndex; 4] = [27057, 27058, 27059, 27060];
const DIAG_60_DEG_UP_TO_25_DEG_UP_CHAIN: [ImageIndex; 4] = [27061, 27062, 27063, 27064];
const DIAG_25_DEG_UP_TO_FLAT: [ImageIndex; 4] = [27065, 27066, 27067, 27068];
const DIAG_25_DEG_UP_TO_FLAT_CHAIN: [ImageIndex; 4] = [27069, 27070, 27071, 27072];
const DIAG_FLAT_TO_LEFT_BANK: [ImageIndex; 4] = [27073, 27074, 27075, 27076];
const DIAG_FLAT_TO_RIGHT_BANK: [ImageIndex; 4] = [27077, 27078, 27079, 27080];
const DIAG_LEFT_BANK: [ImageIndex; 4] = [27081, 27082, 27083, 27084];
const DIAG_LEFT_BANK_TO_25_DEG_UP: [ImageIndex; 4] = [27085, 27086, 27087, 27088];
const DIAG_RIGHT_BANK_TO_25_DEG_UP: [ImageIndex; 4] = [27089, 27090, 27091, 27092];
const DIAG_25_DEG_UP_TO_LEFT_BANK: [ImageIndex; 4] = [27093, 27094, 27095, 27096];
const DIAG_25_DEG_UP_TO_RIGHT_BANK: [ImageIndex; 4] = [27097, 27098, 27099, 27100];

mod blocked_eighth {
    use funfair_paint::{segments, PaintSegment::*};

    pub(super) const LEFT_EIGHTH_TO_DIAG: [u16; 5] = [
        segments(&[TopRight, BottomLeft, Centre]),
        segments(&[Top, TopRight, BottomLeft, Left, TopLeft, Centre]),
        segments(&[TopRight, Right, BottomRight, Centre]),
        0,
        segments(&[BottomRight, Bottom, BottomLeft, Centre]),
    ];

    pub(super) const RIGHT_EIGHTH_TO_DIAG: [u16; 5] = [
        segments(&[TopRight, BottomLeft, Centre]),
        segments(&[TopRight, Right, BottomRight, Bottom, BottomLeft, Centre]),
        segments(&[Top, TopRight, TopLeft, Centre]),
        0,
        segments(&[BottomLeft, Left, TopLeft, Centre]),
    ];
}

struct EighthTurn {
    sprites: &'static [[ImageIndex; 4]; 4],
    bound_lengths: &'static [[CoordsXY; 4]; 4],
    bound_offsets: &'static [[CoordsXYZ; 4]; 4],
    blocked: &'static [u16; 5],
    /// Post under the last tile, for direction 0
    exit_support: MetalSupportPlace,
}

const LEFT_EIGHTH: EighthTurn = EighthTurn {
    sprites: &LEFT_EIGHTH_TO_DIAG,
    bound_lengths: &LEFT_EIGHTH_TO_DIAG_BOUND_LENGTHS,
    bound_offsets: &LEFT_EIGHTH_TO_DIAG_BOUND_OFFSETS,
    blocked: &blocked_eighth::LEFT_EIGHTH_TO_DIAG,
    exit_support: MetalSupportPlace::BottomCorner,
};

const RIGHT_EIGHTH: EighthTurn = EighthTurn {
    sprites: &RIGHT_EIGHTH_TO_DIAG,
    bound_lengths: &RIGHT_EIGHTH_TO_DIAG_BOUND_LENGTHS,
    bound_offsets: &RIGHT_EIGHTH_TO_DIAG_BOUND_OFFSETS,
    blocked: &blocked_eighth::RIGHT_EIGHTH_TO_DIAG,
    exit_support: MetalSupportPlace::LeftCorner,
};

const LEFT_EIGHTH_BANK: EighthTurn = EighthTurn {
    sprites: &LEFT_EIGHTH_BANK_TO_DIAG,
    bound_lengths: &LEFT_EIGHTH_BANK_TO_DIAG_BOUND_LENGTHS,
    bound_offsets: &LEFT_EIGHTH_BANK_TO_DIAG_BOUND_OFFSETS,
    blocked: &blocked_eighth::LEFT_EIGHTH_TO_DIAG,
    exit_support: MetalSupportPlace::BottomCorner,
};

const RIGHT_EIGHTH_BANK: EighthTurn = EighthTurn {
    sprites: &RIGHT_EIGHTH_BANK_TO_DIAG,
    bound_lengths: &RIGHT_EIGHTH_BANK_TO_DIAG_BOUND_LENGTHS,
    bound_offsets: &RIGHT_EIGHTH_BANK_TO_DIAG_BOUND_OFFSETS,
    blocked: &blocked_eighth::RIGHT_EIGHTH_TO_DIAG,
    exit_support: MetalSupportPlace::LeftCorner,
};

fn paint_eighth_to_diag(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
    turn: &EighthTurn,
) {
    let colours = session.track_colours;
    track_paint_util_eighth_to_diag_tiles_paint(
        session,
        &EIGHTH_THICKNESS,
        height + TRACK_OFFSET,
        direction,
        track_sequence,
        colours,
        turn.sprites,
        None,
        turn.bound_lengths,
        Some(turn.bound_offsets),
    );
    match track_sequence {
        0 => {
            paint_support(session, support_type, MetalSupportPlace::Centre, height + 44);
        }
        4 => {
            paint_support(session, support_type, turn.exit_support.rotated(direction), height + 44);
        }
        _ => {}
    }
    if track_sequence == 0 && (direction == 0 || direction == 3) {
        session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    }
    block_segments(session, turn.blocked, track_sequence, direction);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

/// Eighth turn back to orthogonal, drawn as the mirrored turn to diagonal
fn paint_eighth_to_orthogonal(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    support_type: SupportType,
    turn: &EighthTurn,
) {
    if let Some(&track_sequence) = MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL.get(track_sequence as usize) {
        paint_eighth_to_diag(session, track_sequence, direction, height, support_type, turn);
    }
}

pub(super) fn compact_inverted_rc_track_left_eighth_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_diag(session, track_sequence, direction, height, support_type, &LEFT_EIGHTH);
}

pub(super) fn compact_inverted_rc_track_right_eighth_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_diag(session, track_sequence, direction, height, support_type, &RIGHT_EIGHTH);
}

pub(super) fn compact_inverted_rc_track_left_eighth_to_orthogonal(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_orthogonal(
        session,
        track_sequence,
        (direction + 2) & 3,
        height,
        support_type,
        &RIGHT_EIGHTH,
    );
}

pub(super) fn compact_inverted_rc_track_right_eighth_to_orthogonal(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_orthogonal(
        session,
        track_sequence,
        (direction + 3) & 3,
        height,
        support_type,
        &LEFT_EIGHTH,
    );
}

pub(super) fn compact_inverted_rc_track_left_eighth_bank_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_diag(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &LEFT_EIGHTH_BANK,
    );
}

pub(super) fn compact_inverted_rc_track_right_eighth_bank_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_diag(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        &RIGHT_EIGHTH_BANK,
    );
}

pub(super) fn compact_inverted_rc_track_left_eighth_bank_to_orthogonal(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_orthogonal(
        session,
        track_sequence,
        (direction + 2) & 3,
        height,
        support_type,
        &RIGHT_EIGHTH_BANK,
    );
}

pub(super) fn compact_inverted_rc_track_right_eighth_bank_to_orthogonal(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_eighth_to_orthogonal(
        session,
        track_sequence,
        (direction + 3) & 3,
        height,
        support_type,
        &LEFT_EIGHTH_BANK,
    );
}

struct DiagPiece {
    sprites: [ImageIndex; 4],
    chain: Option<[ImageIndex; 4]>,
    /// Raises the occlusion box above the rail on climbing pieces
    bounds_height: i32,
    support_height: i32,
    general_support_height: i32,
}

impl DiagPiece {
    const fn flat(sprites: [ImageIndex; 4], chain: Option<[ImageIndex; 4]>) -> Self {
        Self {
            sprites,
            chain,
            bounds_height: 0,
            support_height: 44,
            general_support_height: 48,
        }
    }

    const fn flat_to_25(sprites: [ImageIndex; 4], chain: Option<[ImageIndex; 4]>) -> Self {
        Self {
            sprites,
            chain,
            bounds_height: 8,
            support_height: 52,
            general_support_height: 64,
        }
    }

    const fn up_25_to_flat(sprites: [ImageIndex; 4], chain: Option<[ImageIndex; 4]>) -> Self {
        Self {
            sprites,
            chain,
            bounds_height: 8,
            support_height: 54,
            general_support_height: 56,
        }
    }
}

const DIAG_FLAT_PIECE: DiagPiece = DiagPiece::flat(DIAG_FLAT, Some(DIAG_FLAT_CHAIN));
const DIAG_25_DEG_UP_PIECE: DiagPiece = DiagPiece {
    sprites: DIAG_25_DEG_UP,
    chain: Some(DIAG_25_DEG_UP_CHAIN),
    bounds_height: 16,
    support_height: 62,
    general_support_height: 72,
};
const DIAG_60_DEG_UP_PIECE: DiagPiece = DiagPiece {
    sprites: DIAG_60_DEG_UP,
    chain: Some(DIAG_60_DEG_UP_CHAIN),
    bounds_height: 64,
    support_height: 60,
    general_support_height: 120,
};
const DIAG_FLAT_TO_25_DEG_UP_PIECE: DiagPiece =
    DiagPiece::flat_to_25(DIAG_FLAT_TO_25_DEG_UP, Some(DIAG_FLAT_TO_25_DEG_UP_CHAIN));
const DIAG_25_DEG_UP_TO_60_DEG_UP_PIECE: DiagPiece = DiagPiece {
    sprites: DIAG_25_DEG_UP_TO_60_DEG_UP,
    chain: Some(DIAG_25_DEG_UP_TO_60_DEG_UP_CHAIN),
    bounds_height: 32,
    support_height: 68,
    general_support_height: 88,
};
const DIAG_60_DEG_UP_TO_25_DEG_UP_PIECE: DiagPiece = DiagPiece {
    sprites: DIAG_60_DEG_UP_TO_25_DEG_UP,
    chain: Some(DIAG_60_DEG_UP_TO_25_DEG_UP_CHAIN),
    bounds_height: 32,
    support_height: 76,
    general_support_height: 88,
};
const DIAG_25_DEG_UP_TO_FLAT_PIECE: DiagPiece =
    DiagPiece::up_25_to_flat(DIAG_25_DEG_UP_TO_FLAT, Some(DIAG_25_DEG_UP_TO_FLAT_CHAIN));
const DIAG_FLAT_TO_LEFT_BANK_PIECE: DiagPiece = DiagPiece::flat(DIAG_FLAT_TO_LEFT_BANK, None);
const DIAG_FLAT_TO_RIGHT_BANK_PIECE: DiagPiece = DiagPiece::flat(DIAG_FLAT_TO_RIGHT_BANK, None);
const DIAG_LEFT_BANK_PIECE: DiagPiece = DiagPiece::flat(DIAG_LEFT_BANK, None);
const DIAG_LEFT_BANK_TO_25_DEG_UP_PIECE: DiagPiece =
    DiagPiece::flat_to_25(DIAG_LEFT_BANK_TO_25_DEG_UP, None);
const DIAG_RIGHT_BANK_TO_25_DEG_UP_PIECE: DiagPiece =
    DiagPiece::flat_to_25(DIAG_RIGHT_BANK_TO_25_DEG_UP, None);
const DIAG_25_DEG_UP_TO_LEFT_BANK_PIECE: DiagPiece =
    DiagPiece::up_25_to_flat(DIAG_25_DEG_UP_TO_LEFT_BANK, None);
const DIAG_25_DEG_UP_TO_RIGHT_BANK_PIECE: DiagPiece =
    DiagPiece::up_25_to_flat(DIAG_25_DEG_UP_TO_RIGHT_BANK, None);

fn paint_diag_piece(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
    piece: &DiagPiece,
) {
    let sprites = match piece.chain {
        Some(ref chain) if element.has_chain() => chain,
        _ => &piece.sprites,
    };
    let colours = session.track_colours;
    track_paint_util_diag_tiles_paint(
        session,
        3,
        height + TRACK_OFFSET,
        direction,
        track_sequence,
        colours,
        sprites,
        Some(&DEFAULT_DIAG_TILE_OFFSETS),
        &DEFAULT_DIAG_BOUND_LENGTHS,
        None,
        piece.bounds_height,
    );

    let sequence = (track_sequence & 3) as usize;
    if let Some(place) = DIAG_SUPPORT_PLACEMENT[(direction & 3) as usize][sequence] {
        paint_support(session, support_type, place, height + piece.support_height);
    }
    session.set_segment_support_height(
        rotate_segments(blocked::DIAG_STRAIGHT_FLAT[sequence], direction),
        SUPPORT_HEIGHT_BLOCKED,
        0,
    );
    session.set_general_support_height(height + piece.general_support_height);
}

macro_rules! diag_pieces {
    ($($name:ident => $piece:ident,)*) => {
        $(
            pub(super) fn $name(
                session: &mut PaintSession,
                _ride: &Ride,
                track_sequence: u8,
                direction: Direction,
                height: i32,
                element: &TrackElement,
                support_type: SupportType,
            ) {
                paint_diag_piece(
                    session,
                    track_sequence,
                    direction,
                    height,
                    element,
                    support_type,
                    &$piece,
                );
            }
        )*
    };
}

/// Pieces drawn as another piece walked from its far end
macro_rules! diag_reversed {
    ($($name:ident => $other:ident,)*) => {
        $(
            pub(super) fn $name(
                session: &mut PaintSession,
                ride: &Ride,
                track_sequence: u8,
                direction: Direction,
                height: i32,
                element: &TrackElement,
                support_type: SupportType,
            ) {
                let track_sequence = MAP_DIAG_REVERSED[(track_sequence & 3) as usize];
                $other(
                    session,
                    ride,
                    track_sequence,
                    (direction + 2) & 3,
                    height,
                    element,
                    support_type,
                );
            }
        )*
    };
}

diag_pieces! {
    compact_inverted_rc_track_diag_flat => DIAG_FLAT_PIECE,
    compact_inverted_rc_track_diag_25_deg_up => DIAG_25_DEG_UP_PIECE,
    compact_inverted_rc_track_diag_60_deg_up => DIAG_60_DEG_UP_PIECE,
    compact_inverted_rc_track_diag_flat_to_25_deg_up => DIAG_FLAT_TO_25_DEG_UP_PIECE,
    compact_inverted_rc_track_diag_25_deg_up_to_60_deg_up => DIAG_25_DEG_UP_TO_60_DEG_UP_PIECE,
    compact_inverted_rc_track_diag_60_deg_up_to_25_deg_up => DIAG_60_DEG_UP_TO_25_DEG_UP_PIECE,
    compact_inverted_rc_track_diag_25_deg_up_to_flat => DIAG_25_DEG_UP_TO_FLAT_PIECE,
    compact_inverted_rc_track_diag_flat_to_left_bank => DIAG_FLAT_TO_LEFT_BANK_PIECE,
    compact_inverted_rc_track_diag_flat_to_right_bank => DIAG_FLAT_TO_RIGHT_BANK_PIECE,
    compact_inverted_rc_track_diag_left_bank => DIAG_LEFT_BANK_PIECE,
    compact_inverted_rc_track_diag_left_bank_to_25_deg_up => DIAG_LEFT_BANK_TO_25_DEG_UP_PIECE,
    compact_inverted_rc_track_diag_right_bank_to_25_deg_up => DIAG_RIGHT_BANK_TO_25_DEG_UP_PIECE,
    compact_inverted_rc_track_diag_25_deg_up_to_left_bank => DIAG_25_DEG_UP_TO_LEFT_BANK_PIECE,
    compact_inverted_rc_track_diag_25_deg_up_to_right_bank => DIAG_25_DEG_UP_TO_RIGHT_BANK_PIECE,
}

diag_reversed! {
    compact_inverted_rc_track_diag_25_deg_down => compact_inverted_rc_track_diag_25_deg_up,
    compact_inverted_rc_track_diag_60_deg_down => compact_inverted_rc_track_diag_60_deg_up,
    compact_inverted_rc_track_diag_flat_to_25_deg_down =>
        compact_inverted_rc_track_diag_25_deg_up_to_flat,
    compact_inverted_rc_track_diag_25_deg_down_to_60_deg_down =>
        compact_inverted_rc_track_diag_60_deg_up_to_25_deg_up,
    compact_inverted_rc_track_diag_60_deg_down_to_25_deg_down =>
        compact_inverted_rc_track_diag_25_deg_up_to_60_deg_up,
    compact_inverted_rc_track_diag_25_deg_down_to_flat =>
        compact_inverted_rc_track_diag_flat_to_25_deg_up,
    compact_inverted_rc_track_diag_left_bank_to_flat =>
        compact_inverted_rc_track_diag_flat_to_right_bank,
    compact_inverted_rc_track_diag_right_bank_to_flat =>
        compact_inverted_rc_track_diag_flat_to_left_bank,
    compact_inverted_rc_track_diag_right_bank => compact_inverted_rc_track_diag_left_bank,
    compact_inverted_rc_track_diag_left_bank_to_25_deg_down =>
        compact_inverted_rc_track_diag_25_deg_up_to_right_bank,
    compact_inverted_rc_track_diag_right_bank_to_25_deg_down =>
        compact_inverted_rc_track_diag_25_deg_up_to_left_bank,
    compact_inverted_rc_track_diag_25_deg_down_to_left_bank =>
        compact_inverted_rc_track_diag_right_bank_to_25_deg_up,
    compact_inverted_rc_track_diag_25_deg_down_to_right_bank =>
        compact_inverted_rc_track_diag_left_bank_to_25_deg_up,
}
