//! Roll banking on straight track
//!
//! Only one hand of each transition is drawn; the other is the same tile
//! seen from the far end.

use funfair_paint::{ImageIndex, PaintSession};
use funfair_world::{Direction, Ride, SupportType, TrackElement};

use super::straight::{
    paint_25_deg_up_to_flat_piece, paint_flat_piece, paint_flat_to_25_deg_up_piece,
};

const FLAT_TO_LEFT_BANK: [ImageIndex; 4] = [26613, 26614, 26615, 26616];
const FLAT_TO_RIGHT_BANK: [ImageIndex; 4] = [26617, 26618, 26619, 26620];
const LEFT_BANK: [ImageIndex; 4] = [26621, 26622, 26623, 26624];
const LEFT_BANK_TO_25_DEG_UP: [ImageIndex; 4] = [26625, 26626, 26627, 26628];
const RIGHT_BANK_TO_25_DEG_UP: [ImageIndex; 4] = [26629, 26630, 26631, 26632];
const UP_25_TO_LEFT_BANK: [ImageIndex; 4] = [26633, 26634, 26635, 26636];
const UP_25_TO_RIGHT_BANK: [ImageIndex; 4] = [26637, 26638, 26639, 26640];

pub(super) fn compact_inverted_rc_track_flat_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_flat_piece(
        session,
        direction,
        height,
        FLAT_TO_LEFT_BANK[direction as usize],
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_flat_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_flat_piece(
        session,
        direction,
        height,
        FLAT_TO_RIGHT_BANK[direction as usize],
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_flat_piece(session, direction, height, LEFT_BANK[direction as usize], support_type);
}

pub(super) fn compact_inverted_rc_track_left_bank_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_flat_to_25_deg_up_piece(
        session,
        direction,
        height,
        LEFT_BANK_TO_25_DEG_UP[direction as usize],
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_right_bank_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_flat_to_25_deg_up_piece(
        session,
        direction,
        height,
        RIGHT_BANK_TO_25_DEG_UP[direction as usize],
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_25_deg_up_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_25_deg_up_to_flat_piece(
        session,
        direction,
        height,
        UP_25_TO_LEFT_BANK[direction as usize],
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_25_deg_up_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_25_deg_up_to_flat_piece(
        session,
        direction,
        height,
        UP_25_TO_RIGHT_BANK[direction as usize],
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_left_bank_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_flat_to_right_bank(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_right_bank_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_flat_to_left_bank(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_left_bank(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_left_bank_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_25_deg_up_to_right_bank(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_right_bank_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_25_deg_up_to_left_bank(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_25_deg_down_to_left_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_right_bank_to_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_25_deg_down_to_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_left_bank_to_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}
