//! Tunnel edges for turns
//!
//! A turn enters on one tile edge and leaves on another, so only the first
//! and last sequences push tunnels, and only in the directions where those
//! edges face the viewer.

use funfair_paint::{PaintSession, TunnelGroup, TunnelSubType};
use funfair_world::Direction;

pub fn track_paint_util_right_quarter_turn_5_tiles_tunnel(
    session: &mut PaintSession,
    group: TunnelGroup,
    subtype: TunnelSubType,
    height: i32,
    direction: Direction,
    sequence: u8,
) {
    turn_tunnel(session, group, direction, sequence, 6, (height, subtype), (height, subtype));
}

pub fn track_paint_util_right_quarter_turn_3_tiles_tunnel(
    session: &mut PaintSession,
    group: TunnelGroup,
    subtype: TunnelSubType,
    height: i32,
    direction: Direction,
    sequence: u8,
) {
    turn_tunnel(session, group, direction, sequence, 3, (height, subtype), (height, subtype));
}

/// Climbing turn: the entry sits a step below the piece, the exit a step above
pub fn track_paint_util_right_quarter_turn_3_tiles_25_deg_up_tunnel(
    session: &mut PaintSession,
    group: TunnelGroup,
    height: i32,
    direction: Direction,
    sequence: u8,
    start: TunnelSubType,
    end: TunnelSubType,
) {
    turn_tunnel(session, group, direction, sequence, 3, (height - 8, start), (height + 8, end));
}

pub fn track_paint_util_right_quarter_turn_3_tiles_25_deg_down_tunnel(
    session: &mut PaintSession,
    group: TunnelGroup,
    height: i32,
    direction: Direction,
    sequence: u8,
    start: TunnelSubType,
    end: TunnelSubType,
) {
    turn_tunnel(session, group, direction, sequence, 3, (height + 8, start), (height - 8, end));
}

fn turn_tunnel(
    session: &mut PaintSession,
    group: TunnelGroup,
    direction: Direction,
    sequence: u8,
    last: u8,
    start: (i32, TunnelSubType),
    end: (i32, TunnelSubType),
) {
    match (direction & 3, sequence) {
        (0, 0) => session.push_tunnel_left(start.0, group, start.1),
        (0, s) if s == last => session.push_tunnel_right(end.0, group, end.1),
        (1, s) if s == last => session.push_tunnel_left(end.0, group, end.1),
        (3, 0) => session.push_tunnel_right(start.0, group, start.1),
        _ => {}
    }
}

#[allow(clippy::too_many_arguments)]
pub fn track_paint_util_left_quarter_turn_1_tile_tunnel(
    session: &mut PaintSession,
    group: TunnelGroup,
    direction: Direction,
    base_height: i32,
    start_offset: i32,
    start: TunnelSubType,
    end_offset: i32,
    end: TunnelSubType,
) {
    match direction & 3 {
        0 => session.push_tunnel_left(base_height + start_offset, group, start),
        2 => session.push_tunnel_right(base_height + end_offset, group, end),
        3 => {
            session.push_tunnel_right(base_height + start_offset, group, start);
            session.push_tunnel_left(base_height + end_offset, group, end);
        }
        _ => {}
    }
}

/// The right turn is the left turn driven backwards from the next direction round
#[allow(clippy::too_many_arguments)]
pub fn track_paint_util_right_quarter_turn_1_tile_tunnel(
    session: &mut PaintSession,
    group: TunnelGroup,
    direction: Direction,
    base_height: i32,
    start_offset: i32,
    start: TunnelSubType,
    end_offset: i32,
    end: TunnelSubType,
) {
    track_paint_util_left_quarter_turn_1_tile_tunnel(
        session,
        group,
        (direction + 3) % 4,
        base_height,
        end_offset,
        end,
        start_offset,
        start,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfair_paint::{PaintConfig, TunnelEntry};

    fn pushes(f: impl Fn(&mut PaintSession, Direction, u8), sequences: u8) -> Vec<(
        u8,
        u8,
        usize,
        usize,
    )> {
        let mut out = Vec::new();
        for direction in 0..4 {
            for sequence in 0..sequences {
                let mut session = PaintSession::new(0, &PaintConfig::default());
                f(&mut session, direction, sequence);
                let (left, right) = (session.left_tunnels().len(), session.right_tunnels().len());
                if left + right > 0 {
                    out.push((direction, sequence, left, right));
                }
            }
        }
        out
    }

    #[test]
    fn test_quarter_turn_5_tunnel_slots() {
        let slots = pushes(
            |session, direction, sequence| {
                track_paint_util_right_quarter_turn_5_tiles_tunnel(
                    session,
                    TunnelGroup::Square,
                    TunnelSubType::Flat,
                    0,
                    direction,
                    sequence,
                )
            },
            7,
        );
        assert_eq!(slots, vec![(0, 0, 1, 0), (0, 6, 0, 1), (1, 6, 1, 0), (3, 0, 0, 1)]);
    }

    #[test]
    fn test_quarter_turn_3_slope_heights() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_right_quarter_turn_3_tiles_25_deg_up_tunnel(
            &mut session,
            TunnelGroup::Square,
            64,
            0,
            0,
            TunnelSubType::SlopeStart,
            TunnelSubType::SlopeEnd,
        );
        assert_eq!(
            session.left_tunnels(),
            &[TunnelEntry::new(56, TunnelGroup::Square, TunnelSubType::SlopeStart)]
        );

        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_right_quarter_turn_3_tiles_25_deg_down_tunnel(
            &mut session,
            TunnelGroup::Square,
            64,
            1,
            3,
            TunnelSubType::SlopeEnd,
            TunnelSubType::SlopeStart,
        );
        assert_eq!(
            session.left_tunnels(),
            &[TunnelEntry::new(56, TunnelGroup::Square, TunnelSubType::SlopeStart)]
        );
    }

    #[test]
    fn test_quarter_turn_1_tunnels() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_left_quarter_turn_1_tile_tunnel(
            &mut session,
            TunnelGroup::Doors,
            3,
            32,
            0,
            TunnelSubType::Flat,
            16,
            TunnelSubType::Tall,
        );
        assert_eq!(
            session.right_tunnels(),
            &[TunnelEntry::new(32, TunnelGroup::Doors, TunnelSubType::Flat)]
        );
        assert_eq!(
            session.left_tunnels(),
            &[TunnelEntry::new(48, TunnelGroup::Doors, TunnelSubType::Tall)]
        );

        // Right turn facing 1 is the left turn facing 0, entered from its end
        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_right_quarter_turn_1_tile_tunnel(
            &mut session,
            TunnelGroup::Doors,
            1,
            32,
            0,
            TunnelSubType::Flat,
            16,
            TunnelSubType::Tall,
        );
        assert_eq!(
            session.left_tunnels(),
            &[TunnelEntry::new(48, TunnelGroup::Doors, TunnelSubType::Tall)]
        );
        assert!(session.right_tunnels().is_empty());
    }
}
