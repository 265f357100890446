//! Compact inverted coaster
//!
//! The train hangs below a spine, so every rail sprite sits 29 units above
//! the element height and the supports reach down from above the rail.
//! Pieces are grouped by family in the submodules; this module holds the
//! shared helpers and the element lookup.

mod banks;
mod diagonal;
mod inversions;
mod straight;
mod turns;

use funfair_paint::{
    blocked, metal_a_supports_paint_setup, rotate_segments, BoundBoxXYZ, ImageIndex,
    MetalSupportPlace, PaintSession, TunnelGroup, SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED,
};
use funfair_world::{CoordsXYZ, Direction, SupportType, TrackElemType};

use crate::dispatch::{track_paint_function_dummy, TrackPaintFunction};
use crate::util::track_paint_util_should_paint_supports;

use banks::*;
use diagonal::*;
use inversions::*;
use straight::*;
use turns::*;

const TUNNEL_GROUP: TunnelGroup = TunnelGroup::Square;
const GENERAL_SUPPORT_HEIGHT: i32 = 48;

/// Rail height above the element
const TRACK_OFFSET: i32 = 29;

/// Rail box along the direction-0 axis, `z` above the element
fn track_bound_box(height: i32, z: i32) -> BoundBoxXYZ {
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, height + z), CoordsXYZ::new(32, 20, 3))
}

fn paint_track(
    session: &mut PaintSession,
    direction: Direction,
    sprite: ImageIndex,
    height: i32,
    bound_box: BoundBoxXYZ,
) {
    let image = session.track_colours.with_index(sprite);
    session.add_image_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 0, height + TRACK_OFFSET),
        bound_box,
    );
}

fn paint_support(
    session: &mut PaintSession,
    support_type: SupportType,
    place: MetalSupportPlace,
    height: i32,
) {
    let colours = session.support_colours;
    metal_a_supports_paint_setup(session, support_type.metal(), place, 0, height, colours);
}

/// Straight runs only get a post on every other tile
fn paint_centre_support(session: &mut PaintSession, support_type: SupportType, height: i32) {
    if track_paint_util_should_paint_supports(session.map_position) {
        paint_support(session, support_type, MetalSupportPlace::Centre, height);
    }
}

fn block_straight(session: &mut PaintSession, direction: Direction) {
    session.set_segment_support_height(
        rotate_segments(blocked::STRAIGHT_FLAT, direction),
        SUPPORT_HEIGHT_BLOCKED,
        0,
    );
}

fn block_all(session: &mut PaintSession) {
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
}

/// Block the segments a multi-tile piece covers on this tile
fn block_segments(
    session: &mut PaintSession,
    masks: &[u16],
    track_sequence: u8,
    direction: Direction,
) {
    if let Some(&mask) = masks.get(track_sequence as usize) {
        session.set_segment_support_height(
            rotate_segments(mask, direction),
            SUPPORT_HEIGHT_BLOCKED,
            0,
        );
    }
}

pub fn get_track_paint_function(element: TrackElemType) -> TrackPaintFunction {
    use TrackElemType::*;
    match element {
        Flat => compact_inverted_rc_track_flat,

        EndStation | BeginStation | MiddleStation => compact_inverted_rc_track_station,

        Up25 => compact_inverted_rc_track_25_deg_up,
        Up60 => compact_inverted_rc_track_60_deg_up,
        FlatToUp25 => compact_inverted_rc_track_flat_to_25_deg_up,
        Up25ToUp60 => compact_inverted_rc_track_25_deg_up_to_60_deg_up,
        Up60ToUp25 => compact_inverted_rc_track_60_deg_up_to_25_deg_up,
        Up25ToFlat => compact_inverted_rc_track_25_deg_up_to_flat,
        Down25 => compact_inverted_rc_track_25_deg_down,
        Down60 => compact_inverted_rc_track_60_deg_down,
        FlatToDown25 => compact_inverted_rc_track_flat_to_25_deg_down,
        Down25ToDown60 => compact_inverted_rc_track_25_deg_down_to_60_deg_down,
        Down60ToDown25 => compact_inverted_rc_track_60_deg_down_to_25_deg_down,
        Down25ToFlat => compact_inverted_rc_track_25_deg_down_to_flat,

        LeftQuarterTurn5Tiles => compact_inverted_rc_track_left_quarter_turn_5,
        RightQuarterTurn5Tiles => compact_inverted_rc_track_right_quarter_turn_5,
        BankedLeftQuarterTurn5Tiles => compact_inverted_rc_track_banked_left_quarter_turn_5,
        BankedRightQuarterTurn5Tiles => compact_inverted_rc_track_banked_right_quarter_turn_5,
        LeftQuarterTurn5TilesUp25 => compact_inverted_rc_track_left_quarter_turn_5_25_deg_up,
        RightQuarterTurn5TilesUp25 => compact_inverted_rc_track_right_quarter_turn_5_25_deg_up,
        LeftQuarterTurn5TilesDown25 => compact_inverted_rc_track_left_quarter_turn_5_25_deg_down,
        RightQuarterTurn5TilesDown25 => compact_inverted_rc_track_right_quarter_turn_5_25_deg_down,

        FlatToLeftBank => compact_inverted_rc_track_flat_to_left_bank,
        FlatToRightBank => compact_inverted_rc_track_flat_to_right_bank,
        LeftBankToFlat => compact_inverted_rc_track_left_bank_to_flat,
        RightBankToFlat => compact_inverted_rc_track_right_bank_to_flat,
        LeftBank => compact_inverted_rc_track_left_bank,
        RightBank => compact_inverted_rc_track_right_bank,
        LeftBankToUp25 => compact_inverted_rc_track_left_bank_to_25_deg_up,
        RightBankToUp25 => compact_inverted_rc_track_right_bank_to_25_deg_up,
        Up25ToLeftBank => compact_inverted_rc_track_25_deg_up_to_left_bank,
        Up25ToRightBank => compact_inverted_rc_track_25_deg_up_to_right_bank,
        LeftBankToDown25 => compact_inverted_rc_track_left_bank_to_25_deg_down,
        RightBankToDown25 => compact_inverted_rc_track_right_bank_to_25_deg_down,
        Down25ToLeftBank => compact_inverted_rc_track_25_deg_down_to_left_bank,
        Down25ToRightBank => compact_inverted_rc_track_25_deg_down_to_right_bank,

        SBendLeft => compact_inverted_rc_track_s_bend_left,
        SBendRight => compact_inverted_rc_track_s_bend_right,

        LeftVerticalLoop => compact_inverted_rc_track_left_vertical_loop,
        RightVerticalLoop => compact_inverted_rc_track_right_vertical_loop,

        LeftQuarterTurn3Tiles => compact_inverted_rc_track_left_quarter_turn_3,
        RightQuarterTurn3Tiles => compact_inverted_rc_track_right_quarter_turn_3,
        LeftBankedQuarterTurn3Tiles => compact_inverted_rc_track_left_quarter_turn_3_bank,
        RightBankedQuarterTurn3Tiles => compact_inverted_rc_track_right_quarter_turn_3_bank,
        LeftQuarterTurn3TilesUp25 => compact_inverted_rc_track_left_quarter_turn_3_25_deg_up,
        RightQuarterTurn3TilesUp25 => compact_inverted_rc_track_right_quarter_turn_3_25_deg_up,
        LeftQuarterTurn3TilesDown25 => compact_inverted_rc_track_left_quarter_turn_3_25_deg_down,
        RightQuarterTurn3TilesDown25 => compact_inverted_rc_track_right_quarter_turn_3_25_deg_down,

        LeftTwistDownToUp => compact_inverted_rc_track_left_twist_down_to_up,
        RightTwistDownToUp => compact_inverted_rc_track_right_twist_down_to_up,
        LeftTwistUpToDown => compact_inverted_rc_track_left_twist_up_to_down,
        RightTwistUpToDown => compact_inverted_rc_track_right_twist_up_to_down,
        HalfLoopUp => compact_inverted_rc_track_half_loop_up,
        HalfLoopDown => compact_inverted_rc_track_half_loop_down,
        LeftCorkscrewUp => compact_inverted_rc_track_left_corkscrew_up,
        RightCorkscrewUp => compact_inverted_rc_track_right_corkscrew_up,
        LeftCorkscrewDown => compact_inverted_rc_track_left_corkscrew_down,
        RightCorkscrewDown => compact_inverted_rc_track_right_corkscrew_down,

        Brakes => compact_inverted_rc_track_brakes,
        OnRidePhoto => compact_inverted_rc_track_on_ride_photo,
        BlockBrakes => compact_inverted_rc_track_block_brakes,

        LeftEighthToDiag => compact_inverted_rc_track_left_eighth_to_diag,
        RightEighthToDiag => compact_inverted_rc_track_right_eighth_to_diag,
        LeftEighthToOrthogonal => compact_inverted_rc_track_left_eighth_to_orthogonal,
        RightEighthToOrthogonal => compact_inverted_rc_track_right_eighth_to_orthogonal,
        LeftEighthBankToDiag => compact_inverted_rc_track_left_eighth_bank_to_diag,
        RightEighthBankToDiag => compact_inverted_rc_track_right_eighth_bank_to_diag,
        LeftEighthBankToOrthogonal => compact_inverted_rc_track_left_eighth_bank_to_orthogonal,
        RightEighthBankToOrthogonal => compact_inverted_rc_track_right_eighth_bank_to_orthogonal,

        DiagFlat => compact_inverted_rc_track_diag_flat,
        DiagUp25 => compact_inverted_rc_track_diag_25_deg_up,
        DiagUp60 => compact_inverted_rc_track_diag_60_deg_up,
        DiagFlatToUp25 => compact_inverted_rc_track_diag_flat_to_25_deg_up,
        DiagUp25ToUp60 => compact_inverted_rc_track_diag_25_deg_up_to_60_deg_up,
        DiagUp60ToUp25 => compact_inverted_rc_track_diag_60_deg_up_to_25_deg_up,
        DiagUp25ToFlat => compact_inverted_rc_track_diag_25_deg_up_to_flat,
        DiagDown25 => compact_inverted_rc_track_diag_25_deg_down,
        DiagDown60 => compact_inverted_rc_track_diag_60_deg_down,
        DiagFlatToDown25 => compact_inverted_rc_track_diag_flat_to_25_deg_down,
        DiagDown25ToDown60 => compact_inverted_rc_track_diag_25_deg_down_to_60_deg_down,
        DiagDown60ToDown25 => compact_inverted_rc_track_diag_60_deg_down_to_25_deg_down,
        DiagDown25ToFlat => compact_inverted_rc_track_diag_25_deg_down_to_flat,
        DiagFlatToLeftBank => compact_inverted_rc_track_diag_flat_to_left_bank,
        DiagFlatToRightBank => compact_inverted_rc_track_diag_flat_to_right_bank,
        DiagLeftBankToFlat => compact_inverted_rc_track_diag_left_bank_to_flat,
        DiagRightBankToFlat => compact_inverted_rc_track_diag_right_bank_to_flat,
        DiagLeftBankToUp25 => compact_inverted_rc_track_diag_left_bank_to_25_deg_up,
        DiagRightBankToUp25 => compact_inverted_rc_track_diag_right_bank_to_25_deg_up,
        DiagUp25ToLeftBank => compact_inverted_rc_track_diag_25_deg_up_to_left_bank,
        DiagUp25ToRightBank => compact_inverted_rc_track_diag_25_deg_up_to_right_bank,
        DiagLeftBankToDown25 => compact_inverted_rc_track_diag_left_bank_to_25_deg_down,
        DiagRightBankToDown25 => compact_inverted_rc_track_diag_right_bank_to_25_deg_down,
        DiagDown25ToLeftBank => compact_inverted_rc_track_diag_25_deg_down_to_left_bank,
        DiagDown25ToRightBank => compact_inverted_rc_track_diag_25_deg_down_to_right_bank,
        DiagLeftBank => compact_inverted_rc_track_diag_left_bank,
        DiagRightBank => compact_inverted_rc_track_diag_right_bank,

        _ => track_paint_function_dummy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfair_paint::{
        PaintConfig, PaintKind, PaintSegment, PaintSnapshot, TunnelEntry, TunnelSubType, SEGMENT_C4,
        SEGMENT_CC, SEGMENT_D0,
    };
    use funfair_world::{CoordsXY, Ride, RideId, RideType, TrackElement};

    use crate::util::{
        MAP_DIAG_REVERSED, MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL,
        MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES,
        MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES,
    };

    pub(super) fn element(track_type: TrackElemType, sequence: u8) -> TrackElement {
        TrackElement::new(track_type, RideId(0), RideType::CompactInvertedCoaster)
            .with_sequence(sequence)
    }

    /// Paint on a surface-level tile that gets supports
    pub(super) fn paint_element(
        element: &TrackElement,
        sequence: u8,
        direction: Direction,
        height: i32,
    ) -> PaintSnapshot {
        let ride = Ride::new(RideId(0), RideType::CompactInvertedCoaster);
        let support_type =
            RideType::CompactInvertedCoaster.descriptor().track_drawer.regular.support_type;
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.begin_tile(CoordsXY::new(0, 0));
        session.pass_surface(0, 0);
        get_track_paint_function(element.track_type)(
            &mut session,
            &ride,
            sequence,
            direction,
            height,
            element,
            support_type,
        );
        session.snapshot()
    }

    pub(super) fn paint(
        track_type: TrackElemType,
        sequence: u8,
        direction: Direction,
        height: i32,
    ) -> PaintSnapshot {
        paint_element(&element(track_type, sequence), sequence, direction, height)
    }

    fn blocked_mask(snapshot: &PaintSnapshot) -> u16 {
        PaintSegment::ALL
            .iter()
            .zip(snapshot.support_segments.iter())
            .filter(|(_, support)| support.is_blocked())
            .fold(0, |mask, (segment, _)| mask | segment.flag())
    }

    #[test]
    fn test_flat_scenario() {
        let snapshot = paint(TrackElemType::Flat, 0, 0, 0);

        let parents: Vec<_> =
            snapshot.records.iter().filter(|r| r.kind == PaintKind::Parent).collect();
        assert_eq!(parents[0].image.index(), 26555);
        assert_eq!(parents[0].offset, CoordsXYZ::new(0, 0, 29));
        assert_eq!(
            parents[0].bound_box,
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3))
        );

        assert_eq!(snapshot.support_posts.len(), 1);
        assert_eq!(snapshot.support_posts[0].segment, PaintSegment::Centre);
        assert_eq!(snapshot.support_posts[0].top, 44);

        assert_eq!(
            snapshot.left_tunnels,
            vec![TunnelEntry::new(0, TunnelGroup::Square, TunnelSubType::Flat)]
        );
        assert!(snapshot.right_tunnels.is_empty());
        assert_eq!(blocked_mask(&snapshot), SEGMENT_C4 | SEGMENT_CC | SEGMENT_D0);
        assert_eq!(snapshot.general_support.height, 48);
    }

    #[test]
    fn test_chain_lift_only_swaps_sprite() {
        let plain = paint(TrackElemType::Flat, 0, 0, 0);
        let chain = paint_element(&element(TrackElemType::Flat, 0).with_chain(true), 0, 0, 0);
        assert_eq!(chain.records[0].image.index(), 26557);
        assert_eq!(chain.records.len(), plain.records.len());
        assert_eq!(chain.records[0].bound_box, plain.records[0].bound_box);
        assert_eq!(chain.support_posts, plain.support_posts);
        assert_eq!(chain.left_tunnels, plain.left_tunnels);
        assert_eq!(chain.support_segments, plain.support_segments);
        assert_eq!(chain.general_support, plain.general_support);
    }

    #[test]
    fn test_flat_rotates_with_direction() {
        let snapshot = paint(TrackElemType::Flat, 0, 1, 16);
        assert_eq!(snapshot.records[0].image.index(), 26556);
        assert_eq!(snapshot.records[0].bound_box.offset, CoordsXYZ::new(6, 0, 45));
        assert_eq!(
            snapshot.right_tunnels,
            vec![TunnelEntry::new(16, TunnelGroup::Square, TunnelSubType::Flat)]
        );
        assert_eq!(blocked_mask(&snapshot), rotate_segments(blocked::STRAIGHT_FLAT, 1));
    }

    #[test]
    fn test_flat_support_checkerboard() {
        let ride = Ride::new(RideId(0), RideType::CompactInvertedCoaster);
        let support_type =
            RideType::CompactInvertedCoaster.descriptor().track_drawer.regular.support_type;
        let flat = element(TrackElemType::Flat, 0);
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.begin_tile(CoordsXY::new(32, 0));
        session.pass_surface(0, 0);
        compact_inverted_rc_track_flat(&mut session, &ride, 0, 0, 0, &flat, support_type);
        assert!(session.support_posts().is_empty());
    }

    #[test]
    fn test_quarter_turn_skip_slot() {
        for direction in 0..4 {
            let snapshot = paint(TrackElemType::LeftQuarterTurn5Tiles, 1, direction, 32);
            assert!(snapshot.records.is_empty());
            assert!(snapshot.support_posts.is_empty());
            assert_eq!(blocked_mask(&snapshot), 0);
            assert_eq!(snapshot.general_support.height, 80);
        }
    }

    #[test]
    fn test_quarter_turn_5_end_tunnels() {
        let snapshot = paint(TrackElemType::LeftQuarterTurn5Tiles, 6, 2, 32);
        assert_eq!(
            snapshot.right_tunnels,
            vec![TunnelEntry::new(32, TunnelGroup::Square, TunnelSubType::Flat)]
        );
        let snapshot = paint(TrackElemType::LeftQuarterTurn5Tiles, 6, 0, 32);
        assert!(snapshot.left_tunnels.is_empty() && snapshot.right_tunnels.is_empty());
    }

    #[test]
    fn test_determinism() {
        for &track_type in TrackElemType::ALL {
            for direction in 0..4 {
                for sequence in 0..track_type.sequence_count() {
                    assert_eq!(
                        paint(track_type, sequence, direction, 48),
                        paint(track_type, sequence, direction, 48),
                        "{:?}",
                        track_type
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_drawn_tile_sets_general_support() {
        let rtd = RideType::CompactInvertedCoaster.descriptor();
        for track_type in rtd.placeable_elements() {
            for direction in 0..4 {
                for sequence in 0..track_type.sequence_count() {
                    let snapshot = paint(track_type, sequence, direction, 48);
                    assert!(
                        snapshot.general_support.height >= 48 + 32,
                        "{:?} seq {} dir {}",
                        track_type,
                        sequence,
                        direction
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_placeable_element_is_drawn() {
        let dummy = track_paint_function_dummy as TrackPaintFunction as usize;
        for track_type in RideType::CompactInvertedCoaster.descriptor().placeable_elements() {
            assert_ne!(get_track_paint_function(track_type) as usize, dummy, "{:?}", track_type);
        }
        assert_eq!(get_track_paint_function(TrackElemType::FlatToUp60) as usize, dummy);
        assert_eq!(get_track_paint_function(TrackElemType::DiagFlatToUp60) as usize, dummy);
    }

    #[test]
    fn test_down_is_up_reversed() {
        use TrackElemType::*;
        for (down, up) in [
            (Down25, Up25),
            (Down60, Up60),
            (FlatToDown25, Up25ToFlat),
            (Down25ToFlat, FlatToUp25),
            (Down25ToDown60, Up60ToUp25),
            (Down60ToDown25, Up25ToUp60),
            (LeftBankToFlat, FlatToRightBank),
            (RightBankToFlat, FlatToLeftBank),
            (RightBank, LeftBank),
            (LeftBankToDown25, Up25ToRightBank),
            (RightBankToDown25, Up25ToLeftBank),
            (Down25ToLeftBank, RightBankToUp25),
            (Down25ToRightBank, LeftBankToUp25),
        ] {
            for direction in 0..4 {
                assert_eq!(
                    paint(down, 0, direction, 64),
                    paint(up, 0, (direction + 2) & 3, 64),
                    "{:?}",
                    down
                );
            }
        }
    }

    #[test]
    fn test_diagonal_down_is_up_reversed() {
        use TrackElemType::*;
        for (down, up) in [
            (DiagDown25, DiagUp25),
            (DiagDown60, DiagUp60),
            (DiagFlatToDown25, DiagUp25ToFlat),
            (DiagDown25ToFlat, DiagFlatToUp25),
            (DiagRightBank, DiagLeftBank),
        ] {
            for direction in 0..4u8 {
                for sequence in 0..4u8 {
                    assert_eq!(
                        paint(down, sequence, direction, 64),
                        paint(up, MAP_DIAG_REVERSED[sequence as usize], (direction + 2) & 3, 64),
                        "{:?}",
                        down
                    );
                }
            }
        }
    }

    #[test]
    fn test_right_turns_mirror_left() {
        use TrackElemType::*;
        for direction in 0..4u8 {
            for sequence in 0..7u8 {
                let mapped =
                    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES[sequence as usize];
                assert_eq!(
                    paint(RightQuarterTurn5Tiles, sequence, direction, 32),
                    paint(LeftQuarterTurn5Tiles, mapped, (direction + 3) & 3, 32)
                );
            }
            for sequence in 0..7u8 {
                let mapped =
                    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT_QUARTER_TURN_5_TILES[sequence as usize];
                assert_eq!(
                    paint(BankedRightQuarterTurn5Tiles, sequence, direction, 32),
                    paint(BankedLeftQuarterTurn5Tiles, mapped, (direction + 3) & 3, 32)
                );
            }
            for sequence in 0..4u8 {
                let mapped =
                    MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT_QUARTER_TURN_3_TILES[sequence as usize];
                assert_eq!(
                    paint(RightBankedQuarterTurn3Tiles, sequence, direction, 32),
                    paint(LeftBankedQuarterTurn3Tiles, mapped, (direction + 3) & 3, 32)
                );
                assert_eq!(
                    paint(RightQuarterTurn3Tiles, sequence, direction, 32),
                    paint(LeftQuarterTurn3Tiles, mapped, (direction + 3) & 3, 32)
                );
            }
            for sequence in 0..5u8 {
                let mapped = MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL[sequence as usize];
                assert_eq!(
                    paint(LeftEighthToOrthogonal, sequence, direction, 32),
                    paint(RightEighthToDiag, mapped, (direction + 2) & 3, 32)
                );
            }
        }
    }

    #[test]
    fn test_sloped_turn_down_uses_opposite_hand() {
        use TrackElemType::*;
        for direction in 0..4u8 {
            for sequence in 0..4u8 {
                assert_eq!(
                    paint(LeftQuarterTurn3TilesDown25, sequence, direction, 32),
                    paint(RightQuarterTurn3TilesUp25, sequence, (direction + 1) & 3, 32)
                );
            }
            for sequence in 0..7u8 {
                assert_eq!(
                    paint(RightQuarterTurn5TilesDown25, sequence, direction, 32),
                    paint(LeftQuarterTurn5TilesUp25, sequence, (direction + 3) & 3, 32)
                );
            }
        }
    }

    #[test]
    fn test_inversion_down_replays_up() {
        use TrackElemType::*;
        for direction in 0..4u8 {
            for sequence in 0..4u8 {
                assert_eq!(
                    paint(HalfLoopDown, sequence, direction, 32),
                    paint(HalfLoopUp, 3 - sequence, (direction + 2) & 3, 32)
                );
            }
            for sequence in 0..3u8 {
                assert_eq!(
                    paint(LeftCorkscrewDown, sequence, direction, 32),
                    paint(RightCorkscrewUp, 2 - sequence, (direction + 1) & 3, 32)
                );
            }
        }
    }

    #[test]
    fn test_sloped_quarter_turn_3_tunnels() {
        let snapshot = paint(TrackElemType::RightQuarterTurn3TilesUp25, 0, 0, 48);
        assert_eq!(
            snapshot.left_tunnels,
            vec![TunnelEntry::new(40, TunnelGroup::Square, TunnelSubType::SlopeStart)]
        );
        let snapshot = paint(TrackElemType::LeftQuarterTurn3TilesUp25, 3, 3, 48);
        assert_eq!(
            snapshot.left_tunnels,
            vec![TunnelEntry::new(56, TunnelGroup::Square, TunnelSubType::SlopeEnd)]
        );
        assert_eq!(snapshot.general_support.height, 120);
    }

    #[test]
    fn test_inversions_claim_whole_tile() {
        use TrackElemType::*;
        for track_type in [LeftVerticalLoop, HalfLoopUp, LeftTwistDownToUp, RightCorkscrewUp] {
            for sequence in 0..track_type.sequence_count() {
                let snapshot = paint(track_type, sequence, 1, 32);
                assert_eq!(blocked_mask(&snapshot), SEGMENTS_ALL, "{:?} {}", track_type, sequence);
            }
        }
    }

    #[test]
    fn test_vertical_loop_top_has_no_sprite() {
        for sequence in [4, 5] {
            let snapshot = paint(TrackElemType::RightVerticalLoop, sequence, 0, 32);
            assert!(snapshot.records.is_empty());
            assert_eq!(snapshot.general_support.height, 32 + 168);
        }
    }

    #[test]
    fn test_twist_draws_two_layers() {
        let snapshot = paint(TrackElemType::LeftTwistDownToUp, 1, 2, 32);
        assert_eq!(snapshot.records[0].kind, PaintKind::Parent);
        assert_eq!(snapshot.records[1].kind, PaintKind::Child);
        assert_eq!(
            paint(TrackElemType::LeftTwistUpToDown, 0, 0, 32),
            paint(TrackElemType::RightTwistDownToUp, 2, 2, 32)
        );
    }

    #[test]
    fn test_corkscrew_exit_tunnel() {
        let snapshot = paint(TrackElemType::LeftCorkscrewUp, 2, 3, 32);
        assert_eq!(
            snapshot.left_tunnels,
            vec![TunnelEntry::new(56, TunnelGroup::Standard, TunnelSubType::Flat)]
        );
        let snapshot = paint(TrackElemType::RightCorkscrewUp, 2, 0, 32);
        assert_eq!(
            snapshot.right_tunnels,
            vec![TunnelEntry::new(56, TunnelGroup::Standard, TunnelSubType::Flat)]
        );
    }

    #[test]
    fn test_diagonal_visible_tile() {
        let visible = paint(TrackElemType::DiagFlat, 1, 0, 32);
        assert_eq!(visible.records.len(), 1);
        assert_eq!(visible.records[0].offset, CoordsXYZ::new(-16, -16, 61));
        let hidden = paint(TrackElemType::DiagFlat, 0, 0, 32);
        assert!(hidden.records.is_empty());
        assert_eq!(blocked_mask(&hidden), blocked::DIAG_STRAIGHT_FLAT[0]);
        assert_eq!(hidden.general_support.height, 80);
    }

    #[test]
    fn test_diagonal_chain() {
        let plain = paint(TrackElemType::DiagUp25, 1, 0, 32);
        let chain = paint_element(&element(TrackElemType::DiagUp25, 1).with_chain(true), 1, 0, 32);
        assert_ne!(plain.records[0].image, chain.records[0].image);
        assert_eq!(plain.records[0].bound_box, chain.records[0].bound_box);
        assert_eq!(plain.records[0].bound_box.offset.z, 32 + 29 + 16);
    }

    #[test]
    fn test_eighth_turn_exit_support() {
        let snapshot = paint(TrackElemType::LeftEighthToDiag, 4, 0, 32);
        assert_eq!(snapshot.support_posts.len(), 1);
        assert_eq!(snapshot.support_posts[0].segment, MetalSupportPlace::BottomCorner.segment());
        let snapshot = paint(TrackElemType::LeftEighthToDiag, 3, 0, 32);
        assert!(snapshot.records.is_empty());
        assert_eq!(blocked_mask(&snapshot), 0);
    }
}
