//! Eighth turns and diagonal pieces

use funfair_paint::{
    blocked, metal_a_supports_paint_setup, rotate_segments, BoundBoxXYZ, ImageId, ImageIndex,
    MetalSupportPlace, PaintSession, SUPPORT_HEIGHT_BLOCKED,
};
use funfair_world::{CoordsXY, CoordsXYZ, Direction, MetalSupportType};

pub const EIGHTH_TO_DIAG_SPRITE_MAP: [i8; 5] = [0, 1, 2, -1, 3];

/// Visible slot per direction and sequence of a diagonal piece
pub const DIAG_SPRITE_MAP: [[i8; 4]; 4] =
    [[-1, 0, -1, -1], [-1, -1, -1, 0], [-1, -1, 0, -1], [0, -1, -1, -1]];

/// Eighth turn back to orthogonal, as the mirrored eighth turn to diagonal
pub const MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL: [u8; 5] = [4, 2, 3, 1, 0];

/// Sequence of the same tile when a diagonal piece is walked backwards
pub const MAP_DIAG_REVERSED: [u8; 4] = [3, 2, 1, 0];

pub const DEFAULT_DIAG_TILE_OFFSETS: [CoordsXY; 4] = [CoordsXY::new(-16, -16); 4];
pub const DEFAULT_DIAG_BOUND_LENGTHS: [CoordsXY; 4] = [CoordsXY::new(32, 32); 4];

/// Post under a straight diagonal piece, per direction and sequence
pub const DIAG_SUPPORT_PLACEMENT: [[Option<MetalSupportPlace>; 4]; 4] = [
    [None, None, None, Some(MetalSupportPlace::LeftCorner)],
    [None, None, None, Some(MetalSupportPlace::TopCorner)],
    [None, None, None, Some(MetalSupportPlace::RightCorner)],
    [None, None, None, Some(MetalSupportPlace::BottomCorner)],
];

#[allow(clippy::too_many_arguments)]
pub fn track_paint_util_eighth_to_diag_tiles_paint(
    session: &mut PaintSession,
    thickness: &[[i32; 4]; 4],
    height: i32,
    direction: Direction,
    sequence: u8,
    colours: ImageId,
    sprites: &[[ImageIndex; 4]; 4],
    offsets: Option<&[[CoordsXY; 4]; 4]>,
    bounds_lengths: &[[CoordsXY; 4]; 4],
    bounds_offsets: Option<&[[CoordsXYZ; 4]; 4]>,
) {
    let Some(index) = EIGHTH_TO_DIAG_SPRITE_MAP
        .get(sequence as usize)
        .and_then(|&index| usize::try_from(index).ok())
    else {
        return;
    };
    let direction = (direction & 3) as usize;
    let offset = offsets.map_or(CoordsXY::default(), |o| o[direction][index]);
    let bounds_offset = bounds_offsets.map_or(offset.with_z(0), |o| o[direction][index]);
    let length = bounds_lengths[direction][index];
    session.add_image_as_parent(
        colours.with_index(sprites[direction][index]),
        offset.with_z(height),
        BoundBoxXYZ::new(
            CoordsXYZ::new(bounds_offset.x, bounds_offset.y, height + bounds_offset.z),
            length.with_z(thickness[direction][index]),
        ),
    );
}

/// Draw the one visible tile of a diagonal piece
///
/// Each direction shows its sprite on a single sequence only.
#[allow(clippy::too_many_arguments)]
pub fn track_paint_util_diag_tiles_paint(
    session: &mut PaintSession,
    thickness: i32,
    height: i32,
    direction: Direction,
    sequence: u8,
    colours: ImageId,
    sprites: &[ImageIndex; 4],
    offsets: Option<&[CoordsXY; 4]>,
    bounds_lengths: &[CoordsXY; 4],
    bounds_offsets: Option<&[CoordsXYZ; 4]>,
    additional_bounds_height: i32,
) {
    let direction = (direction & 3) as usize;
    let visible = DIAG_SPRITE_MAP[direction]
        .get(sequence as usize)
        .is_some_and(|&index| index >= 0);
    if !visible {
        return;
    }

    let offset = offsets.map_or(CoordsXY::default(), |o| o[direction]);
    let bounds_offset = bounds_offsets.map_or(offset.with_z(0), |o| o[direction]);
    session.add_image_as_parent(
        colours.with_index(sprites[direction]),
        offset.with_z(height),
        BoundBoxXYZ::new(
            CoordsXYZ::new(
                bounds_offset.x,
                bounds_offset.y,
                height + bounds_offset.z + additional_bounds_height,
            ),
            bounds_lengths[direction].with_z(thickness),
        ),
    );
}

/// Flat diagonal piece with its supports and bookkeeping
pub fn track_paint_util_diag_tiles_paint_extra(
    session: &mut PaintSession,
    thickness: i32,
    height: i32,
    direction: Direction,
    sequence: u8,
    sprites: &[ImageIndex; 4],
    support_type: MetalSupportType,
) {
    let colours = session.track_colours;
    track_paint_util_diag_tiles_paint(
        session,
        thickness,
        height,
        direction,
        sequence,
        colours,
        sprites,
        Some(&DEFAULT_DIAG_TILE_OFFSETS),
        &DEFAULT_DIAG_BOUND_LENGTHS,
        None,
        0,
    );

    let sequence = (sequence & 3) as usize;
    if let Some(place) = DIAG_SUPPORT_PLACEMENT[(direction & 3) as usize][sequence] {
        let support_colours = session.support_colours;
        metal_a_supports_paint_setup(session, support_type, place, 0, height, support_colours);
    }
    session.set_segment_support_height(
        rotate_segments(blocked::DIAG_STRAIGHT_FLAT[sequence], direction),
        SUPPORT_HEIGHT_BLOCKED,
        0,
    );
    session.set_general_support_height(height + 32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfair_paint::{PaintConfig, PaintSegment};

    const SPRITES: [ImageIndex; 4] = [500, 501, 502, 503];

    #[test]
    fn test_diag_one_visible_tile_per_direction() {
        for direction in 0..4u8 {
            let visible: Vec<u8> = (0..4u8)
                .filter(|&sequence| {
                    let mut session = PaintSession::new(0, &PaintConfig::default());
                    track_paint_util_diag_tiles_paint(
                        &mut session,
                        3,
                        0,
                        direction,
                        sequence,
                        ImageId::new(0),
                        &SPRITES,
                        None,
                        &DEFAULT_DIAG_BOUND_LENGTHS,
                        None,
                        0,
                    );
                    !session.records().is_empty()
                })
                .collect();
            assert_eq!(visible.len(), 1, "direction {direction}");
        }
    }

    #[test]
    fn test_diag_bounds() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_diag_tiles_paint(
            &mut session,
            3,
            16,
            1,
            3,
            ImageId::new(0),
            &SPRITES,
            Some(&DEFAULT_DIAG_TILE_OFFSETS),
            &DEFAULT_DIAG_BOUND_LENGTHS,
            None,
            2,
        );
        let record = session.records()[0];
        assert_eq!(record.image.index(), 501);
        assert_eq!(record.offset, CoordsXYZ::new(-16, -16, 16));
        assert_eq!(
            record.bound_box,
            BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 18), CoordsXYZ::new(32, 32, 3))
        );
    }

    #[test]
    fn test_diag_extra_bookkeeping() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.pass_surface(0, 0);
        track_paint_util_diag_tiles_paint_extra(
            &mut session,
            3,
            32,
            0,
            3,
            &SPRITES,
            MetalSupportType::Tubes,
        );

        assert_eq!(session.support_posts().len(), 1);
        assert_eq!(session.support_posts()[0].segment, PaintSegment::Left);
        assert!(session.segment_support(PaintSegment::Left).is_blocked());
        assert!(session.segment_support(PaintSegment::Centre).is_blocked());
        assert!(!session.segment_support(PaintSegment::Right).is_blocked());
        assert_eq!(session.general_support().height, 64);
    }

    #[test]
    fn test_diag_extra_support_follows_direction() {
        for (direction, segment) in [
            (1, PaintSegment::Top),
            (2, PaintSegment::Right),
            (3, PaintSegment::Bottom),
        ] {
            let mut session = PaintSession::new(0, &PaintConfig::default());
            session.pass_surface(0, 0);
            track_paint_util_diag_tiles_paint_extra(
                &mut session,
                3,
                32,
                direction,
                3,
                &SPRITES,
                MetalSupportType::Tubes,
            );
            assert_eq!(session.support_posts()[0].segment, segment);
            assert!(session.segment_support(segment).is_blocked());
        }
    }

    #[test]
    fn test_eighth_to_diag_skip() {
        let thickness = [[3; 4]; 4];
        let sprites = [[600, 601, 602, 603]; 4];
        let lengths = [[CoordsXY::new(32, 16); 4]; 4];
        let mut session = PaintSession::new(0, &PaintConfig::default());
        for sequence in 0..5 {
            track_paint_util_eighth_to_diag_tiles_paint(
                &mut session,
                &thickness,
                0,
                0,
                sequence,
                ImageId::new(0),
                &sprites,
                None,
                &lengths,
                None,
            );
        }
        let images: Vec<_> = session.records().iter().map(|r| r.image.index()).collect();
        assert_eq!(images, vec![600, 601, 602, 603]);
    }
}
