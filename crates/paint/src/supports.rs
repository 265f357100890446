//! Structural supports
//!
//! Support painters draw posts from the ground (or whatever already covers the
//! segment) up to a target height. They refuse to draw when the tile has no
//! ground under it yet, when supports are hidden, or when the segment is
//! already blocked above the target.

use funfair_world::{CoordsXY, CoordsXYZ, MetalSupportType, WoodenSupportType};
use serde::Serialize;

use crate::config::ViewFlags;
use crate::image_id::{FilterPaletteId, ImageId, ImageIndex};
use crate::paint_struct::BoundBoxXYZ;
use crate::segment::{PaintSegment, SUPPORT_SLOPE_TRACK};
use crate::session::PaintSession;

/// Height of one support column piece
pub const SUPPORT_PIECE_HEIGHT: i32 = 16;

/// Column sprites per metal support family, 16 partial heights each
const METAL_SUPPORT_COLUMN_IMAGES: [ImageIndex; MetalSupportType::COUNT as usize] = [
    3243, 3209, 3226, 3260, 3277, 3294, 3311, 3328, 3345, 3362, 3379, 3396, 3413,
];

/// Cap sprites drawn above the column for a non-zero special height
const METAL_SUPPORT_SPECIAL_IMAGES: [ImageIndex; MetalSupportType::COUNT as usize] = [
    3430, 3431, 3432, 3433, 3434, 3435, 3436, 3437, 3438, 3439, 3440, 3441, 3442,
];

/// Foot block sprites, one per surface slope
const METAL_SUPPORT_FOOT_BASE: ImageIndex = 3178;

/// Post position within a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetalSupportPlace {
    TopCorner,
    LeftCorner,
    RightCorner,
    BottomCorner,
    Centre,
    TopLeftSide,
    TopRightSide,
    BottomLeftSide,
    BottomRightSide,
}

impl MetalSupportPlace {
    pub const ALL: [MetalSupportPlace; 9] = [
        MetalSupportPlace::TopCorner,
        MetalSupportPlace::LeftCorner,
        MetalSupportPlace::RightCorner,
        MetalSupportPlace::BottomCorner,
        MetalSupportPlace::Centre,
        MetalSupportPlace::TopLeftSide,
        MetalSupportPlace::TopRightSide,
        MetalSupportPlace::BottomLeftSide,
        MetalSupportPlace::BottomRightSide,
    ];

    /// Segment the post stands on
    pub const fn segment(self) -> PaintSegment {
        match self {
            MetalSupportPlace::TopCorner => PaintSegment::Top,
            MetalSupportPlace::LeftCorner => PaintSegment::Left,
            MetalSupportPlace::RightCorner => PaintSegment::Right,
            MetalSupportPlace::BottomCorner => PaintSegment::Bottom,
            MetalSupportPlace::Centre => PaintSegment::Centre,
            MetalSupportPlace::TopLeftSide => PaintSegment::TopLeft,
            MetalSupportPlace::TopRightSide => PaintSegment::TopRight,
            MetalSupportPlace::BottomLeftSide => PaintSegment::BottomLeft,
            MetalSupportPlace::BottomRightSide => PaintSegment::BottomRight,
        }
    }

    /// Place on the segment `direction` quarter turns round, matching
    /// `rotate_segments`
    pub const fn rotated(self, direction: u8) -> Self {
        const RING: [MetalSupportPlace; 8] = [
            MetalSupportPlace::TopCorner,
            MetalSupportPlace::TopRightSide,
            MetalSupportPlace::RightCorner,
            MetalSupportPlace::BottomRightSide,
            MetalSupportPlace::BottomCorner,
            MetalSupportPlace::BottomLeftSide,
            MetalSupportPlace::LeftCorner,
            MetalSupportPlace::TopLeftSide,
        ];
        let segment = self.segment() as usize;
        if segment >= 8 {
            return self;
        }
        RING[(segment + 2 * (direction as usize & 3)) % 8]
    }

    /// Post position within the tile
    pub const fn bound_box_offset(self) -> CoordsXY {
        match self {
            MetalSupportPlace::TopCorner => CoordsXY::new(4, 4),
            MetalSupportPlace::LeftCorner => CoordsXY::new(28, 4),
            MetalSupportPlace::RightCorner => CoordsXY::new(4, 28),
            MetalSupportPlace::BottomCorner => CoordsXY::new(28, 28),
            MetalSupportPlace::Centre => CoordsXY::new(16, 16),
            MetalSupportPlace::TopLeftSide => CoordsXY::new(16, 4),
            MetalSupportPlace::TopRightSide => CoordsXY::new(4, 16),
            MetalSupportPlace::BottomLeftSide => CoordsXY::new(28, 16),
            MetalSupportPlace::BottomRightSide => CoordsXY::new(16, 28),
        }
    }
}

/// Art used for a wooden support column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WoodenSupportSubType {
    NeSw,
    NwSe,
    Corner0,
    Corner1,
    Corner2,
    Corner3,
}

impl WoodenSupportSubType {
    /// Straight sub type for a piece facing `direction`
    pub const fn straight(direction: u8) -> Self {
        if direction & 1 == 0 {
            WoodenSupportSubType::NeSw
        } else {
            WoodenSupportSubType::NwSe
        }
    }

    /// Corner sub type for a turn facing `direction`
    pub const fn corner(direction: u8) -> Self {
        match direction & 3 {
            0 => WoodenSupportSubType::Corner0,
            1 => WoodenSupportSubType::Corner1,
            2 => WoodenSupportSubType::Corner2,
            _ => WoodenSupportSubType::Corner3,
        }
    }
}

/// Full-piece sprites per wooden family and sub type
const WOODEN_SUPPORT_IMAGES: [[ImageIndex; 6]; 2] = [
    [3392, 3393, 3394, 3395, 3396, 3397],
    [3484, 3485, 3486, 3487, 3488, 3489],
];

/// Half-height piece sprites follow the full pieces
const WOODEN_SUPPORT_HALF_OFFSET: ImageIndex = 6;

/// Support family of a placed post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SupportPostKind {
    Metal(MetalSupportType),
    Wooden(WoodenSupportType),
}

/// A support post that was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SupportPost {
    pub kind: SupportPostKind,
    pub segment: PaintSegment,
    /// Ground the post stands on
    pub base: i32,
    /// Top of the post including any cap
    pub top: i32,
}

fn support_template(session: &PaintSession, colours: ImageId) -> Option<ImageId> {
    if !session.passed_surface || session.view_flags.contains(ViewFlags::INVISIBLE_SUPPORTS) {
        return None;
    }
    if session.view_flags.contains(ViewFlags::SEE_THROUGH_SUPPORTS) {
        return Some(colours.with_transparency(FilterPaletteId::SEE_THROUGH));
    }
    Some(colours)
}

/// Draw a metal support post at `place` reaching up to `height`
///
/// `special` adds a cap of that height above the column. Returns whether a
/// post was drawn.
pub fn metal_a_supports_paint_setup(
    session: &mut PaintSession,
    support_type: MetalSupportType,
    place: MetalSupportPlace,
    special: i32,
    height: i32,
    colours: ImageId,
) -> bool {
    let Some(template) = support_template(session, colours) else {
        return false;
    };

    let segment = place.segment();
    let ground = session.segment_support(segment);
    if ground.is_blocked() || ground.height as i32 > height {
        return false;
    }

    let offset = place.bound_box_offset();
    let base = ground.height as i32;
    let mut current = base;

    // Foot block on sloped ground
    if ground.slope != 0 && ground.slope != 0xFF && ground.slope & SUPPORT_SLOPE_TRACK == 0 {
        let image = template.with_index(METAL_SUPPORT_FOOT_BASE + (ground.slope & 0x1F) as u32);
        session.add_image_as_parent(
            image,
            offset.with_z(current),
            BoundBoxXYZ::new(offset.with_z(current), CoordsXYZ::new(0, 0, 5)),
        );
        current += 6;
    }

    let column = METAL_SUPPORT_COLUMN_IMAGES[support_type as usize];
    while current < height {
        let to_boundary = SUPPORT_PIECE_HEIGHT - current.rem_euclid(SUPPORT_PIECE_HEIGHT);
        let piece = to_boundary.min(height - current);
        let image = template.with_index(column + (SUPPORT_PIECE_HEIGHT - piece) as u32);
        session.add_image_as_parent(
            image,
            offset.with_z(current),
            BoundBoxXYZ::new(offset.with_z(current), CoordsXYZ::new(0, 0, piece - 1)),
        );
        current += piece;
    }

    let mut top = height;
    if special > 0 {
        let image = template.with_index(METAL_SUPPORT_SPECIAL_IMAGES[support_type as usize]);
        session.add_image_as_parent(
            image,
            offset.with_z(height),
            BoundBoxXYZ::new(offset.with_z(height), CoordsXYZ::new(0, 0, special - 1)),
        );
        top += special;
    }

    log::trace!("Metal support {:?} at {:?} from {} to {}", support_type, place, base, top);
    session.record_support_post(SupportPost {
        kind: SupportPostKind::Metal(support_type),
        segment,
        base,
        top,
    });
    true
}

/// Draw a wooden support column under the tile centre up to `height`
///
/// Wooden supports stand on the general support height, so a tile already
/// claimed by another track element gets none.
pub fn wooden_a_supports_paint_setup(
    session: &mut PaintSession,
    support_type: WoodenSupportType,
    sub_type: WoodenSupportSubType,
    height: i32,
    colours: ImageId,
) -> bool {
    let Some(template) = support_template(session, colours) else {
        return false;
    };

    let ground = session.general_support();
    if ground.slope & SUPPORT_SLOPE_TRACK != 0 && ground.slope != 0xFF {
        return false;
    }
    let base = (ground.height as i32 + SUPPORT_PIECE_HEIGHT - 1) & !(SUPPORT_PIECE_HEIGHT - 1);
    if base >= height {
        return false;
    }

    let full = WOODEN_SUPPORT_IMAGES[support_type as usize][sub_type as usize];
    let mut current = base;
    while current < height {
        let piece = SUPPORT_PIECE_HEIGHT.min(height - current);
        let image = if piece == SUPPORT_PIECE_HEIGHT {
            template.with_index(full)
        } else {
            template.with_index(full + WOODEN_SUPPORT_HALF_OFFSET)
        };
        session.add_image_as_parent(
            image,
            CoordsXYZ::new(0, 0, current),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, current), CoordsXYZ::new(32, 32, piece - 1)),
        );
        current += piece;
    }

    log::trace!("Wooden support {:?} {:?} from {} to {}", support_type, sub_type, base, height);
    session.record_support_post(SupportPost {
        kind: SupportPostKind::Wooden(support_type),
        segment: PaintSegment::Centre,
        base,
        top: height,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaintConfig;
    use crate::paint_struct::PaintKind;
    use crate::segment::{SEGMENT_C4, SUPPORT_HEIGHT_BLOCKED};

    fn session_over_ground(height: i32) -> PaintSession {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.begin_tile(CoordsXY::new(0, 0));
        session.pass_surface(height, 0);
        session
    }

    #[test]
    fn test_metal_needs_surface() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        assert!(!metal_a_supports_paint_setup(
            &mut session,
            MetalSupportType::Tubes,
            MetalSupportPlace::Centre,
            0,
            64,
            ImageId::new(0),
        ));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_metal_column_pieces() {
        let mut session = session_over_ground(16);
        assert!(metal_a_supports_paint_setup(
            &mut session,
            MetalSupportType::TubesInverted,
            MetalSupportPlace::Centre,
            0,
            60,
            ImageId::new(0),
        ));
        // 16..32, 32..48, 48..60
        let records = session.records();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.kind == PaintKind::Parent));
        assert_eq!(records[0].offset, CoordsXYZ::new(16, 16, 16));
        assert_eq!(records[2].bound_box.length.z, 11);

        let post = session.support_posts()[0];
        assert_eq!(post.segment, PaintSegment::Centre);
        assert_eq!((post.base, post.top), (16, 60));
    }

    #[test]
    fn test_metal_special_cap() {
        let mut session = session_over_ground(0);
        metal_a_supports_paint_setup(
            &mut session,
            MetalSupportType::Tubes,
            MetalSupportPlace::TopCorner,
            8,
            32,
            ImageId::new(0),
        );
        assert_eq!(session.records().len(), 3);
        assert_eq!(session.support_posts()[0].top, 40);
    }

    #[test]
    fn test_metal_blocked_segment() {
        let mut session = session_over_ground(0);
        session.set_segment_support_height(SEGMENT_C4, SUPPORT_HEIGHT_BLOCKED, 0);
        assert!(!metal_a_supports_paint_setup(
            &mut session,
            MetalSupportType::Tubes,
            MetalSupportPlace::Centre,
            0,
            64,
            ImageId::new(0),
        ));
        assert!(metal_a_supports_paint_setup(
            &mut session,
            MetalSupportType::Tubes,
            MetalSupportPlace::LeftCorner,
            0,
            64,
            ImageId::new(0),
        ));
    }

    #[test]
    fn test_metal_segment_above_target() {
        let mut session = session_over_ground(80);
        assert!(!metal_a_supports_paint_setup(
            &mut session,
            MetalSupportType::Tubes,
            MetalSupportPlace::Centre,
            0,
            64,
            ImageId::new(0),
        ));
    }

    #[test]
    fn test_invisible_and_see_through() {
        let config = PaintConfig {
            invisible_supports: true,
            ..Default::default()
        };
        let mut session = PaintSession::new(0, &config);
        session.pass_surface(0, 0);
        assert!(!metal_a_supports_paint_setup(
            &mut session,
            MetalSupportType::Tubes,
            MetalSupportPlace::Centre,
            0,
            32,
            ImageId::new(0),
        ));

        let config = PaintConfig {
            see_through_supports: true,
            ..Default::default()
        };
        let mut session = PaintSession::new(0, &config);
        session.pass_surface(0, 0);
        assert!(metal_a_supports_paint_setup(
            &mut session,
            MetalSupportType::Tubes,
            MetalSupportPlace::Centre,
            0,
            32,
            ImageId::new(0),
        ));
        assert!(session.records().iter().all(|r| r.image.is_blended()));
    }

    #[test]
    fn test_wooden_column() {
        let mut session = session_over_ground(8);
        assert!(wooden_a_supports_paint_setup(
            &mut session,
            WoodenSupportType::Truss,
            WoodenSupportSubType::straight(1),
            40,
            ImageId::new(0),
        ));
        // Base rounds up to 16, then one full and one half piece
        let records = session.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].image.index(), 3393);
        assert_eq!(records[1].image.index(), 3393 + WOODEN_SUPPORT_HALF_OFFSET);
        assert_eq!(session.support_posts()[0].base, 16);
    }

    #[test]
    fn test_wooden_skips_claimed_tile() {
        let mut session = session_over_ground(0);
        session.set_general_support_height(48);
        assert!(!wooden_a_supports_paint_setup(
            &mut session,
            WoodenSupportType::Truss,
            WoodenSupportSubType::NeSw,
            96,
            ImageId::new(0),
        ));
    }

    #[test]
    fn test_places_cover_distinct_segments() {
        let mut seen = 0u16;
        for place in MetalSupportPlace::ALL {
            seen |= place.segment().flag();
        }
        assert_eq!(seen, crate::segment::SEGMENTS_ALL);
    }

    #[test]
    fn test_rotated_place_follows_segments() {
        use crate::segment::rotate_segments;
        for place in MetalSupportPlace::ALL {
            for direction in 0..4 {
                assert_eq!(
                    place.rotated(direction).segment().flag(),
                    rotate_segments(place.segment().flag(), direction)
                );
            }
        }
        assert_eq!(MetalSupportPlace::TopRightSide.rotated(1), MetalSupportPlace::BottomRightSide);
        assert_eq!(MetalSupportPlace::Centre.rotated(3), MetalSupportPlace::Centre);
    }
}
