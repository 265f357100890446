//! Tile segments and support height bookkeeping
//!
//! A tile is split into nine segments: four corners, four sides and the centre.
//! Track pieces mark the segments they cover so that later support passes do
//! not draw posts through them. Segments are named in the piece's own frame
//! and rotated by the piece's direction before being recorded.

use funfair_world::Direction;
use serde::Serialize;

/// One of the nine tile segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum PaintSegment {
    Top = 0,
    TopRight = 1,
    Right = 2,
    BottomRight = 3,
    Bottom = 4,
    BottomLeft = 5,
    Left = 6,
    TopLeft = 7,
    Centre = 8,
}

impl PaintSegment {
    pub const ALL: [PaintSegment; 9] = [
        PaintSegment::Top,
        PaintSegment::TopRight,
        PaintSegment::Right,
        PaintSegment::BottomRight,
        PaintSegment::Bottom,
        PaintSegment::BottomLeft,
        PaintSegment::Left,
        PaintSegment::TopLeft,
        PaintSegment::Centre,
    ];

    pub const fn flag(self) -> u16 {
        1 << (self as u16)
    }
}

pub const SEGMENT_B4: u16 = PaintSegment::Top.flag();
pub const SEGMENT_CC: u16 = PaintSegment::TopRight.flag();
pub const SEGMENT_BC: u16 = PaintSegment::Right.flag();
pub const SEGMENT_D4: u16 = PaintSegment::BottomRight.flag();
pub const SEGMENT_C0: u16 = PaintSegment::Bottom.flag();
pub const SEGMENT_D0: u16 = PaintSegment::BottomLeft.flag();
pub const SEGMENT_B8: u16 = PaintSegment::Left.flag();
pub const SEGMENT_C8: u16 = PaintSegment::TopLeft.flag();
pub const SEGMENT_C4: u16 = PaintSegment::Centre.flag();

/// Every segment of the tile
pub const SEGMENTS_ALL: u16 = 0x1FF;

/// Segment heights are blocked all the way up
pub const SUPPORT_HEIGHT_BLOCKED: u16 = 0xFFFF;

/// Slope value stored with a general support height set by track
pub const SUPPORT_SLOPE_TRACK: u8 = 0x20;

/// Combine segments into a flag set
pub const fn segments(list: &[PaintSegment]) -> u16 {
    let mut flags = 0;
    let mut i = 0;
    while i < list.len() {
        flags |= list[i].flag();
        i += 1;
    }
    flags
}

/// Rotate a segment flag set by a direction; the centre never moves
pub const fn rotate_segments(segments: u16, rotation: Direction) -> u16 {
    let shift = ((rotation & 3) * 2) as u32;
    if shift == 0 {
        return segments;
    }
    let outer = segments & 0xFF;
    let rotated = ((outer << shift) | (outer >> (8 - shift))) & 0xFF;
    (segments & 0xFF00) | rotated
}

/// Segments blocked by common piece shapes, in the piece's own frame
pub mod blocked {
    use super::PaintSegment::*;
    use super::segments;

    /// Straight piece along the direction of travel
    pub const STRAIGHT_FLAT: u16 = segments(&[Centre, TopRight, BottomLeft]);

    /// Diagonal straight piece, one entry per track sequence
    pub const DIAG_STRAIGHT_FLAT: [u16; 4] = [
        segments(&[Right, Centre, TopRight, BottomRight]),
        segments(&[Top, Centre, TopLeft, TopRight]),
        segments(&[Bottom, Centre, BottomLeft, BottomRight]),
        segments(&[Left, Centre, TopLeft, BottomLeft]),
    ];
}

/// Highest point already covered on a segment, and the surface slope there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SupportHeight {
    pub height: u16,
    pub slope: u8,
}

impl SupportHeight {
    pub const fn new(height: u16, slope: u8) -> Self {
        Self { height, slope }
    }

    /// Nothing recorded yet on this tile
    pub const UNSET: SupportHeight = SupportHeight::new(0, 0xFF);

    pub const fn is_blocked(&self) -> bool {
        self.height == SUPPORT_HEIGHT_BLOCKED
    }
}

impl Default for SupportHeight {
    fn default() -> Self {
        Self::UNSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_bits() {
        assert_eq!(SEGMENT_B4, 0x001);
        assert_eq!(SEGMENT_CC, 0x002);
        assert_eq!(SEGMENT_C4, 0x100);
        assert_eq!(
            SEGMENT_B4
                | SEGMENT_CC
                | SEGMENT_BC
                | SEGMENT_D4
                | SEGMENT_C0
                | SEGMENT_D0
                | SEGMENT_B8
                | SEGMENT_C8
                | SEGMENT_C4,
            SEGMENTS_ALL
        );
    }

    #[test]
    fn test_rotate_identity_and_full_turn() {
        let s = blocked::STRAIGHT_FLAT;
        assert_eq!(rotate_segments(s, 0), s);
        assert_eq!(rotate_segments(s, 4), s);
        assert_eq!(rotate_segments(SEGMENTS_ALL, 3), SEGMENTS_ALL);
    }

    #[test]
    fn test_rotate_straight_piece() {
        // Along the other axis the straight covers the other pair of sides
        assert_eq!(
            rotate_segments(blocked::STRAIGHT_FLAT, 1),
            SEGMENT_C4 | SEGMENT_D4 | SEGMENT_C8
        );
        assert_eq!(rotate_segments(blocked::STRAIGHT_FLAT, 2), blocked::STRAIGHT_FLAT);
    }

    #[test]
    fn test_rotate_corner() {
        assert_eq!(rotate_segments(SEGMENT_B4, 1), SEGMENT_BC);
        assert_eq!(rotate_segments(SEGMENT_B4, 2), SEGMENT_C0);
        assert_eq!(rotate_segments(SEGMENT_B4, 3), SEGMENT_B8);
        assert_eq!(rotate_segments(SEGMENT_C8, 1), SEGMENT_CC);
    }

    #[test]
    fn test_diag_sequences_share_centre() {
        for mask in blocked::DIAG_STRAIGHT_FLAT {
            assert_ne!(mask & SEGMENT_C4, 0);
            assert_eq!(mask.count_ones(), 4);
        }
    }

    #[test]
    fn test_support_height_blocked() {
        assert!(SupportHeight::new(SUPPORT_HEIGHT_BLOCKED, 0).is_blocked());
        assert!(!SupportHeight::default().is_blocked());
    }
}
