//! On-ride photo signs and camera

use funfair_paint::{
    BoundBoxXYZ, ImageIndex, PaintSession, TunnelGroup, TunnelSubType, SEGMENTS_ALL,
    SUPPORT_HEIGHT_BLOCKED,
};
use funfair_world::{CoordsXY, CoordsXYZ, Direction, TrackElement};

use crate::sprites::*;

pub const GENERAL_SUPPORT_HEIGHT_ONRIDE_PHOTO: i32 = 48;

/// Sign, camera and lit camera sprites per direction
type PhotoSprites = [[ImageIndex; 3]; 4];

const PHOTO_SPRITES: PhotoSprites = [
    [SPR_ON_RIDE_PHOTO_SIGN_SW_NE, SPR_ON_RIDE_PHOTO_CAMERA_S, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_S],
    [SPR_ON_RIDE_PHOTO_SIGN_NW_SE, SPR_ON_RIDE_PHOTO_CAMERA_W, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_W],
    [SPR_ON_RIDE_PHOTO_SIGN_NE_SW, SPR_ON_RIDE_PHOTO_CAMERA_N, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N],
    [SPR_ON_RIDE_PHOTO_SIGN_SE_NW, SPR_ON_RIDE_PHOTO_CAMERA_E, SPR_ON_RIDE_PHOTO_CAMERA_FLASH_E],
];

const PHOTO_SPRITES_SMALL: PhotoSprites = [
    [
        SPR_ON_RIDE_PHOTO_SIGN_SMALL_SW_NE,
        SPR_ON_RIDE_PHOTO_CAMERA_SMALL_S,
        SPR_ON_RIDE_PHOTO_CAMERA_FLASH_SMALL_S,
    ],
    [
        SPR_ON_RIDE_PHOTO_SIGN_SMALL_NW_SE,
        SPR_ON_RIDE_PHOTO_CAMERA_SMALL_W,
        SPR_ON_RIDE_PHOTO_CAMERA_FLASH_SMALL_W,
    ],
    [
        SPR_ON_RIDE_PHOTO_SIGN_SMALL_NE_SW,
        SPR_ON_RIDE_PHOTO_CAMERA_SMALL_N,
        SPR_ON_RIDE_PHOTO_CAMERA_FLASH_SMALL_N,
    ],
    [
        SPR_ON_RIDE_PHOTO_SIGN_SMALL_SE_NW,
        SPR_ON_RIDE_PHOTO_CAMERA_SMALL_E,
        SPR_ON_RIDE_PHOTO_CAMERA_FLASH_SMALL_E,
    ],
];

/// Two sign posts then the camera, per direction
const PHOTO_POSITIONS: [[CoordsXY; 3]; 4] = [
    [CoordsXY::new(26, 0), CoordsXY::new(26, 31), CoordsXY::new(6, 0)],
    [CoordsXY::new(0, 6), CoordsXY::new(31, 6), CoordsXY::new(0, 26)],
    [CoordsXY::new(6, 0), CoordsXY::new(6, 31), CoordsXY::new(26, 31)],
    [CoordsXY::new(0, 26), CoordsXY::new(31, 26), CoordsXY::new(31, 6)],
];

fn paint_photo(
    session: &mut PaintSession,
    sprites: &PhotoSprites,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let direction = (direction & 3) as usize;
    let sign = session.track_colours.with_index(sprites[direction][0]);
    let camera = if element.is_taking_photo() {
        sprites[direction][2]
    } else {
        sprites[direction][1]
    };
    let camera = session.track_colours.with_index(camera);

    let [first, second, lens] = PHOTO_POSITIONS[direction];
    for (image, position) in [(sign, first), (sign, second), (camera, lens)] {
        session.add_image_as_parent(
            image,
            position.with_z(height),
            BoundBoxXYZ::new(position.with_z(height), CoordsXYZ::new(1, 1, 19)),
        );
    }
}

pub fn track_paint_util_onride_photo_paint(
    session: &mut PaintSession,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    paint_photo(session, &PHOTO_SPRITES, direction, height, element);
}

/// Photo section for narrow track
pub fn track_paint_util_onride_photo_small_paint(
    session: &mut PaintSession,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    paint_photo(session, &PHOTO_SPRITES_SMALL, direction, height, element);
}

/// Photo overlay plus the bookkeeping of a flat photo piece
pub fn track_paint_util_onride_photo_paint_2(
    session: &mut PaintSession,
    direction: Direction,
    element: &TrackElement,
    height: i32,
    support_height: i32,
    tunnel_group: TunnelGroup,
) {
    track_paint_util_onride_photo_paint(session, direction, height + 3, element);
    session.push_tunnel_rotated(direction, height, tunnel_group, TunnelSubType::Flat);
    session.set_segment_support_height(SEGMENTS_ALL, SUPPORT_HEIGHT_BLOCKED, 0);
    session.set_general_support_height(height + support_height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfair_paint::{PaintConfig, PaintSegment};
    use funfair_world::{RideId, RideType, TrackElemType};

    fn photo_element(photo_timeout: u8) -> TrackElement {
        let mut element = TrackElement::new(
            TrackElemType::OnRidePhoto,
            RideId(0),
            RideType::CompactInvertedCoaster,
        );
        element.photo_timeout = photo_timeout;
        element
    }

    #[test]
    fn test_camera_flash() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_onride_photo_paint(&mut session, 2, 0, &photo_element(0));
        assert_eq!(session.records()[2].image.index(), SPR_ON_RIDE_PHOTO_CAMERA_N);

        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_onride_photo_paint(&mut session, 2, 0, &photo_element(3));
        assert_eq!(session.records()[2].image.index(), SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N);
        assert_eq!(session.records()[2].offset, CoordsXYZ::new(26, 31, 0));
    }

    #[test]
    fn test_small_signs() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_onride_photo_small_paint(&mut session, 1, 8, &photo_element(0));
        let records = session.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].image.index(), SPR_ON_RIDE_PHOTO_SIGN_SMALL_NW_SE);
        assert_eq!(
            records[1].bound_box,
            BoundBoxXYZ::new(CoordsXYZ::new(31, 6, 8), CoordsXYZ::new(1, 1, 19))
        );
    }

    #[test]
    fn test_photo_piece_bookkeeping() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        track_paint_util_onride_photo_paint_2(
            &mut session,
            1,
            &photo_element(0),
            32,
            GENERAL_SUPPORT_HEIGHT_ONRIDE_PHOTO,
            TunnelGroup::Square,
        );
        assert_eq!(session.records()[0].offset.z, 35);
        assert_eq!(session.right_tunnels().len(), 1);
        assert!(session.left_tunnels().is_empty());
        assert!(PaintSegment::ALL.iter().all(|&s| session.segment_support(s).is_blocked()));
        assert_eq!(session.general_support().height, 80);
    }
}
