//! Straight track, slopes, stations and brakes

use funfair_paint::{
    BoundBoxXYZ, ImageId, ImageIndex, MetalSupportPlace, PaintSession, TunnelSubType,
};
use funfair_world::{Colour, CoordsXYZ, Direction, Ride, SupportType, TrackElement};

use super::{
    block_all, block_straight, paint_centre_support, paint_support, paint_track, track_bound_box,
    GENERAL_SUPPORT_HEIGHT, TUNNEL_GROUP,
};
use crate::sprites::{
    SPR_STATION_BASE_A_NW_SE, SPR_STATION_BASE_A_SW_NE, SPR_STATION_INVERTED_BAR_A_NW_SE,
    SPR_STATION_INVERTED_BAR_A_SW_NE,
};
use crate::util::{
    get_station_colour_scheme, track_paint_util_draw_station_inverted,
    track_paint_util_draw_station_metal_supports_2, track_paint_util_onride_photo_paint_2,
    StationVariant, GENERAL_SUPPORT_HEIGHT_ONRIDE_PHOTO,
};

pub(super) const FLAT: [ImageIndex; 4] = [26555, 26556, 26555, 26556];
pub(super) const FLAT_CHAIN: [ImageIndex; 4] = [26557, 26558, 26557, 26558];
const BRAKES: [ImageIndex; 4] = [26559, 26560, 26559, 26560];
const BLOCK_BRAKES_OPEN: [ImageIndex; 4] = [26561, 26562, 26561, 26562];
const BLOCK_BRAKES_CLOSED: [ImageIndex; 4] = [26563, 26564, 26563, 26564];

const UP_25: [ImageIndex; 4] = [26565, 26566, 26567, 26568];
const UP_25_CHAIN: [ImageIndex; 4] = [26569, 26570, 26571, 26572];
const UP_60: [ImageIndex; 4] = [26573, 26574, 26575, 26576];
const UP_60_CHAIN: [ImageIndex; 4] = [26577, 26578, 26579, 26580];
const FLAT_TO_UP_25: [ImageIndex; 4] = [26581, 26582, 26583, 26584];
const FLAT_TO_UP_25_CHAIN: [ImageIndex; 4] = [26585, 26586, 26587, 26588];
const UP_25_TO_UP_60: [ImageIndex; 4] = [26589, 26590, 26591, 26592];
const UP_25_TO_UP_60_CHAIN: [ImageIndex; 4] = [26593, 26594, 26595, 26596];
const UP_60_TO_UP_25: [ImageIndex; 4] = [26597, 26598, 26599, 26600];
const UP_60_TO_UP_25_CHAIN: [ImageIndex; 4] = [26601, 26602, 26603, 26604];
const UP_25_TO_FLAT: [ImageIndex; 4] = [26605, 26606, 26607, 26608];
const UP_25_TO_FLAT_CHAIN: [ImageIndex; 4] = [26609, 26610, 26611, 26612];

fn chain_or(
    element: &TrackElement,
    chain: &'static [ImageIndex; 4],
    plain: &'static [ImageIndex; 4],
) -> &'static [ImageIndex; 4] {
    if element.has_chain() {
        chain
    } else {
        plain
    }
}

/// Entry faces the viewer on these directions
fn enters_front(direction: Direction) -> bool {
    direction == 0 || direction == 3
}

pub(super) fn compact_inverted_rc_track_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = chain_or(element, &FLAT_CHAIN, &FLAT);
    paint_flat_piece(session, direction, height, sprites[direction as usize], support_type);
}

pub(super) fn compact_inverted_rc_track_station(
    session: &mut PaintSession,
    ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    const STATION: [[ImageIndex; 2]; 4] = [
        [SPR_STATION_BASE_A_SW_NE, SPR_STATION_INVERTED_BAR_A_SW_NE],
        [SPR_STATION_BASE_A_NW_SE, SPR_STATION_INVERTED_BAR_A_NW_SE],
        [SPR_STATION_BASE_A_SW_NE, SPR_STATION_INVERTED_BAR_A_SW_NE],
        [SPR_STATION_BASE_A_NW_SE, SPR_STATION_INVERTED_BAR_A_NW_SE],
    ];
    let [base, bar] = STATION[direction as usize];

    let image = get_station_colour_scheme(session, element).with_index(base);
    session.add_image_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 2, height), CoordsXYZ::new(32, 28, 1)),
    );
    paint_track(
        session,
        direction,
        FLAT_CHAIN[direction as usize],
        height,
        track_bound_box(height, 29),
    );
    let image = session.support_colours.with_index(bar);
    let offset = CoordsXYZ::new(0, 6, height + 29);
    session.add_image_as_child_rotated(direction, image, offset, track_bound_box(height, 29));

    let colours = session.support_colours;
    track_paint_util_draw_station_metal_supports_2(
        session,
        direction,
        height + 44,
        colours,
        support_type.metal(),
        3,
    );
    track_paint_util_draw_station_inverted(
        session,
        ride,
        direction,
        height,
        element,
        StationVariant::Variant1,
    );
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_all(session);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

pub(super) fn compact_inverted_rc_track_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = chain_or(element, &UP_25_CHAIN, &UP_25);
    paint_track(
        session,
        direction,
        sprites[direction as usize],
        height,
        track_bound_box(height, 45),
    );
    paint_centre_support(session, support_type, height + 62);
    if enters_front(direction) {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart);
    } else {
        session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_all(session);
    session.set_general_support_height(height + 72);
}

/// Rail box when the climb faces the viewer, a tall slab behind it otherwise
fn steep_bound_box(
    direction: Direction,
    height: i32,
    front_z: i32,
    side: (i32, i32, i32),
) -> BoundBoxXYZ {
    if enters_front(direction) {
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, height + front_z), CoordsXYZ::new(32, 20, 3))
    } else {
        let (y, width, depth) = side;
        BoundBoxXYZ::new(CoordsXYZ::new(0, y, height + 11), CoordsXYZ::new(32, width, depth))
    }
}

pub(super) fn compact_inverted_rc_track_60_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = chain_or(element, &UP_60_CHAIN, &UP_60);
    let bound_box = steep_bound_box(direction, height, 93, (4, 2, 81));
    paint_track(session, direction, sprites[direction as usize], height, bound_box);
    paint_support(
        session,
        support_type,
        MetalSupportPlace::TopRightSide.rotated(direction),
        height + 60,
    );
    if enters_front(direction) {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart);
    } else {
        session.push_tunnel_rotated(direction, height + 56, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_all(session);
    session.set_general_support_height(height + 120);
}

pub(super) fn compact_inverted_rc_track_flat_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = chain_or(element, &FLAT_TO_UP_25_CHAIN, &FLAT_TO_UP_25);
    paint_flat_to_25_deg_up_piece(
        session,
        direction,
        height,
        sprites[direction as usize],
        support_type,
    );
}

pub(super) fn paint_flat_to_25_deg_up_piece(
    session: &mut PaintSession,
    direction: Direction,
    height: i32,
    sprite: ImageIndex,
    support_type: SupportType,
) {
    paint_track(session, direction, sprite, height, track_bound_box(height, 37));
    paint_centre_support(session, support_type, height + 52);
    if enters_front(direction) {
        session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    } else {
        session.push_tunnel_rotated(direction, height + 8, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_all(session);
    session.set_general_support_height(height + 64);
}

pub(super) fn compact_inverted_rc_track_25_deg_up_to_60_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = chain_or(element, &UP_25_TO_UP_60_CHAIN, &UP_25_TO_UP_60);
    let bound_box = steep_bound_box(direction, height, 61, (10, 10, 49));
    paint_track(session, direction, sprites[direction as usize], height, bound_box);
    paint_support(
        session,
        support_type,
        MetalSupportPlace::TopRightSide.rotated(direction),
        height + 68,
    );
    if enters_front(direction) {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart);
    } else {
        session.push_tunnel_rotated(direction, height + 24, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_all(session);
    session.set_general_support_height(height + 88);
}

pub(super) fn compact_inverted_rc_track_60_deg_up_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = chain_or(element, &UP_60_TO_UP_25_CHAIN, &UP_60_TO_UP_25);
    let bound_box = steep_bound_box(direction, height, 61, (10, 10, 49));
    paint_track(session, direction, sprites[direction as usize], height, bound_box);
    paint_support(
        session,
        support_type,
        MetalSupportPlace::TopRightSide.rotated(direction),
        height + 76,
    );
    if enters_front(direction) {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::SlopeStart);
    } else {
        session.push_tunnel_rotated(direction, height + 24, TUNNEL_GROUP, TunnelSubType::SlopeEnd);
    }
    block_all(session);
    session.set_general_support_height(height + 88);
}

pub(super) fn compact_inverted_rc_track_25_deg_up_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = chain_or(element, &UP_25_TO_FLAT_CHAIN, &UP_25_TO_FLAT);
    paint_25_deg_up_to_flat_piece(
        session,
        direction,
        height,
        sprites[direction as usize],
        support_type,
    );
}

pub(super) fn paint_25_deg_up_to_flat_piece(
    session: &mut PaintSession,
    direction: Direction,
    height: i32,
    sprite: ImageIndex,
    support_type: SupportType,
) {
    paint_track(session, direction, sprite, height, track_bound_box(height, 37));
    paint_centre_support(session, support_type, height + 54);
    if enters_front(direction) {
        session.push_tunnel_rotated(direction, height - 8, TUNNEL_GROUP, TunnelSubType::Flat);
    } else {
        session.push_tunnel_rotated(
            direction,
            height + 8,
            TUNNEL_GROUP,
            TunnelSubType::FlatTo25Deg,
        );
    }
    block_all(session);
    session.set_general_support_height(height + 56);
}

pub(super) fn compact_inverted_rc_track_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_60_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_60_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_flat_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_25_deg_up_to_flat(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_25_deg_down_to_60_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_60_deg_up_to_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_60_deg_down_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_25_deg_up_to_60_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn compact_inverted_rc_track_25_deg_down_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    compact_inverted_rc_track_flat_to_25_deg_up(
        session,
        ride,
        track_sequence,
        (direction + 2) & 3,
        height,
        element,
        support_type,
    );
}

pub(super) fn paint_flat_piece(
    session: &mut PaintSession,
    direction: Direction,
    height: i32,
    sprite: ImageIndex,
    support_type: SupportType,
) {
    paint_track(session, direction, sprite, height, track_bound_box(height, 29));
    paint_centre_support(session, support_type, height + 44);
    session.push_tunnel_rotated(direction, height, TUNNEL_GROUP, TunnelSubType::Flat);
    block_straight(session, direction);
    session.set_general_support_height(height + GENERAL_SUPPORT_HEIGHT);
}

pub(super) fn compact_inverted_rc_track_brakes(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    _element: &TrackElement,
    support_type: SupportType,
) {
    paint_flat_piece(session, direction, height, BRAKES[direction as usize], support_type);
}

pub(super) fn compact_inverted_rc_track_block_brakes(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    let sprites = if element.brake_closed {
        &BLOCK_BRAKES_CLOSED
    } else {
        &BLOCK_BRAKES_OPEN
    };
    paint_flat_piece(session, direction, height, sprites[direction as usize], support_type);
}

pub(super) fn compact_inverted_rc_track_on_ride_photo(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    support_type: SupportType,
) {
    const BASE: [ImageIndex; 4] = [
        SPR_STATION_BASE_A_SW_NE,
        SPR_STATION_BASE_A_NW_SE,
        SPR_STATION_BASE_A_SW_NE,
        SPR_STATION_BASE_A_NW_SE,
    ];

    session.add_image_as_parent_rotated(
        direction,
        ImageId::with_colour(BASE[direction as usize], Colour::BLACK),
        CoordsXYZ::new(0, 0, height),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, height), CoordsXYZ::new(32, 32, 1)),
    );
    let colours = session.support_colours;
    track_paint_util_draw_station_metal_supports_2(
        session,
        direction,
        height + 44,
        colours,
        support_type.metal(),
        6,
    );
    paint_track(session, direction, FLAT[direction as usize], height, track_bound_box(height, 29));
    track_paint_util_onride_photo_paint_2(
        session,
        direction,
        element,
        height,
        GENERAL_SUPPORT_HEIGHT_ONRIDE_PHOTO,
        TUNNEL_GROUP,
    );
}

#[cfg(test)]
mod tests {
    use super::super::tests::{element, paint, paint_element};
    use super::*;
    use funfair_paint::{TunnelEntry, TunnelGroup, CONSTRUCTION_MARKER};
    use funfair_world::TrackElemType;

    #[test]
    fn test_slope_tunnels() {
        let snapshot = paint(TrackElemType::Up25, 0, 0, 48);
        assert_eq!(
            snapshot.left_tunnels,
            vec![TunnelEntry::new(40, TunnelGroup::Square, TunnelSubType::SlopeStart)]
        );
        assert_eq!(snapshot.general_support.height, 120);

        let snapshot = paint(TrackElemType::Up25, 0, 1, 48);
        assert_eq!(
            snapshot.right_tunnels,
            vec![TunnelEntry::new(56, TunnelGroup::Square, TunnelSubType::SlopeEnd)]
        );

        let snapshot = paint(TrackElemType::Up25ToFlat, 0, 2, 48);
        assert_eq!(
            snapshot.left_tunnels,
            vec![TunnelEntry::new(56, TunnelGroup::Square, TunnelSubType::FlatTo25Deg)]
        );
        assert_eq!(snapshot.general_support.height, 104);
    }

    #[test]
    fn test_steep_box_follows_direction() {
        let snapshot = paint(TrackElemType::Up60, 0, 0, 16);
        assert_eq!(snapshot.records[0].bound_box.offset, CoordsXYZ::new(0, 6, 109));
        let snapshot = paint(TrackElemType::Up60, 0, 2, 16);
        assert_eq!(snapshot.records[0].bound_box.offset, CoordsXYZ::new(0, 4, 27));
        assert_eq!(snapshot.records[0].bound_box.length, CoordsXYZ::new(32, 2, 81));
        assert_eq!(snapshot.general_support.height, 136);
    }

    #[test]
    fn test_block_brakes_state() {
        let open = paint(TrackElemType::BlockBrakes, 0, 1, 32);
        assert_eq!(open.records[0].image.index(), BLOCK_BRAKES_OPEN[1]);

        let mut closed = element(TrackElemType::BlockBrakes, 0);
        closed.brake_closed = true;
        let snapshot = paint_element(&closed, 0, 1, 32);
        assert_eq!(snapshot.records[0].image.index(), BLOCK_BRAKES_CLOSED[1]);
        assert_eq!(snapshot.general_support, open.general_support);
    }

    #[test]
    fn test_station_layers() {
        let mut station = element(TrackElemType::MiddleStation, 0);
        station.ghost = true;
        let snapshot = paint_element(&station, 0, 0, 16);
        assert_eq!(
            snapshot.records[0].image,
            CONSTRUCTION_MARKER.with_index(SPR_STATION_BASE_A_SW_NE)
        );
        assert_eq!(snapshot.records[1].image.index(), FLAT_CHAIN[0]);
        assert_eq!(snapshot.records[1].offset.z, 45);
        assert_eq!(snapshot.records[2].image.index(), SPR_STATION_INVERTED_BAR_A_SW_NE);
        assert_eq!(
            snapshot.left_tunnels,
            vec![TunnelEntry::new(16, TunnelGroup::Square, TunnelSubType::Flat)]
        );
        assert!(snapshot.support_segments.iter().all(|s| s.is_blocked()));
        assert_eq!(snapshot.general_support.height, 64);
    }

    #[test]
    fn test_on_ride_photo() {
        let snapshot = paint(TrackElemType::OnRidePhoto, 0, 0, 32);
        assert_eq!(
            snapshot.records[0].image,
            ImageId::with_colour(SPR_STATION_BASE_A_SW_NE, Colour::BLACK)
        );
        assert!(snapshot.records.iter().any(|r| r.image.index() == FLAT[0]));
        assert!(snapshot.support_segments.iter().all(|s| s.is_blocked()));
        assert_eq!(
            snapshot.general_support.height as i32,
            32 + GENERAL_SUPPORT_HEIGHT_ONRIDE_PHOTO
        );
    }
}
