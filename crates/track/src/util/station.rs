//! Station platforms, fences and covers

use funfair_paint::{
    metal_a_supports_paint_setup, BoundBoxXYZ, FilterPaletteId, ImageId, ImageIndex,
    MetalSupportPlace, PaintSession, CONSTRUCTION_MARKER, HIGHLIGHT_MARKER,
};
use funfair_world::{
    CoordsXY, CoordsXYZ, Direction, MetalSupportType, Ride, StationObject, TileCoordsXYZD,
    TrackElemType, TrackElement, COORDS_DIRECTION_DELTA,
};

use super::is_element_selected;
use crate::sprites::*;

/// Tile edge, relative to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Ne = 0,
    Se = 1,
    Sw = 2,
    Nw = 3,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Ne, Edge::Se, Edge::Sw, Edge::Nw];
}

/// Roof height family of a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StationVariant {
    #[default]
    Basic = 0,
    Variant1 = 1,
    Tall = 2,
}

impl StationVariant {
    /// Height of the cover above the platform
    const fn cover_height(self) -> i32 {
        match self {
            StationVariant::Basic => 22,
            StationVariant::Variant1 => 30,
            StationVariant::Tall => 46,
        }
    }
}

/// Whether a fence goes on `edge` of a station tile
///
/// Edges facing the station's entrance or exit stay open so guests can walk
/// through.
pub fn track_paint_util_has_fence(
    edge: Edge,
    position: CoordsXY,
    element: &TrackElement,
    ride: &Ride,
    rotation: Direction,
) -> bool {
    if ride.station_object().is_some_and(|object| object.flags.no_platforms) {
        return false;
    }

    let neighbour =
        (position + COORDS_DIRECTION_DELTA[((edge as u8 + rotation) & 3) as usize]).to_tile();
    let Some(station) = ride.station(element.station_index) else {
        return true;
    };
    let is_opening =
        |location: Option<TileCoordsXYZD>| location.is_some_and(|l| l.xy() == neighbour);
    !is_opening(station.entrance) && !is_opening(station.exit)
}

/// Colours for station art: construction ghost, then highlight, then the track colours
pub fn get_station_colour_scheme(session: &PaintSession, element: &TrackElement) -> ImageId {
    if element.is_ghost() {
        CONSTRUCTION_MARKER
    } else if element.is_highlighted() || is_element_selected(session, element) {
        HIGHLIGHT_MARKER
    } else {
        session.track_colours
    }
}

/// Vertical placement of the station parts
#[derive(Debug, Clone, Copy)]
struct StationLayout {
    platform_z: i32,
    platform_bb_z: i32,
    fence_z: i32,
    fence_bb_z: i32,
    cover_height: i32,
    variant: StationVariant,
}

/// Standard station with platforms 9 and fences 11 units above the track
pub fn track_paint_util_draw_station(
    session: &mut PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) -> bool {
    track_paint_util_draw_station_2(session, ride, direction, height, element, 9, 11)
}

pub fn track_paint_util_draw_station_2(
    session: &mut PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    fence_offset_a: i32,
    fence_offset_b: i32,
) -> bool {
    let layout = StationLayout {
        platform_z: height + fence_offset_a,
        platform_bb_z: height,
        fence_z: height + fence_offset_b,
        fence_bb_z: height + 2,
        cover_height: height,
        variant: StationVariant::Basic,
    };
    draw_station(session, ride, direction, element, layout)
}

/// Station whose covers sit at `cover_height` instead of the track height
pub fn track_paint_util_draw_station_3(
    session: &mut PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
    cover_height: i32,
    element: &TrackElement,
) -> bool {
    let layout = StationLayout {
        platform_z: height,
        platform_bb_z: height,
        fence_z: height + 2,
        fence_bb_z: height + 2,
        cover_height,
        variant: StationVariant::Basic,
    };
    draw_station(session, ride, direction, element, layout)
}

/// Station under hanging track, platforms raised off the floor
pub fn track_paint_util_draw_station_inverted(
    session: &mut PaintSession,
    ride: &Ride,
    direction: Direction,
    height: i32,
    element: &TrackElement,
    variant: StationVariant,
) -> bool {
    let layout = StationLayout {
        platform_z: height + 6,
        platform_bb_z: height + 6,
        fence_z: height + 8,
        fence_bb_z: height + 8,
        cover_height: height,
        variant,
    };
    draw_station(session, ride, direction, element, layout)
}

fn draw_station(
    session: &mut PaintSession,
    ride: &Ride,
    direction: Direction,
    element: &TrackElement,
    layout: StationLayout,
) -> bool {
    let station_object = ride.station_object();
    if station_object.is_some_and(|object| object.flags.no_platforms) {
        return false;
    }

    let position = session.map_position;
    let rotation = session.current_rotation;
    let colours = get_station_colour_scheme(session, element);
    let track_type = element.track_type;
    let green = element.has_green_light();
    let axis_odd = direction & 1 != 0;

    // The signal end of the piece faces direction 0 (or 3 on the other axis)
    let light_direction = if axis_odd { 3 } else { 0 };
    let is_light_end = track_type == TrackElemType::EndStation && direction == light_direction;
    let is_begin_end =
        track_type == TrackElemType::BeginStation && direction == (light_direction + 2) & 3;
    let angled_end = (track_type == TrackElemType::BeginStation && direction == light_direction)
        || (track_type == TrackElemType::EndStation && direction == (light_direction + 2) & 3);

    let (back_edge, front_edge) =
        if axis_odd { (Edge::Ne, Edge::Sw) } else { (Edge::Nw, Edge::Se) };

    // Back platform carries the back fence in its art
    let has_fence = track_paint_util_has_fence(back_edge, position, element, ride, rotation);
    let image = platform_image(axis_odd, has_fence, is_light_end, green, is_begin_end);
    let size = if axis_odd { CoordsXYZ::new(8, 32, 1) } else { CoordsXYZ::new(32, 8, 1) };
    let offset = CoordsXY::new(0, 0);
    session.add_image_as_parent(
        colours.with_index(image),
        offset.with_z(layout.platform_z),
        BoundBoxXYZ::new(offset.with_z(layout.platform_bb_z), size),
    );
    track_paint_util_draw_station_covers_2(
        session,
        back_edge,
        has_fence,
        station_object,
        layout.cover_height,
        layout.variant,
    );

    let image = platform_image(axis_odd, false, is_light_end, green, is_begin_end);
    let offset = if axis_odd { CoordsXY::new(24, 0) } else { CoordsXY::new(0, 24) };
    session.add_image_as_parent(
        colours.with_index(image),
        offset.with_z(layout.platform_z),
        BoundBoxXYZ::new(offset.with_z(layout.platform_bb_z), size),
    );

    let has_fence = track_paint_util_has_fence(front_edge, position, element, ride, rotation);
    if has_fence {
        let image = match (angled_end, axis_odd) {
            (true, false) => SPR_STATION_BEGIN_ANGLE_FENCE_SW_NE,
            (true, true) => SPR_STATION_BEGIN_ANGLE_FENCE_NW_SE,
            (false, false) => SPR_STATION_FENCE_SW_NE,
            (false, true) => SPR_STATION_FENCE_NW_SE,
        };
        let (offset, size) = if axis_odd {
            (CoordsXY::new(31, 0), CoordsXYZ::new(1, 32, 7))
        } else {
            (CoordsXY::new(0, 31), CoordsXYZ::new(32, 1, 7))
        };
        session.add_image_as_parent(
            colours.with_index(image),
            offset.with_z(layout.fence_z),
            BoundBoxXYZ::new(offset.with_z(layout.fence_bb_z), size),
        );
    } else if angled_end || is_light_end || is_begin_end {
        // Open edge at a station end still gets a short fence across the end
        let near = angled_end;
        let (image, offset, size) = if axis_odd {
            let y = if near { 31 } else { 1 };
            (SPR_STATION_FENCE_SMALL_SW_NE, CoordsXY::new(23, y), CoordsXYZ::new(8, 1, 7))
        } else {
            let x = if near { 31 } else { 1 };
            (SPR_STATION_FENCE_SMALL_NW_SE, CoordsXY::new(x, 23), CoordsXYZ::new(1, 8, 7))
        };
        session.add_image_as_parent(
            colours.with_index(image),
            offset.with_z(layout.fence_z),
            BoundBoxXYZ::new(offset.with_z(layout.fence_bb_z), size),
        );
    }
    track_paint_util_draw_station_covers_2(
        session,
        front_edge,
        has_fence,
        station_object,
        layout.cover_height,
        layout.variant,
    );

    true
}

fn platform_image(
    axis_odd: bool,
    fenced: bool,
    light_end: bool,
    green: bool,
    begin_end: bool,
) -> ImageIndex {
    let (sw_ne, nw_se) = match (light_end, begin_end, fenced, green) {
        (true, _, true, true) => (
            SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_SW_NE,
            SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_NW_SE,
        ),
        (true, _, true, false) => (
            SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_SW_NE,
            SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_NW_SE,
        ),
        (true, _, false, true) => (
            SPR_STATION_PLATFORM_END_GREEN_LIGHT_SW_NE,
            SPR_STATION_PLATFORM_END_GREEN_LIGHT_NW_SE,
        ),
        (true, _, false, false) => (
            SPR_STATION_PLATFORM_END_RED_LIGHT_SW_NE,
            SPR_STATION_PLATFORM_END_RED_LIGHT_NW_SE,
        ),
        (false, true, false, _) => {
            (SPR_STATION_PLATFORM_BEGIN_SW_NE, SPR_STATION_PLATFORM_BEGIN_NW_SE)
        }
        (false, _, true, _) => {
            (SPR_STATION_PLATFORM_FENCED_SW_NE, SPR_STATION_PLATFORM_FENCED_NW_SE)
        }
        (false, _, false, _) => (SPR_STATION_PLATFORM_SW_NE, SPR_STATION_PLATFORM_NW_SE),
    };
    if axis_odd {
        nw_se
    } else {
        sw_ne
    }
}

pub fn track_paint_util_draw_station_covers(
    session: &mut PaintSession,
    edge: Edge,
    has_fence: bool,
    station_object: Option<&StationObject>,
    height: i32,
) -> bool {
    track_paint_util_draw_station_covers_2(
        session,
        edge,
        has_fence,
        station_object,
        height,
        StationVariant::Basic,
    )
}

/// Roof piece over one station edge
///
/// Draws nothing without a shelter image, or when the tile has no ground
/// under it and is not a construction preview.
pub fn track_paint_util_draw_station_covers_2(
    session: &mut PaintSession,
    edge: Edge,
    has_fence: bool,
    station_object: Option<&StationObject>,
    height: i32,
    variant: StationVariant,
) -> bool {
    let Some(object) = station_object else {
        return false;
    };
    let Some(base_image) = object.shelter_image_id else {
        return false;
    };
    if !session.passed_surface && !session.is_track_piece_preview {
        return false;
    }

    let cover_height = variant.cover_height();
    let (mut image_offset, bound_box) = match edge {
        Edge::Ne => (
            if has_fence {
                SPR_STATION_COVER_OFFSET_SE_NW_BACK_1
            } else {
                SPR_STATION_COVER_OFFSET_SE_NW_BACK_0
            },
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, height + 1), CoordsXYZ::new(1, 30, cover_height)),
        ),
        Edge::Se => (
            SPR_STATION_COVER_OFFSET_NE_SW_FRONT,
            BoundBoxXYZ::new(
                CoordsXYZ::new(0, 0, height + 1 + cover_height),
                CoordsXYZ::new(32, 32, 0),
            ),
        ),
        Edge::Sw => (
            SPR_STATION_COVER_OFFSET_SE_NW_FRONT,
            BoundBoxXYZ::new(
                CoordsXYZ::new(0, 0, height + 1 + cover_height),
                CoordsXYZ::new(32, 32, 0),
            ),
        ),
        Edge::Nw => (
            if has_fence {
                SPR_STATION_COVER_OFFSET_NE_SW_BACK_1
            } else {
                SPR_STATION_COVER_OFFSET_NE_SW_BACK_0
            },
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, height + 1), CoordsXYZ::new(30, 1, cover_height)),
        ),
    };
    if variant == StationVariant::Tall {
        image_offset += SPR_STATION_COVER_OFFSET_TALL;
    }

    let image = session.track_colours.with_index(base_image + image_offset);
    session.add_image_as_parent(image, CoordsXYZ::new(0, 0, height), bound_box);

    if object.flags.is_transparent {
        if let Some(primary) = session.track_colours.primary() {
            let glass = ImageId::new(base_image + image_offset + SPR_STATION_COVER_OFFSET_GLASS)
                .with_transparency(FilterPaletteId::glass(primary));
            session.attach_to_previous(glass, 0, 0);
        }
    }
    true
}

/// Boxed posts on both sides of a station piece
pub fn track_paint_util_draw_station_metal_supports(
    session: &mut PaintSession,
    direction: Direction,
    height: i32,
    colours: ImageId,
) {
    track_paint_util_draw_station_metal_supports_2(
        session,
        direction,
        height,
        colours,
        MetalSupportType::Boxed,
        0,
    );
}

pub fn track_paint_util_draw_station_metal_supports_2(
    session: &mut PaintSession,
    direction: Direction,
    height: i32,
    colours: ImageId,
    support_type: MetalSupportType,
    special: i32,
) {
    let places = if direction & 1 != 0 {
        [MetalSupportPlace::TopRightSide, MetalSupportPlace::BottomLeftSide]
    } else {
        [MetalSupportPlace::TopLeftSide, MetalSupportPlace::BottomRightSide]
    };
    for place in places {
        metal_a_supports_paint_setup(session, support_type, place, special, height, colours);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfair_paint::{ElementKey, PaintConfig, PaintKind};
    use funfair_world::{
        Colour, RideId, RideType, Station, StationIndex, StationObjectFlags, TileCoordsXY,
    };

    fn station_ride(entrance: Option<TileCoordsXYZD>) -> Ride {
        let mut ride = Ride::new(RideId(0), RideType::GhostTrain);
        ride.stations.push(Station {
            start: Some(CoordsXYZ::new(320, 320, 16)),
            height: 2,
            entrance,
            exit: None,
        });
        ride
    }

    fn station_element(track_type: TrackElemType) -> TrackElement {
        TrackElement::new(track_type, RideId(0), RideType::GhostTrain)
            .with_station_index(StationIndex(0))
    }

    fn covered_object(is_transparent: bool) -> StationObject {
        StationObject {
            identifier: "rct2.station.canvas_tent".to_string(),
            base_image_id: Some(23000),
            shelter_image_id: Some(23100),
            flags: StationObjectFlags {
                is_transparent,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_has_fence_table() {
        // Tile (10, 10) with the entrance on the tile to its north-west, (10, 9)
        let position = CoordsXY::new(320, 320);
        let ride = station_ride(Some(TileCoordsXYZD::new(10, 9, 2, 3)));
        let element = station_element(TrackElemType::MiddleStation);

        // expected[rotation][edge]: the open edge turns with the view
        let expected = [
            [true, true, true, false],
            [true, true, false, true],
            [true, false, true, true],
            [false, true, true, true],
        ];
        for rotation in 0..4u8 {
            for edge in Edge::ALL {
                assert_eq!(
                    track_paint_util_has_fence(edge, position, &element, &ride, rotation),
                    expected[rotation as usize][edge as usize],
                    "rotation {rotation} edge {edge:?}"
                );
            }
        }
    }

    #[test]
    fn test_has_fence_exit_and_no_platforms() {
        let position = CoordsXY::new(320, 320);
        let mut ride = station_ride(None);
        ride.stations[0].exit = Some(TileCoordsXYZD::new(9, 10, 2, 0));
        let element = station_element(TrackElemType::MiddleStation);
        assert!(!track_paint_util_has_fence(Edge::Ne, position, &element, &ride, 0));
        assert!(track_paint_util_has_fence(Edge::Sw, position, &element, &ride, 0));

        ride.station_object = Some(StationObject {
            flags: StationObjectFlags {
                no_platforms: true,
                ..Default::default()
            },
            ..covered_object(false)
        });
        assert!(!track_paint_util_has_fence(Edge::Sw, position, &element, &ride, 0));
    }

    #[test]
    fn test_station_colour_precedence() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.track_colours = ImageId::with_colour(0, Colour::TEAL);
        let mut element = station_element(TrackElemType::MiddleStation);
        assert_eq!(get_station_colour_scheme(&session, &element), session.track_colours);

        session.selected_element = Some(ElementKey {
            tile: TileCoordsXY::new(0, 0),
            base_height: element.base_height,
        });
        assert_eq!(get_station_colour_scheme(&session, &element), HIGHLIGHT_MARKER);

        element.ghost = true;
        assert_eq!(get_station_colour_scheme(&session, &element), CONSTRUCTION_MARKER);
    }

    #[test]
    fn test_draw_station_platforms_and_fence() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.begin_tile(CoordsXY::new(320, 320));
        let ride = station_ride(None);
        let element = station_element(TrackElemType::MiddleStation);
        assert!(track_paint_util_draw_station(&mut session, &ride, 0, 16, &element));

        let images: Vec<_> = session.records().iter().map(|r| r.image.index()).collect();
        assert_eq!(
            images,
            vec![
                SPR_STATION_PLATFORM_FENCED_SW_NE,
                SPR_STATION_PLATFORM_SW_NE,
                SPR_STATION_FENCE_SW_NE
            ]
        );
        let records = session.records();
        assert_eq!(records[0].offset.z, 25);
        assert_eq!(records[1].bound_box.offset, CoordsXYZ::new(0, 24, 16));
        assert_eq!(records[2].offset, CoordsXYZ::new(0, 31, 27));
        assert_eq!(records[2].bound_box.length, CoordsXYZ::new(32, 1, 7));
    }

    #[test]
    fn test_end_station_signal() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        let ride = station_ride(None);
        let mut element = station_element(TrackElemType::EndStation);
        element.green_light = true;
        track_paint_util_draw_station(&mut session, &ride, 0, 0, &element);
        assert_eq!(
            session.records()[0].image.index(),
            SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_SW_NE
        );
        assert_eq!(session.records()[1].image.index(), SPR_STATION_PLATFORM_END_GREEN_LIGHT_SW_NE);

        let mut session = PaintSession::new(0, &PaintConfig::default());
        element.green_light = false;
        track_paint_util_draw_station(&mut session, &ride, 3, 0, &element);
        assert_eq!(session.records()[1].image.index(), SPR_STATION_PLATFORM_END_RED_LIGHT_NW_SE);
    }

    #[test]
    fn test_open_edge_gets_no_fence() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.begin_tile(CoordsXY::new(320, 320));
        // Entrance to the south-east of (10, 10)
        let ride = station_ride(Some(TileCoordsXYZD::new(10, 11, 2, 1)));
        let element = station_element(TrackElemType::MiddleStation);
        track_paint_util_draw_station(&mut session, &ride, 0, 0, &element);
        assert_eq!(session.records().len(), 2);
    }

    #[test]
    fn test_no_platforms_draws_nothing() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        let mut ride = station_ride(None);
        ride.station_object = Some(StationObject {
            flags: StationObjectFlags {
                no_platforms: true,
                ..Default::default()
            },
            ..covered_object(false)
        });
        let element = station_element(TrackElemType::MiddleStation);
        assert!(!track_paint_util_draw_station(&mut session, &ride, 0, 0, &element));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_covers_need_surface() {
        let object = covered_object(false);
        let mut session = PaintSession::new(0, &PaintConfig::default());
        assert!(!track_paint_util_draw_station_covers(
            &mut session,
            Edge::Nw,
            false,
            Some(&object),
            0
        ));
        assert!(!track_paint_util_draw_station_covers(&mut session, Edge::Nw, false, None, 0));

        session.pass_surface(0, 0);
        assert!(track_paint_util_draw_station_covers(
            &mut session,
            Edge::Nw,
            true,
            Some(&object),
            16
        ));
        let record = session.records()[0];
        assert_eq!(record.image.index(), 23100 + SPR_STATION_COVER_OFFSET_NE_SW_BACK_1);
        assert_eq!(
            record.bound_box,
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 17), CoordsXYZ::new(30, 1, 22))
        );
    }

    #[test]
    fn test_covers_preview_tall_and_glass() {
        let object = covered_object(true);
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.is_track_piece_preview = true;
        session.track_colours = ImageId::with_colour(0, Colour::LIGHT_BLUE);
        assert!(track_paint_util_draw_station_covers_2(
            &mut session,
            Edge::Se,
            false,
            Some(&object),
            0,
            StationVariant::Tall,
        ));

        let records = session.records();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].image.index(),
            23100 + SPR_STATION_COVER_OFFSET_NE_SW_FRONT + SPR_STATION_COVER_OFFSET_TALL
        );
        assert_eq!(records[0].bound_box.offset.z, 47);
        assert_eq!(records[1].kind, PaintKind::Attached);
        assert_eq!(records[1].image.filter(), Some(FilterPaletteId::glass(Colour::LIGHT_BLUE)));
    }

    #[test]
    fn test_station_metal_supports_sides() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.pass_surface(0, 0);
        track_paint_util_draw_station_metal_supports(&mut session, 1, 32, ImageId::new(0));
        let segments: Vec<_> = session.support_posts().iter().map(|p| p.segment).collect();
        assert_eq!(
            segments,
            vec![
                MetalSupportPlace::TopRightSide.segment(),
                MetalSupportPlace::BottomLeftSide.segment()
            ]
        );
    }
}
