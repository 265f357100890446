//! Track element entry point
//!
//! Resolves the ride, sets up the session colours for the element and hands
//! it to the paint function of the ride type's track style.

use funfair_paint::{
    BoundBoxXYZ, FilterPaletteId, ImageId, InteractionItem, PaintSession, ViewFlags,
    CONSTRUCTION_MARKER, HIGHLIGHT_MARKER,
};
use funfair_world::{Colour, CoordsXYZ, Direction, Park, Ride, TrackElement, TrackStyle};

use crate::dispatch::get_track_paint_function;
use crate::sprites::SPR_HEIGHT_MARKER_BASE;
use crate::util::is_element_selected;

/// Lowest height a marker sprite exists for, in land steps
const HEIGHT_MARKER_MIN_STEP: i32 = 7;

/// Paint one track element of the current tile
///
/// `direction` is already relative to the view rotation.
pub fn paint_track(
    session: &mut PaintSession,
    park: &Park,
    direction: Direction,
    height: i32,
    element: &TrackElement,
) {
    let Some(ride) = park.get_ride(element.ride) else {
        log::error!(
            "Track element {} at {} references missing ride {}",
            element.track_type.name(),
            session.map_position,
            element.ride
        );
        return;
    };

    if session.track_design_save_ride.is_some_and(|id| id != ride.id) {
        return;
    }
    if session.view_flags.contains(ViewFlags::HIGHLIGHT_PATH_ISSUES) {
        return;
    }

    session.interaction_type = InteractionItem::Ride;
    paint_height_marker(session, ride, height, element);
    set_track_colours(session, ride, element);

    let drawer = ride.ride_type.descriptor().track_drawer;
    let entry = drawer.entry(element.is_inverted(), element.is_covered());
    if entry.track_style == TrackStyle::Null {
        return;
    }

    log::trace!(
        "Paint {} seq {} dir {} at {} with {}",
        element.track_type.name(),
        element.sequence,
        direction,
        height,
        entry.track_style.name()
    );
    let paint_function = get_track_paint_function(entry.track_style, element.track_type);
    paint_function(session, ride, element.sequence, direction, height, element, entry.support_type);
}

fn paint_height_marker(
    session: &mut PaintSession,
    ride: &Ride,
    height: i32,
    element: &TrackElement,
) {
    if !session.view_flags.contains(ViewFlags::TRACK_HEIGHTS) || session.is_track_piece_preview {
        return;
    }
    let markers = element.track_type.descriptor().height_marker_positions;
    if markers & (1 << (element.sequence & 0xF)) == 0 {
        return;
    }

    let step = ((height + 8) / 16 - HEIGHT_MARKER_MIN_STEP).max(0) as u32;
    let index = SPR_HEIGHT_MARKER_BASE + session.height_unit.marker_offset() + step;
    let z = height + ride.ride_type.descriptor().heights.vehicle_z_offset + 3;
    session.add_image_as_parent(
        ImageId::with_colour(index, Colour::LIGHT_BLUE),
        CoordsXYZ::new(16, 16, z),
        BoundBoxXYZ::new(CoordsXYZ::new(1000, 1000, 2047), CoordsXYZ::new(1, 1, 0)),
    );
}

/// Ghost beats highlight beats the ride's own scheme
fn set_track_colours(session: &mut PaintSession, ride: &Ride, element: &TrackElement) {
    let scheme = ride.track_colour(element.colour_scheme);
    session.track_colours = ImageId::with_colours(0, scheme.main, scheme.additional);
    session.support_colours = ImageId::with_colour(0, scheme.supports);

    if element.is_highlighted() || is_element_selected(session, element) {
        session.track_colours = HIGHLIGHT_MARKER;
        session.support_colours = HIGHLIGHT_MARKER;
    }
    if element.is_ghost() {
        session.interaction_type = InteractionItem::None;
        session.track_colours = CONSTRUCTION_MARKER;
        session.support_colours = CONSTRUCTION_MARKER;
    }
    if session.view_flags.contains(ViewFlags::SEE_THROUGH_RIDES) {
        session.track_colours =
            session.track_colours.with_transparency(FilterPaletteId::SEE_THROUGH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfair_paint::{ElementKey, PaintConfig};
    use funfair_world::{CoordsXY, RideId, RideType, TrackColour, TrackElemType};

    fn park() -> Park {
        let mut park = Park::new();
        let mut ride = Ride::new(RideId(1), RideType::CompactInvertedCoaster);
        ride.track_colours[0] = TrackColour::new(Colour::BRIGHT_RED, Colour::YELLOW, Colour::GREY);
        park.add_ride(ride).unwrap();
        park.add_ride(Ride::new(RideId(2), RideType::GhostTrain)).unwrap();
        park
    }

    fn surface_session(config: &PaintConfig) -> PaintSession {
        let mut session = PaintSession::new(0, config);
        session.begin_tile(CoordsXY::new(0, 0));
        session.pass_surface(0, 0);
        session
    }

    fn flat(ride: u16, ride_type: RideType) -> TrackElement {
        TrackElement::new(TrackElemType::Flat, RideId(ride), ride_type).with_base_height(48)
    }

    #[test]
    fn test_missing_ride_paints_nothing() {
        let mut session = surface_session(&PaintConfig::default());
        paint_track(&mut session, &park(), 0, 48, &flat(9, RideType::GhostTrain));
        assert!(session.records().is_empty());
        assert_eq!(session.general_support().height, 0);
    }

    #[test]
    fn test_ride_colours() {
        let mut session = surface_session(&PaintConfig::default());
        paint_track(&mut session, &park(), 0, 48, &flat(1, RideType::CompactInvertedCoaster));
        let track = session.records()[0].image;
        assert_eq!(track.index(), 26555);
        assert_eq!(track.primary(), Some(Colour::BRIGHT_RED));
        assert_eq!(track.secondary(), Some(Colour::YELLOW));
        assert_eq!(session.support_colours.primary(), Some(Colour::GREY));
        assert_eq!(session.interaction_type, InteractionItem::Ride);
    }

    #[test]
    fn test_colour_precedence() {
        let park = park();

        let mut element = flat(1, RideType::CompactInvertedCoaster);
        element.highlighted = true;
        let mut session = surface_session(&PaintConfig::default());
        paint_track(&mut session, &park, 0, 48, &element);
        assert_eq!(session.track_colours, HIGHLIGHT_MARKER);

        element.ghost = true;
        let mut session = surface_session(&PaintConfig::default());
        paint_track(&mut session, &park, 0, 48, &element);
        assert_eq!(session.track_colours, CONSTRUCTION_MARKER);
        assert_eq!(session.support_colours, CONSTRUCTION_MARKER);
        assert_eq!(session.interaction_type, InteractionItem::None);
    }

    #[test]
    fn test_selected_element_highlighted() {
        let mut session = surface_session(&PaintConfig::default());
        session.selected_element = Some(ElementKey {
            tile: CoordsXY::new(0, 0).to_tile(),
            base_height: 48,
        });
        paint_track(&mut session, &park(), 0, 48, &flat(1, RideType::CompactInvertedCoaster));
        assert_eq!(session.track_colours, HIGHLIGHT_MARKER);
    }

    #[test]
    fn test_see_through_rides() {
        let config = PaintConfig {
            see_through_rides: true,
            ..PaintConfig::default()
        };
        let mut session = surface_session(&config);
        paint_track(&mut session, &park(), 0, 48, &flat(1, RideType::CompactInvertedCoaster));
        assert_eq!(session.track_colours.filter(), Some(FilterPaletteId::SEE_THROUGH));
    }

    #[test]
    fn test_track_design_save_skips_other_rides() {
        let config = PaintConfig {
            track_design_save_ride: Some(RideId(2)),
            ..PaintConfig::default()
        };
        let mut session = surface_session(&config);
        paint_track(&mut session, &park(), 0, 48, &flat(1, RideType::CompactInvertedCoaster));
        assert!(session.records().is_empty());

        paint_track(&mut session, &park(), 0, 48, &flat(2, RideType::GhostTrain));
        assert!(!session.records().is_empty());
    }

    #[test]
    fn test_highlight_path_issues_hides_track() {
        let config = PaintConfig {
            highlight_path_issues: true,
            ..PaintConfig::default()
        };
        let mut session = surface_session(&config);
        paint_track(&mut session, &park(), 0, 48, &flat(1, RideType::CompactInvertedCoaster));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_height_marker() {
        let config = PaintConfig {
            show_track_heights: true,
            ..PaintConfig::default()
        };
        let mut session = surface_session(&config);
        paint_track(&mut session, &park(), 0, 160, &flat(1, RideType::CompactInvertedCoaster));
        let marker = session.records()[0];
        assert_eq!(marker.image.index(), SPR_HEIGHT_MARKER_BASE + 3);
        assert_eq!(marker.image.primary(), Some(Colour::LIGHT_BLUE));
        assert_eq!(marker.offset, CoordsXYZ::new(16, 16, 160 + 29 + 3));
        assert_eq!(marker.bound_box.offset, CoordsXYZ::new(1000, 1000, 2047));
    }

    #[test]
    fn test_height_marker_only_on_marked_sequences() {
        let config = PaintConfig {
            show_track_heights: true,
            ..PaintConfig::default()
        };
        let element = TrackElement::new(
            TrackElemType::LeftQuarterTurn5Tiles,
            RideId(1),
            RideType::CompactInvertedCoaster,
        )
            .with_sequence(2);
        let mut session = surface_session(&config);
        paint_track(&mut session, &park(), 0, 160, &element);
        assert!(session.records().iter().all(|r| {
            r.image.index() < SPR_HEIGHT_MARKER_BASE
                || r.image.index() > SPR_HEIGHT_MARKER_BASE + 768
        }));
    }

    #[test]
    fn test_dispatches_by_ride_type() {
        let mut session = surface_session(&PaintConfig::default());
        paint_track(&mut session, &park(), 1, 48, &flat(2, RideType::GhostTrain));
        let expected = RideType::GhostTrain.descriptor().track_drawer.regular;
        assert_eq!(expected.track_style, TrackStyle::GhostTrain);
        assert!(session.records().iter().any(|r| r.image.index() == 28822));
    }
}
