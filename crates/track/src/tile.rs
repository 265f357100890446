//! Tile traversal
//!
//! Walks a park tile by tile, bottom element first, feeding track elements to
//! the track painter.

use funfair_paint::PaintSession;
use funfair_world::{Park, Tile, TileElement};

use crate::paint_track::paint_track;

/// Paint every element stacked on `tile`
pub fn paint_tile(session: &mut PaintSession, park: &Park, tile: &Tile) {
    session.begin_tile(tile.position().to_coords());

    for element in &tile.elements {
        match element {
            TileElement::Surface(surface) => {
                session.pass_surface(surface.base_height, surface.slope)
            }
            TileElement::Track(track) => {
                let direction = (track.direction + session.current_rotation) & 3;
                paint_track(session, park, direction, track.base_height, track);
            }
        }
    }
}

/// Paint the whole park into `session`
pub fn paint_park(session: &mut PaintSession, park: &Park) {
    session.current_ticks = park.current_ticks;
    let tiles = park.tiles_sorted();
    log::debug!("Painting {} tiles at rotation {}", tiles.len(), session.current_rotation);
    for tile in tiles {
        paint_tile(session, park, tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfair_paint::{PaintConfig, PaintKind, SupportPostKind};
    use funfair_world::{
        MetalSupportType, Ride, RideId, RideType, SurfaceElement, TrackElemType, TrackElement,
    };

    fn scene(with_surface: bool) -> Park {
        let mut park = Park::new();
        park.add_ride(Ride::new(RideId(0), RideType::CompactInvertedCoaster)).unwrap();
        let mut elements = Vec::new();
        if with_surface {
            elements.push(TileElement::Surface(SurfaceElement { base_height: 16, slope: 0 }));
        }
        elements.push(TileElement::Track(
            TrackElement::new(TrackElemType::Flat, RideId(0), RideType::CompactInvertedCoaster)
                .with_direction(1)
                .with_base_height(64),
        ));
        park.set_tile(Tile { x: 2, y: 2, elements });
        park
    }

    #[test]
    fn test_surface_enables_supports() {
        let park = scene(true);
        let mut session = PaintSession::new(0, &PaintConfig::default());
        paint_park(&mut session, &park);
        let posts = session.support_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].kind, SupportPostKind::Metal(MetalSupportType::TubesInverted));
        assert_eq!(posts[0].base, 16);
        assert_eq!(posts[0].top, 64 + 44);
    }

    #[test]
    fn test_no_surface_no_supports() {
        let park = scene(false);
        let mut session = PaintSession::new(0, &PaintConfig::default());
        paint_park(&mut session, &park);
        assert!(session.support_posts().is_empty());
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.records()[0].kind, PaintKind::Parent);
    }

    #[test]
    fn test_view_rotation_turns_elements() {
        let park = scene(false);
        let mut session = PaintSession::new(1, &PaintConfig::default());
        paint_park(&mut session, &park);
        // Direction 1 seen from rotation 1 draws the direction 2 sprite
        assert_eq!(session.records()[0].image.index(), 26555);
        assert_eq!(session.left_tunnels().len(), 1);
    }

    #[test]
    fn test_ticks_copied_to_session() {
        let mut park = scene(false);
        park.current_ticks = 77;
        let mut session = PaintSession::new(0, &PaintConfig::default());
        paint_park(&mut session, &park);
        assert_eq!(session.current_ticks, 77);
    }
}
