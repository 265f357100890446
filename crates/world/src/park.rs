//! Park state read by the renderer
//!
//! The park owns the ride registry, the tile elements and the game tick counter.
//! Painting only ever borrows it immutably.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::coords::{direction_valid, TileCoordsXY};
use crate::error::{WorldError, WorldResult};
use crate::ride::{Ride, RideId};
use crate::track_element::TrackElement;

/// Ground surface under a tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceElement {
    /// Base height in world units
    pub base_height: i32,
    /// Corner-raise bits, zero for flat land
    #[serde(default)]
    pub slope: u8,
}

/// An element stacked on a map tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TileElement {
    Surface(SurfaceElement),
    Track(TrackElement),
}

/// All elements on one tile, bottom to top
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub elements: Vec<TileElement>,
}

impl Tile {
    pub fn position(&self) -> TileCoordsXY {
        TileCoordsXY::new(self.x, self.y)
    }

    pub fn surface(&self) -> Option<&SurfaceElement> {
        self.elements.iter().find_map(|e| match e {
            TileElement::Surface(s) => Some(s),
            _ => None,
        })
    }

    pub fn track_elements(&self) -> impl Iterator<Item = &TrackElement> {
        self.elements.iter().filter_map(|e| match e {
            TileElement::Track(t) => Some(t),
            _ => None,
        })
    }
}

/// On-disk scene layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct SceneFile {
    #[serde(default)]
    ticks: u32,
    #[serde(default)]
    rides: Vec<Ride>,
    #[serde(default)]
    tiles: Vec<Tile>,
}

/// Rides, tiles and the simulation clock
#[derive(Debug, Default)]
pub struct Park {
    rides: FxHashMap<RideId, Ride>,
    tiles: FxHashMap<TileCoordsXY, Tile>,
    /// Game ticks elapsed, drives track animations
    pub current_ticks: u32,
}

impl Park {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON scene
    pub fn from_json(json: &str) -> WorldResult<Self> {
        let scene: SceneFile = serde_json::from_str(json)?;
        let mut park = Park::new();
        park.current_ticks = scene.ticks;

        for ride in scene.rides {
            park.add_ride(ride)?;
        }
        for tile in scene.tiles {
            validate_tile(&tile)?;
            park.tiles.insert(tile.position(), tile);
        }

        log::debug!("Loaded scene with {} rides and {} tiles", park.rides.len(), park.tiles.len());
        Ok(park)
    }

    /// Read and parse a JSON scene file
    pub fn load(path: &Path) -> WorldResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Register a ride
    pub fn add_ride(&mut self, ride: Ride) -> WorldResult<()> {
        if self.rides.contains_key(&ride.id) {
            return Err(WorldError::DuplicateRide(ride.id));
        }
        self.rides.insert(ride.id, ride);
        Ok(())
    }

    /// Get a ride by id
    pub fn get_ride(&self, id: RideId) -> Option<&Ride> {
        self.rides.get(&id)
    }

    pub fn rides(&self) -> impl Iterator<Item = &Ride> {
        self.rides.values()
    }

    /// Place a tile, replacing whatever was there
    pub fn set_tile(&mut self, tile: Tile) {
        self.tiles.insert(tile.position(), tile);
    }

    pub fn tile(&self, pos: TileCoordsXY) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    /// Tiles sorted by position, for deterministic traversal
    pub fn tiles_sorted(&self) -> Vec<&Tile> {
        let mut tiles: Vec<&Tile> = self.tiles.values().collect();
        tiles.sort_by_key(|t| (t.y, t.x));
        tiles
    }
}

fn validate_tile(tile: &Tile) -> WorldResult<()> {
    for track in tile.track_elements() {
        if !direction_valid(track.direction) {
            return Err(WorldError::InvalidDirection {
                x: tile.x,
                y: tile.y,
                direction: track.direction,
            });
        }
        if track.sequence >= track.track_type.sequence_count() {
            return Err(WorldError::InvalidSequence {
                x: tile.x,
                y: tile.y,
                track_type: track.track_type,
                sequence: track.sequence,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ride_type::RideType;
    use crate::track_elem_type::TrackElemType;

    const SCENE: &str = r#"{
        "ticks": 42,
        "rides": [{ "id": 0, "type": "CompactInvertedCoaster" }],
        "tiles": [
            { "x": 2, "y": 3, "elements": [
                { "kind": "surface", "base_height": 16 },
                {
                    "kind": "track",
                    "track_type": "Flat",
                    "ride": 0,
                    "ride_type": "CompactInvertedCoaster",
                    "base_height": 48
                }
            ] }
        ]
    }"#;

    #[test]
    fn test_load_scene() {
        let park = Park::from_json(SCENE).unwrap();
        assert_eq!(park.current_ticks, 42);
        assert!(park.get_ride(RideId::new(0)).is_some());
        assert!(park.get_ride(RideId::new(1)).is_none());

        let tile = park.tile(TileCoordsXY::new(2, 3)).unwrap();
        assert_eq!(tile.surface().map(|s| s.base_height), Some(16));
        assert_eq!(tile.track_elements().count(), 1);
    }

    #[test]
    fn test_duplicate_ride_rejected() {
        let mut park = Park::new();
        park.add_ride(Ride::new(RideId::new(1), RideType::GhostTrain)).unwrap();
        let err = park.add_ride(Ride::new(RideId::new(1), RideType::GhostTrain));
        assert!(matches!(err, Err(WorldError::DuplicateRide(_))));
    }

    #[test]
    fn test_invalid_sequence_rejected() {
        let json = r#"{
            "tiles": [{ "x": 0, "y": 0, "elements": [
                {
                    "kind": "track",
                    "track_type": "Flat",
                    "sequence": 2,
                    "ride": 0,
                    "ride_type": "GhostTrain"
                }
            ] }]
        }"#;
        let err = Park::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            WorldError::InvalidSequence { track_type: TrackElemType::Flat, sequence: 2, .. }
        ));
    }

    #[test]
    fn test_invalid_direction_rejected() {
        let json = r#"{
            "tiles": [{ "x": 1, "y": 0, "elements": [
                {
                    "kind": "track",
                    "track_type": "Flat",
                    "direction": 5,
                    "ride": 0,
                    "ride_type": "GhostTrain"
                }
            ] }]
        }"#;
        assert!(matches!(
            Park::from_json(json),
            Err(WorldError::InvalidDirection { direction: 5, .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Park::from_json("{"), Err(WorldError::Json(_))));
    }
}
