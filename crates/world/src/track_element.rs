//! Track tile elements

use serde::{Deserialize, Serialize};

use crate::coords::Direction;
use crate::ride::{RideId, StationIndex};
use crate::ride_type::RideType;
use crate::track_elem_type::TrackElemType;

/// One placed track piece tile
///
/// A multi-tile piece stores one `TrackElement` per tile, each with its own
/// sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackElement {
    pub track_type: TrackElemType,
    /// Which sub-tile of the piece this element is
    #[serde(default)]
    pub sequence: u8,
    /// Direction the piece faces in map space
    #[serde(default)]
    pub direction: Direction,
    /// Base height in world units
    #[serde(default)]
    pub base_height: i32,
    pub ride: RideId,
    pub ride_type: RideType,
    #[serde(default)]
    pub station_index: StationIndex,
    #[serde(default)]
    pub colour_scheme: u8,
    /// Preview piece shown while building
    #[serde(default)]
    pub ghost: bool,
    #[serde(default)]
    pub highlighted: bool,
    /// Chain lift is attached
    #[serde(default)]
    pub has_chain: bool,
    #[serde(default)]
    pub inverted: bool,
    /// Ticks left on the on-ride photo flash, zero when idle
    #[serde(default)]
    pub photo_timeout: u8,
    /// Station signal shows green
    #[serde(default)]
    pub green_light: bool,
    #[serde(default)]
    pub brake_closed: bool,
}

impl TrackElement {
    pub fn new(track_type: TrackElemType, ride: RideId, ride_type: RideType) -> Self {
        Self {
            track_type,
            sequence: 0,
            direction: 0,
            base_height: 0,
            ride,
            ride_type,
            station_index: StationIndex::default(),
            colour_scheme: 0,
            ghost: false,
            highlighted: false,
            has_chain: false,
            inverted: false,
            photo_timeout: 0,
            green_light: false,
            brake_closed: false,
        }
    }

    pub fn with_sequence(mut self, sequence: u8) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction & 3;
        self
    }

    pub fn with_base_height(mut self, base_height: i32) -> Self {
        self.base_height = base_height;
        self
    }

    pub fn with_chain(mut self, has_chain: bool) -> Self {
        self.has_chain = has_chain;
        self
    }

    pub fn with_station_index(mut self, index: StationIndex) -> Self {
        self.station_index = index;
        self
    }

    pub fn has_chain(&self) -> bool {
        self.has_chain
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_ghost(&self) -> bool {
        self.ghost
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn has_green_light(&self) -> bool {
        self.green_light
    }

    /// The photo flash is lit
    pub fn is_taking_photo(&self) -> bool {
        self.photo_timeout != 0
    }

    /// Legacy covered pieces use the ride type's covered drawer
    pub fn is_covered(&self) -> bool {
        use TrackElemType::*;
        matches!(
            self.track_type,
            FlatCovered
                | Up25Covered
                | Up60Covered
                | FlatToUp25Covered
                | Up25ToUp60Covered
                | Up60ToUp25Covered
                | Up25ToFlatCovered
                | Down25Covered
                | Down60Covered
                | FlatToDown25Covered
                | Down25ToDown60Covered
                | Down60ToDown25Covered
                | Down25ToFlatCovered
                | LeftQuarterTurn5TilesCovered
                | RightQuarterTurn5TilesCovered
                | SBendLeftCovered
                | SBendRightCovered
                | LeftQuarterTurn3TilesCovered
                | RightQuarterTurn3TilesCovered
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_masks_direction() {
        let e = TrackElement::new(TrackElemType::Flat, RideId::new(0), RideType::GhostTrain)
            .with_direction(6);
        assert_eq!(e.direction, 2);
    }

    #[test]
    fn test_taking_photo() {
        let mut e = TrackElement::new(
            TrackElemType::OnRidePhoto,
            RideId::new(0),
            RideType::CompactInvertedCoaster,
        );
        assert!(!e.is_taking_photo());
        e.photo_timeout = 3;
        assert!(e.is_taking_photo());
    }

    #[test]
    fn test_covered_pieces() {
        let e = TrackElement::new(
            TrackElemType::SBendLeftCovered,
            RideId::new(0),
            RideType::GhostTrain,
        );
        assert!(e.is_covered());
        let e = TrackElement::new(TrackElemType::SBendLeft, RideId::new(0), RideType::GhostTrain);
        assert!(!e.is_covered());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json =
            r#"{ "track_type": "Up25", "ride": 2, "ride_type": "GhostTrain", "has_chain": true }"#;
        let e: TrackElement = serde_json::from_str(json).unwrap();
        assert_eq!(e.track_type, TrackElemType::Up25);
        assert!(e.has_chain());
        assert_eq!(e.sequence, 0);
        assert!(!e.is_ghost());
    }
}
