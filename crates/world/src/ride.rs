//! Rides, stations and station objects

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::colour::Colour;
use crate::coords::{CoordsXYZ, TileCoordsXYZD};
use crate::ride_type::RideType;

/// Unique identifier for a ride in the park
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideId(pub u16);

impl RideId {
    pub fn new(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RideId({})", self.0)
    }
}

/// Index of a station within its ride
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationIndex(pub u8);

/// Number of colour schemes a ride's track can choose from
pub const NUM_COLOUR_SCHEMES: usize = 4;

/// Colours for one track colour scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackColour {
    pub main: Colour,
    pub additional: Colour,
    pub supports: Colour,
}

impl TrackColour {
    pub fn new(main: Colour, additional: Colour, supports: Colour) -> Self {
        Self { main, additional, supports }
    }
}

/// A ride station: where the platform starts and where guests enter and leave
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// World position of the first station tile
    #[serde(default)]
    pub start: Option<CoordsXYZ>,
    /// Platform height in land steps
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub entrance: Option<TileCoordsXYZD>,
    #[serde(default)]
    pub exit: Option<TileCoordsXYZD>,
}

/// Flags declared by a station style object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationObjectFlags {
    /// Shelter is drawn translucent with a glass overlay
    #[serde(default)]
    pub is_transparent: bool,
    /// The style draws no platforms or fences at all
    #[serde(default)]
    pub no_platforms: bool,
    #[serde(default)]
    pub has_primary_colour: bool,
    #[serde(default)]
    pub has_secondary_colour: bool,
}

/// Station style: which shelter art is drawn over station platforms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationObject {
    pub identifier: String,
    /// First image of the platform base art
    #[serde(default)]
    pub base_image_id: Option<u32>,
    /// First image of the shelter art, `None` if the style has no shelter
    #[serde(default)]
    pub shelter_image_id: Option<u32>,
    #[serde(default)]
    pub flags: StationObjectFlags,
}

/// A ride in the park
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub id: RideId,
    #[serde(rename = "type")]
    pub ride_type: RideType,
    /// Vehicle object subtype
    #[serde(default)]
    pub subtype: u16,
    #[serde(default)]
    pub track_colours: [TrackColour; NUM_COLOUR_SCHEMES],
    #[serde(default)]
    pub stations: SmallVec<[Station; 4]>,
    #[serde(default)]
    pub station_object: Option<StationObject>,
    /// Entity ids of the ride's vehicles
    #[serde(default)]
    pub vehicles: Vec<u16>,
}

impl Ride {
    pub fn new(id: RideId, ride_type: RideType) -> Self {
        Self {
            id,
            ride_type,
            subtype: 0,
            track_colours: [TrackColour::default(); NUM_COLOUR_SCHEMES],
            stations: SmallVec::new(),
            station_object: None,
            vehicles: Vec::new(),
        }
    }

    /// Get a station by index
    pub fn station(&self, index: StationIndex) -> Option<&Station> {
        self.stations.get(index.0 as usize)
    }

    pub fn station_object(&self) -> Option<&StationObject> {
        self.station_object.as_ref()
    }

    /// Colours for a track colour scheme, falling back to the main scheme
    pub fn track_colour(&self, scheme: u8) -> TrackColour {
        self.track_colours
            .get(scheme as usize)
            .copied()
            .unwrap_or(self.track_colours[0])
    }
}
