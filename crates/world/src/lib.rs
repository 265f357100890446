//! Funfair World
//!
//! Map coordinates, rides, ride types and track elements: the read-only park
//! data the track painter consumes.

mod colour;
mod coords;
mod error;
mod park;
mod ride;
mod ride_type;
mod support_type;
mod track_elem_type;
mod track_element;
mod track_style;

pub use colour::Colour;
pub use coords::{
    direction_add, direction_flip_x_axis, direction_reverse, direction_valid, CoordsXY, CoordsXYZ,
    Direction, TileCoordsXY, TileCoordsXYZD, ALL_DIRECTIONS, COORDS_DIRECTION_DELTA, COORDS_XY_STEP,
    COORDS_Z_STEP, NUM_DIRECTIONS,
};
pub use error::{WorldError, WorldResult};
pub use park::{Park, SurfaceElement, Tile, TileElement};
pub use ride::{
    Ride, RideId, Station, StationIndex, StationObject, StationObjectFlags, TrackColour,
    NUM_COLOUR_SCHEMES,
};
pub use ride_type::{
    RideHeights, RideType, RideTypeDescriptor, TrackDrawerDescriptor, TrackDrawerEntry,
};
pub use support_type::{MetalSupportType, SupportType, WoodenSupportType};
pub use track_elem_type::{TrackElemType, TrackElementDescriptor, TrackGroup};
pub use track_element::TrackElement;
pub use track_style::TrackStyle;
