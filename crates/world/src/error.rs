//! World error types

use thiserror::Error;

use crate::ride::RideId;
use crate::track_elem_type::TrackElemType;

/// World operation result type
pub type WorldResult<T> = Result<T, WorldError>;

/// World errors
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("Could not read scene: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ride {0} is defined more than once")]
    DuplicateRide(RideId),

    #[error("Invalid direction {direction} on tile [{x}, {y}]")]
    InvalidDirection { x: i32, y: i32, direction: u8 },

    #[error("Sequence {sequence} is out of range for {track_type:?} on tile [{x}, {y}]")]
    InvalidSequence {
        x: i32,
        y: i32,
        track_type: TrackElemType,
        sequence: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WorldError::InvalidDirection { x: 3, y: 4, direction: 7 };
        assert_eq!(format!("{}", err), "Invalid direction 7 on tile [3, 4]");

        let err = WorldError::DuplicateRide(RideId::new(2));
        assert_eq!(format!("{}", err), "Ride RideId(2) is defined more than once");
    }
}
