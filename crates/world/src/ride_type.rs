//! Ride type descriptors
//!
//! A ride type descriptor records how the type's track is drawn and which piece
//! families the track designer may place.

use serde::{Deserialize, Serialize};

use crate::support_type::{MetalSupportType, SupportType, WoodenSupportType};
use crate::track_elem_type::{TrackElemType, TrackGroup};
use crate::track_style::TrackStyle;

/// Ride types shipped with a track drawer in this engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideType {
    CompactInvertedCoaster,
    GhostTrain,
}

impl RideType {
    pub const ALL: &'static [RideType] = &[RideType::CompactInvertedCoaster, RideType::GhostTrain];

    pub fn descriptor(self) -> &'static RideTypeDescriptor {
        match self {
            RideType::CompactInvertedCoaster => &COMPACT_INVERTED_COASTER_RTD,
            RideType::GhostTrain => &GHOST_TRAIN_RTD,
        }
    }
}

/// Style and support family used for one drawing variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackDrawerEntry {
    pub track_style: TrackStyle,
    pub support_type: SupportType,
}

impl TrackDrawerEntry {
    pub const fn new(track_style: TrackStyle, support_type: SupportType) -> Self {
        Self { track_style, support_type }
    }

    pub const NULL: TrackDrawerEntry =
        TrackDrawerEntry::new(TrackStyle::Null, SupportType::Metal(MetalSupportType::Tubes));
}

/// Drawing variants for a ride type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackDrawerDescriptor {
    pub regular: TrackDrawerEntry,
    /// Used when the track element is flagged inverted
    pub inverted: Option<TrackDrawerEntry>,
    /// Used for the legacy covered pieces
    pub covered: Option<TrackDrawerEntry>,
}

impl TrackDrawerDescriptor {
    /// Pick the drawer entry for an element's inverted/covered flags
    pub fn entry(&self, is_inverted: bool, is_covered: bool) -> TrackDrawerEntry {
        if is_inverted {
            if let Some(inverted) = self.inverted {
                return inverted;
            }
        }
        if is_covered {
            if let Some(covered) = self.covered {
                return covered;
            }
        }
        self.regular
    }
}

/// Vertical dimensions of a ride type's vehicles and track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideHeights {
    pub max_height: i32,
    pub clearance_height: i32,
    /// Offset of the vehicle above the track element's base height
    pub vehicle_z_offset: i32,
    pub platform_height: i32,
}

/// Static description of a ride type
#[derive(Debug)]
pub struct RideTypeDescriptor {
    pub name: &'static str,
    pub track_drawer: TrackDrawerDescriptor,
    /// Piece families available in the track designer
    pub enabled_track_groups: &'static [TrackGroup],
    pub heights: RideHeights,
}

impl RideTypeDescriptor {
    pub fn supports_track_group(&self, group: TrackGroup) -> bool {
        self.enabled_track_groups.contains(&group)
    }

    /// Whether the track designer lets this ride type place an element
    pub fn can_place(&self, element: TrackElemType) -> bool {
        element
            .descriptor()
            .groups
            .iter()
            .all(|group| self.supports_track_group(*group))
    }

    /// All element types this ride type can place
    pub fn placeable_elements(&self) -> impl Iterator<Item = TrackElemType> + '_ {
        TrackElemType::ALL.iter().copied().filter(|e| self.can_place(*e))
    }
}

static COMPACT_INVERTED_COASTER_RTD: RideTypeDescriptor = RideTypeDescriptor {
    name: "Compact Inverted Coaster",
    track_drawer: TrackDrawerDescriptor {
        regular: TrackDrawerEntry::new(
            TrackStyle::CompactInvertedCoaster,
            SupportType::Metal(MetalSupportType::TubesInverted),
        ),
        inverted: None,
        covered: None,
    },
    enabled_track_groups: &[
        TrackGroup::Flat,
        TrackGroup::Straight,
        TrackGroup::StationEnd,
        TrackGroup::LiftHill,
        TrackGroup::FlatRollBanking,
        TrackGroup::VerticalLoop,
        TrackGroup::Slope,
        TrackGroup::SlopeSteepDown,
        TrackGroup::SlopeSteepUp,
        TrackGroup::SlopeCurve,
        TrackGroup::SBend,
        TrackGroup::CurveSmall,
        TrackGroup::Curve,
        TrackGroup::CurveLarge,
        TrackGroup::TwistUp,
        TrackGroup::TwistDown,
        TrackGroup::HalfLoop,
        TrackGroup::Corkscrew,
        TrackGroup::Brakes,
        TrackGroup::OnridePhoto,
        TrackGroup::BlockBrakes,
    ],
    heights: RideHeights {
        max_height: 27,
        clearance_height: 40,
        vehicle_z_offset: 29,
        platform_height: 8,
    },
};

static GHOST_TRAIN_RTD: RideTypeDescriptor = RideTypeDescriptor {
    name: "Ghost Train",
    track_drawer: TrackDrawerDescriptor {
        regular: TrackDrawerEntry::new(
            TrackStyle::GhostTrain,
            SupportType::Wooden(WoodenSupportType::Truss),
        ),
        inverted: None,
        covered: None,
    },
    enabled_track_groups: &[
        TrackGroup::Flat,
        TrackGroup::Straight,
        TrackGroup::StationEnd,
        TrackGroup::Slope,
        TrackGroup::CurveVerySmall,
        TrackGroup::CurveSmall,
        TrackGroup::Brakes,
        TrackGroup::SpinningTunnel,
    ],
    heights: RideHeights {
        max_height: 8,
        clearance_height: 24,
        vehicle_z_offset: 6,
        platform_height: 7,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_entry_selection() {
        let drawer = TrackDrawerDescriptor {
            regular: TrackDrawerEntry::new(
                TrackStyle::FlyingRollerCoaster,
                MetalSupportType::Tubes.into(),
            ),
            inverted: Some(TrackDrawerEntry::new(
                TrackStyle::FlyingRollerCoasterInverted,
                MetalSupportType::TubesInverted.into(),
            )),
            covered: None,
        };
        assert_eq!(drawer.entry(false, false).track_style, TrackStyle::FlyingRollerCoaster);
        assert_eq!(drawer.entry(true, false).track_style, TrackStyle::FlyingRollerCoasterInverted);
        assert_eq!(drawer.entry(false, true).track_style, TrackStyle::FlyingRollerCoaster);
    }

    #[test]
    fn test_compact_inverted_placement() {
        let rtd = RideType::CompactInvertedCoaster.descriptor();
        assert!(rtd.can_place(TrackElemType::Flat));
        assert!(rtd.can_place(TrackElemType::LeftVerticalLoop));
        assert!(rtd.can_place(TrackElemType::DiagLeftBankToUp25));
        assert!(!rtd.can_place(TrackElemType::SpinningTunnel));
        assert!(!rtd.can_place(TrackElemType::LeftQuarterTurn1Tile));
        assert!(!rtd.can_place(TrackElemType::DiagFlatToUp60));
    }

    #[test]
    fn test_ghost_train_placement() {
        let rtd = RideType::GhostTrain.descriptor();
        let placeable: Vec<_> = rtd.placeable_elements().collect();
        assert!(placeable.contains(&TrackElemType::SpinningTunnel));
        assert!(placeable.contains(&TrackElemType::RightQuarterTurn1Tile));
        assert!(!placeable.contains(&TrackElemType::Up60));
        assert!(!placeable.contains(&TrackElemType::DiagFlat));
    }
}
