//! Track element shapes
//!
//! `TrackElemType` identifies the shape of a placed track piece independently of
//! the ride it belongs to. The numeric values are stored in map data and must not
//! be renumbered.

use serde::{Deserialize, Serialize};

macro_rules! track_elem_types {
    ($($name:ident = $value:literal,)*) => {
        /// Shape of a track piece
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum TrackElemType {
            $($name = $value,)*
        }

        impl TrackElemType {
            /// Every element type, in numeric order
            pub const ALL: &'static [TrackElemType] = &[$(TrackElemType::$name,)*];

            /// Look up an element type by its stored value
            pub fn from_u16(value: u16) -> Option<Self> {
                match value {
                    $($value => Some(TrackElemType::$name),)*
                    _ => None,
                }
            }

            /// Identifier used in scene files and diagnostics
            pub fn name(self) -> &'static str {
                match self {
                    $(TrackElemType::$name => stringify!($name),)*
                }
            }

            /// Look up an element type by its identifier
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($name) => Some(TrackElemType::$name),)*
                    _ => None,
                }
            }
        }
    };
}

track_elem_types! {
    Flat = 0,
    EndStation = 1,
    BeginStation = 2,
    MiddleStation = 3,
    Up25 = 4,
    Up60 = 5,
    FlatToUp25 = 6,
    Up25ToUp60 = 7,
    Up60ToUp25 = 8,
    Up25ToFlat = 9,
    Down25 = 10,
    Down60 = 11,
    FlatToDown25 = 12,
    Down25ToDown60 = 13,
    Down60ToDown25 = 14,
    Down25ToFlat = 15,
    LeftQuarterTurn5Tiles = 16,
    RightQuarterTurn5Tiles = 17,
    FlatToLeftBank = 18,
    FlatToRightBank = 19,
    LeftBankToFlat = 20,
    RightBankToFlat = 21,
    BankedLeftQuarterTurn5Tiles = 22,
    BankedRightQuarterTurn5Tiles = 23,
    LeftBankToUp25 = 24,
    RightBankToUp25 = 25,
    Up25ToLeftBank = 26,
    Up25ToRightBank = 27,
    LeftBankToDown25 = 28,
    RightBankToDown25 = 29,
    Down25ToLeftBank = 30,
    Down25ToRightBank = 31,
    LeftBank = 32,
    RightBank = 33,
    LeftQuarterTurn5TilesUp25 = 34,
    RightQuarterTurn5TilesUp25 = 35,
    LeftQuarterTurn5TilesDown25 = 36,
    RightQuarterTurn5TilesDown25 = 37,
    SBendLeft = 38,
    SBendRight = 39,
    LeftVerticalLoop = 40,
    RightVerticalLoop = 41,
    LeftQuarterTurn3Tiles = 42,
    RightQuarterTurn3Tiles = 43,
    LeftBankedQuarterTurn3Tiles = 44,
    RightBankedQuarterTurn3Tiles = 45,
    LeftQuarterTurn3TilesUp25 = 46,
    RightQuarterTurn3TilesUp25 = 47,
    LeftQuarterTurn3TilesDown25 = 48,
    RightQuarterTurn3TilesDown25 = 49,
    LeftQuarterTurn1Tile = 50,
    RightQuarterTurn1Tile = 51,
    LeftTwistDownToUp = 52,
    RightTwistDownToUp = 53,
    LeftTwistUpToDown = 54,
    RightTwistUpToDown = 55,
    HalfLoopUp = 56,
    HalfLoopDown = 57,
    LeftCorkscrewUp = 58,
    RightCorkscrewUp = 59,
    LeftCorkscrewDown = 60,
    RightCorkscrewDown = 61,
    FlatToUp60 = 62,
    Up60ToFlat = 63,
    FlatToDown60 = 64,
    Down60ToFlat = 65,
    TowerBase = 66,
    TowerSection = 67,
    FlatCovered = 68,
    Up25Covered = 69,
    Up60Covered = 70,
    FlatToUp25Covered = 71,
    Up25ToUp60Covered = 72,
    Up60ToUp25Covered = 73,
    Up25ToFlatCovered = 74,
    Down25Covered = 75,
    Down60Covered = 76,
    FlatToDown25Covered = 77,
    Down25ToDown60Covered = 78,
    Down60ToDown25Covered = 79,
    Down25ToFlatCovered = 80,
    LeftQuarterTurn5TilesCovered = 81,
    RightQuarterTurn5TilesCovered = 82,
    SBendLeftCovered = 83,
    SBendRightCovered = 84,
    LeftQuarterTurn3TilesCovered = 85,
    RightQuarterTurn3TilesCovered = 86,
    LeftHalfBankedHelixUpSmall = 87,
    RightHalfBankedHelixUpSmall = 88,
    LeftHalfBankedHelixDownSmall = 89,
    RightHalfBankedHelixDownSmall = 90,
    LeftHalfBankedHelixUpLarge = 91,
    RightHalfBankedHelixUpLarge = 92,
    LeftHalfBankedHelixDownLarge = 93,
    RightHalfBankedHelixDownLarge = 94,
    LeftQuarterTurn1TileUp60 = 95,
    RightQuarterTurn1TileUp60 = 96,
    LeftQuarterTurn1TileDown60 = 97,
    RightQuarterTurn1TileDown60 = 98,
    Brakes = 99,
    Booster = 100,
    Maze = 101,
    LeftQuarterBankedHelixLargeUp = 102,
    RightQuarterBankedHelixLargeUp = 103,
    LeftQuarterBankedHelixLargeDown = 104,
    RightQuarterBankedHelixLargeDown = 105,
    LeftQuarterHelixLargeUp = 106,
    RightQuarterHelixLargeUp = 107,
    LeftQuarterHelixLargeDown = 108,
    RightQuarterHelixLargeDown = 109,
    Up25LeftBanked = 110,
    Up25RightBanked = 111,
    Waterfall = 112,
    Rapids = 113,
    OnRidePhoto = 114,
    Down25LeftBanked = 115,
    Down25RightBanked = 116,
    Watersplash = 117,
    FlatToUp60LongBase = 118,
    Up60ToFlatLongBase = 119,
    Whirlpool = 120,
    Down60ToFlatLongBase = 121,
    FlatToDown60LongBase = 122,
    CableLiftHill = 123,
    ReverseFreefallSlope = 124,
    ReverseFreefallVertical = 125,
    Up90 = 126,
    Down90 = 127,
    Up60ToUp90 = 128,
    Down90ToDown60 = 129,
    Up90ToUp60 = 130,
    Down60ToDown90 = 131,
    BrakeForDrop = 132,
    LeftEighthToDiag = 133,
    RightEighthToDiag = 134,
    LeftEighthToOrthogonal = 135,
    RightEighthToOrthogonal = 136,
    LeftEighthBankToDiag = 137,
    RightEighthBankToDiag = 138,
    LeftEighthBankToOrthogonal = 139,
    RightEighthBankToOrthogonal = 140,
    DiagFlat = 141,
    DiagUp25 = 142,
    DiagUp60 = 143,
    DiagFlatToUp25 = 144,
    DiagUp25ToUp60 = 145,
    DiagUp60ToUp25 = 146,
    DiagUp25ToFlat = 147,
    DiagDown25 = 148,
    DiagDown60 = 149,
    DiagFlatToDown25 = 150,
    DiagDown25ToDown60 = 151,
    DiagDown60ToDown25 = 152,
    DiagDown25ToFlat = 153,
    DiagFlatToUp60 = 154,
    DiagUp60ToFlat = 155,
    DiagFlatToDown60 = 156,
    DiagDown60ToFlat = 157,
    DiagFlatToLeftBank = 158,
    DiagFlatToRightBank = 159,
    DiagLeftBankToFlat = 160,
    DiagRightBankToFlat = 161,
    DiagLeftBankToUp25 = 162,
    DiagRightBankToUp25 = 163,
    DiagUp25ToLeftBank = 164,
    DiagUp25ToRightBank = 165,
    DiagLeftBankToDown25 = 166,
    DiagRightBankToDown25 = 167,
    DiagDown25ToLeftBank = 168,
    DiagDown25ToRightBank = 169,
    DiagLeftBank = 170,
    DiagRightBank = 171,
    LogFlumeReverser = 172,
    SpinningTunnel = 173,
    LeftBarrelRollUpToDown = 174,
    RightBarrelRollUpToDown = 175,
    LeftBarrelRollDownToUp = 176,
    RightBarrelRollDownToUp = 177,
    LeftBankToLeftQuarterTurn3TilesUp25 = 178,
    RightBankToRightQuarterTurn3TilesUp25 = 179,
    LeftQuarterTurn3TilesDown25ToLeftBank = 180,
    RightQuarterTurn3TilesDown25ToRightBank = 181,
    PoweredLift = 182,
    LeftLargeHalfLoopUp = 183,
    RightLargeHalfLoopUp = 184,
    RightLargeHalfLoopDown = 185,
    LeftLargeHalfLoopDown = 186,
    LeftFlyerTwistUp = 187,
    RightFlyerTwistUp = 188,
    LeftFlyerTwistDown = 189,
    RightFlyerTwistDown = 190,
    FlyerHalfLoopUp = 191,
    FlyerHalfLoopDown = 192,
    LeftFlyerCorkscrewUp = 193,
    RightFlyerCorkscrewUp = 194,
    LeftFlyerCorkscrewDown = 195,
    RightFlyerCorkscrewDown = 196,
    HeartLineTransferUp = 197,
    HeartLineTransferDown = 198,
    LeftHeartLineRoll = 199,
    RightHeartLineRoll = 200,
    MinigolfHoleA = 201,
    MinigolfHoleB = 202,
    MinigolfHoleC = 203,
    MinigolfHoleD = 204,
    MinigolfHoleE = 205,
    MultiDimInvertedFlatToDown90QuarterLoop = 206,
    Up90ToInvertedFlatQuarterLoop = 207,
    InvertedFlatToDown90QuarterLoop = 208,
    LeftCurvedLiftHill = 209,
    RightCurvedLiftHill = 210,
    LeftReverser = 211,
    RightReverser = 212,
    AirThrustTopCap = 213,
    AirThrustVerticalDown = 214,
    AirThrustVerticalDownToLevel = 215,
    BlockBrakes = 216,
}

/// Build-menu piece family a ride type must enable before an element can be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackGroup {
    Flat,
    Straight,
    StationEnd,
    LiftHill,
    LiftHillSteep,
    LiftHillCurve,
    LiftHillCable,
    FlatRollBanking,
    VerticalLoop,
    Slope,
    SlopeSteepDown,
    SlopeSteepUp,
    SlopeLong,
    SlopeCurve,
    SlopeCurveSteep,
    SBend,
    CurveVerySmall,
    CurveSmall,
    Curve,
    CurveLarge,
    TwistUp,
    TwistDown,
    HalfLoop,
    Corkscrew,
    Tower,
    HelixUpBankedHalf,
    HelixDownBankedHalf,
    HelixUpBankedQuarter,
    HelixDownBankedQuarter,
    HelixUpUnbankedQuarter,
    HelixDownUnbankedQuarter,
    Brakes,
    Booster,
    OnridePhoto,
    WaterSplash,
    SlopeVertical,
    BarrelRoll,
    PoweredLift,
    HalfLoopLarge,
    SlopeCurveBanked,
    LogFlumeReverser,
    HeartlineRoll,
    HeartlineTransfer,
    ReverseFreefall,
    SpinningTunnel,
    Rapids,
    Whirlpool,
    Waterfall,
    MiniGolfHole,
    QuarterLoop,
    Reverser,
    AirThrustVerticalDown,
    BlockBrakes,
    Maze,
    Covered,
    InlineTwistUninverted,
    FlyingHalfLoop,
    FlyingCorkscrew,
    SlopeRollBanking,
    FlatToSteepSlope,
}

/// Static facts about one element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackElementDescriptor {
    /// Number of sub-tile sequences the element occupies
    pub sequence_count: u8,
    /// Bit per sequence on which a height marker is drawn
    pub height_marker_positions: u16,
    /// Piece families that must all be enabled for the element to be placeable
    pub groups: &'static [TrackGroup],
}

impl TrackElementDescriptor {
    const fn new(sequence_count: u8, groups: &'static [TrackGroup]) -> Self {
        // Markers go on the first and last tile of the piece
        let last = 1u16 << (sequence_count - 1);
        Self {
            sequence_count,
            height_marker_positions: 1 | last,
            groups,
        }
    }
}

use TrackGroup as G;

impl TrackElemType {
    /// Descriptor with the piece's sequence count, height markers and groups
    pub const fn descriptor(self) -> TrackElementDescriptor {
        use TrackElemType::*;
        let (count, groups): (u8, &'static [TrackGroup]) = match self {
            Flat => (1, &[G::Flat]),
            EndStation | BeginStation | MiddleStation => (1, &[G::StationEnd]),
            Up25 | Down25 | FlatToUp25 | Up25ToFlat | FlatToDown25 | Down25ToFlat => {
                (1, &[G::Slope])
            }
            Up60 | Down60 => (1, &[G::SlopeSteepUp]),
            Up25ToUp60 | Up60ToUp25 | Down25ToDown60 | Down60ToDown25 => (1, &[G::SlopeSteepUp]),
            LeftQuarterTurn5Tiles | RightQuarterTurn5Tiles => (7, &[G::Curve]),
            FlatToLeftBank
            | FlatToRightBank
            | LeftBankToFlat
            | RightBankToFlat
            | LeftBank
            | RightBank => (1, &[G::FlatRollBanking]),
            BankedLeftQuarterTurn5Tiles | BankedRightQuarterTurn5Tiles => {
                (7, &[G::Curve, G::FlatRollBanking])
            }
            LeftBankToUp25 | RightBankToUp25 | Up25ToLeftBank | Up25ToRightBank | LeftBankToDown25
            | RightBankToDown25 | Down25ToLeftBank | Down25ToRightBank => {
                (1, &[G::FlatRollBanking, G::Slope])
            }
            LeftQuarterTurn5TilesUp25 | RightQuarterTurn5TilesUp25 | LeftQuarterTurn5TilesDown25
            | RightQuarterTurn5TilesDown25 => (7, &[G::SlopeCurve]),
            SBendLeft | SBendRight => (4, &[G::SBend]),
            LeftVerticalLoop | RightVerticalLoop => (10, &[G::VerticalLoop]),
            LeftQuarterTurn3Tiles | RightQuarterTurn3Tiles => (4, &[G::CurveSmall]),
            LeftBankedQuarterTurn3Tiles | RightBankedQuarterTurn3Tiles => {
                (4, &[G::CurveSmall, G::FlatRollBanking])
            }
            LeftQuarterTurn3TilesUp25 | RightQuarterTurn3TilesUp25 | LeftQuarterTurn3TilesDown25
            | RightQuarterTurn3TilesDown25 => (4, &[G::SlopeCurve, G::CurveSmall]),
            LeftQuarterTurn1Tile | RightQuarterTurn1Tile => (1, &[G::CurveVerySmall]),
            LeftTwistDownToUp | RightTwistDownToUp => (3, &[G::TwistDown]),
            LeftTwistUpToDown | RightTwistUpToDown => (3, &[G::TwistUp]),
            HalfLoopUp | HalfLoopDown => (4, &[G::HalfLoop]),
            LeftCorkscrewUp | RightCorkscrewUp | LeftCorkscrewDown | RightCorkscrewDown => {
                (3, &[G::Corkscrew])
            }
            FlatToUp60 | Up60ToFlat | FlatToDown60 | Down60ToFlat => (1, &[G::FlatToSteepSlope]),
            TowerBase => (9, &[G::Tower]),
            TowerSection => (1, &[G::Tower]),
            LeftQuarterTurn5TilesCovered | RightQuarterTurn5TilesCovered => (7, &[G::Covered]),
            SBendLeftCovered | SBendRightCovered => (4, &[G::Covered]),
            LeftQuarterTurn3TilesCovered | RightQuarterTurn3TilesCovered => (4, &[G::Covered]),
            FlatCovered | Up25Covered | Up60Covered | FlatToUp25Covered | Up25ToUp60Covered
            | Up60ToUp25Covered | Up25ToFlatCovered | Down25Covered | Down60Covered
            | FlatToDown25Covered | Down25ToDown60Covered | Down60ToDown25Covered
            | Down25ToFlatCovered => (1, &[G::Covered]),
            LeftHalfBankedHelixUpSmall | RightHalfBankedHelixUpSmall => {
                (8, &[G::HelixUpBankedHalf])
            }
            LeftHalfBankedHelixDownSmall | RightHalfBankedHelixDownSmall => {
                (8, &[G::HelixDownBankedHalf])
            }
            LeftHalfBankedHelixUpLarge | RightHalfBankedHelixUpLarge => {
                (14, &[G::HelixUpBankedHalf])
            }
            LeftHalfBankedHelixDownLarge | RightHalfBankedHelixDownLarge => {
                (14, &[G::HelixDownBankedHalf])
            }
            LeftQuarterTurn1TileUp60 | RightQuarterTurn1TileUp60 | LeftQuarterTurn1TileDown60
            | RightQuarterTurn1TileDown60 => (1, &[G::SlopeCurveSteep]),
            Brakes => (1, &[G::Brakes]),
            Booster => (1, &[G::Booster]),
            Maze => (1, &[G::Maze]),
            LeftQuarterBankedHelixLargeUp | RightQuarterBankedHelixLargeUp => {
                (7, &[G::HelixUpBankedQuarter])
            }
            LeftQuarterBankedHelixLargeDown | RightQuarterBankedHelixLargeDown => {
                (7, &[G::HelixDownBankedQuarter])
            }
            LeftQuarterHelixLargeUp | RightQuarterHelixLargeUp => (7, &[G::HelixUpUnbankedQuarter]),
            LeftQuarterHelixLargeDown | RightQuarterHelixLargeDown => {
                (7, &[G::HelixDownUnbankedQuarter])
            }
            Up25LeftBanked | Up25RightBanked | Down25LeftBanked | Down25RightBanked => {
                (1, &[G::SlopeRollBanking])
            }
            Waterfall => (1, &[G::Waterfall]),
            Rapids => (1, &[G::Rapids]),
            OnRidePhoto => (1, &[G::OnridePhoto]),
            Watersplash => (5, &[G::WaterSplash]),
            FlatToUp60LongBase
            | Up60ToFlatLongBase
            | Down60ToFlatLongBase
            | FlatToDown60LongBase => (4, &[G::SlopeLong]),
            Whirlpool => (1, &[G::Whirlpool]),
            CableLiftHill => (4, &[G::LiftHillCable]),
            ReverseFreefallSlope => (7, &[G::ReverseFreefall]),
            ReverseFreefallVertical => (2, &[G::ReverseFreefall]),
            Up90 | Down90 | Up60ToUp90 | Down90ToDown60 | Up90ToUp60 | Down60ToDown90 => {
                (1, &[G::SlopeVertical])
            }
            BrakeForDrop => (1, &[G::SlopeVertical]),
            LeftEighthToDiag
            | RightEighthToDiag
            | LeftEighthToOrthogonal
            | RightEighthToOrthogonal => (5, &[G::CurveLarge]),
            LeftEighthBankToDiag | RightEighthBankToDiag | LeftEighthBankToOrthogonal
            | RightEighthBankToOrthogonal => (5, &[G::CurveLarge, G::FlatRollBanking]),
            DiagFlat => (4, &[G::CurveLarge]),
            DiagUp25
            | DiagDown25
            | DiagFlatToUp25
            | DiagUp25ToFlat
            | DiagFlatToDown25
            | DiagDown25ToFlat => (4, &[G::CurveLarge, G::Slope]),
            DiagUp60 | DiagDown60 | DiagUp25ToUp60 | DiagUp60ToUp25 | DiagDown25ToDown60
            | DiagDown60ToDown25 => (4, &[G::CurveLarge, G::SlopeSteepUp]),
            DiagFlatToUp60 | DiagUp60ToFlat | DiagFlatToDown60 | DiagDown60ToFlat => {
                (4, &[G::CurveLarge, G::FlatToSteepSlope])
            }
            DiagFlatToLeftBank | DiagFlatToRightBank | DiagLeftBankToFlat | DiagRightBankToFlat
            | DiagLeftBank | DiagRightBank => (4, &[G::CurveLarge, G::FlatRollBanking]),
            DiagLeftBankToUp25 | DiagRightBankToUp25 | DiagUp25ToLeftBank | DiagUp25ToRightBank
            | DiagLeftBankToDown25 | DiagRightBankToDown25 | DiagDown25ToLeftBank
            | DiagDown25ToRightBank => (4, &[G::CurveLarge, G::FlatRollBanking, G::Slope]),
            LogFlumeReverser => (1, &[G::LogFlumeReverser]),
            SpinningTunnel => (1, &[G::SpinningTunnel]),
            LeftBarrelRollUpToDown | RightBarrelRollUpToDown | LeftBarrelRollDownToUp
            | RightBarrelRollDownToUp => (3, &[G::BarrelRoll]),
            LeftBankToLeftQuarterTurn3TilesUp25 | RightBankToRightQuarterTurn3TilesUp25
            | LeftQuarterTurn3TilesDown25ToLeftBank | RightQuarterTurn3TilesDown25ToRightBank => {
                (4, &[G::SlopeCurveBanked])
            }
            PoweredLift => (1, &[G::PoweredLift]),
            LeftLargeHalfLoopUp
            | RightLargeHalfLoopUp
            | RightLargeHalfLoopDown
            | LeftLargeHalfLoopDown => (7, &[G::HalfLoopLarge]),
            LeftFlyerTwistUp | RightFlyerTwistUp | LeftFlyerTwistDown | RightFlyerTwistDown => {
                (3, &[G::InlineTwistUninverted])
            }
            FlyerHalfLoopUp | FlyerHalfLoopDown => (4, &[G::FlyingHalfLoop]),
            LeftFlyerCorkscrewUp
            | RightFlyerCorkscrewUp
            | LeftFlyerCorkscrewDown
            | RightFlyerCorkscrewDown => (3, &[G::FlyingCorkscrew]),
            HeartLineTransferUp | HeartLineTransferDown => (4, &[G::HeartlineTransfer]),
            LeftHeartLineRoll | RightHeartLineRoll => (6, &[G::HeartlineRoll]),
            MinigolfHoleA | MinigolfHoleB | MinigolfHoleC => (2, &[G::MiniGolfHole]),
            MinigolfHoleD | MinigolfHoleE => (3, &[G::MiniGolfHole]),
            MultiDimInvertedFlatToDown90QuarterLoop | Up90ToInvertedFlatQuarterLoop
            | InvertedFlatToDown90QuarterLoop => (3, &[G::QuarterLoop]),
            LeftCurvedLiftHill | RightCurvedLiftHill => (4, &[G::LiftHillCurve]),
            LeftReverser | RightReverser => (6, &[G::Reverser]),
            AirThrustTopCap => (4, &[G::ReverseFreefall]),
            AirThrustVerticalDown | AirThrustVerticalDownToLevel => {
                (2, &[G::AirThrustVerticalDown])
            }
            BlockBrakes => (1, &[G::BlockBrakes]),
        };
        TrackElementDescriptor::new(count, groups)
    }

    /// Whether this is one of the three station pieces
    pub const fn is_station(self) -> bool {
        matches!(
            self,
            TrackElemType::EndStation | TrackElemType::BeginStation | TrackElemType::MiddleStation
        )
    }

    pub const fn sequence_count(self) -> u8 {
        self.descriptor().sequence_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_stable() {
        assert_eq!(TrackElemType::Flat as u16, 0);
        assert_eq!(TrackElemType::OnRidePhoto as u16, 114);
        assert_eq!(TrackElemType::DiagFlat as u16, 141);
        assert_eq!(TrackElemType::SpinningTunnel as u16, 173);
        assert_eq!(TrackElemType::BlockBrakes as u16, 216);
    }

    #[test]
    fn test_all_is_dense_and_ordered() {
        for (i, elem) in TrackElemType::ALL.iter().enumerate() {
            assert_eq!(*elem as usize, i);
            assert_eq!(TrackElemType::from_u16(i as u16), Some(*elem));
        }
        assert_eq!(TrackElemType::from_u16(TrackElemType::ALL.len() as u16), None);
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(TrackElemType::LeftQuarterTurn5Tiles.name(), "LeftQuarterTurn5Tiles");
        assert_eq!(TrackElemType::from_name("HalfLoopUp"), Some(TrackElemType::HalfLoopUp));
        assert_eq!(TrackElemType::from_name("HalfLoop"), None);
    }

    #[test]
    fn test_sequence_counts() {
        assert_eq!(TrackElemType::Flat.sequence_count(), 1);
        assert_eq!(TrackElemType::LeftQuarterTurn5Tiles.sequence_count(), 7);
        assert_eq!(TrackElemType::LeftQuarterTurn3Tiles.sequence_count(), 4);
        assert_eq!(TrackElemType::LeftVerticalLoop.sequence_count(), 10);
        assert_eq!(TrackElemType::LeftEighthToDiag.sequence_count(), 5);
        assert_eq!(TrackElemType::DiagFlat.sequence_count(), 4);
    }

    #[test]
    fn test_height_markers_on_first_and_last_tile() {
        let d = TrackElemType::LeftQuarterTurn5Tiles.descriptor();
        assert_eq!(d.height_marker_positions, 0b100_0001);
        assert_eq!(TrackElemType::Flat.descriptor().height_marker_positions, 1);
    }

    #[test]
    fn test_is_station() {
        assert!(TrackElemType::BeginStation.is_station());
        assert!(!TrackElemType::Flat.is_station());
    }
}
