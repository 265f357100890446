//! Track rendering families
//!
//! Every ride type draws its track with exactly one `TrackStyle` at a time. The
//! style is picked from the ride type's track drawer (regular, inverted or
//! covered) and selects the paint function table.

use serde::{Deserialize, Serialize};

macro_rules! track_styles {
    ($($name:ident = $value:literal,)*) => {
        /// Rendering family for a ride type's track
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum TrackStyle {
            $($name = $value,)*
            /// No track is drawn
            Null = 255,
        }

        impl TrackStyle {
            /// Every drawable style, in table order
            pub const ALL: &'static [TrackStyle] = &[$(TrackStyle::$name,)*];

            /// Number of drawable styles (size of the dispatch table)
            pub const COUNT: usize = Self::ALL.len();

            /// Look up a style by its raw value
            pub fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $($value => Some(TrackStyle::$name),)*
                    255 => Some(TrackStyle::Null),
                    _ => None,
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(TrackStyle::$name => stringify!($name),)*
                    TrackStyle::Null => "Null",
                }
            }
        }
    };
}

track_styles! {
    AirPoweredVerticalCoaster = 0,
    AlpineCoaster = 1,
    BobsleighCoaster = 2,
    BoatHire = 3,
    CarRide = 4,
    Chairlift = 5,
    Circus = 6,
    ClassicStandUpRollerCoaster = 7,
    ClassicWoodenRollerCoaster = 8,
    ClassicWoodenTwisterRollerCoaster = 9,
    CompactInvertedCoaster = 10,
    CorkscrewRollerCoaster = 11,
    CrookedHouse = 12,
    DinghySlide = 13,
    DinghySlideCovered = 14,
    Dodgems = 15,
    Enterprise = 16,
    Facility = 17,
    FerrisWheel = 18,
    FlyingRollerCoaster = 19,
    FlyingRollerCoasterInverted = 20,
    FlyingSaucers = 21,
    GhostTrain = 22,
    GoKarts = 23,
    HauntedHouse = 24,
    HeartlineTwisterCoaster = 25,
    HybridCoaster = 26,
    InvertedHairpinCoaster = 27,
    InvertedImpulseCoaster = 28,
    InvertedRollerCoaster = 29,
    JuniorRollerCoaster = 30,
    LaunchedFreefall = 31,
    LayDownRollerCoasterInverted = 32,
    Lift = 33,
    LimLaunchedRollerCoaster = 34,
    LogFlume = 35,
    LoopingRollerCoaster = 36,
    MagicCarpet = 37,
    Maze = 38,
    MerryGoRound = 39,
    MineRide = 40,
    MineTrainCoaster = 41,
    MiniGolf = 42,
    MiniHelicopters = 43,
    MiniRollerCoaster = 44,
    MiniSuspendedCoaster = 45,
    MiniatureRailway = 46,
    Monorail = 47,
    MonorailCycles = 48,
    MotionSimulator = 49,
    MultiDimensionRollerCoaster = 50,
    MultiDimensionRollerCoasterInverted = 51,
    ObservationTower = 52,
    ReverseFreefallCoaster = 53,
    ReverserRollerCoaster = 54,
    RiverRapids = 55,
    RotoDrop = 56,
    Shop = 57,
    SideFrictionRollerCoaster = 58,
    SingleRailRollerCoaster = 59,
    SpaceRings = 60,
    SpiralSlide = 61,
    SpinningWildMouse = 62,
    SplashBoats = 63,
    StandUpRollerCoaster = 64,
    SteelWildMouse = 65,
    Steeplechase = 66,
    SubmarineRide = 67,
    SuspendedMonorail = 68,
    SuspendedSwingingCoaster = 69,
    SwingingInverterShip = 70,
    SwingingShip = 71,
    Cinema3d = 72,
    TopSpin = 73,
    Twist = 74,
    TwisterRollerCoaster = 75,
    VerticalDropRollerCoaster = 76,
    VirginiaReel = 77,
    WaterCoaster = 78,
    WoodenRollerCoaster = 79,
    WoodenWildMouse = 80,
}

impl TrackStyle {
    /// Index into the dispatch table, `None` for the null style
    pub fn table_index(self) -> Option<usize> {
        match self {
            TrackStyle::Null => None,
            style => Some(style as usize),
        }
    }
}
