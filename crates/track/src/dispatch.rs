//! Two-level paint function lookup
//!
//! The first level picks a style's getter from a table indexed by
//! `TrackStyle`; the getter then matches on the element type. Adding a style
//! means adding one getter and one table entry.

use funfair_paint::PaintSession;
use funfair_world::{Direction, Ride, SupportType, TrackElemType, TrackElement, TrackStyle};

use crate::styles::{compact_inverted, ghost_train};

/// Draws one tile of a track piece
///
/// Arguments after the session and ride are the track sequence, the
/// view-relative direction, the element height, the element itself and the
/// ride's support family.
pub type TrackPaintFunction =
    fn(&mut PaintSession, &Ride, u8, Direction, i32, &TrackElement, SupportType);

/// Resolves an element type to a style's paint function
pub type TrackPaintFunctionGetter = fn(TrackElemType) -> TrackPaintFunction;

/// Draws nothing and leaves the session untouched
pub fn track_paint_function_dummy(
    _session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    _direction: Direction,
    _height: i32,
    _element: &TrackElement,
    _support_type: SupportType,
) {
}

/// Getter for styles without their own function set
pub fn get_track_paint_function_null(_element: TrackElemType) -> TrackPaintFunction {
    track_paint_function_dummy
}

const PAINT_FUNCTION_MAP: [TrackPaintFunctionGetter; TrackStyle::COUNT] = [
    get_track_paint_function_null, // AirPoweredVerticalCoaster
    get_track_paint_function_null, // AlpineCoaster
    get_track_paint_function_null, // BobsleighCoaster
    get_track_paint_function_null, // BoatHire
    get_track_paint_function_null, // CarRide
    get_track_paint_function_null, // Chairlift
    get_track_paint_function_null, // Circus
    get_track_paint_function_null, // ClassicStandUpRollerCoaster
    get_track_paint_function_null, // ClassicWoodenRollerCoaster
    get_track_paint_function_null, // ClassicWoodenTwisterRollerCoaster
    compact_inverted::get_track_paint_function,
    get_track_paint_function_null, // CorkscrewRollerCoaster
    get_track_paint_function_null, // CrookedHouse
    get_track_paint_function_null, // DinghySlide
    get_track_paint_function_null, // DinghySlideCovered
    get_track_paint_function_null, // Dodgems
    get_track_paint_function_null, // Enterprise
    get_track_paint_function_null, // Facility
    get_track_paint_function_null, // FerrisWheel
    get_track_paint_function_null, // FlyingRollerCoaster
    get_track_paint_function_null, // FlyingRollerCoasterInverted
    get_track_paint_function_null, // FlyingSaucers
    ghost_train::get_track_paint_function,
    get_track_paint_function_null, // GoKarts
    get_track_paint_function_null, // HauntedHouse
    get_track_paint_function_null, // HeartlineTwisterCoaster
    get_track_paint_function_null, // HybridCoaster
    get_track_paint_function_null, // InvertedHairpinCoaster
    get_track_paint_function_null, // InvertedImpulseCoaster
    get_track_paint_function_null, // InvertedRollerCoaster
    get_track_paint_function_null, // JuniorRollerCoaster
    get_track_paint_function_null, // LaunchedFreefall
    get_track_paint_function_null, // LayDownRollerCoasterInverted
    get_track_paint_function_null, // Lift
    get_track_paint_function_null, // LimLaunchedRollerCoaster
    get_track_paint_function_null, // LogFlume
    get_track_paint_function_null, // LoopingRollerCoaster
    get_track_paint_function_null, // MagicCarpet
    get_track_paint_function_null, // Maze
    get_track_paint_function_null, // MerryGoRound
    get_track_paint_function_null, // MineRide
    get_track_paint_function_null, // MineTrainCoaster
    get_track_paint_function_null, // MiniGolf
    get_track_paint_function_null, // MiniHelicopters
    get_track_paint_function_null, // MiniRollerCoaster
    get_track_paint_function_null, // MiniSuspendedCoaster
    get_track_paint_function_null, // MiniatureRailway
    get_track_paint_function_null, // Monorail
    get_track_paint_function_null, // MonorailCycles
    get_track_paint_function_null, // MotionSimulator
    get_track_paint_function_null, // MultiDimensionRollerCoaster
    get_track_paint_function_null, // MultiDimensionRollerCoasterInverted
    get_track_paint_function_null, // ObservationTower
    get_track_paint_function_null, // ReverseFreefallCoaster
    get_track_paint_function_null, // ReverserRollerCoaster
    get_track_paint_function_null, // RiverRapids
    get_track_paint_function_null, // RotoDrop
    get_track_paint_function_null, // Shop
    get_track_paint_function_null, // SideFrictionRollerCoaster
    get_track_paint_function_null, // SingleRailRollerCoaster
    get_track_paint_function_null, // SpaceRings
    get_track_paint_function_null, // SpiralSlide
    get_track_paint_function_null, // SpinningWildMouse
    get_track_paint_function_null, // SplashBoats
    get_track_paint_function_null, // StandUpRollerCoaster
    get_track_paint_function_null, // SteelWildMouse
    get_track_paint_function_null, // Steeplechase
    get_track_paint_function_null, // SubmarineRide
    get_track_paint_function_null, // SuspendedMonorail
    get_track_paint_function_null, // SuspendedSwingingCoaster
    get_track_paint_function_null, // SwingingInverterShip
    get_track_paint_function_null, // SwingingShip
    get_track_paint_function_null, // Cinema3d
    get_track_paint_function_null, // TopSpin
    get_track_paint_function_null, // Twist
    get_track_paint_function_null, // TwisterRollerCoaster
    get_track_paint_function_null, // VerticalDropRollerCoaster
    get_track_paint_function_null, // VirginiaReel
    get_track_paint_function_null, // WaterCoaster
    get_track_paint_function_null, // WoodenRollerCoaster
    get_track_paint_function_null, // WoodenWildMouse
];

/// Resolve the paint function for an element drawn in `style`
///
/// Always returns a callable function; combinations without art resolve to
/// [`track_paint_function_dummy`].
pub fn get_track_paint_function(style: TrackStyle, element: TrackElemType) -> TrackPaintFunction {
    let getter = match style.table_index() {
        Some(index) => PAINT_FUNCTION_MAP[index],
        None => get_track_paint_function_null,
    };
    getter(element)
}

/// Resolve from a raw stored style value
pub fn get_track_paint_function_raw(style: u8, element: TrackElemType) -> TrackPaintFunction {
    match TrackStyle::from_u8(style) {
        Some(style) => get_track_paint_function(style, element),
        None => {
            log::warn!("Track style {} is out of range, drawing nothing", style);
            debug_assert!(false, "track style {style} is out of range");
            track_paint_function_dummy
        }
    }
}
