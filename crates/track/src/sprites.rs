//! Shared sprite sheet indices
//!
//! These index the fixed sprite sheet and must never be renumbered. Per-style
//! track sprites live next to the style that draws them.

use funfair_paint::ImageIndex;

// Station platforms
pub const SPR_STATION_PLATFORM_SW_NE: ImageIndex = 22362;
pub const SPR_STATION_PLATFORM_NW_SE: ImageIndex = 22363;
pub const SPR_STATION_PLATFORM_FENCED_SW_NE: ImageIndex = 22364;
pub const SPR_STATION_PLATFORM_FENCED_NW_SE: ImageIndex = 22365;
pub const SPR_STATION_PLATFORM_END_RED_LIGHT_SW_NE: ImageIndex = 22366;
pub const SPR_STATION_PLATFORM_END_RED_LIGHT_NW_SE: ImageIndex = 22367;
pub const SPR_STATION_PLATFORM_END_GREEN_LIGHT_SW_NE: ImageIndex = 22368;
pub const SPR_STATION_PLATFORM_END_GREEN_LIGHT_NW_SE: ImageIndex = 22369;
pub const SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_SW_NE: ImageIndex = 22370;
pub const SPR_STATION_PLATFORM_FENCED_END_RED_LIGHT_NW_SE: ImageIndex = 22371;
pub const SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_SW_NE: ImageIndex = 22372;
pub const SPR_STATION_PLATFORM_FENCED_END_GREEN_LIGHT_NW_SE: ImageIndex = 22373;
pub const SPR_STATION_PLATFORM_BEGIN_SW_NE: ImageIndex = 22374;
pub const SPR_STATION_PLATFORM_BEGIN_NW_SE: ImageIndex = 22375;

// Station fences
pub const SPR_STATION_FENCE_SW_NE: ImageIndex = 22376;
pub const SPR_STATION_FENCE_NW_SE: ImageIndex = 22377;
pub const SPR_STATION_BEGIN_ANGLE_FENCE_SW_NE: ImageIndex = 22378;
pub const SPR_STATION_BEGIN_ANGLE_FENCE_NW_SE: ImageIndex = 22379;
pub const SPR_STATION_FENCE_SMALL_NW_SE: ImageIndex = 22380;
pub const SPR_STATION_FENCE_SMALL_SW_NE: ImageIndex = 22381;

// Station bases under the track
pub const SPR_STATION_BASE_A_SW_NE: ImageIndex = 22382;
pub const SPR_STATION_BASE_A_NW_SE: ImageIndex = 22383;
pub const SPR_STATION_BASE_B_SW_NE: ImageIndex = 22384;
pub const SPR_STATION_BASE_B_NW_SE: ImageIndex = 22385;

// Bars that hang inverted track from the station roof
pub const SPR_STATION_INVERTED_BAR_A_SW_NE: ImageIndex = 22386;
pub const SPR_STATION_INVERTED_BAR_A_NW_SE: ImageIndex = 22387;

// Offsets into a station object's shelter images
pub const SPR_STATION_COVER_OFFSET_NE_SW_BACK_0: ImageIndex = 0;
pub const SPR_STATION_COVER_OFFSET_NE_SW_BACK_1: ImageIndex = 1;
pub const SPR_STATION_COVER_OFFSET_NE_SW_FRONT: ImageIndex = 2;
pub const SPR_STATION_COVER_OFFSET_SE_NW_BACK_0: ImageIndex = 3;
pub const SPR_STATION_COVER_OFFSET_SE_NW_BACK_1: ImageIndex = 4;
pub const SPR_STATION_COVER_OFFSET_SE_NW_FRONT: ImageIndex = 5;
pub const SPR_STATION_COVER_OFFSET_TALL: ImageIndex = 6;
/// Glass overlays follow the opaque shelter images
pub const SPR_STATION_COVER_OFFSET_GLASS: ImageIndex = 12;

// Height markers: one block of 256 per unit, indexed by height in land steps
pub const SPR_HEIGHT_MARKER_BASE: ImageIndex = 21409;

// On-ride photo
pub const SPR_ON_RIDE_PHOTO_SIGN_SW_NE: ImageIndex = 25615;
pub const SPR_ON_RIDE_PHOTO_SIGN_NW_SE: ImageIndex = 25616;
pub const SPR_ON_RIDE_PHOTO_SIGN_NE_SW: ImageIndex = 25617;
pub const SPR_ON_RIDE_PHOTO_SIGN_SE_NW: ImageIndex = 25618;
pub const SPR_ON_RIDE_PHOTO_CAMERA_S: ImageIndex = 25619;
pub const SPR_ON_RIDE_PHOTO_CAMERA_W: ImageIndex = 25620;
pub const SPR_ON_RIDE_PHOTO_CAMERA_N: ImageIndex = 25621;
pub const SPR_ON_RIDE_PHOTO_CAMERA_E: ImageIndex = 25622;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_S: ImageIndex = 25623;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_W: ImageIndex = 25624;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_N: ImageIndex = 25625;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_E: ImageIndex = 25626;
pub const SPR_ON_RIDE_PHOTO_SIGN_SMALL_SW_NE: ImageIndex = 25627;
pub const SPR_ON_RIDE_PHOTO_SIGN_SMALL_NW_SE: ImageIndex = 25628;
pub const SPR_ON_RIDE_PHOTO_SIGN_SMALL_NE_SW: ImageIndex = 25629;
pub const SPR_ON_RIDE_PHOTO_SIGN_SMALL_SE_NW: ImageIndex = 25630;
pub const SPR_ON_RIDE_PHOTO_CAMERA_SMALL_S: ImageIndex = 25631;
pub const SPR_ON_RIDE_PHOTO_CAMERA_SMALL_W: ImageIndex = 25632;
pub const SPR_ON_RIDE_PHOTO_CAMERA_SMALL_N: ImageIndex = 25633;
pub const SPR_ON_RIDE_PHOTO_CAMERA_SMALL_E: ImageIndex = 25634;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_SMALL_S: ImageIndex = 25635;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_SMALL_W: ImageIndex = 25636;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_SMALL_N: ImageIndex = 25637;
pub const SPR_ON_RIDE_PHOTO_CAMERA_FLASH_SMALL_E: ImageIndex = 25638;

// Ghost train spinning tunnel: [axis][back, front][frame]
pub const SPR_GHOST_TRAIN_SPINNING_TUNNEL: [[[ImageIndex; 4]; 2]; 2] = [
    [[28871, 28872, 28873, 28874], [28875, 28876, 28877, 28878]],
    [[28879, 28880, 28881, 28882], [28883, 28884, 28885, 28886]],
];
