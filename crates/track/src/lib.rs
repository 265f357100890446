//! Funfair Track
//!
//! Track piece painting: the style dispatch table, the per-style paint
//! functions, the shared track paint utilities and the tile walker that feeds
//! them.

mod dispatch;
mod paint_track;
pub mod sprites;
pub mod styles;
mod tile;
pub mod util;

pub use dispatch::{
    get_track_paint_function, get_track_paint_function_null, get_track_paint_function_raw,
    track_paint_function_dummy, TrackPaintFunction, TrackPaintFunctionGetter,
};
pub use paint_track::paint_track;
pub use tile::{paint_park, paint_tile};
