//! Funfair Paint
//!
//! The per-viewport paint session: sprite handles, the parent/child draw list,
//! segment and general support bookkeeping, tunnel edges, support painters and
//! occlusion ordering.

mod arrange;
mod config;
mod error;
mod image_id;
mod paint_struct;
mod segment;
mod session;
mod supports;
mod tunnel;

pub use config::{parse_rotation, HeightUnit, PaintConfig, ViewFlags};
pub use error::{PaintError, PaintResult};
pub use image_id::{
    FilterPaletteId, ImageId, ImageIndex, CONSTRUCTION_MARKER, HIGHLIGHT_MARKER,
    IMAGE_INDEX_UNDEFINED,
};
pub use paint_struct::{
    AttachedImage, BoundBoxXYZ, InteractionItem, PaintBoundBox, PaintKind, PaintRecord, PaintStruct,
    PaintStructId, ScreenCoordsXY,
};
pub use segment::{
    blocked, rotate_segments, segments, PaintSegment, SupportHeight, SEGMENTS_ALL, SEGMENT_B4,
    SEGMENT_B8, SEGMENT_BC, SEGMENT_C0, SEGMENT_C4, SEGMENT_C8, SEGMENT_CC, SEGMENT_D0, SEGMENT_D4,
    SUPPORT_HEIGHT_BLOCKED, SUPPORT_SLOPE_TRACK,
};
pub use session::{translate_3d_to_2d, ElementKey, PaintSession, PaintSnapshot};
pub use supports::{
    metal_a_supports_paint_setup, wooden_a_supports_paint_setup, MetalSupportPlace, SupportPost,
    SupportPostKind, WoodenSupportSubType, SUPPORT_PIECE_HEIGHT,
};
pub use tunnel::{TunnelEntry, TunnelGroup, TunnelList, TunnelSubType, MAX_TUNNELS};
