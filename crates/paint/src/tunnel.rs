//! Tunnel edge markers
//!
//! Track that runs into terrain records a tunnel entry on the tile edge it
//! crosses. Terrain painting later cuts a tunnel mouth of the recorded shape
//! at the recorded height.

use serde::Serialize;
use smallvec::SmallVec;

/// Tunnel cross-section family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TunnelGroup {
    Standard,
    Square,
    Inverted,
    Doors,
}

/// Tunnel mouth shape within a family, chosen by slope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TunnelSubType {
    Flat,
    SlopeStart,
    SlopeEnd,
    FlatTo25Deg,
    Tall,
}

/// A recorded tunnel mouth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TunnelEntry {
    /// Height in 16-unit steps
    pub height: u8,
    pub group: TunnelGroup,
    pub subtype: TunnelSubType,
}

impl TunnelEntry {
    pub fn new(height: i32, group: TunnelGroup, subtype: TunnelSubType) -> Self {
        Self {
            height: (height / 16).clamp(0, u8::MAX as i32) as u8,
            group,
            subtype,
        }
    }
}

/// Tunnels recorded on one tile edge
pub type TunnelList = SmallVec<[TunnelEntry; 4]>;

/// Upper bound on tunnels per edge per tile
pub const MAX_TUNNELS: usize = 65;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_height_in_steps() {
        let t = TunnelEntry::new(48, TunnelGroup::Standard, TunnelSubType::Flat);
        assert_eq!(t.height, 3);
        let t = TunnelEntry::new(-8, TunnelGroup::Square, TunnelSubType::SlopeStart);
        assert_eq!(t.height, 0);
    }
}
