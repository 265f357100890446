//! Viewport paint settings

use std::fmt;
use std::str::FromStr;

use funfair_world::RideId;

use crate::error::{PaintError, PaintResult};

/// Parse a view rotation, 0 to 3
pub fn parse_rotation(value: &str) -> PaintResult<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|rotation| *rotation < 4)
        .ok_or_else(|| PaintError::InvalidRotation(value.to_string()))
}

/// Unit shown on track height markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightUnit {
    /// Raw height units
    #[default]
    Units,
    Metres,
    Feet,
}

impl HeightUnit {
    /// Offset into the height marker sprite range, one block of 256 per unit
    pub const fn marker_offset(self) -> u32 {
        match self {
            HeightUnit::Units => 0,
            HeightUnit::Metres => 256,
            HeightUnit::Feet => 512,
        }
    }
}

impl FromStr for HeightUnit {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "units" | "u" => Ok(HeightUnit::Units),
            "metres" | "meters" | "m" => Ok(HeightUnit::Metres),
            "feet" | "ft" => Ok(HeightUnit::Feet),
            _ => Err(PaintError::UnknownHeightUnit(s.to_string())),
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeightUnit::Units => "units",
            HeightUnit::Metres => "metres",
            HeightUnit::Feet => "feet",
        };
        f.write_str(name)
    }
}

/// Viewport display options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintConfig {
    pub height_unit: HeightUnit,
    /// Draw height markers on track
    pub show_track_heights: bool,
    pub invisible_supports: bool,
    pub see_through_supports: bool,
    pub see_through_rides: bool,
    /// Only this ride's track is drawn, as when saving a track design
    pub track_design_save_ride: Option<RideId>,
    /// Dim everything except path problems
    pub highlight_path_issues: bool,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            height_unit: HeightUnit::Units,
            show_track_heights: false,
            invisible_supports: false,
            see_through_supports: false,
            see_through_rides: false,
            track_design_save_ride: None,
            highlight_path_issues: false,
        }
    }
}

/// Per-viewport view flag bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewFlags(u32);

impl ViewFlags {
    pub const NONE: ViewFlags = ViewFlags(0);
    pub const TRACK_HEIGHTS: ViewFlags = ViewFlags(1 << 0);
    pub const INVISIBLE_SUPPORTS: ViewFlags = ViewFlags(1 << 1);
    pub const SEE_THROUGH_SUPPORTS: ViewFlags = ViewFlags(1 << 2);
    pub const SEE_THROUGH_RIDES: ViewFlags = ViewFlags(1 << 3);
    pub const HIGHLIGHT_PATH_ISSUES: ViewFlags = ViewFlags(1 << 4);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: ViewFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: ViewFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: ViewFlags) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for ViewFlags {
    type Output = ViewFlags;

    fn bitor(self, rhs: ViewFlags) -> ViewFlags {
        ViewFlags(self.0 | rhs.0)
    }
}

impl From<&PaintConfig> for ViewFlags {
    fn from(config: &PaintConfig) -> Self {
        let mut flags = ViewFlags::NONE;
        if config.show_track_heights {
            flags.insert(ViewFlags::TRACK_HEIGHTS);
        }
        if config.invisible_supports {
            flags.insert(ViewFlags::INVISIBLE_SUPPORTS);
        }
        if config.see_through_supports {
            flags.insert(ViewFlags::SEE_THROUGH_SUPPORTS);
        }
        if config.see_through_rides {
            flags.insert(ViewFlags::SEE_THROUGH_RIDES);
        }
        if config.highlight_path_issues {
            flags.insert(ViewFlags::HIGHLIGHT_PATH_ISSUES);
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_flags() {
        let config = PaintConfig::default();
        assert_eq!(ViewFlags::from(&config), ViewFlags::NONE);
    }

    #[test]
    fn test_flags_from_config() {
        let config = PaintConfig {
            show_track_heights: true,
            invisible_supports: true,
            ..Default::default()
        };
        let flags = ViewFlags::from(&config);
        assert!(flags.contains(ViewFlags::TRACK_HEIGHTS));
        assert!(flags.contains(ViewFlags::INVISIBLE_SUPPORTS));
        assert!(!flags.contains(ViewFlags::SEE_THROUGH_RIDES));
        assert_eq!(flags.bits(), 0b11);
    }

    #[test]
    fn test_insert_remove() {
        let mut flags = ViewFlags::TRACK_HEIGHTS | ViewFlags::SEE_THROUGH_RIDES;
        flags.remove(ViewFlags::TRACK_HEIGHTS);
        assert_eq!(flags, ViewFlags::SEE_THROUGH_RIDES);
    }

    #[test]
    fn test_height_unit_parse() {
        assert_eq!("ft".parse::<HeightUnit>(), Ok(HeightUnit::Feet));
        assert_eq!("Metres".parse::<HeightUnit>(), Ok(HeightUnit::Metres));
        assert_eq!(
            "cubits".parse::<HeightUnit>(),
            Err(PaintError::UnknownHeightUnit("cubits".to_string()))
        );
        assert_eq!(HeightUnit::Feet.marker_offset(), 512);
    }

    #[test]
    fn test_parse_rotation() {
        assert_eq!(parse_rotation("0"), Ok(0));
        assert_eq!(parse_rotation(" 3"), Ok(3));
        assert_eq!(parse_rotation("4"), Err(PaintError::InvalidRotation("4".to_string())));
        assert_eq!(parse_rotation("-1"), Err(PaintError::InvalidRotation("-1".to_string())));
        assert_eq!(parse_rotation("north"), Err(PaintError::InvalidRotation("north".to_string())));
    }
}
