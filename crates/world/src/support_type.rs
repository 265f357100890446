//! Structural support families

use serde::{Deserialize, Serialize};

/// Metal support art families
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MetalSupportType {
    #[default]
    Tubes = 0,
    Fork = 1,
    ForkAlt = 2,
    Boxed = 3,
    Stick = 4,
    StickAlt = 5,
    ThickCentred = 6,
    Thick = 7,
    ThickAlt = 8,
    ThickAltCentred = 9,
    Truss = 10,
    TubesInverted = 11,
    BoxedCoated = 12,
}

impl MetalSupportType {
    pub const COUNT: u8 = 13;

    pub fn from_u8(value: u8) -> Option<Self> {
        use MetalSupportType::*;
        Some(match value {
            0 => Tubes,
            1 => Fork,
            2 => ForkAlt,
            3 => Boxed,
            4 => Stick,
            5 => StickAlt,
            6 => ThickCentred,
            7 => Thick,
            8 => ThickAlt,
            9 => ThickAltCentred,
            10 => Truss,
            11 => TubesInverted,
            12 => BoxedCoated,
            _ => return None,
        })
    }
}

/// Wooden support art families
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WoodenSupportType {
    #[default]
    Truss = 0,
    Mine = 1,
}

impl WoodenSupportType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(WoodenSupportType::Truss),
            1 => Some(WoodenSupportType::Mine),
            _ => None,
        }
    }
}

/// Support family handed to a track paint function
///
/// A ride's track drawer names either a metal or a wooden family; the paint
/// function reads whichever one its style draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportType {
    Metal(MetalSupportType),
    Wooden(WoodenSupportType),
}

impl SupportType {
    /// Metal family, reinterpreting a wooden family by its raw value
    pub fn metal(self) -> MetalSupportType {
        match self {
            SupportType::Metal(metal) => metal,
            SupportType::Wooden(wooden) => {
                MetalSupportType::from_u8(wooden as u8).unwrap_or_default()
            }
        }
    }

    /// Wooden family, reinterpreting a metal family by its raw value
    pub fn wooden(self) -> WoodenSupportType {
        match self {
            SupportType::Wooden(wooden) => wooden,
            SupportType::Metal(metal) => {
                WoodenSupportType::from_u8(metal as u8).unwrap_or_default()
            }
        }
    }
}

impl Default for SupportType {
    fn default() -> Self {
        SupportType::Metal(MetalSupportType::default())
    }
}

impl From<MetalSupportType> for SupportType {
    fn from(metal: MetalSupportType) -> Self {
        SupportType::Metal(metal)
    }
}

impl From<WoodenSupportType> for SupportType {
    fn from(wooden: WoodenSupportType) -> Self {
        SupportType::Wooden(wooden)
    }
}
