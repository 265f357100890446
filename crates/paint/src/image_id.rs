//! Sprite handles
//!
//! An `ImageId` names one sprite in the sprite sheet plus how it is coloured:
//! either remapped with up to three palette colours or drawn through a filter
//! palette (ghost, highlight, glass).

use funfair_world::Colour;
use serde::Serialize;
use std::fmt;

/// Index into the sprite sheet
pub type ImageIndex = u32;

/// Sentinel for "no image configured"
pub const IMAGE_INDEX_UNDEFINED: ImageIndex = u32::MAX;

/// A translucency palette applied instead of colour remapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FilterPaletteId(pub u8);

impl FilterPaletteId {
    /// Pieces being placed by the construction tool
    pub const GHOST: FilterPaletteId = FilterPaletteId(44);
    /// Selected or highlighted pieces
    pub const HIGHLIGHT: FilterPaletteId = FilterPaletteId(45);
    /// Supports when the view shows them see-through
    pub const SEE_THROUGH: FilterPaletteId = FilterPaletteId(46);
    /// First glass palette; one follows per colour
    pub const GLASS_BASE: u8 = 50;

    /// Glass palette tinted with a colour
    pub fn glass(colour: Colour) -> Self {
        Self(Self::GLASS_BASE + colour.as_u8())
    }
}

/// A sprite plus its colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageId {
    index: ImageIndex,
    primary: Option<Colour>,
    secondary: Option<Colour>,
    tertiary: Option<Colour>,
    filter: Option<FilterPaletteId>,
}

/// Template used while painting pieces under construction
pub const CONSTRUCTION_MARKER: ImageId = ImageId::filtered(0, FilterPaletteId::GHOST);

/// Template used while painting highlighted or selected pieces
pub const HIGHLIGHT_MARKER: ImageId = ImageId::filtered(0, FilterPaletteId::HIGHLIGHT);

impl ImageId {
    /// A plain sprite with no remapping
    pub const fn new(index: ImageIndex) -> Self {
        Self {
            index,
            primary: None,
            secondary: None,
            tertiary: None,
            filter: None,
        }
    }

    /// A sprite remapped with a primary colour
    pub const fn with_colour(index: ImageIndex, primary: Colour) -> Self {
        Self {
            index,
            primary: Some(primary),
            secondary: None,
            tertiary: None,
            filter: None,
        }
    }

    /// A sprite remapped with primary and secondary colours
    pub const fn with_colours(index: ImageIndex, primary: Colour, secondary: Colour) -> Self {
        Self {
            index,
            primary: Some(primary),
            secondary: Some(secondary),
            tertiary: None,
            filter: None,
        }
    }

    /// A sprite drawn through a filter palette
    pub const fn filtered(index: ImageIndex, filter: FilterPaletteId) -> Self {
        Self {
            index,
            primary: None,
            secondary: None,
            tertiary: None,
            filter: Some(filter),
        }
    }

    /// An image that draws nothing
    pub const fn undefined() -> Self {
        Self::new(IMAGE_INDEX_UNDEFINED)
    }

    pub const fn index(&self) -> ImageIndex {
        self.index
    }

    pub const fn is_undefined(&self) -> bool {
        self.index == IMAGE_INDEX_UNDEFINED
    }

    /// Same colouring, different sprite
    pub const fn with_index(self, index: ImageIndex) -> Self {
        Self { index, ..self }
    }

    /// Same colouring, sprite offset by `delta`
    pub const fn with_index_offset(self, delta: u32) -> Self {
        Self {
            index: self.index + delta,
            ..self
        }
    }

    pub const fn with_primary(self, colour: Colour) -> Self {
        Self {
            primary: Some(colour),
            filter: None,
            ..self
        }
    }

    pub const fn with_secondary(self, colour: Colour) -> Self {
        Self {
            secondary: Some(colour),
            filter: None,
            ..self
        }
    }

    pub const fn with_tertiary(self, colour: Colour) -> Self {
        Self {
            tertiary: Some(colour),
            ..self
        }
    }

    /// Replace any colouring with a filter palette
    pub const fn with_transparency(self, filter: FilterPaletteId) -> Self {
        Self {
            index: self.index,
            primary: None,
            secondary: None,
            tertiary: None,
            filter: Some(filter),
        }
    }

    pub const fn primary(&self) -> Option<Colour> {
        self.primary
    }

    pub const fn secondary(&self) -> Option<Colour> {
        self.secondary
    }

    pub const fn tertiary(&self) -> Option<Colour> {
        self.tertiary
    }

    pub const fn filter(&self) -> Option<FilterPaletteId> {
        self.filter
    }

    pub const fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub const fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    /// Drawn translucent through a filter palette
    pub const fn is_blended(&self) -> bool {
        self.filter.is_some()
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::undefined()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            return write!(f, "<none>");
        }
        write!(f, "#{}", self.index)?;
        if let Some(filter) = self.filter {
            write!(f, " filter={}", filter.0)?;
        }
        if let Some(p) = self.primary {
            write!(f, " p={}", p.0)?;
        }
        if let Some(s) = self.secondary {
            write!(f, " s={}", s.0)?;
        }
        if let Some(t) = self.tertiary {
            write!(f, " t={}", t.0)?;
        }
        Ok(())
    }
}
