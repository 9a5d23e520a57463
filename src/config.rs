//! Hexasphere Configuration and Builder
//!
//! This module provides configuration types for deterministic hexasphere construction.
//! The topology is decided entirely by the division count; radius and hex size only
//! change where the geometry lands.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{HexasphereError, Result};

/// Largest division count accepted by the builder
///
/// 512 divisions yields 2,621,442 tiles, which is already a multi-gigabyte build.
pub const MAX_DIVISIONS: usize = 512;

/// Number of tiles produced by a given division count: `10 * d^2 + 2`
///
/// Exactly 12 of them are pentagons, the rest are hexagons.
#[inline]
pub fn expected_tile_count(divisions: usize) -> usize {
    10 * divisions * divisions + 2
}

/// Globe size presets
///
/// Each preset maps to a division count. Doubling the divisions roughly
/// quadruples the tile count.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobeSize {
    /// 1 division: the 12 icosahedron pentagons and nothing else
    Pentagons,
    /// 2 divisions: one hexagon between each pair of pentagons (42 tiles)
    Tiny,
    /// 4 divisions: 162 tiles
    Small,
    /// 8 divisions: 642 tiles
    Medium,
    /// 16 divisions: 2,562 tiles (default)
    Large,
    /// 64 divisions: 40,962 tiles
    World,
    /// Explicit division count
    Custom(usize),
}

impl GlobeSize {
    /// Get the division count for this preset
    pub fn divisions(self) -> usize {
        match self {
            GlobeSize::Pentagons => 1,
            GlobeSize::Tiny => 2,
            GlobeSize::Small => 4,
            GlobeSize::Medium => 8,
            GlobeSize::Large => 16,
            GlobeSize::World => 64,
            GlobeSize::Custom(divisions) => divisions,
        }
    }

    /// Get the tile count this preset produces
    pub fn tile_count(self) -> usize {
        expected_tile_count(self.divisions())
    }

    /// Get a human-readable name for this preset
    pub fn name(self) -> &'static str {
        match self {
            GlobeSize::Pentagons => "Pentagons",
            GlobeSize::Tiny => "Tiny",
            GlobeSize::Small => "Small",
            GlobeSize::Medium => "Medium",
            GlobeSize::Large => "Large",
            GlobeSize::World => "World",
            GlobeSize::Custom(_) => "Custom",
        }
    }
}

impl Default for GlobeSize {
    fn default() -> Self {
        GlobeSize::Large
    }
}

/// Configuration for hexasphere construction
///
/// The same configuration always produces the identical tile set, with tile IDs
/// assigned in the same order.
///
/// # Example
///
/// ```rust
/// use hexasphere_life::*;
///
/// let config = HexasphereConfig::new(1.0, 4, 0.9).unwrap();
/// assert_eq!(config.tile_count(), 162);
///
/// assert!(HexasphereConfig::new(1.0, 0, 0.9).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexasphereConfig {
    /// Sphere radius in world units; every tile centre and boundary vertex lands on it
    pub radius: f64,

    /// Number of times each icosahedron edge is split
    pub divisions: usize,

    /// Fraction in `(0, 1]` of the way from the tile centre to each face centroid
    /// at which boundary vertices are placed
    ///
    /// - 1.0: tiles touch their neighbours
    /// - 0.9: visible gaps between tiles
    pub hex_size: f64,
}

impl HexasphereConfig {
    /// Create and validate a configuration in one call
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when any argument is out of range.
    pub fn new(radius: f64, divisions: usize, hex_size: f64) -> Result<Self> {
        HexasphereConfigBuilder::new()
            .radius(radius)?
            .divisions(divisions)?
            .hex_size(hex_size)?
            .build()
    }

    /// Get the tile count this configuration will produce
    #[inline]
    pub fn tile_count(&self) -> usize {
        expected_tile_count(self.divisions)
    }

    /// Re-check every field
    ///
    /// Fields are public, so a configuration can be edited after building.
    pub fn validate(&self) -> Result<()> {
        validate_radius(self.radius)?;
        validate_divisions(self.divisions)?;
        validate_hex_size(self.hex_size)?;
        Ok(())
    }
}

impl Default for HexasphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            divisions: GlobeSize::default().divisions(),
            hex_size: 1.0,
        }
    }
}

fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(HexasphereError::InvalidConfig(format!(
            "radius must be positive and finite (got {})",
            radius
        )));
    }
    Ok(())
}

fn validate_divisions(divisions: usize) -> Result<()> {
    if !(1..=MAX_DIVISIONS).contains(&divisions) {
        return Err(HexasphereError::InvalidConfig(format!(
            "divisions must be in 1..={} (got {})",
            MAX_DIVISIONS, divisions
        )));
    }
    Ok(())
}

fn validate_hex_size(hex_size: f64) -> Result<()> {
    if !(hex_size > 0.0 && hex_size <= 1.0) {
        return Err(HexasphereError::InvalidConfig(format!(
            "hex size must be in (0, 1] (got {})",
            hex_size
        )));
    }
    Ok(())
}

/// Builder for creating HexasphereConfig with validation
///
/// # Example
///
/// ```rust
/// use hexasphere_life::*;
///
/// // Use defaults
/// let config = HexasphereConfigBuilder::new().build().unwrap();
/// assert_eq!(config.divisions, 16);
///
/// // Customize
/// let config = HexasphereConfigBuilder::new()
///     .globe_size(GlobeSize::Small)
///     .radius(6371.0)
///     .unwrap()
///     .hex_size(0.95)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(config.divisions, 4);
/// ```
#[derive(Debug, Clone)]
pub struct HexasphereConfigBuilder {
    radius: f64,
    divisions: usize,
    hex_size: f64,
}

impl HexasphereConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - radius: 1.0
    /// - divisions: 16 (`GlobeSize::Large`, 2,562 tiles)
    /// - hex_size: 1.0 (tiles touch)
    pub fn new() -> Self {
        let defaults = HexasphereConfig::default();
        Self {
            radius: defaults.radius,
            divisions: defaults.divisions,
            hex_size: defaults.hex_size,
        }
    }

    /// Set the sphere radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius is not a positive finite number
    pub fn radius(mut self, radius: f64) -> Result<Self> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(self)
    }

    /// Set the division count directly
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if divisions is 0 or above `MAX_DIVISIONS`
    pub fn divisions(mut self, divisions: usize) -> Result<Self> {
        validate_divisions(divisions)?;
        self.divisions = divisions;
        Ok(self)
    }

    /// Set the division count from a preset
    ///
    /// `GlobeSize::Custom` values are checked in `build()`.
    pub fn globe_size(mut self, size: GlobeSize) -> Self {
        self.divisions = size.divisions();
        self
    }

    /// Set the hex size fraction
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if hex size is outside `(0, 1]`
    pub fn hex_size(mut self, hex_size: f64) -> Result<Self> {
        validate_hex_size(hex_size)?;
        self.hex_size = hex_size;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<HexasphereConfig> {
        let config = HexasphereConfig {
            radius: self.radius,
            divisions: self.divisions,
            hex_size: self.hex_size,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for HexasphereConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_globe_size_divisions() {
        assert_eq!(GlobeSize::Pentagons.divisions(), 1);
        assert_eq!(GlobeSize::Tiny.divisions(), 2);
        assert_eq!(GlobeSize::Small.divisions(), 4);
        assert_eq!(GlobeSize::Medium.divisions(), 8);
        assert_eq!(GlobeSize::Large.divisions(), 16);
        assert_eq!(GlobeSize::World.divisions(), 64);
        assert_eq!(GlobeSize::Custom(144).divisions(), 144);
        assert_eq!(GlobeSize::Custom(144).name(), "Custom");
    }

    #[test]
    fn test_globe_size_tile_counts() {
        assert_eq!(GlobeSize::Pentagons.tile_count(), 12);
        assert_eq!(GlobeSize::Tiny.tile_count(), 42);
        assert_eq!(GlobeSize::Small.tile_count(), 162);
        assert_eq!(GlobeSize::Medium.tile_count(), 642);
        assert_eq!(GlobeSize::Large.tile_count(), 2562);
        assert_eq!(GlobeSize::World.tile_count(), 40962);
    }

    #[test]
    fn test_builder_defaults() {
        let config = HexasphereConfigBuilder::new().build().unwrap();
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.divisions, 16);
        assert_eq!(config.hex_size, 1.0);
        assert_eq!(config, HexasphereConfig::default());
    }

    #[test]
    fn test_builder_custom() {
        let config = HexasphereConfigBuilder::new()
            .radius(10.0)
            .unwrap()
            .divisions(3)
            .unwrap()
            .hex_size(0.5)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.radius, 10.0);
        assert_eq!(config.divisions, 3);
        assert_eq!(config.hex_size, 0.5);
        assert_eq!(config.tile_count(), 92);
    }

    #[test]
    fn test_invalid_divisions() {
        assert!(HexasphereConfigBuilder::new().divisions(0).is_err());
        assert!(HexasphereConfigBuilder::new()
            .divisions(MAX_DIVISIONS + 1)
            .is_err());
        assert!(HexasphereConfigBuilder::new()
            .globe_size(GlobeSize::Custom(0))
            .build()
            .is_err());
    }

    #[test]
    fn test_invalid_radius() {
        assert!(HexasphereConfigBuilder::new().radius(0.0).is_err());
        assert!(HexasphereConfigBuilder::new().radius(-5.0).is_err());
        assert!(HexasphereConfigBuilder::new().radius(f64::NAN).is_err());
        assert!(HexasphereConfigBuilder::new().radius(f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_hex_size() {
        assert!(HexasphereConfigBuilder::new().hex_size(0.0).is_err());
        assert!(HexasphereConfigBuilder::new().hex_size(1.01).is_err());
        assert!(HexasphereConfigBuilder::new().hex_size(f64::NAN).is_err());
        assert!(HexasphereConfigBuilder::new().hex_size(1.0).is_ok());
    }

    #[test]
    fn test_validate_catches_edited_fields() {
        let mut config = HexasphereConfig::default();
        config.divisions = 0;
        assert!(matches!(
            config.validate(),
            Err(HexasphereError::InvalidConfig(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = HexasphereConfig::new(2.5, 8, 0.9).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: HexasphereConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
