//! Static catalog of selectable celestial bodies.
//!
//! Each body is a fixed profile of physical constants and visual colors.
//! Profiles are never mutated; exactly one body is active at a time.

use bevy::prelude::*;
use thiserror::Error;

/// Error for body lookups by key.
///
/// Only the enumerated keys are reachable through the UI, so in normal
/// operation this never fires; it exists for the programmatic contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown body key: {0}")]
    UnknownBody(String),
}

/// Identifier for a selectable celestial body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Earth,
    Moon,
    Mars,
    Jupiter,
}

impl BodyId {
    /// All bodies in UI order.
    pub const ALL: &'static [BodyId] = &[BodyId::Earth, BodyId::Moon, BodyId::Mars, BodyId::Jupiter];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        profile(*self).name
    }

    /// Parse a lowercase selection key.
    pub fn from_key(key: &str) -> Result<BodyId, CatalogError> {
        match key {
            "earth" => Ok(BodyId::Earth),
            "moon" => Ok(BodyId::Moon),
            "mars" => Ok(BodyId::Mars),
            "jupiter" => Ok(BodyId::Jupiter),
            other => Err(CatalogError::UnknownBody(other.to_string())),
        }
    }
}

/// Immutable physical and visual profile of a celestial body.
#[derive(Clone, Debug)]
pub struct BodyProfile {
    pub id: BodyId,
    pub name: &'static str,
    /// Mean radius in kilometers (display only).
    pub radius_km: f64,
    /// Surface gravitational acceleration in m/s².
    pub surface_gravity: f64,
    /// Atmospheric density at the surface in kg/m³; 0.0 if airless.
    pub atmosphere_density: f64,
    /// Tint used for the selector swatch.
    pub base_color: Color,
    /// Ground material color.
    pub surface_color: Color,
    /// Atmosphere shell color, if the body has an atmosphere.
    pub atmosphere_color: Option<Color>,
    /// One-line flavor text shown under the selector.
    pub description: &'static str,
}

impl BodyProfile {
    pub fn has_atmosphere(&self) -> bool {
        self.atmosphere_density > 0.0
    }
}

/// Look up the fixed profile for a body. Pure table, no behavior.
pub fn profile(id: BodyId) -> &'static BodyProfile {
    match id {
        BodyId::Earth => &EARTH,
        BodyId::Moon => &MOON,
        BodyId::Mars => &MARS,
        BodyId::Jupiter => &JUPITER,
    }
}

static EARTH: BodyProfile = BodyProfile {
    id: BodyId::Earth,
    name: "Earth",
    radius_km: 6371.0,
    surface_gravity: 9.81,
    atmosphere_density: 1.225,
    base_color: Color::srgb_u8(0x6B, 0x93, 0xD6),
    surface_color: Color::srgb_u8(0x4A, 0x5D, 0x23),
    atmosphere_color: Some(Color::srgb_u8(0x87, 0xCE, 0xEB)),
    description: "The Blue Planet - our home world",
};

static MOON: BodyProfile = BodyProfile {
    id: BodyId::Moon,
    name: "Moon",
    radius_km: 1737.0,
    surface_gravity: 1.62,
    atmosphere_density: 0.0,
    base_color: Color::srgb_u8(0xC0, 0xC0, 0xC0),
    surface_color: Color::srgb_u8(0x96, 0x96, 0x96),
    atmosphere_color: None,
    description: "Earth's natural satellite - airless and cratered",
};

static MARS: BodyProfile = BodyProfile {
    id: BodyId::Mars,
    name: "Mars",
    radius_km: 3389.0,
    surface_gravity: 3.71,
    atmosphere_density: 0.020,
    base_color: Color::srgb_u8(0xCD, 0x5C, 0x5C),
    surface_color: Color::srgb_u8(0x8B, 0x45, 0x13),
    atmosphere_color: Some(Color::srgb_u8(0xFF, 0xA0, 0x7A)),
    description: "The Red Planet - rusty and mysterious",
};

static JUPITER: BodyProfile = BodyProfile {
    id: BodyId::Jupiter,
    name: "Jupiter",
    radius_km: 69911.0,
    surface_gravity: 24.79,
    atmosphere_density: 0.16,
    base_color: Color::srgb_u8(0xFF, 0xA5, 0x00),
    surface_color: Color::srgb_u8(0xDA, 0xA5, 0x20),
    atmosphere_color: Some(Color::srgb_u8(0xFF, 0xD7, 0x00)),
    description: "The Gas Giant - massive and stormy",
};

/// Resource tracking the currently selected body.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveBody(pub BodyId);

impl Default for ActiveBody {
    fn default() -> Self {
        ActiveBody(BodyId::Earth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_matches_id() {
        for &id in BodyId::ALL {
            assert_eq!(profile(id).id, id);
        }
    }

    #[test]
    fn test_moon_is_airless() {
        let moon = profile(BodyId::Moon);
        assert!(!moon.has_atmosphere());
        assert_eq!(moon.atmosphere_density, 0.0);
        assert!(moon.atmosphere_color.is_none());
    }

    #[test]
    fn test_atmospheric_bodies_have_colors() {
        for &id in BodyId::ALL {
            let p = profile(id);
            assert_eq!(p.has_atmosphere(), p.atmosphere_color.is_some());
        }
    }

    #[test]
    fn test_gravity_values() {
        assert_eq!(profile(BodyId::Earth).surface_gravity, 9.81);
        assert_eq!(profile(BodyId::Moon).surface_gravity, 1.62);
        assert_eq!(profile(BodyId::Mars).surface_gravity, 3.71);
        assert_eq!(profile(BodyId::Jupiter).surface_gravity, 24.79);
    }

    #[test]
    fn test_from_key_round_trips() {
        assert_eq!(BodyId::from_key("earth"), Ok(BodyId::Earth));
        assert_eq!(BodyId::from_key("moon"), Ok(BodyId::Moon));
        assert_eq!(BodyId::from_key("mars"), Ok(BodyId::Mars));
        assert_eq!(BodyId::from_key("jupiter"), Ok(BodyId::Jupiter));
    }

    #[test]
    fn test_from_key_rejects_unknown() {
        let err = BodyId::from_key("pluto").unwrap_err();
        assert_eq!(err, CatalogError::UnknownBody("pluto".to_string()));
    }

    #[test]
    fn test_default_selection_is_earth() {
        assert_eq!(ActiveBody::default().0, BodyId::Earth);
    }
}
