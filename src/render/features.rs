//! Procedural surface decoration for the planet spheres.
//!
//! Replaces per-pixel texture painting with randomly placed mesh
//! features: embedded patch domes (oceans, rocks, craters) and latitude
//! bands for the gas giant. Presentation-only; carries no simulation
//! semantics.

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::{profile, BodyId};

/// Jupiter's sandy secondary band color.
const JUPITER_SAND: Color = Color::srgb_u8(0xF4, 0xA4, 0x60);

/// Number of latitude bands painted onto the gas giant.
const JUPITER_BAND_COUNT: usize = 16;

/// A single decorative feature on the planet surface.
#[derive(Clone, Debug)]
pub enum SurfaceFeature {
    /// A dome embedded at a point on the sphere: ocean, rock, or crater.
    Patch {
        /// Unit direction from the planet center to the patch.
        direction: Vec3,
        /// Patch sphere radius in render units.
        radius: f32,
        color: Color,
    },
    /// A horizontal band wrapped around the sphere at a given height.
    Band {
        /// Height above the planet center, within (-radius, radius).
        height: f32,
        /// Half the band thickness in render units.
        half_thickness: f32,
        color: Color,
    },
}

/// The ground material color for a body's surface sphere.
pub fn ground_color(id: BodyId) -> Color {
    let body = profile(id);
    match id {
        // Earth's sphere is land-green with blue ocean patches
        BodyId::Earth => body.surface_color,
        // The others use the body tint as ground with darker features
        BodyId::Moon | BodyId::Mars | BodyId::Jupiter => body.base_color,
    }
}

/// Generate the decorative feature set for a body.
///
/// Patch placement is random per rebuild; counts and palettes are fixed
/// per body.
pub fn surface_features(id: BodyId, planet_radius: f32) -> Vec<SurfaceFeature> {
    let body = profile(id);
    let mut rng = rand::thread_rng();

    match id {
        BodyId::Earth => random_patches(&mut rng, 20, 50.0..150.0, body.base_color),
        BodyId::Mars => random_patches(&mut rng, 50, 10.0..40.0, body.surface_color),
        BodyId::Moon => random_patches(&mut rng, 30, 5.0..25.0, body.surface_color),
        BodyId::Jupiter => {
            // Alternating latitude bands, evenly spaced between the poles
            let span = planet_radius * 0.9;
            (0..JUPITER_BAND_COUNT)
                .map(|i| {
                    let t = i as f32 / (JUPITER_BAND_COUNT - 1) as f32;
                    SurfaceFeature::Band {
                        height: -span + 2.0 * span * t,
                        half_thickness: planet_radius * 0.025,
                        color: if i % 2 == 0 {
                            body.surface_color
                        } else {
                            JUPITER_SAND
                        },
                    }
                })
                .collect()
        }
    }
}

fn random_patches(
    rng: &mut impl Rng,
    count: usize,
    radius_range: std::ops::Range<f32>,
    color: Color,
) -> Vec<SurfaceFeature> {
    (0..count)
        .map(|_| SurfaceFeature::Patch {
            direction: random_unit_vector(rng),
            radius: rng.gen_range(radius_range.clone()),
            color,
        })
        .collect()
}

/// Uniform random direction on the unit sphere.
fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    let phi = (rng.gen_range(-1.0f32..1.0)).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}
