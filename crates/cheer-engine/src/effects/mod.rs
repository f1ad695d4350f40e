//! Particle effects: catalog, emission, and the particle step.

mod rng;
mod palette;
mod particle;
mod catalog;
mod emitter;

pub use rng::Rng;
pub use palette::Palette;
pub use particle::{Particle, Shape};
pub use catalog::{
    EffectDef, EffectKind, ShapeMix, Spread,
    CONFETTI, EXPLOSION, GEMS, HEARTS, SPARKLES, STARS,
};
pub use emitter::spawn_burst;
