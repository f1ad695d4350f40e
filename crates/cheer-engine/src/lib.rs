//! Particle engine for celebration effects.
//!
//! Bursts of confetti, stars, gems, hearts, sparkles, and explosions are
//! simulated with simple per-frame Euler steps and painted through a
//! [`DrawingSurface`]. The host supplies the surface, viewport size, and
//! frame scheduling via [`Platform`]; the engine runs its loop only while
//! particles are live.

pub mod error;
pub mod config;
pub mod effects;
pub mod renderer;
pub mod host;
pub mod engine;
pub mod presets;
pub mod headless;

// Re-export key types at crate root for convenience
pub use error::{EngineError, Result};
pub use config::{EngineConfig, DEFAULT_SEED};
pub use effects::{EffectDef, EffectKind, Palette, Particle, Rng, Shape, ShapeMix, Spread};
pub use renderer::{DrawingSurface, VectorColor, VectorSurface, VectorVertex};
pub use host::{FrameHandle, ListenerId, Platform};
pub use engine::{EngineState, ParticleEngine};
pub use presets::{Burst, Celebration, Rarity, Sequencer};
pub use headless::{HeadlessHost, HeadlessPlatform};
