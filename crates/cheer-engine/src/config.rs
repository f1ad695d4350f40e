//! Engine configuration.
//!
//! Every field has a default, so hosts only need to supply what they tune:
//!
//! ```json
//! { "alpha_decay": 0.02, "effects": { "hearts": { ... } } }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::effects::{EffectDef, EffectKind};
use crate::error::{EngineError, Result};

/// Seed used when neither the config nor the host picks one.
pub const DEFAULT_SEED: u64 = 42;

/// Tunable engine parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Opacity lost per tick (default: 0.01, i.e. 100 ticks of life).
    pub alpha_decay: f32,
    /// Distance below the surface's bottom edge at which particles are culled (default: 50).
    pub offscreen_margin: f32,
    /// Upper bound on live particles (default: 4096).
    pub max_particles: usize,
    /// RNG seed for burst generation. Unset means [`DEFAULT_SEED`] unless
    /// the host supplies its own via [`EngineConfig::with_default_seed`].
    pub seed: Option<u64>,
    /// Console log level for hosts that install a logger (default: "info").
    pub log_level: String,
    /// Per-effect overrides of the built-in catalog.
    pub effects: HashMap<EffectKind, EffectDef>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha_decay: 0.01,
            offscreen_margin: 50.0,
            max_particles: 4096,
            seed: None,
            log_level: "info".to_string(),
            effects: HashMap::new(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use `seed` only if no seed was configured explicitly.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.seed.get_or_insert(seed);
        self
    }

    /// The seed the engine will actually use.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Parsed `log_level`. Validated configs always parse.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn with_alpha_decay(mut self, decay: f32) -> Self {
        self.alpha_decay = decay;
        self
    }

    pub fn with_offscreen_margin(mut self, margin: f32) -> Self {
        self.offscreen_margin = margin;
        self
    }

    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.max_particles = max;
        self
    }

    /// Replace the built-in definition of `kind`.
    pub fn with_effect(mut self, kind: EffectKind, def: EffectDef) -> Self {
        self.effects.insert(kind, def);
        self
    }

    /// Effective definition for `kind`: the override if present, else the built-in.
    pub fn effect(&self, kind: EffectKind) -> EffectDef {
        self.effects
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.definition())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha_decay > 0.0 && self.alpha_decay <= 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "alpha_decay must be in (0, 1], got {}",
                self.alpha_decay
            )));
        }
        if !(self.offscreen_margin >= 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "offscreen_margin must be non-negative, got {}",
                self.offscreen_margin
            )));
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(EngineError::InvalidConfig(format!(
                "log_level must be one of error, warn, info, debug, trace; got {}",
                self.log_level
            )));
        }
        if self.max_particles == 0 {
            return Err(EngineError::InvalidConfig("max_particles must be positive".into()));
        }
        for (kind, def) in &self.effects {
            def.validate()
                .map_err(|msg| EngineError::InvalidConfig(format!("{}: {}", kind, msg)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::STARS;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.alpha_decay, 0.01);
        assert_eq!(config.offscreen_margin, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_json_is_default() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_json_overrides() {
        let config = EngineConfig::from_json(r#"{ "offscreen_margin": 10, "seed": 7 }"#).unwrap();
        assert_eq!(config.offscreen_margin, 10.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.alpha_decay, 0.01);
    }

    #[test]
    fn default_seed_only_fills_unset_seed() {
        let unset = EngineConfig::from_json(r#"{ "alpha_decay": 0.02 }"#).unwrap();
        assert_eq!(unset.effective_seed(), DEFAULT_SEED);
        assert_eq!(unset.with_default_seed(1234).effective_seed(), 1234);

        let explicit = EngineConfig::from_json(r#"{ "seed": 9 }"#).unwrap();
        assert_eq!(explicit.with_default_seed(1234).effective_seed(), 9);
    }

    #[test]
    fn log_level_parses_and_validates() {
        assert_eq!(EngineConfig::default().log_level(), log::Level::Info);
        let config = EngineConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
        assert!(matches!(
            EngineConfig::from_json(r#"{ "log_level": "chatty" }"#),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn effect_override_wins() {
        let mut def = STARS;
        def.count = 5;
        let config = EngineConfig::default().with_effect(EffectKind::Stars, def);
        assert_eq!(config.effect(EffectKind::Stars).count, 5);
        assert_eq!(config.effect(EffectKind::Gems).count, 40);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(EngineConfig::default().with_alpha_decay(0.0).validate().is_err());
        assert!(EngineConfig::default().with_offscreen_margin(-1.0).validate().is_err());
        assert!(EngineConfig::default().with_max_particles(0).validate().is_err());

        let mut def = STARS;
        def.friction = 2.0;
        let err = EngineConfig::default()
            .with_effect(EffectKind::Stars, def)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("stars"));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            EngineConfig::from_json("{ nope"),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "alpha_decay": 5.0 }"#),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
