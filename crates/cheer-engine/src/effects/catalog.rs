//! Built-in effect definitions.
//!
//! Each [`EffectKind`] maps to a constant [`EffectDef`] describing how a
//! burst is generated. Definitions are plain data and serde-friendly so a
//! host config can override any of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::palette::Palette;
use super::particle::Shape;
use crate::error::EngineError;

/// The six named celebration effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Confetti,
    Stars,
    Gems,
    Hearts,
    Sparkles,
    Explosion,
}

impl EffectKind {
    pub const ALL: [EffectKind; 6] = [
        Self::Confetti, Self::Stars, Self::Gems,
        Self::Hearts, Self::Sparkles, Self::Explosion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Confetti => "confetti",
            Self::Stars => "stars",
            Self::Gems => "gems",
            Self::Hearts => "hearts",
            Self::Sparkles => "sparkles",
            Self::Explosion => "explosion",
        }
    }

    /// Built-in definition for this effect.
    pub fn definition(&self) -> EffectDef {
        match self {
            Self::Confetti => CONFETTI,
            Self::Stars => STARS,
            Self::Gems => GEMS,
            Self::Hearts => HEARTS,
            Self::Sparkles => SPARKLES,
            Self::Explosion => EXPLOSION,
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EngineError::UnknownEffect(s.to_string()))
    }
}

/// How initial positions and velocities are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum Spread {
    /// Evenly spaced angles around the full circle, random magnitude in `speed`.
    Radial,
    /// Origin jittered inside a `±half_extent` square; each velocity
    /// component random in `±speed.1`.
    Jittered { half_extent: f32 },
}

/// Shape selection per particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMix {
    Single(Shape),
    /// Fair coin flip between the two shapes.
    Either(Shape, Shape),
}

impl ShapeMix {
    pub fn contains(&self, shape: Shape) -> bool {
        match *self {
            Self::Single(s) => s == shape,
            Self::Either(a, b) => a == shape || b == shape,
        }
    }
}

/// Parameters for one burst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectDef {
    /// Particles per burst.
    pub count: u32,
    /// Min/max initial speed magnitude.
    pub speed: (f32, f32),
    pub spread: Spread,
    /// Added to the initial vertical velocity. Negative pushes upward.
    pub vertical_bias: f32,
    /// Min/max particle size.
    pub size: (f32, f32),
    pub gravity: f32,
    pub friction: f32,
    /// Max absolute rotation speed, degrees per tick.
    pub spin: f32,
    pub shapes: ShapeMix,
    pub palette: Palette,
}

impl EffectDef {
    /// Check ranges; returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.count == 0 {
            return Err("count must be positive".into());
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(format!("friction must be in (0, 1], got {}", self.friction));
        }
        if self.speed.0 < 0.0 || self.speed.1 < self.speed.0 {
            return Err(format!("speed range {:?} is invalid", self.speed));
        }
        if self.size.0 <= 0.0 || self.size.1 < self.size.0 {
            return Err(format!("size range {:?} is invalid", self.size));
        }
        if self.spin < 0.0 {
            return Err(format!("spin must be non-negative, got {}", self.spin));
        }
        if let Spread::Jittered { half_extent } = self.spread {
            if half_extent < 0.0 {
                return Err(format!("jitter extent must be non-negative, got {}", half_extent));
            }
        }
        Ok(())
    }
}

pub const CONFETTI: EffectDef = EffectDef {
    count: 150,
    speed: (5.0, 15.0),
    spread: Spread::Radial,
    vertical_bias: -5.0,
    size: (6.0, 14.0),
    gravity: 0.3,
    friction: 0.98,
    spin: 10.0,
    shapes: ShapeMix::Single(Shape::Confetti),
    palette: Palette::Confetti,
};

pub const STARS: EffectDef = EffectDef {
    count: 50,
    speed: (3.0, 8.0),
    spread: Spread::Radial,
    vertical_bias: 0.0,
    size: (12.0, 22.0),
    gravity: 0.1,
    friction: 0.99,
    spin: 5.0,
    shapes: ShapeMix::Single(Shape::Star),
    palette: Palette::Treasure,
};

pub const GEMS: EffectDef = EffectDef {
    count: 40,
    speed: (4.0, 10.0),
    spread: Spread::Radial,
    vertical_bias: -3.0,
    size: (10.0, 18.0),
    gravity: 0.4,
    friction: 0.98,
    spin: 8.0,
    shapes: ShapeMix::Single(Shape::Gem),
    palette: Palette::Legendary,
};

pub const HEARTS: EffectDef = EffectDef {
    count: 30,
    speed: (2.0, 6.0),
    spread: Spread::Radial,
    vertical_bias: -4.0,
    size: (12.0, 22.0),
    gravity: 0.05,
    friction: 0.99,
    spin: 3.0,
    shapes: ShapeMix::Single(Shape::Heart),
    palette: Palette::Love,
};

pub const SPARKLES: EffectDef = EffectDef {
    count: 80,
    speed: (0.0, 2.0),
    spread: Spread::Jittered { half_extent: 50.0 },
    vertical_bias: 0.0,
    size: (2.0, 6.0),
    gravity: 0.02,
    friction: 0.95,
    spin: 0.0,
    shapes: ShapeMix::Single(Shape::Circle),
    palette: Palette::Treasure,
};

pub const EXPLOSION: EffectDef = EffectDef {
    count: 100,
    speed: (10.0, 20.0),
    spread: Spread::Radial,
    vertical_bias: 0.0,
    size: (4.0, 12.0),
    gravity: 0.3,
    friction: 0.96,
    spin: 15.0,
    shapes: ShapeMix::Either(Shape::Circle, Shape::Confetti),
    palette: Palette::Legendary,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for kind in EffectKind::ALL {
            assert_eq!(kind.name().parse::<EffectKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "not-a-real-effect".parse::<EffectKind>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownEffect(name) if name == "not-a-real-effect"));
        assert!("Confetti".parse::<EffectKind>().is_err());
    }

    #[test]
    fn catalog_counts() {
        let counts: Vec<u32> = EffectKind::ALL.iter().map(|k| k.definition().count).collect();
        assert_eq!(counts, vec![150, 50, 40, 30, 80, 100]);
    }

    #[test]
    fn builtins_validate() {
        for kind in EffectKind::ALL {
            assert!(kind.definition().validate().is_ok(), "{} failed validation", kind);
        }
    }

    #[test]
    fn validate_rejects_bad_friction() {
        let mut def = STARS;
        def.friction = 0.0;
        assert!(def.validate().is_err());
        def.friction = 1.5;
        assert!(def.validate().is_err());
        def.friction = 1.0;
        assert!(def.validate().is_ok());
    }

    #[test]
    fn shape_mix_membership() {
        assert!(EXPLOSION.shapes.contains(Shape::Circle));
        assert!(EXPLOSION.shapes.contains(Shape::Confetti));
        assert!(!EXPLOSION.shapes.contains(Shape::Heart));
        assert!(HEARTS.shapes.contains(Shape::Heart));
    }

    #[test]
    fn definitions_deserialize() {
        let json = r#"{
            "count": 12,
            "speed": [1.0, 2.0],
            "spread": { "type": "jittered", "half_extent": 10.0 },
            "vertical_bias": -1.0,
            "size": [3.0, 4.0],
            "gravity": 0.0,
            "friction": 1.0,
            "spin": 0.0,
            "shapes": { "single": "gem" },
            "palette": "success"
        }"#;
        let def: EffectDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.count, 12);
        assert_eq!(def.spread, Spread::Jittered { half_extent: 10.0 });
        assert_eq!(def.shapes, ShapeMix::Single(Shape::Gem));
        assert_eq!(def.palette, Palette::Success);
    }
}
