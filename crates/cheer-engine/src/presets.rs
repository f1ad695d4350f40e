//! Named celebration presets.
//!
//! A preset is a short timeline of effect bursts (e.g. confetti, then stars
//! 300 ms later). The engine itself has no notion of time beyond frames, so
//! hosts either schedule the bursts on their own timers (the web bridge uses
//! `setTimeout`) or feed a [`Sequencer`] with a monotonic clock.

use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::effects::EffectKind;
use crate::error::EngineError;

/// Delay between the two halves of a two-stage celebration.
pub const FOLLOW_UP_MS: u32 = 300;

/// Badge rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl FromStr for Rarity {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Self::Common),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            other => Err(EngineError::UnknownPreset(format!("rarity {}", other))),
        }
    }
}

/// One step of a celebration timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burst {
    pub effect: EffectKind,
    /// Offset from the start of the celebration.
    pub delay_ms: u32,
}

impl Burst {
    const fn now(effect: EffectKind) -> Self {
        Self { effect, delay_ms: 0 }
    }

    const fn after(effect: EffectKind, delay_ms: u32) -> Self {
        Self { effect, delay_ms }
    }
}

/// Moments in the learning flow that earn a celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration {
    PerfectScore,
    LevelUp,
    BadgeUnlock(Rarity),
    /// Consecutive correct answers.
    Combo(u32),
    TreasureReveal,
    Encouragement,
}

impl Celebration {
    /// Parse a host-facing preset name. `badge` needs a rarity, `combo`
    /// reads its streak from `arg` (defaulting to 1).
    pub fn from_name(name: &str, arg: Option<&str>) -> Result<Self, EngineError> {
        match name {
            "perfect-score" => Ok(Self::PerfectScore),
            "level-up" => Ok(Self::LevelUp),
            "badge" => {
                let rarity = arg.ok_or_else(|| EngineError::UnknownPreset("badge without rarity".into()))?;
                Ok(Self::BadgeUnlock(rarity.parse()?))
            }
            "combo" => {
                let streak = match arg {
                    Some(s) => s
                        .parse()
                        .map_err(|_| EngineError::UnknownPreset(format!("combo streak {}", s)))?,
                    None => 1,
                };
                Ok(Self::Combo(streak))
            }
            "treasure" => Ok(Self::TreasureReveal),
            "encouragement" => Ok(Self::Encouragement),
            other => Err(EngineError::UnknownPreset(other.to_string())),
        }
    }

    /// Timeline of bursts, ordered by delay.
    pub fn bursts(&self) -> Vec<Burst> {
        use EffectKind::*;
        match *self {
            Self::PerfectScore => vec![Burst::now(Confetti), Burst::after(Stars, FOLLOW_UP_MS)],
            Self::LevelUp => vec![Burst::now(Stars), Burst::after(Confetti, FOLLOW_UP_MS)],
            Self::BadgeUnlock(Rarity::Epic | Rarity::Legendary) => vec![Burst::now(Explosion)],
            Self::BadgeUnlock(Rarity::Rare) => vec![Burst::now(Stars)],
            Self::BadgeUnlock(Rarity::Common) => vec![Burst::now(Sparkles)],
            Self::Combo(n) if n >= 10 => vec![Burst::now(Explosion), Burst::after(Confetti, 150)],
            Self::Combo(n) if n >= 5 => vec![Burst::now(Stars)],
            Self::Combo(_) => vec![Burst::now(Sparkles)],
            Self::TreasureReveal => vec![Burst::now(Gems), Burst::after(Sparkles, 200)],
            Self::Encouragement => vec![Burst::now(Hearts)],
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due_ms: u64,
    effect: EffectKind,
    origin: Option<Vec2>,
}

/// Timeline of pending bursts for hosts without their own timers.
#[derive(Debug, Default)]
pub struct Sequencer {
    pending: Vec<Scheduled>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue every burst of `celebration`, starting at `now_ms`.
    pub fn schedule(&mut self, celebration: Celebration, origin: Option<Vec2>, now_ms: u64) {
        for burst in celebration.bursts() {
            self.pending.push(Scheduled {
                due_ms: now_ms + burst.delay_ms as u64,
                effect: burst.effect,
                origin,
            });
        }
        self.pending.sort_by_key(|s| s.due_ms);
    }

    /// Remove and return the bursts due at or before `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<(EffectKind, Option<Vec2>)> {
        let split = self.pending.partition_point(|s| s.due_ms <= now_ms);
        self.pending
            .drain(..split)
            .map(|s| (s.effect, s.origin))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}
