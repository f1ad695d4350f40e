//! Fixed color palettes for celebration effects.

use serde::{Deserialize, Serialize};

use super::rng::Rng;
use crate::renderer::VectorColor;

/// Named color palette. Each effect draws its particle colors from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Multicolor party confetti.
    Confetti,
    /// Gold and amber.
    Treasure,
    /// Warm orange/red for epic and legendary rewards.
    Legendary,
    Success,
    /// Pinks.
    Love,
}

const CONFETTI: [u32; 7] = [0xFF6B6B, 0x4ECDC4, 0x45B7D1, 0xFFA07A, 0x98D8C8, 0xF7DC6F, 0xBB8FCE];
const TREASURE: [u32; 5] = [0xFFD700, 0xFFA500, 0xFFEC8B, 0xDAA520, 0xF0E68C];
const LEGENDARY: [u32; 5] = [0xFF6B35, 0xF7931E, 0xFFD700, 0xFF4500, 0xC0392B];
const SUCCESS: [u32; 4] = [0x4CAF50, 0x8BC34A, 0xCDDC39, 0x66BB6A];
const LOVE: [u32; 5] = [0xFF69B4, 0xFF1493, 0xFFB6C1, 0xFF85A2, 0xE91E63];

impl Palette {
    pub const ALL: [Palette; 5] = [
        Self::Confetti, Self::Treasure, Self::Legendary, Self::Success, Self::Love,
    ];

    /// Hex colors (`0xRRGGBB`) in this palette.
    pub fn colors(&self) -> &'static [u32] {
        match self {
            Self::Confetti => &CONFETTI,
            Self::Treasure => &TREASURE,
            Self::Legendary => &LEGENDARY,
            Self::Success => &SUCCESS,
            Self::Love => &LOVE,
        }
    }

    pub fn random(&self, rng: &mut Rng) -> VectorColor {
        rng.pick(self.colors())
            .map(|hex| VectorColor::from_hex(*hex))
            .unwrap_or_default()
    }
}
