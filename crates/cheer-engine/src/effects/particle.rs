//! Particle state and the per-tick physics step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::VectorColor;

/// Alpha at or below this counts as fully faded.
const ALPHA_EPSILON: f32 = 1e-6;

/// Which outline a particle is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Flat rectangle, twice as wide as tall.
    Confetti,
    Circle,
    Star,
    /// Diamond.
    Gem,
    Heart,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Self::Confetti, Self::Circle, Self::Star, Self::Gem, Self::Heart,
    ];
}

/// A single particle with physics and rendering state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    /// Displacement per tick.
    pub velocity: Vec2,
    /// Degrees.
    pub rotation: f32,
    /// Degrees per tick.
    pub rotation_speed: f32,
    pub size: f32,
    pub color: VectorColor,
    pub alpha: f32,
    /// Added to `velocity.y` every tick.
    pub gravity: f32,
    /// Multiplicative damping in (0, 1].
    pub friction: f32,
    pub shape: Shape,
    /// Ticks survived so far.
    pub age: u32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: VectorColor, shape: Shape) -> Self {
        Particle {
            position,
            velocity,
            rotation: 0.0,
            rotation_speed: 0.0,
            size,
            color,
            alpha: 1.0,
            gravity: 0.0,
            friction: 1.0,
            shape,
            age: 0,
        }
    }

    /// Advance one tick. Returns false when the particle has faded out or
    /// dropped below `floor_y`.
    pub fn advance(&mut self, alpha_decay: f32, floor_y: f32) -> bool {
        self.velocity.y += self.gravity;
        self.velocity *= self.friction;
        self.position += self.velocity;
        self.rotation += self.rotation_speed;

        // Derived from age so repeated subtraction cannot drift past the last tick.
        self.age += 1;
        self.alpha = (1.0 - self.age as f32 * alpha_decay).max(0.0);

        self.alpha > ALPHA_EPSILON && self.position.y <= floor_y
    }

    /// Rotation in radians, for the renderer.
    pub fn rotation_radians(&self) -> f32 {
        self.rotation.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(shape: Shape) -> Particle {
        Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 10.0, VectorColor::WHITE, shape)
    }

    #[test]
    fn alpha_follows_decay_schedule() {
        let mut p = still(Shape::Circle);
        for n in 1..100u32 {
            assert!(p.advance(0.01, 1000.0), "died early at tick {}", n);
            let expected = (1.0 - 0.01 * n as f32).max(0.0);
            assert!((p.alpha - expected).abs() < 1e-5, "tick {}: {}", n, p.alpha);
        }
    }

    #[test]
    fn particle_expires_on_hundredth_tick() {
        let mut p = still(Shape::Circle);
        let mut ticks = 0;
        while p.advance(0.01, 1000.0) {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 100);
        assert_eq!(p.alpha, 0.0);
    }

    #[test]
    fn alpha_never_increases() {
        let mut p = still(Shape::Star);
        let mut last = p.alpha;
        while p.advance(0.03, 1000.0) {
            assert!(p.alpha < last);
            last = p.alpha;
        }
        assert!(p.alpha <= last);
    }

    #[test]
    fn gravity_then_friction_then_position() {
        let mut p = still(Shape::Gem);
        p.velocity = Vec2::new(10.0, 0.0);
        p.gravity = 1.0;
        p.friction = 0.5;
        p.advance(0.01, 1000.0);
        // vy = (0 + 1) * 0.5, vx = 10 * 0.5
        assert_eq!(p.velocity, Vec2::new(5.0, 0.5));
        assert_eq!(p.position, Vec2::new(55.0, 50.5));
    }

    #[test]
    fn rotation_accumulates() {
        let mut p = still(Shape::Confetti);
        p.rotation = 10.0;
        p.rotation_speed = 5.0;
        p.advance(0.01, 1000.0);
        p.advance(0.01, 1000.0);
        assert_eq!(p.rotation, 20.0);
        assert!((p.rotation_radians() - 20f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn falling_below_floor_expires() {
        let mut p = still(Shape::Heart);
        p.velocity = Vec2::new(0.0, 60.0);
        assert!(p.advance(0.01, 150.0)); // y = 110
        assert!(!p.advance(0.01, 150.0)); // y = 170
        assert!(p.alpha > 0.0);
    }
}
