//! Burst emission: turns an [`EffectDef`] into fresh particles.

use std::f32::consts::TAU;

use glam::Vec2;

use super::catalog::{EffectDef, ShapeMix, Spread};
use super::particle::Particle;
use super::rng::Rng;

/// Append one burst of `def.count` particles at `origin`.
///
/// The live set never grows past `capacity`; particles beyond it are dropped
/// with a warning. Returns the number of particles actually spawned.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Rng,
    def: &EffectDef,
    origin: Vec2,
    capacity: usize,
) -> usize {
    let room = capacity.saturating_sub(particles.len());
    let count = (def.count as usize).min(room);
    if count < def.count as usize {
        log::warn!(
            "particle cap {} reached: spawning {} of {}",
            capacity,
            count,
            def.count
        );
    }

    particles.reserve(count);
    for i in 0..count {
        let (position, velocity) = match def.spread {
            Spread::Radial => {
                // Angles are spaced against the full burst so a truncated
                // burst keeps the same directions.
                let angle = TAU * i as f32 / def.count as f32;
                let speed = rng.range(def.speed.0, def.speed.1);
                (origin, Vec2::new(angle.cos() * speed, angle.sin() * speed))
            }
            Spread::Jittered { half_extent } => {
                let jitter = Vec2::new(
                    rng.range(-half_extent, half_extent),
                    rng.range(-half_extent, half_extent),
                );
                let max = def.speed.1;
                (origin + jitter, Vec2::new(rng.range(-max, max), rng.range(-max, max)))
            }
        };

        let shape = match def.shapes {
            ShapeMix::Single(shape) => shape,
            ShapeMix::Either(a, b) => {
                if rng.chance() {
                    a
                } else {
                    b
                }
            }
        };

        let mut particle = Particle::new(
            position,
            velocity + Vec2::new(0.0, def.vertical_bias),
            rng.range(def.size.0, def.size.1),
            def.palette.random(rng),
            shape,
        );
        particle.rotation = rng.range(0.0, 360.0);
        particle.rotation_speed = rng.range(-def.spin, def.spin);
        particle.gravity = def.gravity;
        particle.friction = def.friction;
        particles.push(particle);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::catalog::{CONFETTI, EXPLOSION, HEARTS, SPARKLES};
    use crate::effects::particle::Shape;

    #[test]
    fn burst_spawns_full_count_at_origin() {
        let mut particles = Vec::new();
        let mut rng = Rng::new(42);
        let origin = Vec2::new(200.0, 150.0);
        let n = spawn_burst(&mut particles, &mut rng, &CONFETTI, origin, 4096);
        assert_eq!(n, 150);
        assert_eq!(particles.len(), 150);
        assert!(particles.iter().all(|p| p.position == origin && p.alpha == 1.0));
    }

    #[test]
    fn radial_speed_within_band() {
        let mut particles = Vec::new();
        let mut rng = Rng::new(3);
        let mut def = EXPLOSION;
        def.vertical_bias = 0.0;
        spawn_burst(&mut particles, &mut rng, &def, Vec2::ZERO, 4096);
        for p in &particles {
            let speed = p.velocity.length();
            assert!(speed >= 10.0 - 1e-3 && speed <= 20.0 + 1e-3, "speed {}", speed);
        }
    }

    #[test]
    fn hearts_rise_on_average() {
        let mut particles = Vec::new();
        let mut rng = Rng::new(11);
        spawn_burst(&mut particles, &mut rng, &HEARTS, Vec2::ZERO, 4096);
        let mean_vy: f32 = particles.iter().map(|p| p.velocity.y).sum::<f32>() / particles.len() as f32;
        assert!(mean_vy < 0.0, "mean vy {}", mean_vy);
        assert!(particles.iter().all(|p| p.shape == Shape::Heart));
    }

    #[test]
    fn sparkles_jitter_origin() {
        let mut particles = Vec::new();
        let mut rng = Rng::new(5);
        let origin = Vec2::new(100.0, 100.0);
        spawn_burst(&mut particles, &mut rng, &SPARKLES, origin, 4096);
        assert!(particles.iter().all(|p| {
            (p.position.x - origin.x).abs() <= 50.0 && (p.position.y - origin.y).abs() <= 50.0
        }));
        assert!(particles.iter().any(|p| p.position != origin));
    }

    #[test]
    fn explosion_mixes_circles_and_confetti() {
        let mut particles = Vec::new();
        let mut rng = Rng::new(8);
        spawn_burst(&mut particles, &mut rng, &EXPLOSION, Vec2::ZERO, 4096);
        assert!(particles
            .iter()
            .all(|p| matches!(p.shape, Shape::Circle | Shape::Confetti)));
        assert!(particles.iter().any(|p| p.shape == Shape::Circle));
        assert!(particles.iter().any(|p| p.shape == Shape::Confetti));
    }

    #[test]
    fn capacity_truncates_burst() {
        let mut particles = Vec::new();
        let mut rng = Rng::new(1);
        let n = spawn_burst(&mut particles, &mut rng, &CONFETTI, Vec2::ZERO, 100);
        assert_eq!(n, 100);
        let n = spawn_burst(&mut particles, &mut rng, &CONFETTI, Vec2::ZERO, 100);
        assert_eq!(n, 0);
        assert_eq!(particles.len(), 100);
    }
}
