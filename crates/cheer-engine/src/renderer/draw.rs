//! Frame rendering: paints the live set onto a [`DrawingSurface`].

use super::shapes::shape_path;
use super::traits::DrawingSurface;
use crate::effects::Particle;

/// Clear the surface and draw every particle in its own local frame.
pub fn render_particles<S: DrawingSurface + ?Sized>(surface: &mut S, particles: &[Particle]) {
    surface.clear();
    for p in particles {
        surface.save();
        surface.translate(p.position.x, p.position.y);
        surface.rotate(p.rotation_radians());
        surface.set_global_alpha(p.alpha);
        surface.fill_path(&shape_path(p.shape, p.size), p.color);
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Shape;
    use crate::renderer::{VectorColor, VectorSurface};
    use glam::Vec2;

    fn particle(x: f32, y: f32, shape: Shape) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 10.0, VectorColor::WHITE, shape)
    }

    #[test]
    fn draws_one_fill_per_particle() {
        let mut surface = VectorSurface::new(200, 200);
        let particles: Vec<Particle> = Shape::ALL
            .iter()
            .enumerate()
            .map(|(i, shape)| particle(20.0 + i as f32 * 30.0, 100.0, *shape))
            .collect();
        render_particles(&mut surface, &particles);
        assert_eq!(surface.fill_count(), 5);
        assert_eq!(surface.stack_depth(), 0);
    }

    #[test]
    fn frame_starts_from_blank_surface() {
        let mut surface = VectorSurface::new(200, 200);
        let particles = vec![particle(50.0, 50.0, Shape::Gem)];
        render_particles(&mut surface, &particles);
        let first = surface.vertex_count();
        render_particles(&mut surface, &particles);
        assert_eq!(surface.vertex_count(), first);

        render_particles(&mut surface, &[]);
        assert_eq!(surface.vertex_count(), 0);
    }

    #[test]
    fn particle_alpha_and_position_reach_vertices() {
        let mut surface = VectorSurface::new(200, 200);
        let mut p = particle(100.0, 40.0, Shape::Confetti);
        p.alpha = 0.5;
        p.rotation = 90.0;
        render_particles(&mut surface, &[p]);
        for v in surface.vertices() {
            assert!((v.a - 0.5).abs() < 1e-6);
            // Rotated a quarter turn: the 10x5 strip now stands upright.
            assert!((v.x - 100.0).abs() <= 2.5 + 1e-3, "x {}", v.x);
            assert!((v.y - 40.0).abs() <= 5.0 + 1e-3, "y {}", v.y);
        }
    }

    #[test]
    fn transforms_do_not_leak_between_particles() {
        let mut surface = VectorSurface::new(200, 200);
        let particles = vec![particle(150.0, 150.0, Shape::Gem), particle(10.0, 10.0, Shape::Gem)];
        render_particles(&mut surface, &particles);
        let second = &surface.vertices()[surface.vertex_count() / 2..];
        assert!(second.iter().all(|v| v.x <= 15.0 + 1e-3 && v.y <= 15.0 + 1e-3));
    }
}
