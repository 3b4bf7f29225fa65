use crate::config::FieldConfig;
use crate::constants::{
    SEED_OPACITY_MIN, SEED_OPACITY_SPAN, SEED_SIZE_MIN, SEED_SIZE_SPAN, SEED_SPEED_XY,
    SEED_SPEED_Z,
};
use crate::particle::Particle;
use glam::DVec2;
use rand::prelude::*;

/// The owning aggregate: surface dimensions, particles, and pointer state.
///
/// All state is ephemeral; a resize discards the particle set and reseeds
/// from the field's RNG stream. Particle order has no meaning beyond
/// all-pairs iteration.
pub struct Field {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
    /// Last observed pointer position in surface space. Defaults to the
    /// origin and only moves on pointer events; no decay or smoothing.
    pub pointer: DVec2,
    pub config: FieldConfig,
    rng: StdRng,
}

impl Field {
    pub fn new(width: f64, height: f64, config: FieldConfig, seed: u64) -> Self {
        let mut field = Self {
            width: width.max(0.0),
            height: height.max(0.0),
            particles: Vec::new(),
            pointer: DVec2::ZERO,
            config,
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed();
        field
    }

    /// Density-capped particle count for a surface: one particle per
    /// `density_divisor` px^2, hard-capped, and zero for degenerate areas.
    pub fn particle_count(width: f64, height: f64, config: &FieldConfig) -> usize {
        let area = width.max(0.0) * height.max(0.0);
        let by_density = (area / config.density_divisor).floor().max(0.0) as usize;
        by_density.min(config.max_particles)
    }

    /// Discard all particles and draw a fresh set for the current surface.
    pub fn reseed(&mut self) {
        let count = Self::particle_count(self.width, self.height, &self.config);
        let rng = &mut self.rng;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                x: rng.gen::<f64>() * self.width,
                y: rng.gen::<f64>() * self.height,
                z: rng.gen::<f64>() * self.config.depth_range,
                vx: (rng.gen::<f64>() - 0.5) * SEED_SPEED_XY,
                vy: (rng.gen::<f64>() - 0.5) * SEED_SPEED_XY,
                vz: (rng.gen::<f64>() - 0.5) * SEED_SPEED_Z,
                size: rng.gen::<f64>() * SEED_SIZE_SPAN + SEED_SIZE_MIN,
                opacity: rng.gen::<f64>() * SEED_OPACITY_SPAN + SEED_OPACITY_MIN,
            });
        }
        log::debug!(
            "[field] reseeded {} particles for {:.0}x{:.0}",
            self.particles.len(),
            self.width,
            self.height
        );
    }

    /// New surface dimensions. Reseeds rather than repositioning survivors;
    /// continuity across resizes was traded for simplicity.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.reseed();
    }

    pub fn set_pointer(&mut self, pos: DVec2) {
        self.pointer = pos;
    }

    /// Advance the simulation one frame.
    ///
    /// Per particle, in order: integrate, pointer force, boundary
    /// reflection, clamp, damping. The order matters: damping comes after
    /// the pointer force so the force is applied undamped within the frame,
    /// and clamping after reflection stops a single large velocity spike
    /// from leaving a particle out of range.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        let c = &self.config;
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.z += p.vz;

            let delta = pointer - DVec2::new(p.x, p.y);
            let dist = delta.length();
            if dist > 0.0 && dist < c.pointer_radius {
                // Linear falloff: 1 at the pointer, 0 at the radius.
                // Subtracting the unit vector toward the pointer nudges the
                // particle off the cursor; no force at dist 0 or beyond.
                let force = (c.pointer_radius - dist) / c.pointer_radius;
                p.vx -= delta.x / dist * force * c.pointer_strength;
                p.vy -= delta.y / dist * force * c.pointer_strength;
            }

            // Reflection flips velocity only; the clamp below repositions.
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }
            if p.z < 0.0 || p.z > c.depth_range {
                p.vz = -p.vz;
            }

            p.x = p.x.clamp(0.0, w);
            p.y = p.y.clamp(0.0, h);
            p.z = p.z.clamp(0.0, c.depth_range);

            p.vx *= c.damping;
            p.vy *= c.damping;
        }
    }

    /// Visit every unordered particle pair closer than the link distance
    /// (strictly). O(n^2), bounded by the seeding cap.
    pub fn for_each_link<F: FnMut(&Particle, &Particle)>(&self, mut f: F) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let dist = DVec2::new(a.x - b.x, a.y - b.y).length();
                if dist < self.config.link_distance {
                    f(a, b);
                }
            }
        }
    }

    /// Sum of squared planar speeds. Reflection preserves this; only the
    /// per-frame damping bleeds it off.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles
            .iter()
            .map(|p| p.vx * p.vx + p.vy * p.vy)
            .sum()
    }
}
