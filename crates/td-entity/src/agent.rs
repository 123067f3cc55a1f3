//! `MovingAgent` — a vehicle drifting rightwards across the flow surface.
//!
//! # Wrap rule
//!
//! Each tick `x += speed`.  Once the agent's left edge has fully left the
//! surface (`x > width + radius`) it reappears with its right edge touching
//! the left border (`x = -radius`).  Overshoot is discarded, so an agent's
//! `x` is always in `[-radius, width + radius]`.

use td_core::{Color, Extent, Point, SimRng, SpawnRange};
use td_surface::Surface;

use crate::Entity;

/// Fill used for every vehicle.
pub const AGENT_FILL: Color = Color::rgba(52, 152, 219, 0.7);

/// A moving vehicle.  Speed and radius are fixed for the agent's lifetime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovingAgent {
    position: Point,
    speed:    f32,
    radius:   f32,
}

impl MovingAgent {
    pub fn new(position: Point, speed: f32, radius: f32) -> Self {
        Self { position, speed, radius }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Entity for MovingAgent {
    fn advance(&mut self, extent: Extent) {
        self.position.x += self.speed;
        if self.position.x > extent.width + self.radius {
            self.position.x = -self.radius;
        }
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position.x, self.position.y, self.radius, AGENT_FILL);
    }

    fn reset(&mut self, extent: Extent, rng: &mut SimRng) {
        self.position = rng.point_within(extent.width, extent.height);
    }
}

// ── Batch spawning ────────────────────────────────────────────────────────────

/// Parameters for the initial agent batch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSpawn {
    pub count:  usize,
    pub speed:  SpawnRange,
    pub radius: SpawnRange,
}

impl Default for AgentSpawn {
    fn default() -> Self {
        Self {
            count:  50,
            speed:  SpawnRange::new(1.0, 3.0),
            radius: SpawnRange::new(5.0, 15.0),
        }
    }
}

/// Create `spec.count` agents at random positions inside `extent`.
///
/// The returned vector is allocated exactly once; panels never push to it.
pub fn spawn_agents(spec: &AgentSpawn, extent: Extent, rng: &mut SimRng) -> Vec<MovingAgent> {
    let mut agents = Vec::with_capacity(spec.count);
    for _ in 0..spec.count {
        let position = rng.point_within(extent.width, extent.height);
        let speed = rng.sample(spec.speed);
        let radius = rng.sample(spec.radius);
        agents.push(MovingAgent::new(position, speed, radius));
    }
    agents
}
