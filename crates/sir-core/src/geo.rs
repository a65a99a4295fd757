//! Planar coordinates and the rectangular simulation domain.
//!
//! Positions and velocities are `f64` pairs in domain units (pixels when
//! rendered).  The domain spans `[0, width] × [0, height]`.

use serde::{Deserialize, Serialize};

/// A 2D vector used for both positions and velocities.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The rectangular domain together with the agent radius that insets its
/// reflective walls.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width:        f64,
    pub height:       f64,
    pub agent_radius: f64,
}

impl Bounds {
    #[inline]
    pub fn new(width: f64, height: f64, agent_radius: f64) -> Self {
        Self { width, height, agent_radius }
    }

    /// Lowest admissible coordinate on either axis.
    #[inline]
    pub fn min(&self) -> f64 {
        self.agent_radius
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.width - self.agent_radius
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.height - self.agent_radius
    }

    /// `true` if `x` lies outside `[agent_radius, width − agent_radius]`.
    #[inline]
    pub fn outside_x(&self, x: f64) -> bool {
        x < self.min() || x > self.max_x()
    }

    /// `true` if `y` lies outside `[agent_radius, height − agent_radius]`.
    #[inline]
    pub fn outside_y(&self, y: f64) -> bool {
        y < self.min() || y > self.max_y()
    }

    /// `true` if `p` lies inside the full domain rectangle (walls included).
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}
