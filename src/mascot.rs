//! The mascot that rides the chart contour.
//!
//! The mascot sweeps back and forth across the drawing surface and holds
//! its altitude on the chart path: each tick it samples the path point
//! whose index corresponds to its own normalized horizontal position, then
//! adds a gentle sinusoidal bob. It is a pure state machine — the current
//! path is handed in by the series owner on every update, and a stale or
//! empty path simply leaves the mascot on the previous contour.

use crate::models::ChartPathPoint;

/// Distance from either edge, in surface columns, where the sweep reverses.
const EDGE_MARGIN: f64 = 3.0;

/// Bob amplitude in surface rows.
const BOB_AMPLITUDE: f64 = 1.2;

/// Bob angular frequency in radians per second.
const BOB_FREQUENCY: f64 = 3.0;

/// Sweep direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heading {
    #[default]
    Right,
    Left,
}

impl Heading {
    /// Sign applied to the horizontal speed.
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Heading::Right => 1.0,
            Heading::Left => -1.0,
        }
    }
}

/// Chart-path consumer sweeping across the surface.
#[derive(Debug)]
pub struct Mascot {
    x: f64,
    y: f64,
    heading: Heading,
    /// Columns covered per tick.
    speed: f64,
    /// Seconds of animation time, drives the bob.
    time: f64,
}

impl Mascot {
    /// Creates a mascot at the left edge, heading right.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self {
            x: EDGE_MARGIN,
            y: 0.0,
            heading: Heading::Right,
            speed,
            time: 0.0,
        }
    }

    /// Advances the sweep by one tick and samples `path` for altitude.
    ///
    /// `width`/`height` describe the surface the path was projected onto
    /// and `dt` is the tick duration in seconds.
    pub fn update(&mut self, path: &[ChartPathPoint], width: f64, height: f64, dt: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.time += dt;
        self.x += self.speed * self.heading.signum();

        let margin = EDGE_MARGIN.min(width / 2.0);
        if self.x > width - margin {
            self.x = width - margin;
            self.heading = Heading::Left;
        } else if self.x < margin {
            self.x = margin;
            self.heading = Heading::Right;
        }

        let contour = if path.is_empty() {
            height / 2.0
        } else {
            let normalized = (self.x / width).clamp(0.0, 1.0);
            let index = ((normalized * path.len() as f64) as usize).min(path.len() - 1);
            path[index].y
        };

        let bob = (self.time * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
        self.y = (contour + bob).clamp(0.0, (height - 1.0).max(0.0));
    }

    /// Current column on the surface.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Current row on the surface.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Current sweep direction.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Glyph drawn on the chart panel. Single-width on purpose: emoji are
    /// double-width and would shift every cell to their right.
    #[must_use]
    pub fn glyph(&self) -> char {
        'ᗢ'
    }
}
