//! Rejection-sampling circle packer.
//!
//! Each circle is found by drawing random centers until one lands somewhere that
//! isn't already covered, then growing it until it touches the nearest obstacle
//! (a previously placed circle, the domain edge, or the boundary shape). If a
//! circle can't be placed within the attempt budget the region is considered
//! full and packing stops early. That's a normal outcome, not an error.
//!
//! ```rust
//! use aoer_circle_pack::packing::{Boundary, CirclePacker, PackerConfig};
//! use geo_types::{coord, Rect};
//! use rand::prelude::*;
//!
//! let domain = Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: 100.0, y: 100.0});
//! let packer = CirclePacker::new(PackerConfig::new(domain, 50, 10.0, 100), Boundary::Margin)
//!     .unwrap();
//! let packing = packer.pack(&mut SmallRng::seed_from_u64(12345));
//! assert!(packing.circles.len() <= 50);
//! ```
use geo_types::{Coord, Rect};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;
use crate::geo_types::RectExt;
use crate::shape::Shape;

mod circle;

pub use circle::Circle;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Stop once this many circles are placed.
    pub target_count: usize,
    /// No circle grows beyond this.
    pub max_radius: f64,
    /// Consecutive rejected attempts allowed per circle before giving up.
    pub attempts_per_circle: usize,
    /// Candidate centers are drawn uniformly from here.
    pub domain: Rect<f64>,
}

impl PackerConfig {
    pub fn new(
        domain: Rect<f64>,
        target_count: usize,
        max_radius: f64,
        attempts_per_circle: usize,
    ) -> Self {
        PackerConfig {
            target_count,
            max_radius,
            attempts_per_circle,
            domain,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.target_count == 0 || !(self.max_radius > 0.0) || !self.max_radius.is_finite() {
            return Err(ConfigurationError::InvalidTarget {
                count: self.target_count,
                max_radius: self.max_radius,
            });
        }
        if self.attempts_per_circle == 0 {
            return Err(ConfigurationError::InvalidAttemptBudget);
        }
        Ok(())
    }
}

/// Where circles are allowed to go.
#[derive(Clone, Debug)]
pub enum Boundary {
    /// Anywhere in the domain, with circles kept clear of its four edges.
    Margin,
    /// Only inside one of these shapes, clear of that shape's outline. A shape holds
    /// the points where its signed distance is positive. Shapes are tried in order
    /// and the first one containing the candidate wins.
    Contained(Vec<Shape>),
}

/// Append-only record of placed circles, in placement order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackingState {
    circles: Vec<Circle>,
}

impl PackingState {
    pub fn new() -> Self {
        PackingState::default()
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn into_circles(self) -> Vec<Circle> {
        self.circles
    }

    fn push(&mut self, circle: Circle) {
        self.circles.push(circle);
    }
}

/// Result of trying to place one more circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Placed { circle: Circle, attempts: usize },
    /// Every attempt in the budget was rejected.
    Saturated,
}

/// What a finished packing run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Packing {
    pub circles: Vec<Circle>,
    /// Candidate centers drawn in total, accepted or not.
    pub attempts: usize,
    /// True if packing stopped because a circle ran out of attempts, false if
    /// the target count was reached.
    pub saturated: bool,
}

#[derive(Clone, Debug)]
pub struct CirclePacker {
    config: PackerConfig,
    boundary: Boundary,
}

impl CirclePacker {
    /// Validates everything up front, so sampling itself can't fail.
    pub fn new(config: PackerConfig, boundary: Boundary) -> Result<Self, ConfigurationError> {
        config.validate()?;
        if let Boundary::Contained(shapes) = &boundary {
            let unusable = |shape: &Shape| shape.segments().iter().all(|seg| seg.start == seg.end);
            if shapes.is_empty() || shapes.iter().any(unusable) {
                return Err(ConfigurationError::EmptyBoundary);
            }
        }
        Ok(CirclePacker { config, boundary })
    }

    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Index of the first boundary shape measuring a positive distance at `point`,
    /// and that distance. Always `None` in margin mode.
    pub fn containing_shape(&self, point: &Coord<f64>) -> Option<(usize, f64)> {
        match &self.boundary {
            Boundary::Margin => None,
            Boundary::Contained(shapes) => shapes.iter().enumerate().find_map(|(i, shape)| {
                match shape.signed_distance(point) {
                    Some(dist) if dist > 0.0 => Some((i, dist)),
                    _ => None,
                }
            }),
        }
    }

    /// Largest radius the boundary allows at `point`, before other circles are considered.
    fn boundary_ceiling(&self, point: &Coord<f64>) -> Option<f64> {
        let clearance = match &self.boundary {
            Boundary::Margin => self.config.domain.edge_clearance(point),
            Boundary::Contained(_) => self.containing_shape(point)?.1,
        };
        Some(clearance.min(self.config.max_radius))
    }

    /// One sampling attempt against `state`. `None` means the candidate was rejected.
    pub fn try_place<R: Rng + ?Sized>(&self, state: &PackingState, rng: &mut R) -> Option<Circle> {
        let candidate = self.config.domain.random_point(rng);
        let mut ceiling = self.boundary_ceiling(&candidate)?;

        for other in state.circles() {
            if other.contains_point(&candidate) {
                return None;
            }
            ceiling = ceiling.min(other.clearance(&candidate));
        }

        // Right on an edge or outline: nothing to draw.
        if ceiling <= 0.0 {
            return None;
        }
        Some(Circle::new(candidate, ceiling))
    }

    /// Try up to `attempts_per_circle` candidates and record the first one accepted.
    pub fn place_next<R: Rng + ?Sized>(&self, state: &mut PackingState, rng: &mut R) -> Placement {
        for attempt in 1..=self.config.attempts_per_circle {
            if let Some(circle) = self.try_place(state, rng) {
                state.push(circle);
                log::trace!(
                    "placed circle {} at ({:.3}, {:.3}) r={:.3} after {} attempts",
                    state.len(),
                    circle.center.x,
                    circle.center.y,
                    circle.radius,
                    attempt
                );
                return Placement::Placed {
                    circle,
                    attempts: attempt,
                };
            }
        }
        Placement::Saturated
    }

    /// Pack from scratch until the target count is reached or the region saturates.
    /// The same seed and configuration always give the same circles.
    pub fn pack<R: Rng + ?Sized>(&self, rng: &mut R) -> Packing {
        let mut state = PackingState::new();
        let mut attempts = 0;
        let mut saturated = false;

        while state.len() < self.config.target_count {
            match self.place_next(&mut state, rng) {
                Placement::Placed { attempts: used, .. } => attempts += used,
                Placement::Saturated => {
                    attempts += self.config.attempts_per_circle;
                    saturated = true;
                    log::debug!(
                        "region saturated after {} circles ({} attempts without a fit)",
                        state.len(),
                        self.config.attempts_per_circle
                    );
                    break;
                }
            }
        }

        log::debug!(
            "packed {} of {} circles in {} attempts",
            state.len(),
            self.config.target_count,
            attempts
        );
        Packing {
            circles: state.into_circles(),
            attempts,
            saturated,
        }
    }
}
