//! Brick collision results and bounce-direction classification

use super::rect::Rect;

/// Which velocity component a brick hit reverses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceDirection {
    /// Side hit: reverse horizontal velocity
    Horizontal,
    /// Top/bottom hit: reverse vertical velocity
    Vertical,
}

/// Result of a ball-vs-wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a brick was hit
    pub hit: bool,
    /// Bricks destroyed by this hit, explosion casualties included
    pub hit_count: u32,
    /// Bounce direction (meaningful only if hit)
    pub direction: BounceDirection,
    /// Index of the brick that was struck
    pub brick: Option<usize>,
    /// Whether the struck brick was explosive
    pub exploded: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            hit_count: 0,
            direction: BounceDirection::Vertical,
            brick: None,
            exploded: false,
        }
    }
}

/// Classify a hit by comparing the normalized offsets between centers.
///
/// A ball further off the brick's side than off its top/bottom (relative to
/// the half extents) bounces horizontally.
pub fn bounce_direction(ball: &Rect, brick: &Rect) -> BounceDirection {
    let dx = (ball.center_x() - brick.center_x()).abs();
    let dy = (ball.center_y() - brick.center_y()).abs();

    if dx / (brick.width / 2.0) > dy / (brick.height / 2.0) {
        BounceDirection::Horizontal
    } else {
        BounceDirection::Vertical
    }
}
