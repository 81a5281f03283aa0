//! The brick wall: grid generation, explosive bricks and collision
//!
//! Bricks live in a fixed arena indexed by `row * cols + col`. Destroying a
//! brick only flips its flag, so indices and (row, col) lookups stay stable
//! for the lifetime of the wall.

use rand::Rng;

use super::collision::{CollisionResult, bounce_direction};
use super::rect::Rect;
use crate::config::BrickConfig;
use crate::palette::{Rgb, brick_color};

/// A single brick
#[derive(Debug, Clone)]
pub struct Brick {
    pub rect: Rect,
    pub color: Rgb,
    pub row: usize,
    pub col: usize,
    /// Once set, the brick is out of play for good
    pub destroyed: bool,
    /// Explosive: destroying it also destroys its 3x3 neighborhood
    pub special: bool,
}

/// A `rows x cols` grid of bricks centered horizontally in the playfield
#[derive(Debug, Clone)]
pub struct BrickWall {
    cols: usize,
    rows: usize,
    bricks: Vec<Brick>,
}

impl BrickWall {
    /// Lay out the grid without any explosive bricks
    pub fn grid(layout: &BrickConfig, screen_width: f32) -> Self {
        let cols = layout.cols;
        let rows = layout.rows;
        let total_width =
            cols as f32 * layout.width + cols.saturating_sub(1) as f32 * layout.padding;
        let start_x = ((screen_width - total_width) / 2.0).floor();

        let mut bricks = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = start_x + col as f32 * (layout.width + layout.padding);
                let y = layout.top_margin + row as f32 * (layout.height + layout.padding);
                bricks.push(Brick {
                    rect: Rect::new(x, y, layout.width, layout.height),
                    color: brick_color(col),
                    row,
                    col,
                    destroyed: false,
                    special: false,
                });
            }
        }

        Self { cols, rows, bricks }
    }

    /// Lay out the grid and mark `layout.special_count` random bricks explosive
    pub fn generate<R: Rng + ?Sized>(layout: &BrickConfig, screen_width: f32, rng: &mut R) -> Self {
        let mut wall = Self::grid(layout, screen_width);
        for index in choose_special_indices(wall.bricks.len(), layout.special_count, rng) {
            wall.bricks[index].special = true;
        }
        log::debug!(
            "Generated {}x{} wall with {} explosive bricks",
            wall.cols,
            wall.rows,
            wall.special_count()
        );
        wall
    }

    /// All bricks in creation (row-major) order, destroyed ones included
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Bricks still in play
    pub fn remaining(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| !b.destroyed)
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining().count()
    }

    pub fn special_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.special).count()
    }

    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn brick_at(&self, row: usize, col: usize) -> Option<&Brick> {
        self.index_of(row, col).map(|i| &self.bricks[i])
    }

    /// Flag a brick explosive (wall construction and tests)
    pub fn set_special(&mut self, row: usize, col: usize, special: bool) {
        if let Some(i) = self.index_of(row, col) {
            self.bricks[i].special = special;
        }
    }

    /// Resolve the ball against the first intact brick it overlaps.
    ///
    /// Bricks are scanned in row-major order and only the first overlap
    /// counts, so at most one brick (plus its explosion) falls per call.
    pub fn check_collision(&mut self, ball: &Rect) -> CollisionResult {
        let Some(index) = self
            .bricks
            .iter()
            .position(|b| !b.destroyed && b.rect.intersects(ball))
        else {
            return CollisionResult::miss();
        };

        let brick = &mut self.bricks[index];
        brick.destroyed = true;
        let (row, col, special, rect) = (brick.row, brick.col, brick.special, brick.rect);

        let mut hit_count = 1;
        if special {
            let casualties = self.explode_around(row, col);
            log::debug!("Explosive brick ({row}, {col}) took out {casualties} neighbors");
            hit_count += casualties;
        }

        CollisionResult {
            hit: true,
            hit_count,
            direction: bounce_direction(ball, &rect),
            brick: Some(index),
            exploded: special,
        }
    }

    /// Destroy every intact brick within Chebyshev distance 1 of (row, col).
    ///
    /// A center outside the grid destroys nothing. Single level: explosive
    /// bricks caught in the blast are destroyed, not triggered. Returns how
    /// many bricks fell.
    pub fn explode_around(&mut self, row: usize, col: usize) -> u32 {
        if self.index_of(row, col).is_none() {
            return 0;
        }
        let mut destroyed = 0;
        for r in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(self.cols - 1) {
                let brick = &mut self.bricks[r * self.cols + c];
                if !brick.destroyed {
                    brick.destroyed = true;
                    destroyed += 1;
                }
            }
        }
        destroyed
    }
}

/// Uniformly pick `min(count, total)` distinct brick indices
pub fn choose_special_indices<R: Rng + ?Sized>(total: usize, count: usize, rng: &mut R) -> Vec<usize> {
    let amount = count.min(total);
    if amount < count {
        log::warn!("Requested {count} explosive bricks but the wall only has {total}");
    }
    rand::seq::index::sample(rng, total, amount).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    fn layout() -> BrickConfig {
        BrickConfig::default()
    }

    fn plain_wall() -> BrickWall {
        BrickWall::grid(&layout(), 800.0)
    }

    fn ball_over(wall: &BrickWall, row: usize, col: usize) -> Rect {
        let center = wall.brick_at(row, col).unwrap().rect.center();
        Rect::from_center(center, 16.0, 16.0)
    }

    #[test]
    fn test_generate_full_grid_with_specials() {
        let mut rng = Pcg32::seed_from_u64(7);
        let wall = BrickWall::generate(&layout(), 800.0, &mut rng);

        assert_eq!(wall.bricks().len(), 50);
        assert_eq!(wall.special_count(), 7);
        let cells: HashSet<_> = wall.bricks().iter().map(|b| (b.row, b.col)).collect();
        assert_eq!(cells.len(), 50);
        for row in 0..5 {
            for col in 0..10 {
                assert!(cells.contains(&(row, col)));
            }
        }
    }

    #[test]
    fn test_grid_is_centered() {
        let wall = plain_wall();
        // total width = 10 * 60 + 9 * 6 = 654, start = floor(146 / 2) = 73
        let first = wall.brick_at(0, 0).unwrap();
        assert_eq!(first.rect.x, 73.0);
        assert_eq!(first.rect.y, 50.0);
        let last = wall.brick_at(4, 9).unwrap();
        assert_eq!(last.rect.x, 73.0 + 9.0 * 66.0);
        assert_eq!(last.rect.y, 50.0 + 4.0 * 26.0);
        assert_eq!(last.color, brick_color(9));
    }

    #[test]
    fn test_same_seed_same_specials() {
        let a = BrickWall::generate(&layout(), 800.0, &mut Pcg32::seed_from_u64(42));
        let b = BrickWall::generate(&layout(), 800.0, &mut Pcg32::seed_from_u64(42));
        let specials = |w: &BrickWall| -> Vec<usize> {
            w.bricks()
                .iter()
                .enumerate()
                .filter(|(_, b)| b.special)
                .map(|(i, _)| i)
                .collect()
        };
        assert_eq!(specials(&a), specials(&b));
    }

    #[test]
    fn test_special_count_clamped_to_grid() {
        let config = BrickConfig {
            cols: 3,
            rows: 2,
            special_count: 50,
            ..layout()
        };
        let wall = BrickWall::generate(&config, 800.0, &mut Pcg32::seed_from_u64(1));
        assert_eq!(wall.bricks().len(), 6);
        assert_eq!(wall.special_count(), 6);
    }

    #[test]
    fn test_plain_hit_counts_one() {
        let mut wall = plain_wall();
        let ball = ball_over(&wall, 4, 3);
        let result = wall.check_collision(&ball);
        assert!(result.hit);
        assert_eq!(result.hit_count, 1);
        assert!(!result.exploded);
        assert!(wall.brick_at(4, 3).unwrap().destroyed);
        assert_eq!(wall.remaining_count(), 49);
    }

    #[test]
    fn test_destroyed_brick_is_not_hit_again() {
        let mut wall = plain_wall();
        let ball = ball_over(&wall, 2, 2);
        assert!(wall.check_collision(&ball).hit);
        assert!(!wall.check_collision(&ball).hit);
    }

    #[test]
    fn test_first_brick_in_row_major_order_wins() {
        let mut wall = plain_wall();
        // Straddle the gap between (1, 4) and (1, 5) and the row below
        let left = wall.brick_at(1, 4).unwrap().rect;
        let center = glam::Vec2::new(left.right() + 3.0, left.bottom() + 3.0);
        let ball = Rect::from_center(center, 16.0, 16.0);

        let result = wall.check_collision(&ball);
        assert_eq!(result.hit_count, 1);
        assert_eq!(result.brick, wall.index_of(1, 4));
        assert!(!wall.brick_at(1, 5).unwrap().destroyed);
        assert!(!wall.brick_at(2, 4).unwrap().destroyed);
    }

    #[test]
    fn test_explosion_destroys_neighborhood() {
        let mut wall = plain_wall();
        wall.set_special(2, 5, true);
        let ball = ball_over(&wall, 2, 5);

        let result = wall.check_collision(&ball);
        assert!(result.exploded);
        assert_eq!(result.hit_count, 9);
        for brick in wall.bricks() {
            let near = brick.row.abs_diff(2) <= 1 && brick.col.abs_diff(5) <= 1;
            assert_eq!(brick.destroyed, near, "brick ({}, {})", brick.row, brick.col);
        }
    }

    #[test]
    fn test_explosion_at_corner_is_clipped() {
        let mut wall = plain_wall();
        wall.set_special(0, 0, true);
        let ball = ball_over(&wall, 0, 0);
        assert_eq!(wall.check_collision(&ball).hit_count, 4);
    }

    #[test]
    fn test_explosion_outside_grid_is_a_no_op() {
        let mut wall = plain_wall();
        assert_eq!(wall.explode_around(usize::MAX, usize::MAX), 0);
        assert_eq!(wall.explode_around(5, 0), 0);
        assert_eq!(wall.explode_around(0, 10), 0);
        assert_eq!(wall.remaining_count(), 50);
    }

    #[test]
    fn test_explosion_skips_already_destroyed() {
        let mut wall = plain_wall();
        let ball = ball_over(&wall, 3, 3);
        wall.check_collision(&ball);

        wall.set_special(3, 4, true);
        let ball = ball_over(&wall, 3, 4);
        // 3x3 around (3, 4) minus the already destroyed (3, 3)
        assert_eq!(wall.check_collision(&ball).hit_count, 8);
    }

    #[test]
    fn test_explosion_does_not_chain() {
        let mut wall = plain_wall();
        wall.set_special(2, 2, true);
        wall.set_special(2, 3, true);
        let ball = ball_over(&wall, 2, 2);
        assert_eq!(wall.check_collision(&ball).hit_count, 9);
        // (2, 4) is two columns away from the trigger and survives
        assert!(!wall.brick_at(2, 4).unwrap().destroyed);
    }

    #[test]
    fn test_remaining_count_zero_iff_all_destroyed() {
        let mut wall = plain_wall();
        for row in 0..5 {
            for col in 0..10 {
                assert_ne!(wall.remaining_count(), 0);
                let ball = ball_over(&wall, row, col);
                wall.check_collision(&ball);
            }
        }
        assert_eq!(wall.remaining_count(), 0);
        assert!(wall.bricks().iter().all(|b| b.destroyed));
    }

    proptest! {
        #[test]
        fn prop_explosion_matches_chebyshev_set(
            row in 0usize..5,
            col in 0usize..10,
            pre in proptest::collection::vec((0usize..5, 0usize..10), 0..15),
        ) {
            let mut wall = plain_wall();
            for &(r, c) in &pre {
                if (r, c) != (row, col) {
                    let i = wall.index_of(r, c).unwrap();
                    wall.bricks[i].destroyed = true;
                }
            }
            let before: Vec<bool> = wall.bricks().iter().map(|b| b.destroyed).collect();
            let expected: HashSet<usize> = wall
                .bricks()
                .iter()
                .enumerate()
                .filter(|(_, b)| !b.destroyed && b.row.abs_diff(row) <= 1 && b.col.abs_diff(col) <= 1)
                .map(|(i, _)| i)
                .collect();

            wall.set_special(row, col, true);
            let trigger = wall.index_of(row, col).unwrap();
            wall.bricks[trigger].destroyed = true;
            let casualties = wall.explode_around(row, col);

            let newly: HashSet<usize> = wall
                .bricks()
                .iter()
                .enumerate()
                .filter(|(i, b)| b.destroyed && !before[*i])
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(casualties as usize + 1, expected.len());
            prop_assert_eq!(newly, expected);
        }

        #[test]
        fn prop_special_indices_distinct_and_clamped(total in 0usize..80, count in 0usize..100, seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let picks = choose_special_indices(total, count, &mut rng);
            prop_assert_eq!(picks.len(), count.min(total));
            let unique: HashSet<_> = picks.iter().collect();
            prop_assert_eq!(unique.len(), picks.len());
            prop_assert!(picks.iter().all(|&i| i < total));
        }
    }
}
