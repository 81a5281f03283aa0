//! The ball: motion integration, wall reflection and paddle bounce

use glam::Vec2;

use super::paddle::Paddle;
use super::rect::Rect;
use crate::config::Config;

/// Ball state - docked above the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    /// Glued above the paddle, waiting for launch
    Docked,
    /// Driven by velocity integration
    Free,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
    follow_distance: f32,
    screen: Vec2,
}

impl Ball {
    /// Create a docked ball sitting above the paddle, with the serve velocity
    pub fn new(config: &Config, paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(config.ball.speed_x, config.ball.speed_y),
            radius: config.ball.radius,
            state: BallState::Docked,
            follow_distance: config.ball.follow_distance,
            screen: Vec2::new(config.window.width, config.window.height),
        };
        ball.reset_on(paddle);
        ball
    }

    #[inline]
    pub fn launched(&self) -> bool {
        self.state == BallState::Free
    }

    /// Bounding box, always centered on `pos` with side `2 * radius`
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.radius * 2.0, self.radius * 2.0)
    }

    /// Integrate one tick of motion (free balls only)
    pub fn advance(&mut self) {
        if self.launched() {
            self.pos += self.vel;
        }
    }

    /// Reflect off the left, right and top edges. The bottom edge is open.
    ///
    /// Returns whether any edge was hit.
    pub fn check_wall_collision(&mut self) -> bool {
        let r = self.radius;
        let mut hit = false;

        if self.pos.x - r <= 0.0 || self.pos.x + r >= self.screen.x {
            self.vel.x = -self.vel.x;
            // Clamp to the interior edge so the ball cannot stick outside
            self.pos.x = if self.pos.x - r <= 0.0 {
                r
            } else {
                self.screen.x - r
            };
            hit = true;
        }

        if self.pos.y - r <= 0.0 {
            self.vel.y = -self.vel.y;
            self.pos.y = r;
            hit = true;
        }

        hit
    }

    /// Bounce off the paddle when overlapping it while moving down.
    ///
    /// The outgoing angle is steered by where the ball lands: center sends it
    /// straight up, the edges send it off at 45 degrees.
    pub fn check_paddle_collision(&mut self, paddle: &Paddle) -> bool {
        if !(self.vel.y > 0.0 && self.bounds().intersects(&paddle.rect)) {
            return false;
        }

        let hit_factor = paddle.hit_factor(self.pos.x);
        let speed_y = self.vel.y.abs();
        self.vel = Vec2::new(hit_factor * speed_y, -speed_y);
        // Sit on top of the paddle so the next tick starts clear of it
        self.pos.y = paddle.top() - self.radius;
        true
    }

    #[inline]
    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// True once the whole ball has left through the bottom edge
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y - self.radius > self.screen.y
    }

    /// Track the paddle while docked
    pub fn follow_paddle(&mut self, paddle: &Paddle) {
        if !self.launched() {
            self.pos = self.docked_position(paddle);
        }
    }

    /// Launch the ball with its current velocity
    pub fn start(&mut self) {
        self.state = BallState::Free;
    }

    /// Dock at an explicit position
    pub fn reset_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.state = BallState::Docked;
    }

    /// Dock directly above the paddle's current center
    pub fn reset_on(&mut self, paddle: &Paddle) {
        self.reset_to(self.docked_position(paddle));
    }

    /// Stop moving in place
    pub fn halt(&mut self) {
        self.state = BallState::Docked;
    }

    fn docked_position(&self, paddle: &Paddle) -> Vec2 {
        Vec2::new(
            paddle.center_x(),
            paddle.top() - self.radius - self.follow_distance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn setup() -> (Ball, Paddle) {
        let config = Config::default();
        let paddle = Paddle::new(&config);
        let ball = Ball::new(&config, &paddle);
        (ball, paddle)
    }

    fn free_ball(pos: Vec2, vel: Vec2) -> Ball {
        let (mut ball, _) = setup();
        ball.pos = pos;
        ball.vel = vel;
        ball.start();
        ball
    }

    #[test]
    fn test_new_ball_is_docked_above_paddle() {
        let (ball, paddle) = setup();
        assert!(!ball.launched());
        assert_eq!(ball.pos, Vec2::new(400.0, 560.0 - 8.0 - 5.0));
        assert_eq!(ball.vel, Vec2::new(7.0, -7.0));
        assert!(!ball.bounds().intersects(&paddle.rect));
    }

    #[test]
    fn test_bounds_follow_position() {
        let ball = free_ball(Vec2::new(100.0, 50.0), Vec2::ZERO);
        let bounds = ball.bounds();
        assert_eq!(bounds.center(), ball.pos);
        assert_eq!(bounds.width, 16.0);
        assert_eq!(bounds.height, 16.0);
    }

    #[test]
    fn test_advance_only_when_launched() {
        let (mut ball, _) = setup();
        let before = ball.pos;
        ball.advance();
        assert_eq!(ball.pos, before);

        ball.start();
        ball.advance();
        assert_eq!(ball.pos, before + Vec2::new(7.0, -7.0));
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut ball = free_ball(Vec2::new(400.0, 8.0), Vec2::new(0.0, -7.0));
        assert!(ball.check_wall_collision());
        assert_eq!(ball.pos.y, 8.0);
        assert_eq!(ball.vel.y, 7.0);
    }

    #[test]
    fn test_side_walls_clamp_inside() {
        let mut ball = free_ball(Vec2::new(-3.0, 300.0), Vec2::new(-7.0, 7.0));
        ball.check_wall_collision();
        assert_eq!(ball.pos.x, 8.0);
        assert_eq!(ball.vel.x, 7.0);

        let mut ball = free_ball(Vec2::new(797.0, 300.0), Vec2::new(7.0, 7.0));
        ball.check_wall_collision();
        assert_eq!(ball.pos.x, 792.0);
        assert_eq!(ball.vel.x, -7.0);
    }

    #[test]
    fn test_bottom_edge_not_reflected() {
        let mut ball = free_ball(Vec2::new(400.0, 605.0), Vec2::new(0.0, 7.0));
        assert!(!ball.check_wall_collision());
        assert_eq!(ball.vel.y, 7.0);
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let (_, paddle) = setup();
        let mut ball = free_ball(Vec2::new(400.0, 555.0), Vec2::new(3.0, 7.0));
        assert!(ball.check_paddle_collision(&paddle));
        assert_eq!(ball.vel, Vec2::new(0.0, -7.0));
        assert_eq!(ball.pos.y, paddle.top() - 8.0);
    }

    #[test]
    fn test_paddle_edge_hit_steers_outward() {
        let (_, paddle) = setup();
        let mut ball = free_ball(Vec2::new(475.0, 555.0), Vec2::new(0.0, 7.0));
        assert_eq!(paddle.hit_factor(ball.pos.x), 1.0);
        assert!(ball.check_paddle_collision(&paddle));
        assert_eq!(ball.vel.x, 7.0);
        assert_eq!(ball.vel.y, -7.0);
    }

    #[test]
    fn test_paddle_ignored_while_rising() {
        let (_, paddle) = setup();
        let mut ball = free_ball(Vec2::new(400.0, 555.0), Vec2::new(0.0, -7.0));
        assert!(!ball.check_paddle_collision(&paddle));
        assert_eq!(ball.vel, Vec2::new(0.0, -7.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let ball = free_ball(Vec2::new(400.0, 608.0), Vec2::ZERO);
        assert!(!ball.is_out_of_bounds());
        let ball = free_ball(Vec2::new(400.0, 608.5), Vec2::ZERO);
        assert!(ball.is_out_of_bounds());
    }

    #[test]
    fn test_follow_and_reset() {
        let (mut ball, mut paddle) = setup();
        paddle.update(200.0);
        ball.follow_paddle(&paddle);
        assert_eq!(ball.pos.x, 200.0);

        ball.start();
        paddle.update(600.0);
        ball.follow_paddle(&paddle);
        assert_eq!(ball.pos.x, 200.0, "free ball ignores the paddle");

        ball.reset_on(&paddle);
        assert!(!ball.launched());
        assert_eq!(ball.pos, Vec2::new(600.0, 547.0));

        ball.reset_to(Vec2::new(10.0, 20.0));
        assert_eq!(ball.pos, Vec2::new(10.0, 20.0));
    }

    proptest! {
        #[test]
        fn prop_left_wall_reflection(x in -50.0f32..8.0, y in 20.0f32..500.0, vx in -20.0f32..-0.1) {
            let mut ball = free_ball(Vec2::new(x, y), Vec2::new(vx, 5.0));
            ball.check_wall_collision();
            prop_assert!(ball.pos.x >= ball.radius);
            prop_assert_eq!(ball.vel.x, -vx);
        }

        #[test]
        fn prop_right_wall_reflection(x in 792.0f32..900.0, y in 20.0f32..500.0, vx in 0.1f32..20.0) {
            let mut ball = free_ball(Vec2::new(x, y), Vec2::new(vx, 5.0));
            ball.check_wall_collision();
            prop_assert!(ball.pos.x <= 800.0 - ball.radius);
            prop_assert_eq!(ball.vel.x, -vx);
        }
    }
}
