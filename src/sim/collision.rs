//! Collision detection and response
//!
//! Discrete, axis-aligned, one resolution per tick. Each tick the ball's
//! current box is tested against the borders, then the paddle, then the
//! bricks in creation order; the first hit is resolved and the rest are
//! skipped. A fast ball can tunnel through thin geometry between two ticks.

use std::fmt;

use super::geometry::Offset;
use super::state::{Ball, Brick, Entity, Paddle, Status};

/// Playfield border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Left,
    Right,
    Top,
}

/// Which pair of brick faces was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickFace {
    TopBottom,
    LeftRight,
}

/// What a tick's collision pass resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Bounced off the left, right or top border
    Border(Border),
    /// Crossed the bottom border. `game_over` is set when that was the last
    /// life; otherwise the ball has been captured for a new serve.
    BallLost { game_over: bool },
    /// Bounced off the paddle's top edge
    Paddle,
    /// Hit the brick at `index` in creation order
    Brick {
        index: usize,
        face: BrickFace,
        destroyed: bool,
    },
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Border(Border::Left) => write!(f, "Border left collision"),
            Collision::Border(Border::Right) => write!(f, "Border right collision"),
            Collision::Border(Border::Top) => write!(f, "Border top collision"),
            Collision::BallLost { game_over } => {
                write!(f, "Border bottom collision")?;
                if *game_over {
                    write!(f, " (last life)")?;
                }
                Ok(())
            }
            Collision::Paddle => write!(f, "Paddle collision"),
            Collision::Brick { index, face, .. } => {
                let face = match face {
                    BrickFace::TopBottom => "top/bottom",
                    BrickFace::LeftRight => "left/right",
                };
                write!(f, "Brick {index} {face} collision")
            }
        }
    }
}

/// Playfield extent; the origin is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Resolve at most one collision for this tick, mutating the entities in
/// place. A captured ball never collides.
pub fn resolve_collisions(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut [Brick],
    status: &mut Status,
    bounds: Bounds,
) -> Option<Collision> {
    if ball.is_captured() {
        return None;
    }

    border_collision(ball, status, bounds)
        .or_else(|| paddle_collision(ball, paddle))
        .or_else(|| brick_collision(ball, bricks, status))
}

/// Border checks in order left, right, top, bottom
pub fn border_collision(ball: &mut Ball, status: &mut Status, bounds: Bounds) -> Option<Collision> {
    let offset = ball.offset();
    let r = ball.radius();

    if offset.left <= 0.0 {
        ball.move_x(r);
        ball.reflect_x();
        return Some(Collision::Border(Border::Left));
    }

    if offset.right >= bounds.width {
        ball.move_x(bounds.width - r);
        ball.reflect_x();
        return Some(Collision::Border(Border::Right));
    }

    if offset.top <= 0.0 {
        ball.move_y(r);
        ball.reflect_y();
        return Some(Collision::Border(Border::Top));
    }

    if offset.bottom >= bounds.height {
        // Checked before the decrement: the final life is spent ending the game
        let game_over = !status.alive();
        if !game_over {
            ball.capture();
        }
        status.decrease_life();
        return Some(Collision::BallLost { game_over });
    }

    None
}

/// Ball straddling the paddle's top edge with either side inside its span
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle) -> Option<Collision> {
    let offset = ball.offset();
    let top = paddle.offset();

    let straddles_top = offset.bottom >= top.top && offset.top < top.top;
    let overlaps = top.spans_x(offset.left) || top.spans_x(offset.right);

    if straddles_top && overlaps {
        ball.move_y(paddle.y() - ball.radius());
        ball.reflect_y();
        return Some(Collision::Paddle);
    }

    None
}

/// First live brick hit in creation order loses a tier
pub fn brick_collision(
    ball: &mut Ball,
    bricks: &mut [Brick],
    status: &mut Status,
) -> Option<Collision> {
    let offset = ball.offset();

    for (index, brick) in bricks.iter_mut().enumerate() {
        if !brick.alive() {
            continue;
        }

        let Some(face) = hit_face(&offset, ball, &brick.offset()) else {
            continue;
        };

        brick.decrease_life();
        status.increase_score();
        match face {
            BrickFace::TopBottom => ball.reflect_y(),
            BrickFace::LeftRight => ball.reflect_x(),
        }

        return Some(Collision::Brick {
            index,
            face,
            destroyed: !brick.alive(),
        });
    }

    None
}

/// Face pair the ball box is crossing, gated by the ball's center lying
/// strictly inside the brick's span along the other axis
fn hit_face(ball_box: &Offset, ball: &Ball, brick: &Offset) -> Option<BrickFace> {
    let crosses_top = ball_box.bottom >= brick.top && ball_box.top < brick.top;
    let crosses_bottom = ball_box.top <= brick.bottom && ball_box.bottom > brick.bottom;
    if (crosses_top || crosses_bottom) && brick.spans_x(ball.x()) {
        return Some(BrickFace::TopBottom);
    }

    let crosses_left = ball_box.right >= brick.left && ball_box.left < brick.left;
    let crosses_right = ball_box.left <= brick.right && ball_box.right > brick.right;
    if (crosses_left || crosses_right) && brick.spans_y(ball.y()) {
        return Some(BrickFace::LeftRight);
    }

    None
}
