use testbed_engine::coords::{Aabb, Rot, Transform, Vec2};
use testbed_engine::debug_draw::{DebugDraw, DrawFlags};

use super::{
    Scenario, AABB_COLOR, CONTACT_COLOR, DYNAMIC_COLOR, JOINT_COLOR, KINEMATIC_COLOR, PAIR_COLOR,
    STATIC_COLOR,
};

const GRAVITY: f32 = -10.0;
const RESTITUTION: f32 = 0.8;
const GROUND_HALF_WIDTH: f32 = 40.0;
const THROW_SPEED: f32 = 15.0;

#[derive(Debug, Clone)]
struct Ball {
    center: Vec2,
    velocity: Vec2,
    angle: f32,
    radius: f32,
}

#[derive(Debug, Clone)]
struct SpinningBox {
    center: Vec2,
    half: Vec2,
    angle: f32,
    angular_velocity: f32,
}

impl SpinningBox {
    fn transform(&self) -> Transform {
        Transform::new(self.center, Rot::from_angle(self.angle))
    }

    fn vertices(&self) -> [Vec2; 4] {
        let xf = self.transform();
        let (hx, hy) = (self.half.x, self.half.y);
        [
            xf.apply(Vec2::new(-hx, -hy)),
            xf.apply(Vec2::new(hx, -hy)),
            xf.apply(Vec2::new(hx, hy)),
            xf.apply(Vec2::new(-hx, hy)),
        ]
    }
}

/// Kinematic showcase: a bouncing ball, a spinning box, a pendulum and static
/// geometry, exercising every debug-draw call.
#[derive(Debug, Clone)]
pub struct Showcase {
    ball: Ball,
    spinner: SpinningBox,
    anchor: Vec2,
    pendulum_length: f32,
    pendulum_angle: f32,
    pendulum_speed: f32,
}

impl Showcase {
    pub fn new() -> Self {
        Self {
            ball: Ball {
                center: Vec2::new(-8.0, 20.0),
                velocity: Vec2::new(3.0, 0.0),
                angle: 0.0,
                radius: 1.5,
            },
            spinner: SpinningBox {
                center: Vec2::new(8.0, 12.0),
                half: Vec2::new(2.0, 1.0),
                angle: 0.0,
                angular_velocity: 1.0,
            },
            anchor: Vec2::new(0.0, 38.0),
            pendulum_length: 10.0,
            pendulum_angle: 0.8,
            pendulum_speed: 0.0,
        }
    }

    fn bob(&self) -> Vec2 {
        let a = self.pendulum_angle;
        self.anchor + self.pendulum_length * Vec2::new(a.sin(), -a.cos())
    }

    fn ball_aabb(&self) -> Aabb {
        let r = self.ball.radius;
        Aabb::from_center(self.ball.center, Vec2::new(r, r))
    }

    fn spinner_aabb(&self) -> Aabb {
        let vs = self.spinner.vertices();
        let mut lower = vs[0];
        let mut upper = vs[0];
        for v in &vs[1..] {
            lower = Vec2::new(lower.x.min(v.x), lower.y.min(v.y));
            upper = Vec2::new(upper.x.max(v.x), upper.y.max(v.y));
        }
        Aabb::new(lower, upper)
    }

    fn ball_on_ground(&self) -> bool {
        self.ball.center.y - self.ball.radius <= 1e-3
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for Showcase {
    fn name(&self) -> &str {
        "Showcase"
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let ball = &mut self.ball;
        ball.velocity.y += GRAVITY * dt;
        ball.center = ball.center + dt * ball.velocity;
        ball.angle -= dt * ball.velocity.x / ball.radius;

        if ball.center.y < ball.radius {
            ball.center.y = ball.radius;
            ball.velocity.y = -ball.velocity.y * RESTITUTION;
        }
        let limit = GROUND_HALF_WIDTH - ball.radius;
        if ball.center.x.abs() > limit {
            ball.center.x = ball.center.x.clamp(-limit, limit);
            ball.velocity.x = -ball.velocity.x;
        }

        self.spinner.angle += dt * self.spinner.angular_velocity;

        // Semi-implicit Euler keeps the swing bounded.
        let accel = GRAVITY / self.pendulum_length * self.pendulum_angle.sin();
        self.pendulum_speed += dt * accel;
        self.pendulum_angle += dt * self.pendulum_speed;
    }

    fn draw(&self, dd: &mut dyn DebugDraw) {
        let flags = dd.flags();

        if flags.contains(DrawFlags::SHAPE) {
            dd.draw_segment(
                Vec2::new(-GROUND_HALF_WIDTH, 0.0),
                Vec2::new(GROUND_HALF_WIDTH, 0.0),
                STATIC_COLOR,
            );
            dd.draw_polygon(
                &[Vec2::new(-20.0, 0.0), Vec2::new(-14.0, 0.0), Vec2::new(-20.0, 6.0)],
                STATIC_COLOR,
            );
            dd.draw_solid_polygon(&self.spinner.vertices(), KINEMATIC_COLOR);
            dd.draw_solid_circle(
                self.ball.center,
                self.ball.radius,
                Vec2::from_angle(self.ball.angle),
                DYNAMIC_COLOR,
            );
            dd.draw_circle(self.bob(), 1.0, DYNAMIC_COLOR);

            if self.ball_on_ground() {
                dd.draw_point(Vec2::new(self.ball.center.x, 0.0), 8.0, CONTACT_COLOR);
            }
        }

        if flags.contains(DrawFlags::JOINT) {
            dd.draw_segment(self.anchor, self.bob(), JOINT_COLOR);
            dd.draw_point(self.anchor, 5.0, JOINT_COLOR);
        }

        let ball_box = self.ball_aabb();
        let spinner_box = self.spinner_aabb();

        if flags.contains(DrawFlags::AABB) {
            dd.draw_aabb(ball_box, AABB_COLOR);
            dd.draw_aabb(spinner_box, AABB_COLOR);
        }

        if flags.contains(DrawFlags::PAIR) && ball_box.overlaps(spinner_box) {
            dd.draw_segment(ball_box.center(), spinner_box.center(), PAIR_COLOR);
        }

        if flags.contains(DrawFlags::CENTER_OF_MASS) {
            dd.draw_transform(self.spinner.transform());
            dd.draw_transform(Transform::new(self.ball.center, Rot::from_angle(self.ball.angle)));
        }
    }

    /// Throws the ball toward the click.
    fn mouse_down(&mut self, world: Vec2) {
        let toward = world - self.ball.center;
        let len = toward.length();
        if len > f32::EPSILON {
            self.ball.velocity = toward * (THROW_SPEED / len);
        }
    }
}
