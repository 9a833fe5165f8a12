use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use testbed_engine::coords::{Aabb, ColorRgba, Vec2};
use testbed_engine::debug_draw::{DebugDraw, DrawFlags};

use super::{Scenario, AABB_COLOR, KINEMATIC_COLOR, PAIR_COLOR};

const ACTOR_COUNT: usize = 64;
const WORLD_EXTENT: f32 = 15.0;
const PROXY_EXTENT: f32 = 0.5;
/// Margin of the fat proxy boxes drawn under the AABB flag.
const FAT_MARGIN: f32 = 0.1;
const MAX_DRIFT: f32 = 2.0;
const SEED: u64 = 0x00c0_ffee;

const IDLE_COLOR: ColorRgba = ColorRgba::rgb(0.9, 0.9, 0.9);
const OVERLAP_COLOR: ColorRgba = ColorRgba::rgb(0.6, 0.6, 0.9);
const QUERY_COLOR: ColorRgba = ColorRgba::rgb(0.7, 0.7, 0.7);

#[derive(Debug, Clone, PartialEq)]
struct Actor {
    aabb: Aabb,
    velocity: Vec2,
}

/// Drifting broad-phase proxies: boxes overlapping the query box are tinted,
/// overlapping proxy pairs are linked. A click picks the proxy under the
/// cursor, or moves the query box when there is none.
#[derive(Debug, Clone)]
pub struct ProxyField {
    actors: Vec<Actor>,
    query: Aabb,
    picked: Option<usize>,
}

impl ProxyField {
    /// Same layout on every call, so a restart replays the scene.
    pub fn new() -> Self {
        let mut rng = Pcg32::seed_from_u64(SEED);
        let half = Vec2::new(PROXY_EXTENT, PROXY_EXTENT);

        let actors = (0..ACTOR_COUNT)
            .map(|_| {
                let center = Vec2::new(
                    rng.random_range(-WORLD_EXTENT..WORLD_EXTENT),
                    rng.random_range(0.0..2.0 * WORLD_EXTENT),
                );
                let velocity = Vec2::new(
                    rng.random_range(-MAX_DRIFT..MAX_DRIFT),
                    rng.random_range(-MAX_DRIFT..MAX_DRIFT),
                );
                Actor {
                    aabb: Aabb::from_center(center, half),
                    velocity,
                }
            })
            .collect();

        let h = WORLD_EXTENT;
        Self {
            actors,
            query: Aabb::new(Vec2::new(-3.0, -4.0 + h), Vec2::new(5.0, 6.0 + h)),
            picked: None,
        }
    }

    fn overlapping_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.actors.len();
        (0..n)
            .flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.actors[i].aabb.overlaps(self.actors[j].aabb))
    }
}

impl Default for ProxyField {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps `actor`'s center inside the world box, reflecting its drift off the walls.
fn confine(actor: &mut Actor) {
    let c0 = actor.aabb.center();
    let c = Vec2::new(
        c0.x.clamp(-WORLD_EXTENT, WORLD_EXTENT),
        c0.y.clamp(0.0, 2.0 * WORLD_EXTENT),
    );
    if c.x != c0.x {
        actor.velocity.x = -actor.velocity.x;
    }
    if c.y != c0.y {
        actor.velocity.y = -actor.velocity.y;
    }
    actor.aabb = Aabb::from_center(c, actor.aabb.extents());
}

impl Scenario for ProxyField {
    fn name(&self) -> &str {
        "Proxy field"
    }

    fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        for actor in &mut self.actors {
            let d = dt * actor.velocity;
            actor.aabb = Aabb::new(actor.aabb.lower + d, actor.aabb.upper + d);
            confine(actor);
        }
    }

    fn draw(&self, dd: &mut dyn DebugDraw) {
        let flags = dd.flags();

        if flags.contains(DrawFlags::SHAPE) {
            for (i, actor) in self.actors.iter().enumerate() {
                if self.picked == Some(i) {
                    dd.draw_solid_polygon(&actor.aabb.corners(), KINEMATIC_COLOR);
                    continue;
                }
                let color = if self.query.overlaps(actor.aabb) {
                    OVERLAP_COLOR
                } else {
                    IDLE_COLOR
                };
                dd.draw_aabb(actor.aabb, color);
            }
            dd.draw_aabb(self.query, QUERY_COLOR);
        }

        if flags.contains(DrawFlags::AABB) {
            let margin = Vec2::new(FAT_MARGIN, FAT_MARGIN);
            for actor in &self.actors {
                dd.draw_aabb(
                    Aabb::new(actor.aabb.lower - margin, actor.aabb.upper + margin),
                    AABB_COLOR,
                );
            }
        }

        if flags.contains(DrawFlags::PAIR) {
            for (i, j) in self.overlapping_pairs() {
                dd.draw_segment(
                    self.actors[i].aabb.center(),
                    self.actors[j].aabb.center(),
                    PAIR_COLOR,
                );
            }
        }

        if flags.contains(DrawFlags::CENTER_OF_MASS) {
            for actor in &self.actors {
                dd.draw_point(actor.aabb.center(), 3.0, IDLE_COLOR);
            }
        }
    }

    fn mouse_down(&mut self, world: Vec2) {
        self.picked = self.actors.iter().position(|a| a.aabb.contains(world));
        if self.picked.is_none() {
            self.query = Aabb::from_center(world, self.query.extents());
        }
        log::debug!("proxy field click at ({:.2}, {:.2}): picked {:?}", world.x, world.y, self.picked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::testing::CallLog;

    fn actor_at(x: f32, y: f32) -> Actor {
        Actor {
            aabb: Aabb::from_center(Vec2::new(x, y), Vec2::new(PROXY_EXTENT, PROXY_EXTENT)),
            velocity: Vec2::zero(),
        }
    }

    fn field_with(actors: Vec<Actor>) -> ProxyField {
        ProxyField {
            actors,
            ..ProxyField::new()
        }
    }

    #[test]
    fn restart_reproduces_layout() {
        assert_eq!(ProxyField::new().actors, ProxyField::new().actors);
    }

    #[test]
    fn actors_stay_inside_world() {
        let mut scene = ProxyField::new();
        for _ in 0..2_000 {
            scene.step(1.0 / 60.0);
        }
        for actor in &scene.actors {
            let c = actor.aabb.center();
            assert!(c.x.abs() <= WORLD_EXTENT + 1e-3);
            assert!(c.y >= -1e-3 && c.y <= 2.0 * WORLD_EXTENT + 1e-3);
        }
    }

    #[test]
    fn shape_flag_draws_every_proxy_and_the_query() {
        let scene = ProxyField::new();
        let mut log = CallLog::with(DrawFlags::SHAPE);
        scene.draw(&mut log);
        assert_eq!(log.count("aabb"), ACTOR_COUNT + 1);
    }

    #[test]
    fn proxies_under_query_are_tinted() {
        let scene = field_with(vec![actor_at(1.0, WORLD_EXTENT), actor_at(-12.0, 2.0)]);
        let mut log = CallLog::with(DrawFlags::SHAPE);
        scene.draw(&mut log);
        assert_eq!(log.colors[..2], [OVERLAP_COLOR, IDLE_COLOR]);
    }

    #[test]
    fn pair_flag_links_only_overlapping_proxies() {
        let scene = field_with(vec![
            actor_at(0.0, 0.0),
            actor_at(0.5, 0.5),
            actor_at(10.0, 10.0),
        ]);
        let mut log = CallLog::with(DrawFlags::PAIR);
        scene.draw(&mut log);
        assert_eq!(log.calls, vec!["segment"]);
    }

    #[test]
    fn click_on_proxy_picks_it() {
        let mut scene = field_with(vec![actor_at(-10.0, 2.0), actor_at(10.0, 2.0)]);
        let query = scene.query;
        scene.mouse_down(Vec2::new(10.2, 2.3));

        assert_eq!(scene.picked, Some(1));
        assert_eq!(scene.query, query);

        let mut log = CallLog::with(DrawFlags::SHAPE);
        scene.draw(&mut log);
        assert_eq!(log.count("solid_polygon"), 1);
    }

    #[test]
    fn click_on_empty_space_moves_query() {
        let mut scene = field_with(vec![actor_at(-10.0, 2.0)]);
        let extents = scene.query.extents();
        scene.mouse_down(Vec2::new(0.0, 25.0));

        assert_eq!(scene.picked, None);
        assert_eq!(scene.query.center(), Vec2::new(0.0, 25.0));
        assert_eq!(scene.query.extents(), extents);
    }
}
