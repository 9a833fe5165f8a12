//! Scenes the testbed can host, and the list it cycles through.

mod proxy_field;
mod showcase;

pub use proxy_field::ProxyField;
pub use showcase::Showcase;

use testbed_engine::coords::{ColorRgba, Vec2};
use testbed_engine::debug_draw::DebugDraw;

/// A scene that advances by fixed steps and reports itself through [`DebugDraw`].
pub trait Scenario {
    fn name(&self) -> &str;

    /// Advances by `dt` seconds; `dt == 0` leaves the scene unchanged.
    fn step(&mut self, dt: f32);

    fn draw(&self, dd: &mut dyn DebugDraw);

    /// Primary click at `world`.
    fn mouse_down(&mut self, _world: Vec2) {}
}

pub(crate) const STATIC_COLOR: ColorRgba = ColorRgba::rgb(0.5, 0.9, 0.5);
pub(crate) const DYNAMIC_COLOR: ColorRgba = ColorRgba::rgb(0.9, 0.7, 0.7);
pub(crate) const KINEMATIC_COLOR: ColorRgba = ColorRgba::rgb(0.5, 0.5, 0.9);
pub(crate) const JOINT_COLOR: ColorRgba = ColorRgba::rgb(0.5, 0.8, 0.8);
pub(crate) const AABB_COLOR: ColorRgba = ColorRgba::rgb(0.9, 0.3, 0.9);
pub(crate) const PAIR_COLOR: ColorRgba = ColorRgba::rgb(0.3, 0.9, 0.9);
pub(crate) const CONTACT_COLOR: ColorRgba = ColorRgba::rgb(0.9, 0.2, 0.2);

pub type ScenarioFactory = fn() -> Box<dyn Scenario>;

#[derive(Debug, Copy, Clone)]
pub struct ScenarioEntry {
    pub name: &'static str,
    pub build: ScenarioFactory,
}

fn showcase() -> Box<dyn Scenario> {
    Box::new(Showcase::new())
}

fn proxy_field() -> Box<dyn Scenario> {
    Box::new(ProxyField::new())
}

pub const SCENARIOS: &[ScenarioEntry] = &[
    ScenarioEntry {
        name: "Showcase",
        build: showcase,
    },
    ScenarioEntry {
        name: "Proxy field",
        build: proxy_field,
    },
];

/// Cursor over a fixed, non-empty list of scenarios.
#[derive(Debug, Clone)]
pub struct ScenarioList {
    entries: &'static [ScenarioEntry],
    current: usize,
}

impl Default for ScenarioList {
    fn default() -> Self {
        Self::new(SCENARIOS)
    }
}

impl ScenarioList {
    /// # Panics
    /// Panics if `entries` is empty.
    pub fn new(entries: &'static [ScenarioEntry]) -> Self {
        assert!(!entries.is_empty(), "scenario list is empty");
        Self { entries, current: 0 }
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &ScenarioEntry {
        &self.entries[self.current]
    }

    /// Fresh instance of the selected scenario.
    pub fn build(&self) -> Box<dyn Scenario> {
        (self.current().build)()
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.entries.len();
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.entries.len() - 1) % self.entries.len();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_cycles_both_ways() {
        let mut list = ScenarioList::default();
        assert_eq!(list.index(), 0);

        list.next();
        assert_eq!(list.current().name, "Proxy field");
        list.next();
        assert_eq!(list.index(), 0);
        list.prev();
        assert_eq!(list.index(), SCENARIOS.len() - 1);
    }

    #[test]
    fn every_entry_builds_the_scene_it_names() {
        for entry in SCENARIOS {
            assert_eq!((entry.build)().name(), entry.name);
        }
    }
}
