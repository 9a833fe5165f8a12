use testbed_engine::coords::{Vec2, Viewport};
use testbed_engine::core::{App, AppControl, FrameCtx};
use testbed_engine::debug_draw::{DrawFlags, ViewCamera};
use testbed_engine::render::{DebugRenderer, RendererConfig};
use testbed_engine::time::StepSettings;
use testbed_engine::window::RuntimeCtx;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::controls::{action_for, Action};
use crate::scenarios::{Scenario, ScenarioList};

/// Host application: steps the selected scenario once per frame and draws it.
pub struct TestbedApp {
    scenarios: ScenarioList,
    scenario: Box<dyn Scenario>,
    camera: ViewCamera,
    step: StepSettings,
    flags: DrawFlags,
    // Pointer state, in logical pixels of the last drawn frame.
    cursor: Option<Vec2>,
    viewport: Option<Viewport>,
    scale_factor: f64,
    renderer_config: RendererConfig,
    // Created on the first frame, once a GPU exists.
    renderer: Option<DebugRenderer>,
}

impl TestbedApp {
    pub fn new(scenarios: ScenarioList, renderer_config: RendererConfig) -> Self {
        let scenario = scenarios.build();
        log::info!("scenario: {}", scenario.name());
        Self {
            scenarios,
            scenario,
            camera: ViewCamera::default(),
            step: StepSettings::default(),
            flags: DrawFlags::SHAPE | DrawFlags::JOINT,
            cursor: None,
            viewport: None,
            scale_factor: 1.0,
            renderer_config,
            renderer: None,
        }
    }

    fn title(&self) -> String {
        if self.step.paused {
            format!("testbed: {} (paused, step {})", self.scenario.name(), self.step.step_count())
        } else {
            format!("testbed: {}", self.scenario.name())
        }
    }

    /// Rebuilds the selected scenario from scratch and restarts the step count.
    fn reload(&mut self, runtime: &mut RuntimeCtx) {
        self.scenario = self.scenarios.build();
        self.step.restart();
        log::info!("scenario: {}", self.scenario.name());
        runtime.set_title(self.title());
    }

    fn apply(&mut self, action: Action, runtime: &mut RuntimeCtx) -> AppControl {
        match action {
            Action::Quit => return AppControl::Exit,
            Action::TogglePause => {
                self.step.toggle_pause();
                runtime.set_title(self.title());
            }
            Action::SingleStep => {
                self.step.request_single_step();
                runtime.set_title(self.title());
            }
            Action::Pan(dx, dy) => self.camera.pan(dx, dy),
            Action::Zoom(factor) => self.camera.zoom_by(factor),
            Action::ResetView => self.camera = ViewCamera::default(),
            Action::ToggleFlag(flag) => {
                self.flags.toggle(flag);
                log::debug!("draw flags: {:?}", self.flags);
            }
            Action::Restart => self.reload(runtime),
            Action::NextScenario => {
                self.scenarios.next();
                self.reload(runtime);
            }
            Action::PrevScenario => {
                self.scenarios.prev();
                self.reload(runtime);
            }
        }
        AppControl::Continue
    }

    /// World point under the cursor, once a frame has fixed the viewport.
    fn cursor_world(&self) -> Option<Vec2> {
        let cursor = self.cursor?;
        let viewport = self.viewport?;
        Some(self.camera.screen_to_world(cursor, viewport))
    }

    /// Left click goes to the scenario; right click recenters the view.
    fn click(&mut self, button: MouseButton) {
        let Some(world) = self.cursor_world() else {
            return;
        };
        match button {
            MouseButton::Left => self.scenario.mouse_down(world),
            MouseButton::Right => self.camera.center = world,
            _ => {}
        }
    }
}

impl App for TestbedApp {
    fn on_window_event(&mut self, event: &WindowEvent, runtime: &mut RuntimeCtx) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event: key, .. } => {
                if key.state != ElementState::Pressed {
                    return AppControl::Continue;
                }
                let PhysicalKey::Code(code) = key.physical_key else {
                    return AppControl::Continue;
                };
                match action_for(code) {
                    Some(action) => self.apply(action, runtime),
                    None => AppControl::Continue,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                self.cursor = Some(Vec2::new(logical.x, logical.y));
                AppControl::Continue
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                AppControl::Continue
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                self.click(*button);
                AppControl::Continue
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let dt = self.step.time_step();
        self.scenario.step(dt);

        self.scale_factor = ctx.window.scale_factor();
        self.viewport = Some(ctx.viewport());

        let renderer = self
            .renderer
            .get_or_insert_with(|| DebugRenderer::new(ctx.gpu, ctx.viewport(), &self.renderer_config));

        let scenario = &self.scenario;
        ctx.draw_debug(renderer, &self.camera, self.flags, |dd| scenario.draw(dd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TestbedApp {
        TestbedApp::new(ScenarioList::default(), RendererConfig::default())
    }

    #[test]
    fn next_scenario_rebuilds_and_resets_steps() {
        let mut app = app();
        let mut runtime = RuntimeCtx::default();
        app.step.time_step();
        app.step.time_step();

        app.apply(Action::NextScenario, &mut runtime);
        assert_eq!(app.scenario.name(), "Proxy field");
        assert_eq!(app.step.step_count(), 0);

        app.apply(Action::PrevScenario, &mut runtime);
        assert_eq!(app.scenario.name(), "Showcase");
    }

    #[test]
    fn restart_keeps_selection_and_pause() {
        let mut app = app();
        let mut runtime = RuntimeCtx::default();
        app.apply(Action::NextScenario, &mut runtime);
        app.apply(Action::TogglePause, &mut runtime);
        app.apply(Action::SingleStep, &mut runtime);
        app.step.time_step();

        app.apply(Action::Restart, &mut runtime);
        assert_eq!(app.scenario.name(), "Proxy field");
        assert_eq!(app.step.step_count(), 0);
        assert!(app.step.paused);
    }

    #[test]
    fn right_click_recenters_on_cursor() {
        let mut app = app();
        let viewport = Viewport::new(800.0, 800.0);
        app.viewport = Some(viewport);
        app.cursor = Some(Vec2::new(0.0, 800.0));

        let expected = app.camera.bounds(viewport).lower;
        app.click(MouseButton::Right);
        assert_eq!(app.camera.center, expected);
    }

    #[test]
    fn clicks_before_first_frame_are_ignored() {
        let mut app = app();
        app.cursor = Some(Vec2::new(10.0, 10.0));
        app.click(MouseButton::Right);
        assert_eq!(app.camera, ViewCamera::default());
    }

    #[test]
    fn quit_exits() {
        let mut app = app();
        let mut runtime = RuntimeCtx::default();
        assert_eq!(app.apply(Action::Quit, &mut runtime), AppControl::Exit);
    }
}
