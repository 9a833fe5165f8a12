mod app;
mod controls;
mod scenarios;

use anyhow::Result;
use testbed_engine::device::GpuInit;
use testbed_engine::logging::{init_logging, LoggingConfig};
use testbed_engine::render::RendererConfig;
use testbed_engine::window::{Runtime, RuntimeConfig};

use crate::app::TestbedApp;
use crate::scenarios::ScenarioList;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!(
        "controls: P pause, O single step, R restart, N/B next/previous scenario, arrows pan, \
         Z/X zoom, Home reset view, 1-5 draw flags, left click interact, right click recenter, Esc quit"
    );

    let config = RuntimeConfig {
        title: "testbed".to_string(),
        ..RuntimeConfig::default()
    };

    let app = TestbedApp::new(ScenarioList::default(), RendererConfig::default());
    Runtime::run(config, GpuInit::default(), app)
}
