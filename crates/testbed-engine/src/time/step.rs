/// Fixed-rate stepping with pause and single-step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSettings {
    /// Steps per simulated second. Zero or negative disables stepping.
    pub hz: f32,
    pub paused: bool,
    /// Pending single step; honored once while paused.
    pub single_step: bool,
    step_count: u64,
}

impl Default for StepSettings {
    fn default() -> Self {
        Self {
            hz: 60.0,
            paused: false,
            single_step: false,
            step_count: 0,
        }
    }
}

impl StepSettings {
    pub fn new(hz: f32) -> Self {
        Self {
            hz,
            ..Self::default()
        }
    }

    /// Pauses and requests exactly one step.
    pub fn request_single_step(&mut self) {
        self.paused = true;
        self.single_step = true;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Time step for the next simulation step, in seconds.
    ///
    /// Consumes a pending single-step request. Non-zero steps are counted.
    pub fn time_step(&mut self) -> f32 {
        let mut dt = if self.hz > 0.0 { 1.0 / self.hz } else { 0.0 };

        if self.paused {
            if self.single_step {
                self.single_step = false;
            } else {
                dt = 0.0;
            }
        }

        if dt > 0.0 {
            self.step_count += 1;
        }
        dt
    }

    /// Steps performed with a non-zero time step.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Starts counting from zero for a freshly loaded scene. Rate and pause
    /// state carry over; a pending single step is dropped.
    pub fn restart(&mut self) {
        self.single_step = false;
        self.step_count = 0;
    }
}
