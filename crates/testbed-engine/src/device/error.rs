/// Frame-level decision after a surface error. Frames are never retried.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame renders normally.
    Reconfigured,
    /// Transient failure; this frame is dropped.
    SkipFrame,
    /// Unrecoverable (commonly OOM); the runtime should exit.
    Fatal,
}
