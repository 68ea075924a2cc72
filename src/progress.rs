// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (load/enrich/export). Frontends (GUI/CLI) implement this to surface
/// status to users.
pub trait Progress {
    /// Called at the start with the total number of steps (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., one input file loaded).
    fn step_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
