/// Per-generation reporting hook. The engine owns no output channel of
/// its own; callers decide what a generation boundary looks like.
pub trait ProgressCallback {
    fn on_generation_complete(&mut self, generation: usize, best_fitness: i64);
}

/// Logs each generation's best fitness.
pub struct ConsoleProgress;

impl ProgressCallback for ConsoleProgress {
    fn on_generation_complete(&mut self, generation: usize, best_fitness: i64) {
        log::info!("Generation {} | best fitness: {}", generation, best_fitness);
    }
}

/// Silent callback for sweeps and tests.
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: i64) {}
}
