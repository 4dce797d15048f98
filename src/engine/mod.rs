pub mod area;
pub mod constraints;
pub mod evolution;
pub mod fitness;
pub mod matrix;
pub mod operators;
pub mod population;
pub mod progress;
pub mod route;

pub use area::{Area, AREAS};
pub use evolution::{EvolutionEngine, RunResult};
pub use matrix::RewardMatrix;
pub use progress::{ConsoleProgress, NoopProgress, ProgressCallback};
pub use route::Route;
