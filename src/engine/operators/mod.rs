pub mod crossover;
pub mod mutation;
pub mod selection;

pub use crossover::CrossoverOp;
pub use mutation::MutationOp;
pub use selection::SelectionOp;
