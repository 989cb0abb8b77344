pub mod checkpoints;
pub mod data;
pub mod renderer;
