// Domain layer - Data models and pure panel logic
pub mod display;
pub mod events;
pub mod render;
pub mod ring;
pub mod samples;
