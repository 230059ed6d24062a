// Infrastructure layer - External dependencies and adapters
pub mod backend;
pub mod config;
pub mod scheduler;
pub mod wire;
