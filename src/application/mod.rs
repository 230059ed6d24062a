// Application layer - Use cases
pub mod aggregation;
pub mod fitness_service;
pub mod panel_service;
pub mod ring_encoder;
