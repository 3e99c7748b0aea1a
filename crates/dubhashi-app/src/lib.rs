pub mod app;
pub mod bridges;
pub mod components;
pub mod state;
