pub mod config;
pub mod driver;
pub mod engine;
pub mod hints;
pub mod logging;
pub mod player;
pub mod renderer;
pub mod shell;
pub mod types;
