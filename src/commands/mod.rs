pub mod config;
pub mod emit;
pub mod levels;
