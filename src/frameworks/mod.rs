// Frameworks layer: runtime bootstrap, configuration and the terminal.

pub mod client;
pub mod config;
pub mod presentation;
pub mod terminal;
