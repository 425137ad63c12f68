// Composition root: configuration, shared state and the HTTP router.
// The binary in main.rs wires these together.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
