//! Terminal front ends for the agent exposure assessment

pub mod api_client;
pub mod args;
pub mod completions;
pub mod display;
pub mod interactive;
pub mod oneshot;
