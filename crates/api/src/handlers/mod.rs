//! Request handlers.

pub mod groups;
pub mod schedule;
pub mod system_config;
