//! CLI commands for roadtrip

pub mod cities;
pub mod dispatch;
pub mod route;
