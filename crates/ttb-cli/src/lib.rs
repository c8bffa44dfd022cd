//! Terminal front-end components for the timetable builder.

pub mod command;
pub mod config;
pub mod logging;
pub mod render;
pub mod session;
