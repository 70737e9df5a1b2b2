pub mod alarm;
pub mod app;
pub mod config;
pub mod countdown;
pub mod gui;
mod util;
