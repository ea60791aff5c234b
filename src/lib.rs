pub mod calendar;
pub mod clock;
pub mod color_utils;
pub mod config;
pub mod editor;
pub mod model;
pub mod paths;
pub mod pincode;
pub mod route;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
