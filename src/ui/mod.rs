//! # User Interface
//!
//! Colored terminal output with clickable listing links.

pub mod log;

pub use log::{debug, error, header, info, print_logo, success, url_link, warn, Log};
