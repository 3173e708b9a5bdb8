// Pedantic: suppress noise for internal crate code.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod app;
pub mod cli;
pub mod config;
pub mod desktop_files;
pub mod environment;
pub mod filesystem;
pub mod icon;
pub mod menu;
pub mod representation;
pub mod stats;
pub mod subcategory;
pub mod transformer;
pub mod xdg;
