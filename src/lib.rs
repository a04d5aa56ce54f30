// Library crate exposing modules for the binary, integration tests and benches

pub mod config;
pub mod input;
pub mod model;
pub mod source;
pub mod util;
pub mod view;
pub mod viewmodel;
pub mod widget;
