mod app_viewmodel;

pub use app_viewmodel::{AppViewModel, Action};
