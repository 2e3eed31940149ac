//! Terminal front end: the tab screens and the overlay router on top.

mod app;
mod screens;

pub use app::run;
