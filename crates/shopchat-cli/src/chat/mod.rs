//! Interactive terminal chat experience.
//!
//! Implements the widget host for a terminal: welcome banner, async input,
//! a typing spinner while a request is outstanding, and numbered quick
//! actions standing in for click targets. Entry point: [`run`].

mod banner;
mod input;
mod loop_runner;
mod surface;

pub use loop_runner::run;
