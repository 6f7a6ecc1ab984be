//! Console helpers for the command line front end

pub mod display;

pub use display::{GridFormatter, Tone};
