//! HTML rendering of cards and sheets.
//!
//! Rendering is pure: every function here returns the document text and
//! leaves writing it to the caller.

pub mod card;
pub mod sheet;
mod templates;

pub use templates::*;
