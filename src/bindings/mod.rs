//! Backend Bindings
//!
//! Typed wrappers around the two HTTP endpoints of the question-answering
//! backend.

pub mod client;
pub mod documents;
pub mod questions;


pub use client::*;
pub use documents::*;
pub use questions::*;
