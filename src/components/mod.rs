pub mod design_system;
pub mod documents;
pub mod layout;
pub mod questions;
