//! Questions Module
//!
//! # Components
//! - `QuestionInput` - draft box that asks about the selected document
//! - `QuestionList` - question/answer history

mod question_input;
mod question_list;

pub use question_input::QuestionInput;
pub use question_list::QuestionList;
