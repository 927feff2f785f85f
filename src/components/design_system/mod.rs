//! Design System Components for Leptos
//!
//! Small reusable building blocks shared by the document and question views.

mod button;
mod loading;
mod progress_bar;
mod toast;


pub use button::Button;
pub use loading::LoadingSpinner;
pub use progress_bar::{clamp_percent, ProgressBar};
pub use toast::{Toast, ToastContainer};
