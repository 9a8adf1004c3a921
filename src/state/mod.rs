//! Application state shared through Leptos context plus the contact form
//! controller.

pub mod contact;
pub mod ui;
