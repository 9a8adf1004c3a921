//! Section and chrome components. Each one is a leaf: static display
//! tables plus transient local state, no dependencies on its siblings.

pub mod about;
pub mod background;
pub mod contact;
pub mod cursor;
pub mod design;
pub mod footer;
pub mod hero;
pub mod loading_screen;
pub mod navigation;
pub mod projects;
pub mod skills;
