//! Browser helpers and pure layout math shared across sections.

pub mod scatter;
pub mod scroll;
pub mod viewport;
