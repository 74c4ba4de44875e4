pub mod color;
pub mod constants;
pub mod error;
pub mod flask;
pub mod mixture;
pub mod reaction;
pub mod session;
pub mod substance;
