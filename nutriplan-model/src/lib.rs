pub mod food;
pub mod plan;
pub mod profile;
