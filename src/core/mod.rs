pub mod render;
pub mod walk;
