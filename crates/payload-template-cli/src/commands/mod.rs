pub mod build;
pub mod check;
pub mod paths;
pub mod render;
