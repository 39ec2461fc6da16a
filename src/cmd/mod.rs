pub mod analyze;
pub mod layouts;
pub mod render;
pub mod typists;
