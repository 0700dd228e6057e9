pub mod camera;
pub mod canvas;
pub mod node_window;
pub mod style;
