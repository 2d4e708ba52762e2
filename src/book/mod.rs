pub mod desktop;
pub mod gesture;
pub mod intro;
pub mod mobile;
pub mod sheet;
pub mod sound;
