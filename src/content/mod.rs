pub mod images;
pub mod model;
pub mod preload;
pub mod source;
