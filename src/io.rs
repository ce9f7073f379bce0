pub mod config;
pub mod image;
pub mod obj_loader;
pub mod stl_loader;
