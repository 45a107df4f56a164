pub mod obj_loader;

pub use obj_loader::ObjLoader;
