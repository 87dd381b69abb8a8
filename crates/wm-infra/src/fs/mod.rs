pub mod image_store;

pub use image_store::FsImageStore;
