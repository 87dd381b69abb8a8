pub mod db;
pub mod fs;
pub mod media;
pub mod time;

pub use fs::FsImageStore;
pub use media::JpegImageCodec;
pub use time::SystemClock;
