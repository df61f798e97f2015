mod reader;
mod record;
mod writer;

pub use reader::read_manifest;
pub use record::{Book, DEFAULT_CATEGORY};
pub use writer::{write_manifest, write_manifest_min};
