//! I/O layer: decoding source images and writing PNG/ICO outputs plus the
//! icon manifest sidecar.
pub mod reader;
pub use reader::load_rgba;

pub mod writers;
