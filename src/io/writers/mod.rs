pub mod ico;
pub mod manifest;
pub mod png;
