//! Core processing building blocks: grid partitioning, content bounding boxes,
//! square padding, resampling and save helpers. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
