pub mod bbox;
pub mod grid;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
