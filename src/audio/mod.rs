pub mod buffer;
pub mod features;
