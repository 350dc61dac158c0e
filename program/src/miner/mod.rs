mod registry;
mod start;
mod submit;

pub use registry::*;
