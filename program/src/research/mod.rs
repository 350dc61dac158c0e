mod registry;
mod submit;
mod validate;

pub use registry::*;
