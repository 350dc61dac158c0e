mod registry;
mod stake;
mod transfer;
mod unstake;

pub use registry::*;
