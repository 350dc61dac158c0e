mod burn;
mod emission;
mod reward;

pub use burn::*;
pub use emission::*;
pub use reward::*;
