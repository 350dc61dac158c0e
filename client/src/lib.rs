pub mod handle;
pub mod mine;
pub mod simulate;
pub mod snapshot;

pub use handle::*;
pub use mine::*;
pub use simulate::*;
pub use snapshot::*;

pub use mined;
