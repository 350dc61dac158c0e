pub mod config;
pub mod consts;
pub mod error;
pub mod event;
pub mod instruction;
pub mod proof;
pub mod state;
pub mod types;
pub mod utils;

pub use crate::consts::*;

pub mod prelude {
    pub use crate::config::*;
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::event::*;
    pub use crate::instruction::*;
    pub use crate::proof::*;
    pub use crate::state::*;
    pub use crate::types::*;
    pub use crate::utils::*;
}
