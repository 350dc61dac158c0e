mod discovery;
mod global;
mod pool;
mod pow_result;
mod session;
mod snapshot;
mod validator;

pub use discovery::*;
pub use global::*;
pub use pool::*;
pub use pow_result::*;
pub use session::*;
pub use snapshot::*;
pub use validator::*;
