mod generation;
mod profiles;
mod storage;

pub use generation::*;
pub use profiles::*;
pub use storage::*;
