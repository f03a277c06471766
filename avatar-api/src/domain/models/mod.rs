mod upload;
mod user_id;

pub use upload::*;
pub use user_id::*;
