mod client;
mod task;

pub use client::*;
pub use task::*;
