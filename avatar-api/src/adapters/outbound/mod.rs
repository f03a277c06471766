mod gemini;
mod postgres;
mod supabase_storage;

pub use gemini::*;
pub use postgres::*;
pub use supabase_storage::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::*;
