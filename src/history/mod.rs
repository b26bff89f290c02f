//! History reconstruction over the store's per-key history iterator.

mod commit_time;
mod replay;

pub use commit_time::render_commit_time;
pub use replay::replay;
