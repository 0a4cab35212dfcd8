pub mod distance;
pub mod predecessor;
pub mod snapshot;
