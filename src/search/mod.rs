pub mod engine;
pub mod path;
