pub mod compare;
pub mod summary;
