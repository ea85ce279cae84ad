pub mod add;
pub mod backup;
pub mod del;
pub mod edit;
pub mod log;
pub mod summary;
