pub mod date;
pub mod duration;
pub mod path;
pub mod table;

pub use duration::format_hours;
