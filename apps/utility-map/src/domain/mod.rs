pub mod metric;
pub mod region;
pub mod shared;
pub mod style;
