pub mod bucket;
pub mod color;
pub mod fill;
pub mod resolver;
pub mod value;
