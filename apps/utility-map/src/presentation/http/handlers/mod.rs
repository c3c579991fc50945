pub mod health;
pub mod map;
