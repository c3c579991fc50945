pub mod catalog;
pub mod category;
pub mod repository;
pub mod table;
