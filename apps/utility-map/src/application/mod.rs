pub mod legend;
pub mod list_categories;
pub mod resolve_style;
