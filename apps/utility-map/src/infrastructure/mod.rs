pub mod datasets;
pub mod geography;
