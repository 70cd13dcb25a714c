pub mod offices;
pub mod output;
