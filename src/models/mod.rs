pub mod offices;
pub mod report;
