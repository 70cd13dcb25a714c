pub mod constants;
pub mod scraper;
