pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod scrape;
