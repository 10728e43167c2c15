pub mod browser;
pub mod card;
pub mod clean;
pub mod debug;
pub mod driver;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod storage;
