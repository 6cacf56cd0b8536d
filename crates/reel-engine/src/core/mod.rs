pub mod driver;
pub mod time;
pub mod timeline;
