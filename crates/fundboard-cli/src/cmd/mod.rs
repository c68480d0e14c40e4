pub mod click;
pub mod config;
pub mod cost;
pub mod init;
pub mod risk;
pub mod summary;
pub mod timeline;
