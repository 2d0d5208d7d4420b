pub mod add;
pub mod backup;
pub mod build;
pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod mark;
pub mod menu;
