pub mod assign;
pub mod backup;
pub mod config;
pub mod db;
pub mod entry;
pub mod export;
pub mod finalize;
pub mod init;
pub mod inquiry;
pub mod log;
pub mod projects;
pub mod submit;
pub mod sync;
pub mod user;
pub mod wallet;
