pub mod assign;
pub mod auth;
pub mod backup;
pub mod entry;
pub mod review;
pub mod sync;
pub mod workspace;
