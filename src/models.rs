pub mod image;
pub mod inquiry;
pub mod project;
pub mod task;
pub mod user;
