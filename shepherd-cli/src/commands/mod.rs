pub mod create;
pub mod delete;
pub mod info;
pub mod list;
pub mod resize;
pub mod show;
