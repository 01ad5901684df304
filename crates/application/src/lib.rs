//! Application services and ports.

#![forbid(unsafe_code)]

mod user_directory_service;

pub use user_directory_service::{UserDirectoryService, UserRepository};
