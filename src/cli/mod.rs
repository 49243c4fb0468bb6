pub mod config;
pub mod login;
pub mod logout;
pub mod upload;
