pub mod config;
pub mod init;
pub mod jitter;
pub mod log;
pub mod run;
pub mod status;
