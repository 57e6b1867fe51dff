//! Resume genie library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod interactive;
pub mod processing;
pub mod output;
pub mod service;
pub mod tool;

pub use error::{Result, ResumeGenieError};
pub use config::Config;
pub use tool::Tool;
