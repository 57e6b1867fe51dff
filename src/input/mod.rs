//! Reading resumes and job descriptions from disk

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
