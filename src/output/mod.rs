//! Report formatting, cover letter rendering and document output

pub mod report;
pub mod formatter;
pub mod cover_letter;
pub mod docx_writer;
