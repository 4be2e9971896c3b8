#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod json_file;
pub mod program;

pub use json_file::{JsonFile, read_client, write_program};
