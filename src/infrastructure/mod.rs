pub mod config;
pub mod file_writer;
pub mod output;
pub mod plist_writer;
pub mod uuid_generator;
