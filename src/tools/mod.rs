mod file_hasher;
mod file_tools;
mod image_scanner;
mod path_validator;

pub use file_hasher::calculate_content_hash;
pub use file_tools::{copy_file, delete_file, move_file};
pub use image_scanner::{CandidateFile, is_jpeg_file_name, scan_image_files};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
