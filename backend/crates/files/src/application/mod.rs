//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod fetch_object;
pub mod list_files;
pub mod read_url;
pub mod upload_file;

// Re-exports
pub use config::FilesConfig;
pub use fetch_object::{FetchObjectInput, FetchObjectUseCase};
pub use list_files::ListFilesUseCase;
pub use read_url::ReadUrlUseCase;
pub use upload_file::{UploadFileInput, UploadFileOutput, UploadFileUseCase};
