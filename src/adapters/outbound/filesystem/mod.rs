/// Filesystem adapters for downloaded artifacts
mod work_directory;

pub use work_directory::WorkDirectory;
