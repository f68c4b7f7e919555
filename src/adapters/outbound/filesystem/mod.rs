/// Filesystem adapters for writing rendered views
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
