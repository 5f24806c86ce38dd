//! Filelist output.

pub mod writer;

pub use writer::write_filelist;
