//! Filesystem side of the pipeline: tables, tree traces, and archives.

pub mod archive;
pub mod csv;
pub mod tree;
