//! Platform-neutral plumbing shared by the pages: configuration, formatting,
//! uploads and the processing-service client.

pub mod config;
pub mod format;
pub mod remote;
pub mod upload;
