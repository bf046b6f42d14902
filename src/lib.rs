//! Propstore: properties-file configuration store
//!
//! Reads a `.properties`-style file from disk, fills in missing keys from an
//! embedded default map, creates the file with the defaults when it is
//! absent, and writes updated maps back out. I/O failures never surface to
//! the caller; every read degrades to the defaults and every write failure is
//! logged and swallowed.
//!
//! The embedded private-key default is sample material only. Real deployments
//! must supply their own properties file.

pub mod error;
pub mod properties;
pub mod store;
