//! Video asset addressing and retrieval
//!
//! Names uploaded media files, stores them on video records as opaque `<bucket>,<key>`
//! references, and resolves those references back into time-limited presigned URLs.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Random object identifiers
pub mod identifier;

/// S3 presigning and uploads
pub mod media_storage;

/// Content-type to extension mapping
pub mod media_type;

/// Generated object keys
pub mod object_key;

/// Persisted asset references
pub mod reference;

/// Read and write orchestration
pub mod resolver;

/// Configuration and error types
pub mod types;

/// Video metadata record
pub mod video;
