pub mod config;
pub mod logging;

pub mod actions;
pub mod checksum;
pub mod client;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod file_id;
pub mod filename;
pub mod metadata;
pub mod payload;
pub mod platform;
pub mod transport;

pub use client::{Acknowledgement, EmailReceipt, EmailRequest, ProxyClient};
pub use error::DriveError;
pub use file_id::{resolve, FileId};
pub use metadata::MetadataRecord;
pub use payload::DocumentPayload;
