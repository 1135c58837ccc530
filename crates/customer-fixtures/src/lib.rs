//! Synthetic customer and contract XML fixtures.
//!
//! This crate generates bulk test documents for systems that ingest customer
//! and utility-contract XML. Every record is drawn from fixed Swedish sample
//! pools and streamed straight to the output, so documents with tens of
//! thousands of customers never sit in memory.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Fixed value pools with uniform selection from an explicit random source
//! - Per-record generation with index-derived identity values
//! - Streaming serialization into the fixed customer/site/contract layout
//! - Progress notifications and a size report for file output
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroU32;
//!
//! use customer_fixtures::{GenerationRequest, write_document};
//! use mockable::DefaultClock;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let request = GenerationRequest::new(NonZeroU32::new(1).expect("non-zero"));
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let bytes = write_document(Vec::new(), request, &mut rng, &DefaultClock, &mut |_: u32, _: u32| {})
//!     .expect("in-memory write");
//!
//! let xml = String::from_utf8(bytes).expect("utf-8");
//! assert!(xml.contains("<customer_id>6</customer_id>"));
//! assert!(xml.contains("<object_id>735999756427205424</object_id>"));
//! ```

pub mod cli;
mod config;
mod count;
mod document;
mod error;
mod generator;
pub mod pools;
mod record;
#[cfg(test)]
mod test_support;
mod writer;
mod xml;

pub use config::{GeneratorSettings, SettingsError};
pub use count::{CountResolution, DEFAULT_COUNT, output_file_name, resolve_count};
pub use document::{CONTRACT_TAG, CUSTOMER_TAG, ROOT_TAG, SITE_TAG};
pub use error::GenerationError;
pub use generator::{
    BASE_CUSTOMER_ID, BASE_OBJECT_ID, BASE_SITE_ID, EMAIL_DOMAIN, email_for, generate_customer,
    identity_for_index,
};
pub use record::{
    Address, Billing, CustomerRecord, Identity, PhoneNumber, PhoneNumbers, SOCIAL_ID_MASK,
    SocialId, TIMESTAMP_FORMAT, ZipCode,
};
pub use writer::{
    DEFAULT_PROGRESS_INTERVAL, GenerationReport, GenerationRequest, ProgressObserver,
    generate_to_file, write_document,
};
