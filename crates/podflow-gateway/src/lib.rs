//! Remote sync gateway for Podflow.
//!
//! This crate translates a project plus an operation into one outbound
//! webhook request, and the JSON response back into a normalized record.
//! Four operations are supported: initial script generation, approved-script
//! post-processing, video generation, and image generation.
//!
//! Each call is a single request/response with no retry and no caching. The
//! remote service is tolerant in shape but not in substance: responses may
//! arrive array-wrapped or as bare objects, and media URLs may appear under
//! camelCase or human-readable keys, but a non-success status or an
//! undecodable body is always a hard failure.

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod traits;

pub use client::WebhookClient;
pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use traits::SyncGateway;
