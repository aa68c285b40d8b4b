//! # jobsearch-client
//!
//! Typed async client for the job-search backend REST API: base-URL
//! configuration, sparse query-parameter assembly, path-template
//! substitution, and a uniform error taxonomy over HTTP GET/POST.
//!
//! Responses are opaque [`serde_json::Value`]s — this crate owns the wire
//! contract, not the payload schemas.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobsearch_client::{ApiClient, ApiConfig, CompanyFilters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::new("http://localhost:8000"))?;
//!
//!     let companies = client
//!         .companies(&CompanyFilters {
//!             industry: Some("tech".to_string()),
//!             page: Some(2),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("{companies}");
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod query;

pub use client::ApiClient;
pub use config::{ApiConfig, Environment};
pub use error::ApiError;
pub use query::{CompanyFilters, JobFilters, QueryPairs};
