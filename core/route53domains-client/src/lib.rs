//! Route 53 Domains client.
//!
//! Typed records from `route53domains-model` are encoded as JSON 1.1
//! documents, sent through a [`Transport`] and decoded back into records.
//!
//! ```no_run
//! use route53domains_client::{ClientConfig, Route53DomainsClient};
//! use route53domains_model::CheckDomainAvailabilityRequest;
//!
//! # async fn run() -> route53domains_client::ClientResult<()> {
//! let client = Route53DomainsClient::from_config(ClientConfig::from_env()?)?;
//! let request = CheckDomainAvailabilityRequest::default().with_domain_name("example.com")?;
//! let result = client.check_domain_availability(&request).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{Route53DomainsClient, TARGET_PREFIX};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ServiceErrorKind};
pub use transport::{HttpTransport, Transport, WireRequest, WireResponse};
