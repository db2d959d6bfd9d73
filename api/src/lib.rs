//! Remote data access for Dossier: record shapes served by the two dashboard
//! endpoints and the client that fetches them.

pub mod config;
pub mod error;
pub mod records;
pub mod source;

pub use config::EndpointConfig;
pub use error::FetchError;
pub use records::{AssessmentRecord, ProfileRecord, ScoredItem, TrendSeries};
pub use source::RemoteDataSource;
