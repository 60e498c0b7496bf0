//! Rift Rewind library entry points.
//!
//! This crate resolves a Riot ID (game name + tag line) and platform region
//! into a condensed summoner summary: profile level, icon, and top champion
//! masteries. It owns the region routing table, the Riot API client, the
//! secret-store seam used to obtain the API key, and the lookup orchestrator
//! that chains the upstream calls. Higher-level consumers (CLI, Lambda) should
//! only depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod region;
pub mod riot;
pub mod secrets;

pub use config::{LookupConfig, API_BASE_ENV, DEFAULT_API_BASE, HTTP_TIMEOUT_ENV};
pub use error::{Error, Result, UpstreamCall};
pub use lookup::{LookupRequest, SummonerLookup, DEFAULT_REGION, DEFAULT_TAG_LINE};
pub use models::{AccountRecord, LookupResult, MasteryEntry, SummonerRecord, SummonerSummary};
pub use region::{cluster_for, Cluster, SUPPORTED_REGIONS};
pub use riot::{RiotClient, MASTERY_COUNT};
pub use secrets::{SecretStore, SsmSecretStore, StaticSecretStore, API_KEY_PARAMETER};
