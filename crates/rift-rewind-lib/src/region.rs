//! Platform region to regional routing cluster table.
//!
//! Account lookups are served by the three macro-regional clusters while
//! summoner and mastery lookups go to the platform region itself. The table is
//! built once per process and only read afterwards.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Error, Result};

/// Regional routing cluster used for `account-v1` lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    Americas,
    Europe,
    Asia,
}

impl Cluster {
    /// Host label of the cluster (`americas.api.riotgames.com`).
    pub fn as_str(self) -> &'static str {
        match self {
            Cluster::Americas => "americas",
            Cluster::Europe => "europe",
            Cluster::Asia => "asia",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every supported platform region with its cluster, in display order.
pub const SUPPORTED_REGIONS: [(&str, Cluster); 11] = [
    ("na1", Cluster::Americas),
    ("la1", Cluster::Americas),
    ("la2", Cluster::Americas),
    ("br1", Cluster::Americas),
    ("euw1", Cluster::Europe),
    ("eun1", Cluster::Europe),
    ("tr1", Cluster::Europe),
    ("ru", Cluster::Europe),
    ("kr", Cluster::Asia),
    ("oc1", Cluster::Asia),
    ("jp1", Cluster::Asia),
];

static REGION_CLUSTERS: Lazy<HashMap<&'static str, Cluster>> =
    Lazy::new(|| SUPPORTED_REGIONS.iter().copied().collect());

/// Look up the routing cluster for a platform region code.
///
/// Matching is exact; `"NA1"` is not `"na1"`.
pub fn cluster_for(region: &str) -> Option<Cluster> {
    REGION_CLUSTERS.get(region).copied()
}

/// Like [`cluster_for`], but reports an unknown region as [`Error::UnknownRegion`].
pub fn resolve_cluster(region: &str) -> Result<Cluster> {
    cluster_for(region).ok_or_else(|| Error::UnknownRegion {
        region: region.to_string(),
    })
}
