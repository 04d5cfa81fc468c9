//! Asset change classification
//!
//! Each reconciled asset falls into exactly one of five buckets, decided by
//! which sizes are present first and by their ordering second.

use crate::reconcile::{ReconciledAsset, Reconciliation};
use serde::Serialize;
use std::cmp::Reverse;

/// How an asset changed between the two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// Present in both with equal size
    Unchanged {
        /// Size in both snapshots
        size: u64,
    },
    /// Present in both, larger now
    Increased {
        /// Baseline size
        old: u64,
        /// Current size
        new: u64,
    },
    /// Present in both, smaller now
    Decreased {
        /// Baseline size
        old: u64,
        /// Current size
        new: u64,
    },
    /// Only in the baseline
    OnlyOld {
        /// Baseline size
        size: u64,
    },
    /// Only in the current build
    OnlyNew {
        /// Current size
        size: u64,
    },
}

impl Change {
    /// Classify a pair of optional sizes
    ///
    /// Returns `None` only when both sizes are absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use webpack_diff::classify::Change;
    ///
    /// assert_eq!(Change::of(Some(1), Some(2)), Some(Change::Increased { old: 1, new: 2 }));
    /// assert_eq!(Change::of(None, Some(0)), Some(Change::OnlyNew { size: 0 }));
    /// assert_eq!(Change::of(None, None), None);
    /// ```
    pub fn of(old_size: Option<u64>, new_size: Option<u64>) -> Option<Self> {
        match (old_size, new_size) {
            (Some(old), Some(new)) if old == new => Some(Self::Unchanged { size: old }),
            (Some(old), Some(new)) if old < new => Some(Self::Increased { old, new }),
            (Some(old), Some(new)) => Some(Self::Decreased { old, new }),
            (Some(size), None) => Some(Self::OnlyOld { size }),
            (None, Some(size)) => Some(Self::OnlyNew { size }),
            (None, None) => None,
        }
    }

    /// Size delta for assets present in both snapshots
    pub fn delta(&self) -> Option<i64> {
        match *self {
            Self::Unchanged { .. } => Some(0),
            Self::Increased { old, new } | Self::Decreased { old, new } => {
                Some(new as i64 - old as i64)
            }
            Self::OnlyOld { .. } | Self::OnlyNew { .. } => None,
        }
    }
}

/// Reconciled assets partitioned into sorted buckets
#[derive(Debug, Default)]
pub struct ClassifiedAssets<'a> {
    /// New assets, largest first
    pub only_new: Vec<&'a ReconciledAsset>,
    /// Grown assets, largest growth first
    pub increased: Vec<&'a ReconciledAsset>,
    /// Same-size assets, in reconciliation order
    pub unchanged: Vec<&'a ReconciledAsset>,
    /// Shrunk assets, by delta descending (smallest shrink first)
    pub decreased: Vec<&'a ReconciledAsset>,
    /// Removed assets, largest first
    pub only_old: Vec<&'a ReconciledAsset>,
}

impl<'a> ClassifiedAssets<'a> {
    /// Partition and sort the assets of a reconciliation
    pub fn from_reconciliation(reconciliation: &'a Reconciliation) -> Self {
        Self::from_assets(reconciliation.assets())
    }

    /// Partition and sort a slice of reconciled assets
    pub fn from_assets(assets: &'a [ReconciledAsset]) -> Self {
        let mut classified = Self::default();

        for asset in assets {
            match Change::of(asset.old_size, asset.new_size) {
                Some(Change::Unchanged { .. }) => classified.unchanged.push(asset),
                Some(Change::Increased { .. }) => classified.increased.push(asset),
                Some(Change::Decreased { .. }) => classified.decreased.push(asset),
                Some(Change::OnlyOld { .. }) => classified.only_old.push(asset),
                Some(Change::OnlyNew { .. }) => classified.only_new.push(asset),
                None => log::warn!("asset {} has no size in either snapshot", asset.name),
            }
        }

        classified
            .only_new
            .sort_by_key(|a| Reverse(a.new_size.unwrap_or(0)));
        classified
            .increased
            .sort_by_key(|a| Reverse(a.delta().unwrap_or(0)));
        classified
            .decreased
            .sort_by_key(|a| Reverse(a.delta().unwrap_or(0)));
        classified
            .only_old
            .sort_by_key(|a| Reverse(a.old_size.unwrap_or(0)));

        classified
    }

    /// Total number of classified assets
    pub fn len(&self) -> usize {
        self.only_new.len()
            + self.increased.len()
            + self.unchanged.len()
            + self.decreased.len()
            + self.only_old.len()
    }

    /// Whether no asset was classified
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
