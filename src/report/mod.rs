//! Comparison report
//!
//! Builds a [`Report`] from classified assets, applying the cutoff to module
//! rows and decreased assets. The report renders as text ([`TextReporter`])
//! or serializes as JSON.

pub mod text;

pub use text::TextReporter;

use crate::classify::ClassifiedAssets;
use crate::config::DEFAULT_NAME_WIDTH;
use crate::reconcile::{ReconciledAsset, Reconciliation};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Report rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Minimum absolute delta for module rows and decreased assets
    pub cutoff: u64,
    /// Module column width
    pub name_width: usize,
    /// Emit ANSI styling
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            cutoff: 0,
            name_width: DEFAULT_NAME_WIDTH,
            color: false,
        }
    }
}

/// Whether a module row grew or shrank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Module grew
    Regression,
    /// Module shrank
    Improvement,
}

/// Asset present in one snapshot only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizedAsset {
    /// Logical asset name
    pub name: String,
    /// Size in the snapshot it appears in
    pub size: u64,
}

/// Asset present in both snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaAsset {
    /// Logical asset name
    pub name: String,
    /// Baseline size
    pub old_size: u64,
    /// Current size
    pub new_size: u64,
    /// `new_size - old_size`
    pub delta: i64,
}

/// One row of an increased asset's module table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRow {
    /// Module name without depth
    pub name: String,
    /// Current size
    pub current: u64,
    /// Baseline size
    pub base: u64,
    /// `current - base`
    pub delta: i64,
    /// Regression or improvement
    pub status: RowStatus,
    /// Member file names of a concatenated module
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constituents: Vec<String>,
}

/// Increased asset with its module breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncreasedAsset {
    /// Size change of the asset itself
    #[serde(flatten)]
    pub asset: DeltaAsset,
    /// Sum of every listed module's delta, before the cutoff
    ///
    /// Does not generally equal the asset delta: colliding module keys and
    /// modules shared between assets are counted by their merged sizes.
    pub module_delta_sum: i64,
    /// Module rows passing the cutoff, largest delta first
    pub modules: Vec<ModuleRow>,
}

/// Unchanged assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnchangedSection {
    /// Number of unchanged assets
    pub count: usize,
    /// Names, listed only when no cutoff is set
    pub names: Vec<String>,
}

/// Decreased assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecreasedSection {
    /// Number of decreased assets, including those below the cutoff
    pub count: usize,
    /// Assets passing the cutoff, by delta descending
    pub assets: Vec<DeltaAsset>,
}

/// Full comparison report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Cutoff applied to module rows and decreased assets
    pub cutoff: u64,
    /// Assets only in the current build, largest first
    pub only_new: Vec<SizedAsset>,
    /// Grown assets, largest growth first
    pub increased: Vec<IncreasedAsset>,
    /// Same-size assets
    pub unchanged: UnchangedSection,
    /// Shrunk assets
    pub decreased: DecreasedSection,
    /// Assets only in the baseline, largest first
    pub only_old: Vec<SizedAsset>,
}

impl Report {
    /// Build a report from a reconciliation
    ///
    /// # Examples
    ///
    /// ```
    /// use webpack_diff::reconcile::Reconciler;
    /// use webpack_diff::report::Report;
    /// use webpack_diff::stats::StatsDocument;
    ///
    /// let baseline: StatsDocument = serde_json::from_str(
    ///     r#"{"assets": [{"name": "old.js", "size": 10, "chunks": []}], "chunks": []}"#,
    /// )?;
    /// let current = StatsDocument::default();
    ///
    /// let reconciliation = Reconciler::new().reconcile(&baseline, &current);
    /// let report = Report::build(&reconciliation, 0);
    /// assert_eq!(report.only_old[0].name, "old.js");
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn build(reconciliation: &Reconciliation, cutoff: u64) -> Self {
        let classified = ClassifiedAssets::from_reconciliation(reconciliation);
        Self::from_classified(reconciliation, &classified, cutoff)
    }

    /// Build a report from already classified assets
    pub fn from_classified(
        reconciliation: &Reconciliation,
        classified: &ClassifiedAssets<'_>,
        cutoff: u64,
    ) -> Self {
        let only_new = classified
            .only_new
            .iter()
            .map(|a| SizedAsset {
                name: a.name.clone(),
                size: a.new_size.unwrap_or(0),
            })
            .collect();

        let increased = classified
            .increased
            .iter()
            .map(|a| increased_asset(reconciliation, a, cutoff))
            .collect();

        let unchanged = UnchangedSection {
            count: classified.unchanged.len(),
            names: if cutoff == 0 {
                classified.unchanged.iter().map(|a| a.name.clone()).collect()
            } else {
                Vec::new()
            },
        };

        let decreased = DecreasedSection {
            count: classified.decreased.len(),
            assets: classified
                .decreased
                .iter()
                .map(|a| delta_asset(a))
                .filter(|a| passes_cutoff(a.delta, cutoff))
                .collect(),
        };

        let only_old = classified
            .only_old
            .iter()
            .map(|a| SizedAsset {
                name: a.name.clone(),
                size: a.old_size.unwrap_or(0),
            })
            .collect();

        Self {
            cutoff,
            only_new,
            increased,
            unchanged,
            decreased,
            only_old,
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))
    }
}

/// `abs(delta) >= cutoff`
pub fn passes_cutoff(delta: i64, cutoff: u64) -> bool {
    delta.unsigned_abs() >= cutoff
}

fn delta_asset(asset: &ReconciledAsset) -> DeltaAsset {
    let old_size = asset.old_size.unwrap_or(0);
    let new_size = asset.new_size.unwrap_or(0);
    DeltaAsset {
        name: asset.name.clone(),
        old_size,
        new_size,
        delta: new_size as i64 - old_size as i64,
    }
}

fn increased_asset(
    reconciliation: &Reconciliation,
    asset: &ReconciledAsset,
    cutoff: u64,
) -> IncreasedAsset {
    let mut modules: Vec<_> = reconciliation.modules(asset).collect();
    modules.sort_by_key(|m| Reverse(m.delta()));

    let module_delta_sum = modules.iter().map(|m| m.delta()).sum();

    let rows = modules
        .into_iter()
        .filter(|m| m.delta() != 0 && passes_cutoff(m.delta(), cutoff))
        .map(|m| ModuleRow {
            name: m.display_name().to_string(),
            current: m.new_size,
            base: m.old_size,
            delta: m.delta(),
            status: if m.delta() > 0 {
                RowStatus::Regression
            } else {
                RowStatus::Improvement
            },
            constituents: m.constituents().into_iter().map(String::from).collect(),
        })
        .collect();

    IncreasedAsset {
        asset: delta_asset(asset),
        module_delta_sum,
        modules: rows,
    }
}
