//! Category colours, applied when producing renderer output.

use anyhow::{Context, Result};
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Colour for keys the palette doesn't know.
pub const FALLBACK_COLOR: &str = "#6b7280";

const BUILTIN: &[(&str, &str)] = &[
    ("community", "#7c3aed"),
    ("dapp", "#2563eb"),
    ("defi", "#4f46e5"),
    ("dex", "#9333ea"),
    ("ecosystem-support", "#16a34a"),
    ("infrastructure", "#059669"),
    ("launchpad", "#db2777"),
    ("nft", "#c026d3"),
    ("other", "#4b5563"),
    ("utilities", "#475569"),
    ("aurora-virtual-chain", "#d97706"),
    ("bitcoin", "#ea580c"),
    ("accelerator", "#dc2626"),
    ("ai", "#0891b2"),
    ("analytics", "#0d9488"),
    ("asset-management", "#0284c7"),
    ("audit", "#e11d48"),
    ("aurora", "#ca8a04"),
    ("borrowing-lending", "#65a30d"),
    ("bos", "#22c55e"),
    ("bot", "#3b82f6"),
    ("bounty", "#a855f7"),
    ("bridge", "#6366f1"),
    ("cex", "#8b5cf6"),
    ("chain-abstraction", "#d946ef"),
    ("compliance", "#ec4899"),
    ("cross-chain-router", "#f43f5e"),
    ("custodian", "#f97316"),
    ("dao", "#f59e0b"),
    ("data-availability", "#10b981"),
    ("desci", "#06b6d4"),
    ("developer-support", "#14b8a6"),
    ("developer-tooling", "#0ea5e9"),
    ("education", "#1d4ed8"),
    ("enterprise", "#4338ca"),
    ("event", "#6d28d9"),
    ("explorer", "#7e22ce"),
    ("funding-node", "#a21caf"),
    ("game", "#be185d"),
    ("identity", "#be123c"),
    ("indexer", "#c2410c"),
    ("liquid-staking", "#b45309"),
    ("loyalty", "#a16207"),
    ("marketplace", "#4d7c0f"),
    ("memecoin", "#15803d"),
    ("messaging", "#047857"),
    ("mobile", "#0f766e"),
    ("music", "#0e7490"),
    ("on-off-ramp", "#0369a1"),
    ("oracles", "#1e40af"),
    ("payment", "#3730a3"),
    ("privacy", "#5b21b6"),
    ("productivity-tool", "#6b21a8"),
    ("regional-hub", "#86198f"),
    ("restaking", "#9d174d"),
    ("rpc", "#9f1239"),
    ("rwa", "#9a3412"),
    ("security", "#92400e"),
    ("service-provider", "#854d0e"),
    ("social", "#3f6212"),
    ("sport", "#166534"),
    ("stablecoin", "#065f46"),
    ("storage", "#115e59"),
    ("validator", "#155e75"),
    ("wallet", "#075985"),
    ("zero-knowledge", "#1e3a8a"),
];

/// Category key → CSS colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: IndexMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: BUILTIN
                .iter()
                .map(|(k, c)| (k.to_string(), c.to_string()))
                .collect(),
        }
    }
}

impl Palette {
    pub fn empty() -> Self {
        Self {
            colors: IndexMap::new(),
        }
    }

    /// Load a JSON object of key → colour and layer it over the built-in table.
    pub fn load_overrides(path: &Utf8Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let overrides: IndexMap<String, String> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse palette {}", path))?;
        let mut palette = Self::default();
        for (key, color) in overrides {
            palette.insert(key, color);
        }
        Ok(palette)
    }

    pub fn insert(&mut self, key: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(key.into(), color.into());
    }

    pub fn color_for(&self, key: &str) -> &str {
        self.colors
            .get(key)
            .map(|c| c.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }
}
