use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::error::Result;
use crate::importer::{decode_lossy, read_input};

static COLUMN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid column gap regex"));

/// Product name -> quantity key -> profit for that quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GainsTable {
    products: HashMap<String, HashMap<String, f64>>,
}

impl GainsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: &str, quantity: &str, gain: f64) {
        self.products
            .entry(product.to_string())
            .or_default()
            .insert(quantity.to_string(), gain);
    }

    /// Quantity rules declared for `product`, if the product is listed.
    pub fn rules_for(&self, product: &str) -> Option<&HashMap<String, f64>> {
        self.products.get(product)
    }

    pub fn lookup(&self, product: &str, quantity_key: &str) -> Option<f64> {
        self.rules_for(product)?.get(quantity_key).copied()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RuleSkip {
    #[error("rule '{0}' has no ':' separator")]
    NoSeparator(String),
    #[error("rule '{rule}' has a non-numeric gain '{gain}'")]
    BadGain { rule: String, gain: String },
}

/// Parse a single `quantity:gain` rule.
pub fn parse_rule(rule: &str) -> std::result::Result<(String, f64), RuleSkip> {
    let Some((quantity, gain)) = rule.split_once(':') else {
        return Err(RuleSkip::NoSeparator(rule.to_string()));
    };
    let gain_value = gain
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|g| g.is_finite())
        .ok_or_else(|| RuleSkip::BadGain {
            rule: rule.to_string(),
            gain: gain.trim().to_string(),
        })?;
    Ok((quantity.trim().to_string(), gain_value))
}

/// Parse gains-list text. Bad rules are dropped one at a time; the rest of
/// the line and the file are still read.
pub fn parse_gains(content: &str) -> GainsTable {
    let mut table = GainsTable::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = COLUMN_GAP.splitn(line, 2);
        let product = parts.next().unwrap_or_default().trim();
        let Some(rules) = parts.next().map(str::trim).filter(|r| !r.is_empty()) else {
            continue;
        };
        for rule in rules.split(',') {
            match parse_rule(rule) {
                Ok((quantity, gain)) => table.insert(product, &quantity, gain),
                Err(RuleSkip::NoSeparator(_)) => {}
                Err(skip) => log::debug!("gains line {}: dropped {skip}", idx + 1),
            }
        }
    }
    table
}

/// Load the gains list. A missing file is fatal for the run.
pub fn load_gains(path: &Path) -> Result<GainsTable> {
    let bytes = read_input("Gains list file", path)?;
    let table = parse_gains(&decode_lossy(&bytes));
    log::info!("loaded gains for {} products from {}", table.len(), path.display());
    Ok(table)
}
