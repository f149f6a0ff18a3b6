//! Filter Rules - Declarative Filters From JSON Files
//!
//! Lets the CLI register filters without code. Each rule becomes one
//! callback on its hook.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::hooks::{FilterRegistry, KNOWN_HOOKS};
use crate::pipeline::PipelineError;
use crate::ENGINE_VERSION;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRule {
    pub id: String,
    pub hook: String,
    #[serde(default = "default_engine_min_version")]
    pub engine_min_version: String,
    pub action: RuleAction,
}

fn default_engine_min_version() -> String {
    crate::MIN_RULE_ENGINE_VERSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RuleAction {
    /// Return `value` as-is, whatever its JSON type.
    Replace { value: Value },
    Prefix { text: String },
    Suffix { text: String },
    /// Only applies when the incoming value is an empty string.
    Default { text: String },
}

impl RuleAction {
    /// Non-string inputs pass through every action except `replace`.
    pub fn apply(&self, value: Value) -> Value {
        match (self, value) {
            (RuleAction::Replace { value }, _) => value.clone(),
            (RuleAction::Prefix { text }, Value::String(s)) => Value::String(format!("{}{}", text, s)),
            (RuleAction::Suffix { text }, Value::String(s)) => Value::String(format!("{}{}", s, text)),
            (RuleAction::Default { text }, Value::String(s)) if s.is_empty() => Value::String(text.clone()),
            (_, other) => other,
        }
    }
}

impl FilterRule {
    pub fn check(&self) -> Result<(), PipelineError> {
        if self.id.trim().is_empty() {
            return Err(PipelineError::InvalidRule(
                "<empty>".into(),
                format!("empty id on hook {}", self.hook),
            ));
        }
        if !KNOWN_HOOKS.contains(&self.hook.as_str()) {
            return Err(PipelineError::InvalidRule(
                self.id.clone(),
                format!("unknown hook {}", self.hook),
            ));
        }
        self.check_engine_version()
    }

    fn check_engine_version(&self) -> Result<(), PipelineError> {
        let engine_ver = semver::Version::parse(ENGINE_VERSION)
            .map_err(|_| PipelineError::InvalidRule(self.id.clone(), "invalid engine version".into()))?;
        let min_ver = semver::Version::parse(&self.engine_min_version)
            .map_err(|_| PipelineError::InvalidRule(self.id.clone(), "invalid engineMinVersion".into()))?;

        if engine_ver < min_ver {
            return Err(PipelineError::EngineVersionMismatch(
                self.id.clone(),
                self.engine_min_version.clone(),
                ENGINE_VERSION.to_string(),
            ));
        }

        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self, PipelineError> {
        let content = fs::read_to_string(path)?;
        let rule: FilterRule = serde_json::from_str(&content)?;
        rule.check()?;
        Ok(rule)
    }
}

/// Rule set - loaded in file-name order
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<FilterRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every valid `*.json` rule in `dir`. Invalid files are skipped.
    pub fn load_from_dir(dir: &Path) -> Result<Self, PipelineError> {
        let mut set = Self::new();
        for (path, result) in Self::check_dir(dir)? {
            match result {
                Ok(rule) => set.rules.push(rule),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping filter rule"),
            }
        }
        Ok(set)
    }

    /// Parse and check every rule file in `dir` without discarding failures.
    pub fn check_dir(dir: &Path) -> Result<Vec<(PathBuf, Result<FilterRule, PipelineError>)>, PipelineError> {
        if !dir.exists() {
            return Ok(vec![]);
        }

        let mut paths = vec![];
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().map_or(false, |e| e == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        Ok(paths
            .into_iter()
            .map(|path| {
                let result = FilterRule::from_file(&path);
                (path, result)
            })
            .collect())
    }

    pub fn register(&mut self, rule: FilterRule) -> Result<(), PipelineError> {
        rule.check()?;
        self.rules.push(rule);
        Ok(())
    }

    pub fn list(&self) -> &[FilterRule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&FilterRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Keep only the named rules, in the order given.
    pub fn select(&self, ids: &[String]) -> Result<Self, PipelineError> {
        let rules = ids
            .iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| PipelineError::RuleNotFound(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Register each rule as a filter callback.
    pub fn install(&self, filters: &mut FilterRegistry) {
        for rule in &self.rules {
            let action = rule.action.clone();
            filters.add_filter(&rule.hook, move |value, _| action.apply(value));
        }
    }
}
