use serde::{Deserialize, Serialize};

/// Binary ground-truth label used for ranking (ROC) and for the distribution plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Inactive,
    Active,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Inactive => 0,
            Label::Active => 1,
        }
    }

    pub fn is_active(self) -> bool {
        self == Label::Active
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Label::Inactive => "Inactive",
            Label::Active => "Active",
        }
    }
}

/// Membership in the two-sample comparison. `Unassigned` rows only take part in ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Active,
    Inactive,
    Unassigned,
}

impl Group {
    pub fn name(self) -> &'static str {
        match self {
            Group::Active => "active",
            Group::Inactive => "inactive",
            Group::Unassigned => "unassigned",
        }
    }
}

/// Identifier predicate. Matching is case-sensitive on the identifier as
/// stored, so leading whitespace defeats a prefix; blank identifiers never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum NamePredicate {
    StartsWith(String),
    StartsWithAny(Vec<String>),
    Any,
}

impl NamePredicate {
    pub fn matches(&self, identifier: &str) -> bool {
        if identifier.trim().is_empty() {
            return false;
        }
        match self {
            NamePredicate::StartsWith(prefix) => identifier.starts_with(prefix.as_str()),
            NamePredicate::StartsWithAny(prefixes) => {
                prefixes.iter().any(|p| identifier.starts_with(p.as_str()))
            }
            NamePredicate::Any => true,
        }
    }

    /// Builds a predicate from CLI prefixes; `None` when no prefix was given.
    pub fn from_prefixes(prefixes: &[String]) -> Option<Self> {
        match prefixes {
            [] => None,
            [single] => Some(NamePredicate::StartsWith(single.clone())),
            many => Some(NamePredicate::StartsWithAny(many.to_vec())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRule {
    pub active: NamePredicate,
    pub inactive: NamePredicate,
}

impl Default for LabelRule {
    fn default() -> Self {
        Self::chembl_decoys()
    }
}

impl LabelRule {
    /// ChEMBL actives against `C`-prefixed decoys.
    pub fn chembl_decoys() -> Self {
        Self {
            active: NamePredicate::StartsWith("CHEMBL".to_string()),
            inactive: NamePredicate::StartsWith("C".to_string()),
        }
    }

    pub fn label(&self, identifier: &str) -> Label {
        if self.active.matches(identifier) {
            Label::Active
        } else {
            Label::Inactive
        }
    }

    /// The active predicate takes precedence, so the two groups never overlap.
    pub fn group(&self, identifier: &str) -> Group {
        if self.active.matches(identifier) {
            Group::Active
        } else if self.inactive.matches(identifier) {
            Group::Inactive
        } else {
            Group::Unassigned
        }
    }
}

pub fn label_rows(identifiers: &[String], rule: &LabelRule) -> Vec<Label> {
    identifiers.iter().map(|id| rule.label(id)).collect()
}

pub fn assign_groups(identifiers: &[String], rule: &LabelRule) -> Vec<Group> {
    identifiers.iter().map(|id| rule.group(id)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/labels.rs"]
mod tests;
