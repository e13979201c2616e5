//! Governance proposal content.

use crate::type_url::TypeUrl;
use serde::{Deserialize, Serialize};

/// One requested parameter update inside a parameter-change proposal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamChange {
    /// Name of the parameter subspace, which is the owning module's name.
    pub subspace: String,
    pub key: String,
    /// New value, JSON-encoded as the module's parameter store expects it.
    pub value: String,
}

impl ParamChange {
    pub fn new(
        subspace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            subspace: subspace.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Identifies one tunable parameter within one module.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParamChangeKey {
    pub module: String,
    pub key: String,
}

impl ParamChangeKey {
    pub fn new(module: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            key: key.into(),
        }
    }
}

impl From<&ParamChange> for ParamChangeKey {
    fn from(change: &ParamChange) -> Self {
        Self::new(change.subspace.clone(), change.key.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterChangeProposal {
    pub title: String,
    pub description: String,
    pub changes: Vec<ParamChange>,
}

/// An upgrade plan: the named upgrade takes effect at `height`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub height: u64,
    #[serde(default)]
    pub info: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareUpgradeProposal {
    pub title: String,
    pub description: String,
    pub plan: Plan,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSoftwareUpgradeProposal {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProposal {
    pub title: String,
    pub description: String,
}

/// What a legacy governance proposal asks the chain to do.
///
/// `Other` carries any proposal kind this chain has no dedicated variant for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProposalContent {
    ParameterChange(ParameterChangeProposal),
    SoftwareUpgrade(SoftwareUpgradeProposal),
    CancelSoftwareUpgrade(CancelSoftwareUpgradeProposal),
    Text(TextProposal),
    Other { type_url: TypeUrl },
}

impl ProposalContent {
    /// Type URL of the content as it appears inside a `MsgSubmitProposal`.
    pub fn type_url(&self) -> &str {
        match self {
            Self::ParameterChange(_) => "/cosmos.params.v1beta1.ParameterChangeProposal",
            Self::SoftwareUpgrade(_) => "/cosmos.upgrade.v1beta1.SoftwareUpgradeProposal",
            Self::CancelSoftwareUpgrade(_) => {
                "/cosmos.upgrade.v1beta1.CancelSoftwareUpgradeProposal"
            }
            Self::Text(_) => "/cosmos.gov.v1beta1.TextProposal",
            Self::Other { type_url } => type_url.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_change_key_ignores_value() {
        let a = ParamChange::new("staking", "MaxValidators", "100");
        let b = ParamChange::new("staking", "MaxValidators", "150");
        assert_eq!(ParamChangeKey::from(&a), ParamChangeKey::from(&b));
    }

    #[test]
    fn content_json_is_tagged() {
        let json = r#"{
            "type": "parameter_change",
            "title": "raise validator cap",
            "description": "",
            "changes": [{"subspace": "staking", "key": "MaxValidators", "value": "150"}]
        }"#;
        let content: ProposalContent = serde_json::from_str(json).unwrap();
        match content {
            ProposalContent::ParameterChange(p) => {
                assert_eq!(p.changes.len(), 1);
                assert_eq!(p.changes[0].key, "MaxValidators");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn other_content_reports_its_own_type_url() {
        let content = ProposalContent::Other {
            type_url: TypeUrl::from("/ibc.core.client.v1.ClientUpdateProposal"),
        };
        assert_eq!(content.type_url(), "/ibc.core.client.v1.ClientUpdateProposal");
    }
}
