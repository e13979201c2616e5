//! Classification of legacy governance proposal content.

use crate::params::is_param_whitelisted;
use centauri_types::{ParamChange, ParamChangeKey, ProposalContent};
use std::collections::HashSet;

/// Whether legacy proposal `content` may execute.
///
/// - parameter changes: every `(subspace, key)` must be whitelisted;
/// - software upgrades and their cancellation: always;
/// - anything else: never.
///
/// A parameter-change proposal with no changes passes.
pub fn is_proposal_whitelisted(content: &ProposalContent) -> bool {
    let allowed = match content {
        ProposalContent::ParameterChange(p) => {
            is_param_change_whitelisted(&param_change_keys(&p.changes))
        }
        ProposalContent::SoftwareUpgrade(_) | ProposalContent::CancelSoftwareUpgrade(_) => true,
        ProposalContent::Text(_) | ProposalContent::Other { .. } => false,
    };
    tracing::debug!(content = content.type_url(), allowed, "classified proposal content");
    allowed
}

/// Distinct `(subspace, key)` pairs touched by `changes`; values are ignored.
pub fn param_change_keys(changes: &[ParamChange]) -> HashSet<ParamChangeKey> {
    changes.iter().map(ParamChangeKey::from).collect()
}

/// Whether every key in `keys` is whitelisted. True for an empty set.
pub fn is_param_change_whitelisted(keys: &HashSet<ParamChangeKey>) -> bool {
    keys.iter().all(is_param_whitelisted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use centauri_types::{
        CancelSoftwareUpgradeProposal, ParameterChangeProposal, Plan, SoftwareUpgradeProposal,
        TextProposal, TypeUrl,
    };

    fn param_change(changes: &[(&str, &str)]) -> ProposalContent {
        ProposalContent::ParameterChange(ParameterChangeProposal {
            title: "params".into(),
            description: "update params".into(),
            changes: changes
                .iter()
                .map(|(subspace, key)| ParamChange::new(*subspace, *key, "\"1\""))
                .collect(),
        })
    }

    #[test]
    fn whitelisted_param_change_passes() {
        assert!(is_proposal_whitelisted(&param_change(&[(
            "staking",
            "MaxValidators"
        )])));
    }

    #[test]
    fn one_unknown_key_rejects_the_proposal() {
        assert!(!is_proposal_whitelisted(&param_change(&[
            ("staking", "MaxValidators"),
            ("staking", "UnknownParam"),
        ])));
    }

    #[test]
    fn unknown_module_rejects_the_proposal() {
        assert!(!is_proposal_whitelisted(&param_change(&[(
            "slashing",
            "SignedBlocksWindow"
        )])));
    }

    #[test]
    fn empty_param_change_passes() {
        assert!(is_proposal_whitelisted(&param_change(&[])));
    }

    #[test]
    fn duplicate_keys_collapse() {
        let changes = vec![
            ParamChange::new("bank", "SendEnabled", "[]"),
            ParamChange::new("bank", "SendEnabled", "[{\"denom\":\"ppica\"}]"),
            ParamChange::new("gov", "votingparams", "{}"),
        ];
        let keys = param_change_keys(&changes);
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&ParamChangeKey::new("bank", "SendEnabled")));
        assert!(is_param_change_whitelisted(&keys));
    }

    #[test]
    fn upgrades_always_pass() {
        let upgrade = ProposalContent::SoftwareUpgrade(SoftwareUpgradeProposal {
            title: "v7".into(),
            description: String::new(),
            plan: Plan {
                name: "v7".into(),
                height: 1_000_000,
                info: String::new(),
            },
        });
        let cancel = ProposalContent::CancelSoftwareUpgrade(CancelSoftwareUpgradeProposal {
            title: "cancel v7".into(),
            description: String::new(),
        });
        assert!(is_proposal_whitelisted(&upgrade));
        assert!(is_proposal_whitelisted(&cancel));
    }

    #[test]
    fn text_and_unknown_content_are_rejected() {
        let text = ProposalContent::Text(TextProposal {
            title: "signal".into(),
            description: "non-binding".into(),
        });
        let other = ProposalContent::Other {
            type_url: TypeUrl::from("/cosmos.distribution.v1beta1.CommunityPoolSpendProposal"),
        };
        assert!(!is_proposal_whitelisted(&text));
        assert!(!is_proposal_whitelisted(&other));
    }
}
