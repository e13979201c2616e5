//! Rejects transactions that submit non-whitelisted governance proposals.

use crate::error::AnteError;
use crate::proposal::is_proposal_whitelisted;
use crate::whitelist::is_module_whitelisted;
use centauri_types::{Msg, ProposalContent};

/// Check every message of a transaction before it is accepted.
///
/// - a legacy submission must carry whitelisted content;
/// - a v1 submission may only carry whitelisted message types, or wrapped
///   legacy content that is itself whitelisted;
/// - all other messages pass untouched.
///
/// Returns the first offending proposal kind or message type.
pub fn check_msgs(msgs: &[Msg]) -> Result<(), AnteError> {
    for msg in msgs {
        match msg {
            Msg::SubmitLegacyProposal(submit) => check_content(&submit.content)?,
            Msg::SubmitProposal(submit) => {
                for inner in &submit.messages {
                    match inner {
                        Msg::ExecLegacyContent(content) => check_content(content)?,
                        other if is_module_whitelisted(other.type_url()) => {}
                        other => {
                            tracing::debug!(
                                type_url = other.type_url(),
                                proposer = %submit.proposer,
                                "rejected proposal message"
                            );
                            return Err(AnteError::UnsupportedMessage(
                                other.type_url().to_string(),
                            ));
                        }
                    }
                }
            }
            Msg::Staking(_) | Msg::ExecLegacyContent(_) | Msg::Other { .. } => {}
        }
    }
    Ok(())
}

fn check_content(content: &ProposalContent) -> Result<(), AnteError> {
    if is_proposal_whitelisted(content) {
        Ok(())
    } else {
        tracing::debug!(content = content.type_url(), "rejected proposal content");
        Err(AnteError::UnsupportedProposal(content.type_url().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centauri_types::{
        Coin, MsgSubmitLegacyProposal, MsgSubmitProposal, ParamChange, ParameterChangeProposal,
        StakingMsg, TextProposal, TypeUrl,
    };

    fn other(type_url: &str) -> Msg {
        Msg::Other {
            type_url: TypeUrl::from(type_url),
        }
    }

    fn submit(messages: Vec<Msg>) -> Msg {
        Msg::SubmitProposal(MsgSubmitProposal {
            proposer: "centauri1proposer".into(),
            messages,
            initial_deposit: vec![Coin::new("ppica", 1_000)],
            metadata: String::new(),
        })
    }

    fn legacy(content: ProposalContent) -> Msg {
        Msg::SubmitLegacyProposal(MsgSubmitLegacyProposal {
            proposer: "centauri1proposer".into(),
            content,
            initial_deposit: Vec::new(),
        })
    }

    fn text() -> ProposalContent {
        ProposalContent::Text(TextProposal {
            title: "signal".into(),
            description: String::new(),
        })
    }

    fn staking_param_change(key: &str) -> ProposalContent {
        ProposalContent::ParameterChange(ParameterChangeProposal {
            title: "staking".into(),
            description: String::new(),
            changes: vec![ParamChange::new("staking", key, "\"100\"")],
        })
    }

    #[test]
    fn non_governance_messages_pass() {
        let msgs = vec![
            other("/cosmos.bank.v1beta1.MsgSend"),
            Msg::Staking(StakingMsg::Delegate {
                delegator: "centauri1d".into(),
                validator: "centaurivaloper1v".into(),
                amount: Coin::new("ppica", 5),
            }),
        ];
        assert_eq!(check_msgs(&msgs), Ok(()));
    }

    #[test]
    fn v1_proposal_with_whitelisted_messages_passes() {
        let msgs = vec![submit(vec![
            other("/cosmos.gov.v1.MsgUpdateParams"),
            other("/cosmos.upgrade.v1beta1.MsgSoftwareUpgrade"),
        ])];
        assert_eq!(check_msgs(&msgs), Ok(()));
    }

    #[test]
    fn v1_proposal_with_unlisted_message_is_rejected() {
        let msgs = vec![submit(vec![
            other("/cosmos.gov.v1.MsgUpdateParams"),
            other("/cosmos.bank.v1beta1.MsgSend"),
        ])];
        assert_eq!(
            check_msgs(&msgs),
            Err(AnteError::UnsupportedMessage(
                "/cosmos.bank.v1beta1.MsgSend".into()
            ))
        );
    }

    #[test]
    fn v1_proposal_cannot_smuggle_a_nested_submission() {
        let msgs = vec![submit(vec![submit(vec![other(
            "/cosmos.gov.v1.MsgUpdateParams",
        )])])];
        assert_eq!(
            check_msgs(&msgs),
            Err(AnteError::UnsupportedMessage(
                "/cosmos.gov.v1.MsgSubmitProposal".into()
            ))
        );
    }

    #[test]
    fn wrapped_legacy_content_is_classified() {
        let allowed = vec![submit(vec![Msg::ExecLegacyContent(staking_param_change(
            "MaxValidators",
        ))])];
        assert_eq!(check_msgs(&allowed), Ok(()));

        let rejected = vec![submit(vec![Msg::ExecLegacyContent(text())])];
        assert_eq!(
            check_msgs(&rejected),
            Err(AnteError::UnsupportedProposal(
                "/cosmos.gov.v1beta1.TextProposal".into()
            ))
        );
    }

    #[test]
    fn legacy_submission_is_classified() {
        assert_eq!(check_msgs(&[legacy(staking_param_change("BondDenom"))]), Ok(()));
        assert_eq!(
            check_msgs(&[legacy(staking_param_change("UnknownParam"))]),
            Err(AnteError::UnsupportedProposal(
                "/cosmos.params.v1beta1.ParameterChangeProposal".into()
            ))
        );
    }

    #[test]
    fn first_offending_message_is_reported() {
        let msgs = vec![
            other("/cosmos.bank.v1beta1.MsgSend"),
            legacy(text()),
            submit(vec![other("/cosmos.bank.v1beta1.MsgSend")]),
        ];
        assert!(matches!(
            check_msgs(&msgs),
            Err(AnteError::UnsupportedProposal(_))
        ));
    }
}
