//! Transaction messages inspected by the proposal filter and routed to module servers.

use crate::coin::Coin;
use crate::dec::Dec;
use crate::proposal::ProposalContent;
use crate::type_url::TypeUrl;
use serde::{Deserialize, Serialize};

/// Messages handled by the staking module's message server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StakingMsg {
    Delegate {
        delegator: String,
        validator: String,
        amount: Coin,
    },
    Undelegate {
        delegator: String,
        validator: String,
        amount: Coin,
    },
    BeginRedelegate {
        delegator: String,
        src_validator: String,
        dst_validator: String,
        amount: Coin,
    },
    EditValidator {
        validator: String,
        #[serde(default)]
        commission_rate: Option<Dec>,
    },
    UpdateParams {
        authority: String,
        unbonding_time_secs: u64,
        max_validators: u32,
        max_entries: u32,
        historical_entries: u32,
        bond_denom: String,
        min_commission_rate: Dec,
    },
}

impl StakingMsg {
    pub fn type_url(&self) -> &'static str {
        match self {
            Self::Delegate { .. } => "/cosmos.staking.v1beta1.MsgDelegate",
            Self::Undelegate { .. } => "/cosmos.staking.v1beta1.MsgUndelegate",
            Self::BeginRedelegate { .. } => "/cosmos.staking.v1beta1.MsgBeginRedelegate",
            Self::EditValidator { .. } => "/cosmos.staking.v1beta1.MsgEditValidator",
            Self::UpdateParams { .. } => "/cosmos.staking.v1beta1.MsgUpdateParams",
        }
    }
}

/// A v1 governance submission: the proposal executes `messages` if it passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSubmitProposal {
    pub proposer: String,
    pub messages: Vec<Msg>,
    #[serde(default)]
    pub initial_deposit: Vec<Coin>,
    #[serde(default)]
    pub metadata: String,
}

/// A legacy (v1beta1) governance submission carrying typed content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSubmitLegacyProposal {
    pub proposer: String,
    pub content: ProposalContent,
    #[serde(default)]
    pub initial_deposit: Vec<Coin>,
}

/// A transaction message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Msg {
    Staking(StakingMsg),
    SubmitProposal(MsgSubmitProposal),
    SubmitLegacyProposal(MsgSubmitLegacyProposal),
    /// Legacy content wrapped so it can travel inside a v1 proposal.
    ExecLegacyContent(ProposalContent),
    Other { type_url: TypeUrl },
}

impl Msg {
    pub fn type_url(&self) -> &str {
        match self {
            Self::Staking(m) => m.type_url(),
            Self::SubmitProposal(_) => "/cosmos.gov.v1.MsgSubmitProposal",
            Self::SubmitLegacyProposal(_) => "/cosmos.gov.v1beta1.MsgSubmitProposal",
            Self::ExecLegacyContent(_) => "/cosmos.gov.v1.MsgExecLegacyContent",
            Self::Other { type_url } => type_url.as_str(),
        }
    }
}
