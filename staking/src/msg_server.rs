//! Staking message servers.

use crate::error::StakingError;
use crate::keeper::{BaseKeeper, Keeper};
use crate::params::Params;
use centauri_module::{ModuleError, MsgResponse, MsgServer};
use centauri_types::{Msg, StakingMsg};

/// The framework's default staking message server: applies every message
/// directly through the base keeper.
#[derive(Clone)]
pub struct BaseMsgServer {
    keeper: BaseKeeper,
}

impl BaseMsgServer {
    pub fn new(keeper: BaseKeeper) -> Self {
        Self { keeper }
    }

    fn handle_staking(&self, msg: &StakingMsg) -> Result<MsgResponse, StakingError> {
        let response = MsgResponse::default().with_event("action", msg.type_url());
        match msg {
            StakingMsg::Delegate {
                delegator,
                validator,
                amount,
            } => {
                let bonded = self.keeper.delegate(delegator, validator, amount)?;
                Ok(response.with_event("bonded", bonded.to_string()))
            }
            StakingMsg::Undelegate {
                delegator,
                validator,
                amount,
            } => {
                let remaining = self.keeper.undelegate(delegator, validator, amount)?;
                Ok(response.with_event("bonded", remaining.to_string()))
            }
            StakingMsg::BeginRedelegate {
                delegator,
                src_validator,
                dst_validator,
                amount,
            } => {
                let bonded =
                    self.keeper
                        .begin_redelegate(delegator, src_validator, dst_validator, amount)?;
                Ok(response.with_event("bonded", bonded.to_string()))
            }
            StakingMsg::EditValidator {
                validator,
                commission_rate,
            } => {
                let edited = self.keeper.edit_validator(validator, *commission_rate)?;
                Ok(response.with_event("commission_rate", edited.commission_rate.to_string()))
            }
            StakingMsg::UpdateParams {
                authority,
                unbonding_time_secs,
                max_validators,
                max_entries,
                historical_entries,
                bond_denom,
                min_commission_rate,
            } => {
                if authority != self.keeper.authority() {
                    return Err(StakingError::Unauthorized {
                        expected: self.keeper.authority().to_string(),
                        got: authority.clone(),
                    });
                }
                self.keeper.set_params(&Params {
                    unbonding_time_secs: *unbonding_time_secs,
                    max_validators: *max_validators,
                    max_entries: *max_entries,
                    historical_entries: *historical_entries,
                    bond_denom: bond_denom.clone(),
                    min_commission_rate: *min_commission_rate,
                })?;
                Ok(response)
            }
        }
    }
}

impl MsgServer for BaseMsgServer {
    fn handle(&self, msg: &Msg) -> Result<MsgResponse, ModuleError> {
        match msg {
            Msg::Staking(staking) => Ok(self.handle_staking(staking)?),
            other => Err(ModuleError::UnhandledMessage(other.type_url().to_string())),
        }
    }
}

/// The app's staking message server: buffers `MsgDelegate` in the custom
/// keeper and hands everything else to the default server.
#[derive(Clone)]
pub struct CustomMsgServer {
    base: BaseMsgServer,
    keeper: Keeper,
}

impl CustomMsgServer {
    pub fn new(base: BaseKeeper, keeper: Keeper) -> Self {
        Self {
            base: BaseMsgServer::new(base),
            keeper,
        }
    }
}

impl MsgServer for CustomMsgServer {
    fn handle(&self, msg: &Msg) -> Result<MsgResponse, ModuleError> {
        match msg {
            Msg::Staking(StakingMsg::Delegate {
                delegator,
                validator,
                amount,
            }) => {
                let seq = self.keeper.buffer_delegation(delegator, validator, amount)?;
                Ok(MsgResponse::default()
                    .with_event("action", msg.type_url())
                    .with_event("pending_delegation", seq.to_string()))
            }
            other => self.base.handle(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centauri_nullables::NullStore;
    use centauri_types::{Coin, Dec, TypeUrl};
    use std::sync::Arc;

    fn setup() -> (Keeper, CustomMsgServer) {
        let base = BaseKeeper::new(Arc::new(NullStore::new()), "centauri1gov");
        base.set_params(&Params::default()).unwrap();
        base.create_validator("val1", Dec::ZERO).unwrap();
        let keeper = Keeper::new(base.clone());
        (keeper.clone(), CustomMsgServer::new(base, keeper))
    }

    fn delegate(amount: u128) -> Msg {
        Msg::Staking(StakingMsg::Delegate {
            delegator: "alice".into(),
            validator: "val1".into(),
            amount: Coin::new("ppica", amount),
        })
    }

    #[test]
    fn delegate_is_buffered_not_applied() {
        let (keeper, server) = setup();
        let response = server.handle(&delegate(25)).unwrap();
        assert!(response
            .events
            .contains(&("pending_delegation".to_string(), "0".to_string())));
        assert_eq!(keeper.keeper.delegation("alice", "val1").unwrap(), 0);
        assert_eq!(keeper.pending_delegations().unwrap().len(), 1);
    }

    #[test]
    fn default_server_applies_delegate_immediately() {
        let (keeper, _) = setup();
        let base = BaseMsgServer::new(keeper.keeper.clone());
        base.handle(&delegate(25)).unwrap();
        assert_eq!(keeper.keeper.delegation("alice", "val1").unwrap(), 25);
    }

    #[test]
    fn other_staking_msgs_go_to_default_server() {
        let (keeper, server) = setup();
        keeper.keeper.delegate("alice", "val1", &Coin::new("ppica", 30)).unwrap();
        server
            .handle(&Msg::Staking(StakingMsg::Undelegate {
                delegator: "alice".into(),
                validator: "val1".into(),
                amount: Coin::new("ppica", 10),
            }))
            .unwrap();
        assert_eq!(keeper.keeper.delegation("alice", "val1").unwrap(), 20);
    }

    #[test]
    fn update_params_requires_authority() {
        let (keeper, server) = setup();
        let update = |authority: &str| {
            Msg::Staking(StakingMsg::UpdateParams {
                authority: authority.into(),
                unbonding_time_secs: 3600,
                max_validators: 50,
                max_entries: 7,
                historical_entries: 100,
                bond_denom: "ppica".into(),
                min_commission_rate: Dec::with_prec(5, 2),
            })
        };
        assert!(server.handle(&update("centauri1mallory")).is_err());
        server.handle(&update("centauri1gov")).unwrap();
        assert_eq!(keeper.keeper.params().unwrap().max_validators, 50);
    }

    #[test]
    fn foreign_messages_are_unhandled() {
        let (_, server) = setup();
        let msg = Msg::Other {
            type_url: TypeUrl::from("/cosmos.bank.v1beta1.MsgSend"),
        };
        assert!(matches!(
            server.handle(&msg),
            Err(ModuleError::UnhandledMessage(_))
        ));
    }
}
