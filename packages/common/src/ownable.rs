//! Two-step ownership transfer.
//!
//! `TransferOwnership` only records a pending owner. The current owner keeps
//! every owner-gated capability until the pending owner calls
//! `AcceptOwnership`, so a transfer to a wrong or unreachable address can be
//! overwritten instead of bricking the contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, DepsMut, MessageInfo, Response, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::InteractorError;

/// Ownership update actions
#[cw_serde]
pub enum OwnershipAction {
    /// Propose a new owner. Overwrites any previous proposal.
    TransferOwnership { new_owner: String },
    /// Finalize a proposal; callable by the pending owner only.
    AcceptOwnership {},
    /// Give up ownership permanently.
    RenounceOwnership {},
}

#[cw_serde]
pub struct OwnershipResponse {
    /// `None` once ownership has been renounced
    pub owner: Option<Addr>,
    pub pending_owner: Option<Addr>,
}

pub struct Ownable2Step<'a> {
    owner: Item<'a, Addr>,
    pending_owner: Item<'a, Addr>,
}

impl<'a> Ownable2Step<'a> {
    pub const fn new(owner_namespace: &'a str, pending_namespace: &'a str) -> Self {
        Self {
            owner: Item::new(owner_namespace),
            pending_owner: Item::new(pending_namespace),
        }
    }

    pub fn initialize(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        owner: &str,
    ) -> Result<Addr, InteractorError> {
        let owner = api.addr_validate(owner)?;
        self.owner.save(storage, &owner)?;
        Ok(owner)
    }

    pub fn owner(&self, storage: &dyn Storage) -> StdResult<Option<Addr>> {
        self.owner.may_load(storage)
    }

    pub fn is_owner(&self, storage: &dyn Storage, addr: &Addr) -> StdResult<bool> {
        Ok(self.owner(storage)?.as_ref() == Some(addr))
    }

    pub fn assert_owner(&self, storage: &dyn Storage, sender: &Addr) -> Result<(), InteractorError> {
        if !self.is_owner(storage, sender)? {
            return Err(InteractorError::Unauthorized);
        }
        Ok(())
    }

    pub fn execute(
        &self,
        deps: DepsMut,
        info: &MessageInfo,
        action: OwnershipAction,
    ) -> Result<Response, InteractorError> {
        match action {
            OwnershipAction::TransferOwnership { new_owner } => {
                self.assert_owner(deps.storage, &info.sender)?;
                let pending = deps.api.addr_validate(&new_owner)?;
                self.pending_owner.save(deps.storage, &pending)?;

                Ok(Response::new()
                    .add_attribute("action", "transfer_ownership")
                    .add_attribute("previous_owner", info.sender.as_str())
                    .add_attribute("pending_owner", pending))
            }
            OwnershipAction::AcceptOwnership {} => {
                let pending = self
                    .pending_owner
                    .may_load(deps.storage)?
                    .ok_or(InteractorError::NoPendingOwner)?;
                if info.sender != pending {
                    return Err(InteractorError::UnauthorizedPendingOwner);
                }

                self.owner.save(deps.storage, &pending)?;
                self.pending_owner.remove(deps.storage);

                Ok(Response::new()
                    .add_attribute("action", "accept_ownership")
                    .add_attribute("new_owner", pending))
            }
            OwnershipAction::RenounceOwnership {} => {
                self.assert_owner(deps.storage, &info.sender)?;
                self.owner.remove(deps.storage);
                self.pending_owner.remove(deps.storage);

                Ok(Response::new()
                    .add_attribute("action", "renounce_ownership")
                    .add_attribute("previous_owner", info.sender.as_str()))
            }
        }
    }

    pub fn query(&self, storage: &dyn Storage) -> StdResult<OwnershipResponse> {
        Ok(OwnershipResponse {
            owner: self.owner.may_load(storage)?,
            pending_owner: self.pending_owner.may_load(storage)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};

    const OWNERSHIP: Ownable2Step = Ownable2Step::new("owner", "pending_owner");

    #[test]
    fn test_old_owner_keeps_control_until_accept() {
        let mut deps = mock_dependencies();
        OWNERSHIP
            .initialize(&mut deps.storage, &deps.api, "alice")
            .unwrap();

        OWNERSHIP
            .execute(
                deps.as_mut(),
                &mock_info("alice", &[]),
                OwnershipAction::TransferOwnership {
                    new_owner: "bob".to_string(),
                },
            )
            .unwrap();

        let alice = Addr::unchecked("alice");
        let bob = Addr::unchecked("bob");
        assert!(OWNERSHIP.is_owner(deps.as_ref().storage, &alice).unwrap());
        assert!(!OWNERSHIP.is_owner(deps.as_ref().storage, &bob).unwrap());

        // Nobody else can accept
        let err = OWNERSHIP
            .execute(
                deps.as_mut(),
                &mock_info("mallory", &[]),
                OwnershipAction::AcceptOwnership {},
            )
            .unwrap_err();
        assert_eq!(err, InteractorError::UnauthorizedPendingOwner);

        OWNERSHIP
            .execute(
                deps.as_mut(),
                &mock_info("bob", &[]),
                OwnershipAction::AcceptOwnership {},
            )
            .unwrap();

        assert!(!OWNERSHIP.is_owner(deps.as_ref().storage, &alice).unwrap());
        assert!(OWNERSHIP.is_owner(deps.as_ref().storage, &bob).unwrap());
        assert_eq!(
            OWNERSHIP.query(deps.as_ref().storage).unwrap().pending_owner,
            None
        );
    }

    #[test]
    fn test_accept_without_proposal_fails() {
        let mut deps = mock_dependencies();
        OWNERSHIP
            .initialize(&mut deps.storage, &deps.api, "alice")
            .unwrap();

        let err = OWNERSHIP
            .execute(
                deps.as_mut(),
                &mock_info("bob", &[]),
                OwnershipAction::AcceptOwnership {},
            )
            .unwrap_err();
        assert_eq!(err, InteractorError::NoPendingOwner);
    }

    #[test]
    fn test_renounce_disables_owner_gate() {
        let mut deps = mock_dependencies();
        OWNERSHIP
            .initialize(&mut deps.storage, &deps.api, "alice")
            .unwrap();

        OWNERSHIP
            .execute(
                deps.as_mut(),
                &mock_info("alice", &[]),
                OwnershipAction::RenounceOwnership {},
            )
            .unwrap();

        let err = OWNERSHIP
            .assert_owner(deps.as_ref().storage, &Addr::unchecked("alice"))
            .unwrap_err();
        assert_eq!(err, InteractorError::Unauthorized);
        assert_eq!(OWNERSHIP.query(deps.as_ref().storage).unwrap().owner, None);
    }
}
