use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{MAX_ADMINS, MAX_SUPER_ADMINS};
use crate::error::EngineError;
use crate::state::IndexedSet;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    SuperAdmin,
}

/// Proof that the holder passed the role gate for the current call.
///
/// Only this module can mint one, so every ledger primitive taking a
/// `&AdminCapability` is reachable only through [`Roles::authorize`] or the
/// engine's own internal authority.
#[derive(Debug)]
pub struct AdminCapability {
    holder: Pubkey,
    super_admin: bool,
}

impl AdminCapability {
    /// Authority the engine uses for its own ledger bookkeeping (buy,
    /// vesting), acting as the ledger's built-in admin.
    pub(crate) fn engine(holder: Pubkey) -> Self {
        Self {
            holder,
            super_admin: false,
        }
    }

    pub fn holder(&self) -> Pubkey {
        self.holder
    }

    pub fn is_super_admin(&self) -> bool {
        self.super_admin
    }
}

/// Two-tier role sets. A super admin is implicitly an admin.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Roles {
    admins: IndexedSet,
    super_admins: IndexedSet,
}

impl Roles {
    pub const SIZE: usize = IndexedSet::space(MAX_ADMINS) + IndexedSet::space(MAX_SUPER_ADMINS);

    /// Role sets with `owner` as the first super admin.
    pub fn genesis(owner: Pubkey) -> Result<Self, EngineError> {
        let mut roles = Self::default();
        roles.super_admins.insert(owner, MAX_SUPER_ADMINS)?;
        Ok(roles)
    }

    pub fn is_admin(&self, account: &Pubkey) -> bool {
        self.admins.contains(account) || self.super_admins.contains(account)
    }

    pub fn is_super_admin(&self, account: &Pubkey) -> bool {
        self.super_admins.contains(account)
    }

    /// The single capability gate used by every privileged entry point.
    pub fn authorize(&self, caller: &Pubkey, role: Role) -> Result<AdminCapability, EngineError> {
        let super_admin = self.is_super_admin(caller);
        let allowed = match role {
            Role::Admin => super_admin || self.admins.contains(caller),
            Role::SuperAdmin => super_admin,
        };
        if !allowed {
            return Err(EngineError::Unauthorized);
        }
        Ok(AdminCapability {
            holder: *caller,
            super_admin,
        })
    }

    pub fn members(&self, role: Role) -> &IndexedSet {
        match role {
            Role::Admin => &self.admins,
            Role::SuperAdmin => &self.super_admins,
        }
    }

    /// Returns `true` when membership changed.
    pub fn grant(
        &mut self,
        cap: &AdminCapability,
        role: Role,
        account: Pubkey,
    ) -> Result<bool, EngineError> {
        if !cap.is_super_admin() {
            return Err(EngineError::Unauthorized);
        }
        match role {
            Role::Admin => self.admins.insert(account, MAX_ADMINS),
            Role::SuperAdmin => self.super_admins.insert(account, MAX_SUPER_ADMINS),
        }
    }

    /// Returns `true` when membership changed.
    pub fn revoke(
        &mut self,
        cap: &AdminCapability,
        role: Role,
        account: &Pubkey,
    ) -> Result<bool, EngineError> {
        if !cap.is_super_admin() {
            return Err(EngineError::Unauthorized);
        }
        match role {
            Role::Admin => Ok(self.admins.remove(account)),
            Role::SuperAdmin => {
                if self.super_admins.contains(account) && self.super_admins.active_count() == 1 {
                    return Err(EngineError::LastSuperAdmin);
                }
                Ok(self.super_admins.remove(account))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn owner_is_first_super_admin_and_implicit_admin() {
        let roles = Roles::genesis(key(1)).unwrap();
        assert!(roles.is_super_admin(&key(1)));
        assert!(roles.is_admin(&key(1)));
        assert!(roles.authorize(&key(1), Role::SuperAdmin).is_ok());
        assert!(matches!(
            roles.authorize(&key(2), Role::Admin),
            Err(EngineError::Unauthorized)
        ));
    }

    #[test]
    fn plain_admin_cannot_manage_roles() {
        let mut roles = Roles::genesis(key(1)).unwrap();
        let root = roles.authorize(&key(1), Role::SuperAdmin).unwrap();
        roles.grant(&root, Role::Admin, key(2)).unwrap();

        let admin = roles.authorize(&key(2), Role::Admin).unwrap();
        assert!(!admin.is_super_admin());
        assert!(matches!(
            roles.grant(&admin, Role::Admin, key(3)),
            Err(EngineError::Unauthorized)
        ));
        assert!(matches!(
            roles.authorize(&key(2), Role::SuperAdmin),
            Err(EngineError::Unauthorized)
        ));
    }

    #[test]
    fn last_super_admin_cannot_be_removed() {
        let mut roles = Roles::genesis(key(1)).unwrap();
        let root = roles.authorize(&key(1), Role::SuperAdmin).unwrap();
        assert!(matches!(
            roles.revoke(&root, Role::SuperAdmin, &key(1)),
            Err(EngineError::LastSuperAdmin)
        ));

        roles.grant(&root, Role::SuperAdmin, key(2)).unwrap();
        assert!(roles.revoke(&root, Role::SuperAdmin, &key(1)).unwrap());
        assert!(!roles.is_admin(&key(1)));
        assert_eq!(roles.members(Role::SuperAdmin).len(), 2);
    }
}
