pub mod context;
pub mod initialize;
pub mod roles;
pub mod freeze;
pub mod supply;
pub mod transfer;
pub mod approve;
pub mod buy;
pub mod purchase_settings;
pub mod withdraw_proceeds;
pub mod grant_vesting;
pub mod release_vested;
pub mod revoke_vesting;
pub mod emit_vesting_quote;
pub mod emit_state_checkpoint;

pub use context::*;
pub use initialize::*;
pub use roles::*;
pub use freeze::*;
pub use supply::*;
pub use transfer::*;
pub use approve::*;
pub use buy::*;
pub use purchase_settings::*;
pub use withdraw_proceeds::*;
pub use grant_vesting::*;
pub use release_vested::*;
pub use revoke_vesting::*;
pub use emit_vesting_quote::*;
pub use emit_state_checkpoint::*;
