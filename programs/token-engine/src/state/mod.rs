pub mod allowances;
pub mod engine_account;
pub mod freeze;
pub mod index_set;
pub mod ledger;
pub mod purchase;
pub mod roles;
pub mod schedule;

pub use allowances::*;
pub use engine_account::*;
pub use freeze::*;
pub use index_set::*;
pub use ledger::*;
pub use purchase::*;
pub use roles::*;
pub use schedule::*;
