pub mod control;
pub mod inventory;
pub mod membership;
pub mod transaction;
pub mod user;

pub use control::{BuyerImmunity, ControlRelationship};
pub use inventory::InventoryItem;
pub use membership::Membership;
pub use transaction::Transaction;
pub use user::{round_points, User};
