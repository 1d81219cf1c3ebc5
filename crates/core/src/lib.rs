//! `revledger-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the entity abstraction and the ledger error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod status;

pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::{AccountId, OperationId};
pub use status::OperationStatus;
