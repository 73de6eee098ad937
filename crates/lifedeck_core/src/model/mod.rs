//! Domain records for the three tracked areas.
//!
//! # Responsibility
//! - Define the persisted shapes for health, finance and academic data.
//! - Keep serde field names aligned with the on-device payload contract.
//!
//! # Invariants
//! - Range clamping happens at the mutation layer, never on read.
//! - Write paths validate records before persistence; read paths accept
//!   semantically wrong but structurally valid payloads as-is.

pub mod academic;
pub mod finance;
pub mod health;
