//! Service layer: orchestrates domain logic over the store contracts.

pub mod games;
pub mod turns;
