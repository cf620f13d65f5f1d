//! Service layer: turn validation and conversation orchestration.

pub mod conversation;
pub mod turn_locks;
pub mod validation;
