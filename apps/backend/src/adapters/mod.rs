//! SeaORM adapters - DB-specific implementations behind the repos layer.

pub mod progress_sea;
