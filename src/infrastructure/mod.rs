//! Infrastructure Layer - External integrations

pub mod discovery;
