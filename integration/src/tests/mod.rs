//! Scenario tests driving the deployed contracts over RPC

mod admin;
mod lock;
