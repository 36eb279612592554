//! Scripts for deploying and managing the BTRST token and the upgradeable
//! membership NFT contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
mod commands;
pub mod constants;
pub mod deployments;
pub mod errors;
pub mod network;
mod solidity;
pub mod utils;
