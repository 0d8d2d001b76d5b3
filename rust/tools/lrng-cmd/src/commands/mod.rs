//! Command implementations for lrng-cmd

pub mod coalesce;
pub mod verify;
