#![warn(missing_docs)]
//! Domain models for electricity-market clearing formulations.
//!
//! This crate holds the data that a market-clearing dataset supplies to the
//! formulation engine: offer/bid curves, thermal generator attributes, zone
//! tags, and the bid categories that select how a curve enters the objective.
//! The types here carry minimal logic; the engine that turns them into
//! decision variables and constraints lives in `mcf-model`.

/// Core domain models for the market-clearing system.
///
/// The models in this module are primarily data structures with minimal
/// business logic, keeping the dataset representation separate from the
/// formulation machinery that consumes it.
pub mod models;
