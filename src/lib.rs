//! River Resilience - game analysis of upstream/downstream flood-risk measures
//!
//! Two municipalities on one river choose flood measures: upstream plants
//! forest or builds a dam, downstream raises embankments or relocates
//! houses. This crate turns their outcomes into payoffs and analyzes the
//! resulting two-player game with non-cooperative, cooperative and social
//! choice tools.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
