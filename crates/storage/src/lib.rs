#![forbid(unsafe_code)]

//! Durable storage for quiz progress.
//!
//! State lives under one namespaced key as a versioned JSON blob. Adapters
//! only move strings; [`state::StateStore`] owns the envelope format.

pub mod repository;
pub mod sqlite;
pub mod state;
