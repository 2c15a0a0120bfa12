//! Multicriteria - Multi-Criteria Decision Analysis Ranking Engine
//!
//! This crate ranks candidate items along several weighted evaluation
//! criteria. Four interchangeable ranking methods share a common contract:
//! decision matrix in, scored items out, best first.

pub mod domain;
