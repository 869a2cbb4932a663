//! Problem Solver Sheet - a guided five-step problem-solving worksheet.
//!
//! Define the problem, drill to its root cause with five whys, brainstorm
//! solutions ranked by impact over effort, plan actions, and export a
//! plain-text summary. The sheet is saved after every change.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
