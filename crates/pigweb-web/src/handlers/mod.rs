//! HTTP handlers for all web routes.

pub mod calculator;
pub mod evaluate;
pub mod scenarios;
pub mod report;
pub mod genes;
