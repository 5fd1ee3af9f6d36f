//! Business logic services

pub mod dataset;
pub mod recommendation;
