//! Test fixtures for journey-planner.
//!
//! Real Las Vegas / Henderson places (from OpenStreetMap) implementing
//! `Stop`, plus a current-location anchor.

#![allow(dead_code)]

pub mod las_vegas_places;

pub use las_vegas_places::*;
