//! # mysticnum-engine
//!
//! The matrix engine: a pure function from `(DD.MM.YYYY, gender)` plus the
//! read-only knowledge tables to an [`AnalysisResult`](mysticnum_core::AnalysisResult).
//!
//! Stages run in a fixed order: parse, derive, tabulate, interpret,
//! ancestral programs, warnings. Only parsing can fail.

pub mod calculators;
pub mod derive;
pub mod display;
pub mod engine;
pub mod interpret;
pub mod parse;
pub mod rules;

pub use calculators::{apartment_number, car_number};
pub use display::render_grid;
pub use engine::MatrixEngine;
