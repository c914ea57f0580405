//! Estimate how far a run covers from its duration and pace.
//!
//! The [`calc`] module holds the whole domain: raw form text goes in, a
//! formatted distance or a validation message comes out. The desktop window
//! and the `pace` command-line tool are thin adapters over [`calc::render`].

pub mod calc;
