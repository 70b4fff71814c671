//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Const-fn lookup table generation for both CRC widths
//! - The generic slicing-by-N update loops and the shared byte-wise step
//! - Bitwise reference implementations used as test oracles

pub mod portable;
pub mod reference;
pub mod tables;

mod proptests;
