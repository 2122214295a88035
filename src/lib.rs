// ============================================================================
// RMB Speller Library
// Chinese capital-numeral (大写金额) spelling for monetary amounts
// ============================================================================

//! # RMB Speller
//!
//! Converts exact decimal monetary amounts into their Chinese capital
//! numeral spelling, following the convention used on checks and legal
//! documents (壹贰叁…玖 digits, 拾/佰/仟 local units, 万/亿/兆/… large
//! units, 元/角/分 currency units).
//!
//! ## Features
//!
//! - **Exact decimal input** via strings or `rust_decimal::Decimal`; no
//!   binary floating point anywhere in the pipeline
//! - **Arbitrary magnitudes** up to 10^64, with the full large-unit table
//!   (万 through 大数)
//! - **Natural zero collapsing**: no duplicated 零, no unit words on zero
//!   digits, a single connective 零 at skipped tier boundaries
//! - **Companion reader** that parses spellings back for round-trip checks
//! - **Pure functions** over immutable inputs; safe to call from any number
//!   of threads with no coordination
//!
//! ## Example
//!
//! ```rust
//! use rmb_speller::prelude::*;
//!
//! let spelled = spell_str("1234.56").unwrap();
//! assert_eq!(spelled, "壹仟贰佰叁拾肆元伍角陆分");
//!
//! let amount = read_currency(&spelled).unwrap();
//! assert_eq!(amount.to_string(), "1234.56");
//!
//! assert_eq!(spell_str("10000.08").unwrap(), "壹万元零捌分");
//! assert_eq!(spell_str("-100.00").unwrap(), "负壹佰元整");
//! ```

pub mod amount;
pub mod reader;
pub mod speller;
pub mod tables;

// Re-exports for convenience
pub mod prelude {
    pub use crate::amount::{Amount, Sign, SpellError, SpellResult};
    pub use crate::reader::{read_currency, ReadError, ReadResult};
    pub use crate::speller::{spell_currency, spell_decimal, spell_str};
}
