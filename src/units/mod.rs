
//! Subsystem for the length-unit vocabulary: canonical units with
//! their conversion factors, and the alias spellings that resolve to
//! them.
//!
//! Both tables are constructed once at startup and are immutable
//! afterward, so they can be shared freely.

pub mod aliases;
pub mod table;
pub mod unit;

pub use aliases::{AliasTable, default_alias_table};
pub use table::{UnitTable, UnknownUnitError, default_units_table};
pub use unit::Unit;
