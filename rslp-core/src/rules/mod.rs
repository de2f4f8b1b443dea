//! Rule data: exception store, stripping rules, per-phase tables
//!
//! Tables are built once, validated, and never mutated afterwards, so they
//! can be shared freely between threads.

pub mod config;
pub mod exceptions;
pub mod loader;
pub mod rule;
pub mod set;
pub mod table;

pub use config::RuleFileConfig;
pub use exceptions::{is_exception, ExceptionSet};
pub use loader::EMBEDDED_RULES;
pub use rule::StrippingRule;
pub use set::RuleSet;
pub use table::RuleTable;
