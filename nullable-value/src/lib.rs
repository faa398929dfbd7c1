//! An optional value with operators that propagate absence.
//!
//! Raw `Option`s enter through `From` / [`IntoOptional`] and values leave
//! through [`Optional::get_or_else`], [`Optional::get_or_fail`] or
//! [`Optional::match_with`].
pub use crate::error::{Error, Result};
pub use crate::logic::LogicalOp;
pub use crate::ops::{Equality, Op};
pub use crate::optional::{absent, present, IntoOptional, Nullable, Optional};

mod error;
pub mod logic;
mod ops;
mod optional;
#[cfg(feature = "serde")]
mod serde_impl;
