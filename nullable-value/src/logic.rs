//! Three-valued (Kleene) logic over `Optional<bool>`.
//!
//! An absent boolean is "unknown". A determining operand wins over an
//! unknown one: `false` for AND, `true` for OR.
//!
//! | a      | b      | a & b  | a \| b |
//! |--------|--------|--------|--------|
//! | true   | absent | absent | true   |
//! | false  | absent | false  | absent |
//! | absent | absent | absent | absent |
use std::fmt::{self, Display, Formatter};
use std::ops::{BitAnd, BitOr};

use crate::optional::{Optional, Slot};

const TRUE: Optional<bool> = Optional::present(true);
const FALSE: Optional<bool> = Optional::present(false);
const UNKNOWN: Optional<bool> = Optional::absent();

pub fn and(lhs: Optional<bool>, rhs: Optional<bool>) -> Optional<bool> {
    match (lhs.0, rhs.0) {
        (Slot::Present(false), _) | (_, Slot::Present(false)) => FALSE,
        (Slot::Present(true), Slot::Present(true)) => TRUE,
        _ => UNKNOWN,
    }
}

pub fn or(lhs: Optional<bool>, rhs: Optional<bool>) -> Optional<bool> {
    match (lhs.0, rhs.0) {
        (Slot::Present(true), _) | (_, Slot::Present(true)) => TRUE,
        (Slot::Present(false), Slot::Present(false)) => FALSE,
        _ => UNKNOWN,
    }
}

pub fn not(value: Optional<bool>) -> Optional<bool> {
    !value
}

impl BitAnd for Optional<bool> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        and(self, rhs)
    }
}

impl BitOr for Optional<bool> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        or(self, rhs)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn apply(self, lhs: Optional<bool>, rhs: Optional<bool>) -> Optional<bool> {
        match self {
            LogicalOp::And => and(lhs, rhs),
            LogicalOp::Or => or(lhs, rhs),
        }
    }
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "&&"),
            LogicalOp::Or => write!(f, "||"),
        }
    }
}
