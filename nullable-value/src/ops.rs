//! Operators lifted over [`Optional`].
//!
//! Arithmetic produces an absent value if either operand is absent.
//! Ordering comparisons produce a plain `bool` that is `false` if either
//! operand is absent.
//!
//! Note: the two rules are intentionally different. `present(1) + absent()`
//! is absent, while `present(1).lt(&absent())` is `false`.
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Not, Rem, Sub};

use crate::optional::{Optional, Slot};

macro_rules! impl_op {
    ($trait:ident, $fn:ident) => {
        impl<T, U> $trait<Optional<U>> for Optional<T>
        where
            T: $trait<U>,
        {
            type Output = Optional<<T as $trait<U>>::Output>;

            fn $fn(self, rhs: Optional<U>) -> Self::Output {
                self.zip(rhs).map(|(lhs, rhs)| lhs.$fn(rhs))
            }
        }
    };
}

impl_op!(Add, add);
impl_op!(Sub, sub);
impl_op!(Mul, mul);
impl_op!(Div, div);
impl_op!(Rem, rem);

impl<T: Neg> Neg for Optional<T> {
    type Output = Optional<T::Output>;

    fn neg(self) -> Self::Output {
        self.map(|value| -value)
    }
}

impl<T: Not> Not for Optional<T> {
    type Output = Optional<T::Output>;

    fn not(self) -> Self::Output {
        self.map(|value| !value)
    }
}

// -----------------------------------------------------------------------------
//   - Comparisons -
// -----------------------------------------------------------------------------
impl<T> Optional<T> {
    fn compare_with<U, F>(&self, other: &Optional<U>, f: F) -> bool
    where
        F: FnOnce(&T, &U) -> bool,
    {
        match (&self.0, &other.0) {
            (Slot::Present(lhs), Slot::Present(rhs)) => f(lhs, rhs),
            _ => false,
        }
    }

    pub fn lt<U>(&self, other: &Optional<U>) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare_with(other, |lhs, rhs| lhs < rhs)
    }

    pub fn le<U>(&self, other: &Optional<U>) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare_with(other, |lhs, rhs| lhs <= rhs)
    }

    pub fn gt<U>(&self, other: &Optional<U>) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare_with(other, |lhs, rhs| lhs > rhs)
    }

    pub fn ge<U>(&self, other: &Optional<U>) -> bool
    where
        T: PartialOrd<U>,
    {
        self.compare_with(other, |lhs, rhs| lhs >= rhs)
    }
}

// -----------------------------------------------------------------------------
//   - Operator tables -
// -----------------------------------------------------------------------------
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Div,
    Mul,
    Mod,
}

impl Op {
    /// Apply the operator to two optionals of the same type.
    ///
    /// `T` has to support all five operators, even though only one is used.
    /// Types that only support some of them (`String` only has `+`) use the
    /// lifted operators directly: `present(s) + present(other)`.
    pub fn apply<T>(self, lhs: Optional<T>, rhs: Optional<T>) -> Optional<T>
    where
        T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T> + Rem<Output = T>,
    {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Div => lhs / rhs,
            Op::Mul => lhs * rhs,
            Op::Mod => lhs % rhs,
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let op = match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Div => '/',
            Op::Mul => '*',
            Op::Mod => '%',
        };
        write!(f, "{op}")
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Equality {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Equality {
    /// `Eq` and `NotEq` compare the containers (two absent values are equal),
    /// the orderings are `false` whenever a side is absent.
    pub fn compare<T: PartialOrd>(self, lhs: &Optional<T>, rhs: &Optional<T>) -> bool {
        match self {
            Equality::Eq => lhs == rhs,
            Equality::NotEq => lhs != rhs,
            Equality::Gt => Optional::gt(lhs, rhs),
            Equality::Gte => Optional::ge(lhs, rhs),
            Equality::Lt => Optional::lt(lhs, rhs),
            Equality::Lte => Optional::le(lhs, rhs),
        }
    }
}

impl Display for Equality {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let equality = match self {
            Equality::Eq => "==",
            Equality::NotEq => "!=",
            Equality::Gt => ">",
            Equality::Gte => ">=",
            Equality::Lt => "<",
            Equality::Lte => "<=",
        };
        write!(f, "{equality}")
    }
}
