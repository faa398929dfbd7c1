use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// A dynamically typed value.
///
/// Integers and floats compare with each other numerically.
/// Any other mix of types is neither equal nor ordered.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(untagged))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(lhs), Self::Bool(rhs)) => lhs.partial_cmp(rhs),
            (Self::Int(lhs), Self::Int(rhs)) => lhs.partial_cmp(rhs),
            (Self::Int(lhs), Self::Float(rhs)) => int_float_cmp(*lhs, *rhs),
            (Self::Float(lhs), Self::Int(rhs)) => int_float_cmp(*rhs, *lhs).map(Ordering::reverse),
            (Self::Float(lhs), Self::Float(rhs)) => lhs.partial_cmp(rhs),
            (Self::Str(lhs), Self::Str(rhs)) => lhs.partial_cmp(rhs),
            _ => None,
        }
    }
}

// 2^63, the first float above `i64::MAX`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

// Exact comparison. Casting the int to a float rounds above 2^53, which would
// make two distinct ints equal to the same float.
fn int_float_cmp(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_END {
        return Some(Ordering::Less);
    }
    if float < -I64_END {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        ord => Some(ord),
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! impl_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(val: $ty) -> Self {
                Self::$variant(val.into())
            }
        }
    };
}

impl_from!(bool, Bool);
impl_from!(i64, Int);
impl_from!(i32, Int);
impl_from!(u32, Int);
impl_from!(i16, Int);
impl_from!(u16, Int);
impl_from!(i8, Int);
impl_from!(u8, Int);
impl_from!(f64, Float);
impl_from!(f32, Float);
impl_from!(String, Str);
impl_from!(&str, Str);
