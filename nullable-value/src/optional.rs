use std::fmt::{self, Debug, Display, Formatter};

use crate::error::{Error, Result};

pub type Nullable<T> = Optional<T>;

// The tag is kept private so the only ways to observe it are
// `has_value` and `match_with`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Slot<T> {
    Absent,
    Present(T),
}

/// A value that is either present or absent.
///
/// Presence is an explicit tag stored next to the payload, so an absent
/// `Optional<i64>` is never confused with a present `0`.
///
/// Two optionals are equal if both are absent, or if both are present and
/// the payloads are equal. An absent and a present optional are never equal,
/// and the payload's `PartialEq` is not consulted in that case.
///
/// ```
/// # use nullable_value::*;
/// let name = present("John").map(|name| format!("{name} Doe"));
/// assert_eq!("John Doe", name.get_or_else("?".into()));
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(pub(crate) Slot<T>);

/// Wrap a value.
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::present(value)
}

/// The absent value for `T`.
pub const fn absent<T>() -> Optional<T> {
    Optional::absent()
}

impl<T> Optional<T> {
    pub const fn present(value: T) -> Self {
        Self(Slot::Present(value))
    }

    pub const fn absent() -> Self {
        Self(Slot::Absent)
    }

    pub const fn has_value(&self) -> bool {
        matches!(self.0, Slot::Present(_))
    }

    /// Return the value, or `default` if absent.
    pub fn get_or_else(self, default: T) -> T {
        match self.0 {
            Slot::Present(value) => value,
            Slot::Absent => default,
        }
    }

    /// Return the value, or the result of `f` if absent.
    /// `f` is only called when the value is absent.
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.0 {
            Slot::Present(value) => value,
            Slot::Absent => f(),
        }
    }

    /// Return the value.
    ///
    /// Calling this on an absent optional is a mistake at the call site,
    /// and is reported as [`Error::EmptyValueAccess`].
    ///
    /// ```
    /// # use nullable_value::*;
    /// assert_eq!(Ok(1), present(1).get_or_fail());
    /// assert_eq!(Err(Error::EmptyValueAccess), absent::<i32>().get_or_fail());
    /// ```
    pub fn get_or_fail(self) -> Result<T> {
        match self.0 {
            Slot::Present(value) => Ok(value),
            Slot::Absent => {
                #[cfg(feature = "logging")]
                log::debug!("value accessed on an absent {}", std::any::type_name::<Self>());
                Err(Error::EmptyValueAccess)
            }
        }
    }

    pub const fn as_ref(&self) -> Optional<&T> {
        match &self.0 {
            Slot::Present(value) => Optional::present(value),
            Slot::Absent => Optional::absent(),
        }
    }

    // -----------------------------------------------------------------------------
    //   - Combinators -
    // -----------------------------------------------------------------------------

    /// Transform the value if present.
    /// `f` is called at most once, and never for an absent value.
    pub fn map<F, U>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.0 {
            Slot::Present(value) => Optional::present(f(value)),
            Slot::Absent => Optional::absent(),
        }
    }

    /// Chain a computation that may itself produce an absent value.
    /// `f` is called at most once, and never for an absent value.
    ///
    /// ```
    /// # use nullable_value::*;
    /// let half = |n: i32| if n % 2 == 0 { present(n / 2) } else { absent() };
    /// assert_eq!(present(2), present(8).bind(half).bind(half));
    /// assert_eq!(absent(), present(6).bind(half).bind(half));
    /// ```
    pub fn bind<F, U>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.0 {
            Slot::Present(value) => f(value),
            Slot::Absent => Optional::absent(),
        }
    }

    /// Unwrap into `R` by running exactly one of the two branches.
    pub fn match_with<P, A, R>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self.0 {
            Slot::Present(value) => on_present(value),
            Slot::Absent => on_absent(),
        }
    }

    /// The first present value out of `self` and `other`.
    pub fn either(self, other: Self) -> Self {
        match self.0 {
            Slot::Present(_) => self,
            Slot::Absent => other,
        }
    }

    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self.0 {
            Slot::Present(value) => match predicate(&value) {
                true => Self::present(value),
                false => Self::absent(),
            },
            Slot::Absent => Self::absent(),
        }
    }

    /// Pair two values, present only if both are.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self.0, other.0) {
            (Slot::Present(lhs), Slot::Present(rhs)) => Optional::present((lhs, rhs)),
            _ => Optional::absent(),
        }
    }
}

impl<T: Clone> Optional<&T> {
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T: Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Slot::Present(value) => f.debug_tuple("Present").field(value).finish(),
            Slot::Absent => write!(f, "Absent"),
        }
    }
}

/// Absent values display as `null`, so `absent()` and `present("null")`
/// print the same text. Use `Debug` when the two must be told apart.
impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Slot::Present(value) => write!(f, "{value}"),
            Slot::Absent => write!(f, "null"),
        }
    }
}

// -----------------------------------------------------------------------------
//   - Boundary -
//   Raw `Option`s enter the optional domain here and nowhere else.
// -----------------------------------------------------------------------------
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => Self::present(val),
            None => Self::absent(),
        }
    }
}

pub trait IntoOptional<T> {
    fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptional<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}

impl<T> IntoOptional<T> for Optional<T> {
    fn into_optional(self) -> Optional<T> {
        self
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    fn full_name(name: &str) -> Optional<String> {
        present(format!("{name} Doe"))
    }

    #[test]
    fn presence() {
        assert!(present(1).has_value());
        assert!(!absent::<i32>().has_value());
        assert!(present(()).has_value());
    }

    #[test]
    fn zero_is_not_absent() {
        assert!(present(0).has_value());
        assert_ne!(present(0), absent());
        assert_ne!(present(false), absent());
        assert_ne!(present(String::new()), absent());
    }

    #[test]
    fn get_or_else() {
        assert_eq!(1, present(1).get_or_else(2));
        assert_eq!(2, absent().get_or_else(2));
    }

    #[test]
    fn get_or_else_with_is_lazy() {
        let calls = Cell::new(0);
        let value = present(1).get_or_else_with(|| {
            calls.set(calls.get() + 1);
            2
        });
        assert_eq!(1, value);
        assert_eq!(0, calls.get());

        let value = absent().get_or_else_with(|| {
            calls.set(calls.get() + 1);
            2
        });
        assert_eq!(2, value);
        assert_eq!(1, calls.get());
    }

    #[test]
    fn get_or_fail() {
        assert_eq!(Ok("a"), present("a").get_or_fail());
        assert_eq!(Err(Error::EmptyValueAccess), absent::<&str>().get_or_fail());
    }

    #[test]
    fn get_or_fail_propagates() {
        fn double(value: Optional<i32>) -> Result<i32> {
            Ok(value.get_or_fail()? * 2)
        }

        assert_eq!(Ok(4), double(present(2)));
        assert_eq!(Err(Error::EmptyValueAccess), double(absent()));
    }

    #[test]
    fn equality() {
        assert_eq!(absent::<i32>(), absent());
        assert_eq!(present(1), present(1));
        assert_ne!(present(1), present(2));
        assert_ne!(present(1), absent());
        assert_ne!(absent(), present(1));
    }

    #[test]
    fn mismatched_presence_never_reaches_payload_eq() {
        // A payload that claims to be equal to everything
        #[derive(Debug)]
        struct Liar;

        impl PartialEq for Liar {
            fn eq(&self, _: &Self) -> bool {
                true
            }
        }

        assert_eq!(present(Liar), present(Liar));
        assert_ne!(present(Liar), absent());
        assert_ne!(absent(), present(Liar));
    }

    #[test]
    fn default_is_absent() {
        struct NoDefault;
        let value: Optional<NoDefault> = Optional::default();
        assert!(!value.has_value());
    }

    #[test]
    fn map_skips_absent() {
        let calls = Cell::new(0);
        let value = absent::<i32>().map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(absent(), value);
        assert_eq!(0, calls.get());

        let value = present(1).map(|n| {
            calls.set(calls.get() + 1);
            n + 1
        });
        assert_eq!(present(2), value);
        assert_eq!(1, calls.get());
    }

    #[test]
    fn chain_stops_at_first_absent() {
        let calls = Cell::new(0);
        let step = |n: i32| {
            calls.set(calls.get() + 1);
            n + 1
        };

        let value = present(1)
            .map(step)
            .bind(|_| absent::<i32>())
            .map(step)
            .bind(|n| present(step(n)));

        assert_eq!(absent(), value);
        assert_eq!(1, calls.get());
    }

    #[test]
    fn bind_names() {
        let name = present("John").bind(full_name).get_or_else("?".into());
        assert_eq!("John Doe", name);

        let name = absent::<&str>().bind(full_name).get_or_else("?".into());
        assert_eq!("?", name);
    }

    #[test]
    fn match_with_runs_one_branch() {
        let present_calls = Cell::new(0);
        let absent_calls = Cell::new(0);

        let len = present("abc").match_with(
            |s| {
                present_calls.set(present_calls.get() + 1);
                s.len()
            },
            || {
                absent_calls.set(absent_calls.get() + 1);
                0
            },
        );
        assert_eq!(3, len);

        let len = absent::<&str>().match_with(
            |s| {
                present_calls.set(present_calls.get() + 1);
                s.len()
            },
            || {
                absent_calls.set(absent_calls.get() + 1);
                0
            },
        );
        assert_eq!(0, len);
        assert_eq!((1, 1), (present_calls.get(), absent_calls.get()));
    }

    #[test]
    fn either() {
        assert_eq!(present(1), present(1).either(present(2)));
        assert_eq!(present(2), absent().either(present(2)));
        assert_eq!(present(1), present(1).either(absent()));
        assert_eq!(absent::<i32>(), absent().either(absent()));
    }

    #[test]
    fn filter_and_zip() {
        assert_eq!(present(4), present(4).filter(|n| n % 2 == 0));
        assert_eq!(absent(), present(3).filter(|n| n % 2 == 0));
        assert_eq!(absent(), absent::<i32>().filter(|_| true));

        assert_eq!(present((1, "a")), present(1).zip(present("a")));
        assert_eq!(absent(), present(1).zip(absent::<&str>()));
        assert_eq!(absent(), absent::<i32>().zip(present("a")));
    }

    #[test]
    fn as_ref_keeps_the_original() {
        let name = present(String::from("John"));
        let len = name.as_ref().map(|s| s.len());
        assert_eq!(present(4), len);
        assert_eq!(present(String::from("John")), name);
    }

    #[test]
    fn cloned() {
        let names = vec![String::from("John")];
        let first: Optional<&String> = names.first().into();
        assert_eq!(present(String::from("John")), first.cloned());
        assert_eq!(absent(), absent::<&String>().cloned());
    }

    #[test]
    fn from_raw_option() {
        let mut ages = HashMap::new();
        ages.insert("john", 42);

        let john: Optional<_> = ages.get("john").copied().into();
        let jane = ages.get("jane").copied().into_optional();
        assert_eq!(present(42), john);
        assert_eq!(absent(), jane);

        let parsed = "12".parse::<u8>().ok().into_optional();
        let failed = "x".parse::<u8>().ok().into_optional();
        assert_eq!(present(12), parsed);
        assert_eq!(absent(), failed);
    }

    #[test]
    fn display() {
        assert_eq!("1", present(1).to_string());
        assert_eq!("null", absent::<i32>().to_string());
        assert_eq!("Present(1)", format!("{:?}", present(1)));
        assert_eq!("Absent", format!("{:?}", absent::<i32>()));
    }

    #[test]
    fn debug_tells_null_payload_from_absent() {
        assert_eq!(present("null").to_string(), absent::<&str>().to_string());
        assert_eq!(r#"Present("null")"#, format!("{:?}", present("null")));
        assert_ne!(format!("{:?}", present("null")), format!("{:?}", absent::<&str>()));
    }

    #[test]
    fn shareable_across_threads() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<Optional<String>>();

        let value = present(21);
        let handle = std::thread::spawn(move || value.map(|n| n * 2));
        assert_eq!(Ok(present(42)), handle.join().map_err(|_| ()));
        assert_eq!(present(21), value);
    }

    fn optional_int() -> impl Strategy<Value = Optional<i32>> {
        any::<Option<i32>>().prop_map(Optional::from)
    }

    fn f(n: i32) -> Optional<i32> {
        if n % 3 == 0 { absent() } else { present(n.wrapping_mul(2)) }
    }

    fn g(n: i32) -> Optional<i64> {
        if n < 0 { absent() } else { present(n as i64 + 1) }
    }

    proptest! {
        #[test]
        fn left_identity(v in any::<i32>()) {
            prop_assert_eq!(present(v).bind(f), f(v));
        }

        #[test]
        fn right_identity(m in optional_int()) {
            prop_assert_eq!(m.bind(present), m);
        }

        #[test]
        fn associativity(m in optional_int()) {
            prop_assert_eq!(m.bind(f).bind(g), m.bind(|x| f(x).bind(g)));
        }

        #[test]
        fn get_or_else_prop(v in any::<i32>(), d in any::<i32>()) {
            prop_assert_eq!(present(v).get_or_else(d), v);
            prop_assert_eq!(absent().get_or_else(d), d);
        }
    }
}
