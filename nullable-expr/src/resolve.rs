use nullable_value::{absent, logic, present, Op, Optional};

use crate::context::Context;
use crate::expression::Expression;
use crate::value::Value;

#[cfg(feature = "logging")]
macro_rules! trace {
    ($($arg:tt)*) => {
        log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

/// Resolve an expression to a value.
///
/// Nothing in here fails: a missing ident, a type mismatch or an integer
/// overflow all resolve to an absent value, which then propagates through
/// the rest of the expression.
pub fn resolve(expr: &Expression, ctx: &Context) -> Optional<Value> {
    match expr {
        Expression::Primitive(value) => present(value.clone()),
        Expression::Null => absent(),
        Expression::Ident(ident) => {
            let value = ctx.lookup(ident).cloned();
            if !value.has_value() {
                trace!("`{ident}` is not in the context");
            }
            value
        }

        // -----------------------------------------------------------------------------
        //   - Operations and conditionals -
        // -----------------------------------------------------------------------------
        Expression::Not(expr) => logic::not(resolve_bool(expr, ctx)).map(Value::Bool),
        Expression::Negative(expr) => resolve(expr, ctx).bind(|value| match value {
            Value::Int(n) => int_value(n.checked_neg()),
            Value::Float(n) => present(Value::Float(-n)),
            value => {
                trace!("can not negate a {}", value.type_name());
                absent()
            }
        }),
        Expression::Op(lhs, rhs, op) => {
            let lhs = resolve(lhs, ctx);
            let rhs = resolve(rhs, ctx);
            lhs.zip(rhs).bind(|(lhs, rhs)| value_op(lhs, rhs, *op))
        }
        Expression::Equality(lhs, rhs, equality) => {
            let lhs = resolve(lhs, ctx);
            let rhs = resolve(rhs, ctx);
            present(Value::Bool(equality.compare(&lhs, &rhs)))
        }
        Expression::LogicalOp(lhs, rhs, op) => {
            let lhs = resolve_bool(lhs, ctx);
            let rhs = resolve_bool(rhs, ctx);
            op.apply(lhs, rhs).map(Value::Bool)
        }
        Expression::Either(first, second) => {
            let first = resolve(first, ctx);
            match first.has_value() {
                true => first,
                false => resolve(second, ctx),
            }
        }
    }
}

/// Resolve an expression that is expected to be a boolean.
/// Any other type is treated as unknown.
pub fn resolve_bool(expr: &Expression, ctx: &Context) -> Optional<bool> {
    resolve(expr, ctx).bind(|value| match value {
        Value::Bool(b) => present(b),
        value => {
            trace!("expected a bool, found a {}", value.type_name());
            absent()
        }
    })
}

// Ints stay ints as long as the result fits, floats win over ints.
fn value_op(lhs: Value, rhs: Value, op: Op) -> Optional<Value> {
    match (lhs, rhs) {
        (Value::Int(lhs), Value::Int(rhs)) => int_value(int_op(lhs, rhs, op)),
        (Value::Int(lhs), Value::Float(rhs)) => float_op(lhs as f64, rhs, op),
        (Value::Float(lhs), Value::Int(rhs)) => float_op(lhs, rhs as f64, op),
        (Value::Float(lhs), Value::Float(rhs)) => float_op(lhs, rhs, op),
        (Value::Str(lhs), Value::Str(rhs)) if op == Op::Add => (present(lhs) + present(&*rhs)).map(Value::Str),
        (lhs, rhs) => {
            trace!("unsupported operation: {} {op} {}", lhs.type_name(), rhs.type_name());
            absent()
        }
    }
}

fn int_op(lhs: i64, rhs: i64, op: Op) -> Option<i64> {
    match op {
        Op::Add => lhs.checked_add(rhs),
        Op::Sub => lhs.checked_sub(rhs),
        Op::Div => lhs.checked_div(rhs),
        Op::Mul => lhs.checked_mul(rhs),
        Op::Mod => lhs.checked_rem(rhs),
    }
}

fn float_op(lhs: f64, rhs: f64, op: Op) -> Optional<Value> {
    op.apply(present(lhs), present(rhs)).map(Value::Float)
}

fn int_value(n: Option<i64>) -> Optional<Value> {
    if n.is_none() {
        trace!("integer overflow or division by zero");
    }
    Optional::from(n).map(Value::Int)
}
