//! Evaluate expressions where every intermediate result may be absent.
//!
//! ```
//! # use nullable_expr::*;
//! let ctx = Context::new().with("first", "John");
//! let name = add(either(ident("first"), strlit("?")), strlit(" Doe"));
//! assert_eq!(Value::from("John Doe"), resolve(&name, &ctx).get_or_else("".into()));
//! ```
pub use crate::context::Context;
pub use crate::expression::*;
pub use crate::resolve::{resolve, resolve_bool};
pub use crate::value::Value;

mod context;
mod expression;
mod resolve;
mod value;
