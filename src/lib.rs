pub use {
    nullable_expr as expr,   // expression evaluation
    nullable_value as value, // optional values
};

pub mod prelude {
    pub use crate::value::{absent, present, Error, IntoOptional, Nullable, Optional};
}

pub mod logic {
    pub use crate::value::logic::{and, not, or};
    pub use crate::value::LogicalOp;
}

pub mod ops {
    pub use crate::value::{Equality, Op};
}
