//! Specification Pattern rules over uploads.
//!
//! Every rule here is usable two ways: as an in-memory predicate over one
//! [`Upload`](putka_common::Upload), and as a SQL `WHERE` fragment over the
//! uploads table. Both forms are built from the same leaves, so a composed
//! rule means the same thing in memory and in the database.
//!
//! # Example
//!
//! ```ignore
//! use putka_rules::prelude::*;
//!
//! let rule = Spec(TaskIs(42)) & solved();
//! if rule.is_satisfied_by(&upload) {
//!     // ...
//! }
//!
//! let mut qb = QueryBuilder::new("SELECT id FROM expurtka_upload u WHERE ");
//! rule.push_sql(&mut qb, "u.");
//! ```

pub mod operators;
pub mod rules;
pub mod specification;
pub mod sql;

/// Prelude module - import everything you need with `use putka_rules::prelude::*`
pub mod prelude {
    pub use crate::operators::Spec;
    pub use crate::rules::*;
    pub use crate::specification::{
        AllOf, AlwaysFalse, AlwaysTrue, And, BoxedFilter, FilterSpec, Not, Or, Specification,
    };
    pub use crate::sql::SqlFilter;
    pub use sqlx::{Postgres, QueryBuilder};
}
