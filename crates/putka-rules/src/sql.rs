//! SQL rendering of specifications.
//!
//! A filter renders itself as a boolean SQL expression into a
//! [`QueryBuilder`], binding every value as a parameter. Leaves compare
//! nullable columns directly, so a NULL column makes the leaf unknown, which a
//! `WHERE` clause treats as false. `AND` and `OR` preserve that reading;
//! `NOT` coalesces its operand first so a NULL operand still reads as false
//! before negation.

use std::sync::Arc;

use sqlx::{Postgres, QueryBuilder};

use crate::operators::Spec;
use crate::specification::{AllOf, AlwaysFalse, AlwaysTrue, And, FilterSpec, Not, Or};

/// A rule that can be expressed as a SQL boolean expression.
pub trait SqlFilter: Send + Sync {
    /// Append this filter to `qb`. Column names are prefixed with `prefix`,
    /// e.g. `"u."` for a query that aliases the uploads table as `u`.
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str);
}

impl<A: SqlFilter, B: SqlFilter> SqlFilter for And<A, B> {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push("(");
        self.0.push_sql(qb, prefix);
        qb.push(" AND ");
        self.1.push_sql(qb, prefix);
        qb.push(")");
    }
}

impl<A: SqlFilter, B: SqlFilter> SqlFilter for Or<A, B> {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push("(");
        self.0.push_sql(qb, prefix);
        qb.push(" OR ");
        self.1.push_sql(qb, prefix);
        qb.push(")");
    }
}

impl<A: SqlFilter> SqlFilter for Not<A> {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push("NOT COALESCE((");
        self.0.push_sql(qb, prefix);
        qb.push("), FALSE)");
    }
}

impl SqlFilter for AlwaysTrue {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, _prefix: &str) {
        qb.push("TRUE");
    }
}

impl SqlFilter for AlwaysFalse {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, _prefix: &str) {
        qb.push("FALSE");
    }
}

impl<S: SqlFilter> SqlFilter for Spec<S> {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        self.0.push_sql(qb, prefix);
    }
}

impl<Ctx> SqlFilter for Arc<dyn FilterSpec<Ctx>> {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        self.as_ref().push_sql(qb, prefix);
    }
}

impl<Ctx> SqlFilter for AllOf<Ctx> {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        if self.filters.is_empty() {
            qb.push("TRUE");
            return;
        }
        qb.push("(");
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                qb.push(" AND ");
            }
            filter.push_sql(qb, prefix);
        }
        qb.push(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(filter: &impl SqlFilter) -> String {
        let mut qb = QueryBuilder::<Postgres>::new("");
        filter.push_sql(&mut qb, "u.");
        qb.sql().to_string()
    }

    #[test]
    fn test_constants() {
        assert_eq!(render(&AlwaysTrue), "TRUE");
        assert_eq!(render(&AlwaysFalse), "FALSE");
    }

    #[test]
    fn test_combinators() {
        assert_eq!(render(&And(AlwaysTrue, AlwaysFalse)), "(TRUE AND FALSE)");
        assert_eq!(render(&Or(AlwaysTrue, AlwaysFalse)), "(TRUE OR FALSE)");
        assert_eq!(render(&Not(AlwaysTrue)), "NOT COALESCE((TRUE), FALSE)");
    }

    #[test]
    fn test_empty_all_of_is_true() {
        assert_eq!(render(&AllOf::<()>::new(vec![])), "TRUE");
    }

    #[test]
    fn test_all_of_joins_with_and() {
        let filters: Vec<crate::specification::BoxedFilter<()>> =
            vec![Arc::new(AlwaysTrue), Arc::new(AlwaysFalse)];
        assert_eq!(render(&AllOf::new(filters)), "(TRUE AND FALSE)");
    }
}
