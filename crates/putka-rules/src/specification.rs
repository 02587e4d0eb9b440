//! Core Specification trait and combinators.

use std::sync::Arc;

use crate::sql::SqlFilter;

/// Core specification trait for composable business rules.
///
/// Rules are pure predicates over an already loaded context; they never do
/// I/O, so evaluation is synchronous and safe to share across threads.
pub trait Specification<Ctx>: Send + Sync {
    /// Check if the specification is satisfied by the given context.
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool;

    /// Combine this specification with another using AND logic.
    fn and<S: Specification<Ctx>>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Combine this specification with another using OR logic.
    fn or<S: Specification<Ctx>>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Negate this specification.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

/// A specification that can also be rendered as a SQL filter.
pub trait FilterSpec<Ctx>: Specification<Ctx> + SqlFilter {}

impl<Ctx, T> FilterSpec<Ctx> for T where T: Specification<Ctx> + SqlFilter {}

/// AND combinator for specifications.
#[derive(Debug, Clone)]
pub struct And<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for And<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx) && self.1.is_satisfied_by(ctx)
    }
}

/// OR combinator for specifications.
#[derive(Debug, Clone)]
pub struct Or<A, B>(pub A, pub B);

impl<Ctx, A, B> Specification<Ctx> for Or<A, B>
where
    A: Specification<Ctx>,
    B: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx) || self.1.is_satisfied_by(ctx)
    }
}

/// NOT combinator for specifications.
#[derive(Debug, Clone)]
pub struct Not<A>(pub A);

impl<Ctx, A> Specification<Ctx> for Not<A>
where
    A: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        !self.0.is_satisfied_by(ctx)
    }
}

/// A specification that always returns true.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysTrue;

impl<Ctx> Specification<Ctx> for AlwaysTrue {
    fn is_satisfied_by(&self, _ctx: &Ctx) -> bool {
        true
    }
}

/// A specification that always returns false.
#[derive(Debug, Clone, Copy)]
pub struct AlwaysFalse;

impl<Ctx> Specification<Ctx> for AlwaysFalse {
    fn is_satisfied_by(&self, _ctx: &Ctx) -> bool {
        false
    }
}

/// A boxed filter for dynamic composition.
pub type BoxedFilter<Ctx> = Arc<dyn FilterSpec<Ctx>>;

impl<Ctx> Specification<Ctx> for BoxedFilter<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.as_ref().is_satisfied_by(ctx)
    }
}

/// All filters in the collection must be satisfied. An empty collection is
/// always satisfied.
pub struct AllOf<Ctx> {
    pub(crate) filters: Vec<BoxedFilter<Ctx>>,
}

impl<Ctx> AllOf<Ctx> {
    pub fn new(filters: Vec<BoxedFilter<Ctx>>) -> Self {
        AllOf { filters }
    }

    pub fn push(&mut self, filter: BoxedFilter<Ctx>) {
        self.filters.push(filter);
    }
}

impl<Ctx> Clone for AllOf<Ctx> {
    fn clone(&self) -> Self {
        AllOf {
            filters: self.filters.clone(),
        }
    }
}

impl<Ctx> Specification<Ctx> for AllOf<Ctx> {
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.filters.iter().all(|f| f.is_satisfied_by(ctx))
    }
}
