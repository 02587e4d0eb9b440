//! Operator overloading for specification combinators.
//!
//! This module provides implementations of `BitAnd` (&), `BitOr` (|), and `Not` (!)
//! for specifications, allowing intuitive syntax like:
//!
//! ```ignore
//! let rule = Spec(TaskIs(7)) & !Spec(IsOfficialSolution);
//! ```

use std::ops::{BitAnd, BitOr, Not as StdNot};

use crate::specification::{And, Not, Or, Specification};

/// Wrapper struct to enable operator overloading on specifications.
#[derive(Debug, Clone)]
pub struct Spec<S>(pub S);

impl<A, B> BitAnd<Spec<B>> for Spec<A> {
    type Output = Spec<And<A, B>>;

    fn bitand(self, rhs: Spec<B>) -> Self::Output {
        Spec(And(self.0, rhs.0))
    }
}

impl<A, B> BitOr<Spec<B>> for Spec<A> {
    type Output = Spec<Or<A, B>>;

    fn bitor(self, rhs: Spec<B>) -> Self::Output {
        Spec(Or(self.0, rhs.0))
    }
}

impl<A> StdNot for Spec<A> {
    type Output = Spec<Not<A>>;

    fn not(self) -> Self::Output {
        Spec(Not(self.0))
    }
}

impl<Ctx, S> Specification<Ctx> for Spec<S>
where
    S: Specification<Ctx>,
{
    fn is_satisfied_by(&self, ctx: &Ctx) -> bool {
        self.0.is_satisfied_by(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specification::{AlwaysFalse, AlwaysTrue};

    #[test]
    fn test_and_operator() {
        let rule = Spec(AlwaysTrue) & Spec(AlwaysTrue);
        assert!(Specification::<()>::is_satisfied_by(&rule, &()));

        let rule = Spec(AlwaysTrue) & Spec(AlwaysFalse);
        assert!(!Specification::<()>::is_satisfied_by(&rule, &()));
    }

    #[test]
    fn test_or_operator() {
        let rule = Spec(AlwaysFalse) | Spec(AlwaysTrue);
        assert!(Specification::<()>::is_satisfied_by(&rule, &()));

        let rule = Spec(AlwaysFalse) | Spec(AlwaysFalse);
        assert!(!Specification::<()>::is_satisfied_by(&rule, &()));
    }

    #[test]
    fn test_not_operator() {
        let rule = !Spec(AlwaysTrue);
        assert!(!Specification::<()>::is_satisfied_by(&rule, &()));

        let rule = !Spec(AlwaysFalse);
        assert!(Specification::<()>::is_satisfied_by(&rule, &()));
    }

    #[test]
    fn test_complex_expression() {
        // (true & (!false)) | false = true
        let rule = (Spec(AlwaysTrue) & !Spec(AlwaysFalse)) | Spec(AlwaysFalse);
        assert!(Specification::<()>::is_satisfied_by(&rule, &()));
    }
}
