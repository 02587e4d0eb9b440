//! Rules over uploads.
//!
//! Each leaf reads one column of the uploads table. Column names match the
//! `expurtka_upload` table; statuses are stored as their persisted ids.

use std::sync::Arc;

use putka_common::{RunStatus, TaskId, Upload, UploadStatus};
use sqlx::{Postgres, QueryBuilder};

use crate::operators::Spec;
use crate::specification::{AllOf, BoxedFilter, Specification};
use crate::sql::SqlFilter;

/// The upload is in the given lifecycle stage.
#[derive(Debug, Clone, Copy)]
pub struct UploadStatusIs(pub UploadStatus);

impl Specification<Upload> for UploadStatusIs {
    fn is_satisfied_by(&self, ctx: &Upload) -> bool {
        ctx.status == self.0
    }
}

impl SqlFilter for UploadStatusIs {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push(prefix).push("status = ").push_bind(self.0.id());
    }
}

/// The compile job finished with the given status.
#[derive(Debug, Clone, Copy)]
pub struct PreparationStatusIs(pub RunStatus);

impl Specification<Upload> for PreparationStatusIs {
    fn is_satisfied_by(&self, ctx: &Upload) -> bool {
        ctx.preparation_status == Some(self.0)
    }
}

impl SqlFilter for PreparationStatusIs {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push(prefix)
            .push("preparation_status = ")
            .push_bind(self.0.id());
    }
}

/// The aggregate of all test cases is the given status.
#[derive(Debug, Clone, Copy)]
pub struct AggStatusIs(pub RunStatus);

impl Specification<Upload> for AggStatusIs {
    fn is_satisfied_by(&self, ctx: &Upload) -> bool {
        ctx.agg_status == Some(self.0)
    }
}

impl SqlFilter for AggStatusIs {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push(prefix).push("agg_status = ").push_bind(self.0.id());
    }
}

/// The aggregate status is one of the given statuses.
///
/// Built from the preimage of a masked status to find every upload that a
/// viewer would see with that status. An empty set matches nothing.
#[derive(Debug, Clone)]
pub struct AggStatusIn(pub Vec<RunStatus>);

impl Specification<Upload> for AggStatusIn {
    fn is_satisfied_by(&self, ctx: &Upload) -> bool {
        ctx.agg_status.is_some_and(|s| self.0.contains(&s))
    }
}

impl SqlFilter for AggStatusIn {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        if self.0.is_empty() {
            qb.push("FALSE");
            return;
        }
        qb.push(prefix).push("agg_status IN (");
        let mut separated = qb.separated(", ");
        for status in &self.0 {
            separated.push_bind(status.id());
        }
        separated.push_unseparated(")");
    }
}

/// The upload got all available points. Missing points never match.
#[derive(Debug, Clone, Copy)]
pub struct PointsEqualMaxPoints;

impl Specification<Upload> for PointsEqualMaxPoints {
    fn is_satisfied_by(&self, ctx: &Upload) -> bool {
        matches!((ctx.points, ctx.max_points), (Some(p), Some(m)) if p == m)
    }
}

impl SqlFilter for PointsEqualMaxPoints {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push(prefix)
            .push("points = ")
            .push(prefix)
            .push("max_points");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IsOfficialSolution;

impl Specification<Upload> for IsOfficialSolution {
    fn is_satisfied_by(&self, ctx: &Upload) -> bool {
        ctx.is_official_solution
    }
}

impl SqlFilter for IsOfficialSolution {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push(prefix).push("is_official_solution");
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TaskIs(pub TaskId);

impl Specification<Upload> for TaskIs {
    fn is_satisfied_by(&self, ctx: &Upload) -> bool {
        ctx.task_id == self.0
    }
}

impl SqlFilter for TaskIs {
    fn push_sql<'args>(&self, qb: &mut QueryBuilder<'args, Postgres>, prefix: &str) {
        qb.push(prefix).push("task_id = ").push_bind(self.0);
    }
}

/// Uploads that were evaluated, compiled, passed every test and got all the
/// points. Agrees with [`Upload::is_solved`] on every upload.
pub fn solved() -> Spec<AllOf<Upload>> {
    let filters: Vec<BoxedFilter<Upload>> = vec![
        Arc::new(UploadStatusIs(UploadStatus::Done)),
        Arc::new(PreparationStatusIs(RunStatus::Ok)),
        Arc::new(AggStatusIs(RunStatus::Ok)),
        Arc::new(PointsEqualMaxPoints),
    ];
    Spec(AllOf::new(filters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use putka_common::language::Language;

    fn upload() -> Upload {
        Upload {
            id: 1,
            user_id: 2,
            task_id: 3,
            lang: Language::C,
            filename: "a.c".to_string(),
            upload_time: Utc::now(),
            status: UploadStatus::Done,
            mgr_status: None,
            preparation_status: Some(RunStatus::Ok),
            agg_status: Some(RunStatus::Ok),
            points: Some(100),
            max_points: Some(100),
            is_official_solution: false,
        }
    }

    fn render(filter: &impl SqlFilter) -> String {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT id FROM expurtka_upload u WHERE ");
        filter.push_sql(&mut qb, "u.");
        qb.sql().to_string()
    }

    #[test]
    fn test_solved_matches_in_memory_predicate() {
        let statuses = [None, Some(RunStatus::Ok), Some(RunStatus::Wa), Some(RunStatus::Rte)];
        let points = [None, Some(0), Some(50), Some(100)];
        let rule = solved();

        let mut checked = 0;
        for status in UploadStatus::ALL {
            for prep in statuses {
                for agg in statuses {
                    for p in points {
                        for m in points {
                            let mut u = upload();
                            u.status = status;
                            u.preparation_status = prep;
                            u.agg_status = agg;
                            u.points = p;
                            u.max_points = m;
                            assert_eq!(rule.is_satisfied_by(&u), u.is_solved(), "{u:?}");
                            checked += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(checked, 5 * 4 * 4 * 4 * 4);
    }

    #[test]
    fn test_solved_upload() {
        assert!(solved().is_satisfied_by(&upload()));

        let mut u = upload();
        u.points = Some(99);
        assert!(!solved().is_satisfied_by(&u));
    }

    #[test]
    fn test_solved_sql() {
        assert_eq!(
            render(&solved()),
            "SELECT id FROM expurtka_upload u WHERE (u.status = $1 AND \
             u.preparation_status = $2 AND u.agg_status = $3 AND u.points = u.max_points)"
        );
    }

    #[test]
    fn test_agg_status_in() {
        let rule = AggStatusIn(vec![RunStatus::Wa, RunStatus::Pe]);
        let mut u = upload();
        assert!(!rule.is_satisfied_by(&u));
        u.agg_status = Some(RunStatus::Pe);
        assert!(rule.is_satisfied_by(&u));
        u.agg_status = None;
        assert!(!rule.is_satisfied_by(&u));

        assert_eq!(
            render(&rule),
            "SELECT id FROM expurtka_upload u WHERE u.agg_status IN ($1, $2)"
        );
    }

    #[test]
    fn test_empty_agg_status_in_matches_nothing() {
        let rule = AggStatusIn(vec![]);
        assert!(!rule.is_satisfied_by(&upload()));
        assert_eq!(render(&rule), "SELECT id FROM expurtka_upload u WHERE FALSE");
    }

    #[test]
    fn test_composed_with_operators() {
        let rule = Spec(TaskIs(3)) & !Spec(IsOfficialSolution) & solved();
        assert!(rule.is_satisfied_by(&upload()));

        let mut u = upload();
        u.is_official_solution = true;
        assert!(!rule.is_satisfied_by(&u));

        let mut u = upload();
        u.task_id = 4;
        assert!(!rule.is_satisfied_by(&u));

        assert_eq!(
            render(&(Spec(TaskIs(3)) & !Spec(IsOfficialSolution))),
            "SELECT id FROM expurtka_upload u WHERE \
             (u.task_id = $1 AND NOT COALESCE((u.is_official_solution), FALSE))"
        );
    }
}
