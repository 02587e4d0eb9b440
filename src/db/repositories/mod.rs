//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod task_repo;
pub mod test_case_repo;
pub mod upload_repo;

pub use task_repo::TaskRepository;
pub use test_case_repo::TestCaseRepository;
pub use upload_repo::UploadRepository;
