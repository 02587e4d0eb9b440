//! Business logic services

pub mod results_service;
pub mod task_service;
pub mod upload_service;

pub use results_service::ResultsService;
pub use task_service::TaskService;
pub use upload_service::UploadService;
