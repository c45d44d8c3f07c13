use super::aggregator::summarize;
use crate::error::AppError;
use crate::models::{ProjectRecord, ProjectsResponse};
use crate::services::excel::load_projects;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Where project records come from. Loading may block on file I/O.
pub trait RecordSource: Send + Sync {
    fn load(&self) -> Result<Vec<ProjectRecord>, AppError>;
}

/// The portfolio workbook on disk.
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for WorkbookSource {
    fn load(&self) -> Result<Vec<ProjectRecord>, AppError> {
        load_projects(&self.path)
    }
}

/// Read-through cache for the dashboard payload. The first successful load is
/// kept for the life of the cache; a failed load is not stored, so the next
/// caller tries again.
pub struct ProjectCache {
    source: Arc<dyn RecordSource>,
    slot: OnceCell<Arc<ProjectsResponse>>,
}

impl ProjectCache {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            slot: OnceCell::new(),
        }
    }

    pub async fn get_or_compute(&self) -> Result<Arc<ProjectsResponse>, AppError> {
        self.slot
            .get_or_try_init(|| async {
                let start = std::time::Instant::now();
                let source = Arc::clone(&self.source);
                let projects = tokio::task::spawn_blocking(move || source.load())
                    .await
                    .map_err(|e| AppError::Internal(format!("Project loader panicked: {}", e)))??;

                let summary = summarize(&projects);
                tracing::info!(
                    "Cached {} projects across {} years in {:?}",
                    summary.total_projects,
                    summary.years.len(),
                    start.elapsed()
                );
                Ok::<_, AppError>(Arc::new(ProjectsResponse { projects, summary }))
            })
            .await
            .map(Arc::clone)
    }
}
