//! List Files Use Case

use std::sync::Arc;

use crate::domain::entities::PdfFile;
use crate::domain::repository::FileCatalog;
use crate::error::FilesResult;

/// List files use case
pub struct ListFilesUseCase<C>
where
    C: FileCatalog,
{
    catalog: Arc<C>,
}

impl<C> ListFilesUseCase<C>
where
    C: FileCatalog,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> FilesResult<Vec<PdfFile>> {
        self.catalog.list().await
    }
}
