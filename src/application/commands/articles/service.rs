use std::sync::Arc;

use crate::application::{dto::ArticleAssembler, ports::time::Clock};
use crate::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    slug::SlugAssigner,
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_assigner: Arc<SlugAssigner>,
    pub(super) assembler: Arc<ArticleAssembler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_assigner: Arc<SlugAssigner>,
        assembler: Arc<ArticleAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_assigner,
            assembler,
            clock,
        }
    }
}
