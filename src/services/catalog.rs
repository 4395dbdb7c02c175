//! 目录门面服务
//!
//! 组合分类索引 / 分页 / 搜索 / 抽题四个能力，对接入层回答
//! 列表、搜索、按分类、测验四类查询，以及新建、删除后的状态汇报。
//! 所有操作都是"一次输入 + 一次仓库读写"的纯流程，不持有会话状态。

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, warn};

use super::category_index::CategoryIndex;
use super::pagination::paginate_questions;
use super::quiz::{draw_question, CategorySelector, QuizOutcome};
use super::search::filter_by_term;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CategoryId, NewQuestion, Question, QuestionDraft, QuestionId};
use crate::store::CatalogStore;
use crate::utils::logging::truncate_text;

/// 分页后的题目列表，附目录统计与分类索引
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryIndex,
}

/// 搜索结果，total_questions 是命中数量
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// 按分类列出的题目
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    pub questions: Vec<Question>,
    /// 注意：这里统计的是整个目录的题目数，而不是该分类的题目数，
    /// 前端按这个总数渲染分页控件
    pub total_questions: usize,
    pub current_category: String,
}

/// 删除成功后的回执，附带刷新后的列表
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionReceipt {
    pub deleted: QuestionId,
    pub listing: QuestionListing,
}

/// 目录门面服务
pub struct CatalogService<S: CatalogStore> {
    store: Arc<S>,
}

impl<S: CatalogStore> CatalogService<S> {
    /// 创建新的目录服务
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 列出全部分类
    pub fn list_categories(&self) -> CatalogResult<CategoryIndex> {
        CategoryIndex::build(&self.store.all_categories())
    }

    /// 分页列出题目
    ///
    /// 页为空或没有任何分类时返回 NotFound
    pub fn list_questions(&self, page: Option<u32>) -> CatalogResult<QuestionListing> {
        let listing = self.build_listing(page);

        if listing.questions.is_empty() || listing.categories.is_empty() {
            debug!("列表查询未命中: page={:?}", page);
            return Err(CatalogError::NotFound);
        }

        Ok(listing)
    }

    /// 搜索题目
    ///
    /// 没有任何命中时返回 NotFound
    pub fn search_questions(&self, term: &str) -> CatalogResult<SearchOutcome> {
        info!("🔍 搜索题目: {}", truncate_text(term, 80));

        let matches = filter_by_term(&self.store.all_questions(), term);
        if matches.is_empty() {
            return Err(CatalogError::NotFound);
        }

        let total_questions = matches.len();
        info!("✓ 搜索完成，命中 {} 道题目", total_questions);

        Ok(SearchOutcome {
            questions: matches,
            total_questions,
        })
    }

    /// 按分类分页列出题目
    ///
    /// 分类不存在时返回 NotFound；过滤条件是请求里的分类 id
    pub fn list_by_category(
        &self,
        category_id: CategoryId,
        page: Option<u32>,
    ) -> CatalogResult<CategoryListing> {
        let category = self
            .store
            .category_by_id(category_id)
            .ok_or(CatalogError::NotFound)?;

        let questions = self.store.questions_by_category(category_id);
        let page_items = paginate_questions(&questions, page).to_vec();

        Ok(CategoryListing {
            questions: page_items,
            total_questions: self.store.question_count(),
            current_category: category.label,
        })
    }

    /// 抽下一道测验题
    ///
    /// # 参数
    /// - `previous`: 已出过的题目 id，缺失按 BadRequest 处理
    /// - `selector`: 分类选择器，缺失按 BadRequest 处理
    /// - `rng`: 随机数发生器，由调用方注入
    ///
    /// # 返回
    /// 返回抽中的题目，或可抽池已空的 Exhausted
    pub fn next_quiz_question<R: Rng + ?Sized>(
        &self,
        previous: Option<&[QuestionId]>,
        selector: Option<CategorySelector>,
        rng: &mut R,
    ) -> CatalogResult<QuizOutcome> {
        let previous = previous.ok_or(CatalogError::BadRequest("缺少 previous_questions 字段"))?;
        let selector =
            selector.ok_or(CatalogError::BadRequest("quiz_category 字段缺失或没有 id"))?;

        let candidates = match selector {
            CategorySelector::All => self.store.all_questions(),
            CategorySelector::Category(id) => self.store.questions_by_category(id),
        };

        debug!(
            "抽题: 候选 {} 道，已出过 {} 道",
            candidates.len(),
            previous.len()
        );

        Ok(draw_question(candidates, previous, rng))
    }

    /// 新建题目
    ///
    /// 字段缺失、题干或答案为空白、难度越界、分类不存在，
    /// 一律按 Unprocessable 处理
    pub fn create_question(&self, draft: QuestionDraft) -> CatalogResult<Question> {
        let question = validate_draft(draft)?;

        let stored = self
            .store
            .insert_question(question)
            .map_err(|e| CatalogError::Unprocessable(e.to_string()))?;

        info!("✓ 新建题目 {} (分类 {})", stored.id, stored.category);
        Ok(stored)
    }

    /// 删除题目并返回刷新后的列表
    ///
    /// 删除不存在的 id 返回 Unprocessable，目录保持不变。
    /// 刷新后的列表按宽松方式构建（不套用空页 NotFound 策略）：
    /// 删除成功本身就是正常结果，哪怕删的是最后一道题。
    pub fn delete_question(
        &self,
        id: QuestionId,
        page: Option<u32>,
    ) -> CatalogResult<DeletionReceipt> {
        self.store.delete_question(id).map_err(|e| {
            warn!("⚠️ 删除题目失败: {}", e);
            CatalogError::Unprocessable(e.to_string())
        })?;

        info!("✓ 已删除题目 {}", id);

        Ok(DeletionReceipt {
            deleted: id,
            listing: self.build_listing(page),
        })
    }

    /// 构建当前目录的分页列表（宽松：不做 NotFound 判定）
    fn build_listing(&self, page: Option<u32>) -> QuestionListing {
        let questions = self.store.all_questions();
        let page_items = paginate_questions(&questions, page).to_vec();

        QuestionListing {
            questions: page_items,
            total_questions: questions.len(),
            categories: CategoryIndex::collect(&self.store.all_categories()),
        }
    }
}

/// 校验新建题目的字段
fn validate_draft(draft: QuestionDraft) -> CatalogResult<NewQuestion> {
    let question = non_blank(draft.question, "question")?;
    let answer = non_blank(draft.answer, "answer")?;

    let difficulty = draft
        .difficulty
        .ok_or_else(|| missing_field("difficulty"))?;
    if !(1..=5).contains(&difficulty) {
        return Err(CatalogError::Unprocessable(format!(
            "难度 {} 超出范围 [1, 5]",
            difficulty
        )));
    }

    let category = draft.category.ok_or_else(|| missing_field("category"))?;

    Ok(NewQuestion {
        question,
        answer,
        difficulty,
        category,
    })
}

fn non_blank(value: Option<String>, field: &str) -> CatalogResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing_field(field)),
    }
}

fn missing_field(field: &str) -> CatalogError {
    CatalogError::Unprocessable(format!("字段 {} 缺失或为空", field))
}
