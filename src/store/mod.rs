//! 存储层
//!
//! 仓库接口与内存实现。上层（services）只依赖 CatalogStore 接口，
//! 不关心数据真正放在哪里。

pub mod memory;

pub use memory::MemoryStore;

use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};
use thiserror::Error;

/// 存储层错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// 题目不存在
    #[error("题目不存在: {id}")]
    QuestionNotFound { id: QuestionId },

    /// 题目引用了不存在的分类
    #[error("分类不存在: {id}")]
    UnknownCategory { id: CategoryId },
}

/// 题目/分类仓库接口
///
/// 约定：
/// - 题目与分类一律按 id 升序返回
/// - 新建题目时校验分类引用并分配递增 id
/// - 删除不存在的 id 必须返回可区分的错误，不允许静默成功
pub trait CatalogStore: Send + Sync {
    /// 返回全部题目（id 升序）
    fn all_questions(&self) -> Vec<Question>;

    /// 返回全部分类（id 升序）
    fn all_categories(&self) -> Vec<Category>;

    /// 按 id 查找分类
    fn category_by_id(&self, id: CategoryId) -> Option<Category>;

    /// 返回指定分类下的全部题目（id 升序）
    fn questions_by_category(&self, id: CategoryId) -> Vec<Question>;

    /// 题目总数
    fn question_count(&self) -> usize;

    /// 新建题目并分配 id
    fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// 删除题目
    fn delete_question(&self, id: QuestionId) -> Result<(), StoreError>;
}
