use std::sync::RwLock;

use super::{CatalogStore, StoreError};
use crate::models::{CatalogSeed, Category, CategoryId, NewQuestion, Question, QuestionId};

/// 内存仓库
///
/// 启动时从种子数据构建，之后的全部读写都在进程内完成。
/// 读路径共享读锁，写锁只在新建/删除时短暂持有。
pub struct MemoryStore {
    inner: RwLock<CatalogState>,
}

#[derive(Debug, Default)]
struct CatalogState {
    /// 始终保持 id 升序
    questions: Vec<Question>,
    /// 始终保持 id 升序
    categories: Vec<Category>,
    next_question_id: QuestionId,
}

impl MemoryStore {
    /// 创建空仓库
    pub fn new() -> Self {
        Self::from_seed(CatalogSeed::default())
    }

    /// 从种子数据构建仓库，题目 id 按出现顺序从 1 开始分配
    pub fn from_seed(seed: CatalogSeed) -> Self {
        let mut categories = seed.categories;
        categories.sort_by_key(|c| c.id);

        let questions: Vec<Question> = seed
            .questions
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Question {
                id: index as QuestionId + 1,
                question: entry.question,
                answer: entry.answer,
                difficulty: entry.difficulty,
                category: entry.category,
            })
            .collect();

        let next_question_id = questions.len() as QuestionId + 1;

        Self {
            inner: RwLock::new(CatalogState {
                questions,
                categories,
                next_question_id,
            }),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CatalogState> {
        self.inner.read().expect("目录锁已中毒")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CatalogState> {
        self.inner.write().expect("目录锁已中毒")
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for MemoryStore {
    fn all_questions(&self) -> Vec<Question> {
        self.read().questions.clone()
    }

    fn all_categories(&self) -> Vec<Category> {
        self.read().categories.clone()
    }

    fn category_by_id(&self, id: CategoryId) -> Option<Category> {
        self.read().categories.iter().find(|c| c.id == id).cloned()
    }

    fn questions_by_category(&self, id: CategoryId) -> Vec<Question> {
        self.read()
            .questions
            .iter()
            .filter(|q| q.category == id)
            .cloned()
            .collect()
    }

    fn question_count(&self) -> usize {
        self.read().questions.len()
    }

    fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut state = self.write();

        if !state.categories.iter().any(|c| c.id == question.category) {
            return Err(StoreError::UnknownCategory {
                id: question.category,
            });
        }

        let id = state.next_question_id;
        state.next_question_id += 1;

        let stored = Question {
            id,
            question: question.question,
            answer: question.answer,
            difficulty: question.difficulty,
            category: question.category,
        };
        state.questions.push(stored.clone());

        Ok(stored)
    }

    fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        let mut state = self.write();

        match state.questions.iter().position(|q| q.id == id) {
            Some(index) => {
                state.questions.remove(index);
                Ok(())
            }
            None => Err(StoreError::QuestionNotFound { id }),
        }
    }
}
