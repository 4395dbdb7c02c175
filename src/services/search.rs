//! 搜索能力 - 业务能力层
//!
//! 只负责"过滤"能力，命不命中算不算错误由门面决定

use crate::models::Question;

/// 按题干做大小写不敏感的子串过滤
///
/// 命中集合保持原有的 id 顺序。空搜索词视为命中所有题目
/// （空串是任何文本的子串），该策略的取舍记录在 DESIGN.md。
pub fn filter_by_term(questions: &[Question], term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();

    questions
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
