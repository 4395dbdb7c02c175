//! 抽题能力 - 业务能力层
//!
//! 只负责单次抽题，不在两次调用之间记忆任何状态：
//! 已出过的题目 id 由调用方随请求带入

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{CategoryId, Question, QuestionId};

/// 测验的分类选择器
///
/// 线上格式用分类 id 0 表示"全部分类"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Category(CategoryId),
}

impl CategorySelector {
    /// 从线上格式的分类 id 解析
    pub fn from_wire(id: CategoryId) -> Self {
        if id == 0 {
            CategorySelector::All
        } else {
            CategorySelector::Category(id)
        }
    }
}

/// 一次抽题的结果
#[derive(Debug, Clone, PartialEq)]
pub enum QuizOutcome {
    /// 抽中一道未出过的题
    Served(Question),
    /// 可抽池已空，本轮测验结束。这是有界的正常返回，不是错误
    Exhausted,
}

/// 从候选池中抽一道未出过的题
///
/// 两阶段选择：先剔除 previous 中已出过的 id 得到可抽池，再从
/// 可抽池中等概率抽取一道。可抽池为空直接返回 Exhausted，绝不
/// 做"抽到重复就再抽"式的重试，保证调用一定在有界时间内返回。
///
/// # 参数
/// - `candidates`: 候选题目（已按分类选择器过滤）
/// - `previous`: 已出过的题目 id
/// - `rng`: 随机数发生器，由调用方注入以便测试固定种子
pub fn draw_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &[QuestionId],
    rng: &mut R,
) -> QuizOutcome {
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    match eligible.choose(rng) {
        Some(question) => QuizOutcome::Served(question.clone()),
        None => QuizOutcome::Exhausted,
    }
}
