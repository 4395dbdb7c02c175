use serde::{Deserialize, Serialize};

/// 题目唯一标识
pub type QuestionId = u32;

/// 分类唯一标识
pub type CategoryId = u32;

/// 问答题目
///
/// 创建后不可修改，只能通过删除操作移除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    /// 难度，取值范围 1-5
    pub difficulty: u8,
    /// 所属分类的 id，必须指向已存在的分类
    pub category: CategoryId,
}

/// 题目分类（参照数据，不提供删除操作）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
}

/// 新建题目的请求字段
///
/// 全部字段可缺省，校验统一在 CatalogService 中进行
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<u8>,
    pub category: Option<CategoryId>,
}

/// 校验通过、等待入库的题目数据
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: CategoryId,
}
