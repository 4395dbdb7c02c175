//! 分页能力 - 业务能力层
//!
//! 纯函数：同样的输入永远给出同一页，不持有任何状态

use crate::models::Question;

/// 每页题目数量
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 规范化页码，缺省或非法的页码一律按第 1 页处理
pub fn normalize_page(page: Option<u32>) -> u32 {
    match page {
        Some(page) if page >= 1 => page,
        _ => 1,
    }
}

/// 取出指定页的题目
///
/// # 参数
/// - `questions`: 按 id 升序的完整题目序列
/// - `page`: 请求页码（缺省按 1 处理）
///
/// # 返回
/// 返回该页的题目切片；页码越界时为空切片，不报错
pub fn paginate_questions(questions: &[Question], page: Option<u32>) -> &[Question] {
    let page = normalize_page(page) as usize;
    let start = (page - 1) * QUESTIONS_PER_PAGE;

    if start >= questions.len() {
        return &[];
    }

    let end = (start + QUESTIONS_PER_PAGE).min(questions.len());
    &questions[start..end]
}
