use thiserror::Error;

/// 目录服务的错误分类
///
/// 只表达"哪一类失败"，具体的 HTTP 状态码由 api 层统一映射。
/// 注意：测验抽完（Exhausted）不是错误，属于 QuizOutcome 的正常分支。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// 请求缺少必要字段（目前只有测验请求会触发）
    #[error("请求格式错误: {0}")]
    BadRequest(&'static str),

    /// 查询没有命中任何数据：空页、空搜索结果、未知分类、没有分类数据。
    /// 空目录也按 NotFound 处理，属于有意的产品决策
    #[error("资源不存在")]
    NotFound,

    /// 变更无法完成：删除不存在的题目、新建题目字段缺失或非法
    #[error("无法处理的请求: {0}")]
    Unprocessable(String),
}

/// 目录服务结果类型
pub type CatalogResult<T> = Result<T, CatalogError>;
