//! 日志工具模块
//!
//! 提供 tracing 订阅器初始化与日志格式化辅助函数

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 优先使用 RUST_LOG 环境变量；未设置时按 verbose 开关回退到
/// debug / info 两档
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "trivia_catalog=debug,info"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
