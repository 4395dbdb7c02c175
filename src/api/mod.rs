//! HTTP 接入层
//!
//! 负责路由、请求解析与错误码映射。业务规则全部在 services 层，
//! 这里只做"线上格式 ↔ 领域类型"的翻译。

pub mod handlers;
pub mod rejections;
pub mod routes;

pub use routes::routes;
