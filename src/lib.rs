//! # Trivia Catalog
//!
//! 趣味问答题库目录服务：分页列表、分类浏览、全文搜索与不重复抽题测验
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 领域数据结构与种子数据加载
//!
//! ### ② 存储层（Store）
//! - `store/` - 仓库接口与内存实现，持有全部题目/分类数据
//! - `MemoryStore` - 唯一的数据 owner，按 id 升序对外提供数据
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `CategoryIndex` - 分类索引能力
//! - `paginate_questions` - 分页能力
//! - `filter_by_term` - 搜索能力
//! - `draw_question` - 抽题能力（两阶段选择，显式 Exhausted 终态）
//! - `CatalogService` - 门面，组合四个能力回答全部请求
//!
//! ### ④ 接入层（Api）
//! - `api/` - warp 路由、请求解析与错误码映射
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{CatalogError, CatalogResult};
pub use models::{Category, Question, QuestionDraft};
pub use services::{CatalogService, CategoryIndex, CategorySelector, QuizOutcome};
pub use store::{CatalogStore, MemoryStore};
