use crate::models::question::{Category, CategoryId};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 目录种子数据
///
/// 对应仓库根目录下 catalog.toml 的结构，启动时一次性载入内存仓库。
/// 题目 id 不写在种子文件里，由仓库按出现顺序从 1 开始分配。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// 种子文件中的题目条目
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: CategoryId,
}

/// 从 TOML 文件加载目录种子数据
///
/// # 参数
/// - `path`: 种子文件路径
///
/// # 返回
/// 返回解析后的种子数据
pub async fn load_catalog_seed(path: &Path) -> Result<CatalogSeed> {
    tracing::info!(
        "正在加载: {}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取种子文件: {}", path.display()))?;

    let seed: CatalogSeed = toml::from_str(&content)
        .with_context(|| format!("无法解析种子文件: {}", path.display()))?;

    tracing::info!(
        "成功加载 {} 个分类、{} 个题目",
        seed.categories.len(),
        seed.questions.len()
    );

    Ok(seed)
}
