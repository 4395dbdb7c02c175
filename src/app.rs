use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api;
use crate::config::Config;
use crate::models::{load_catalog_seed, CatalogSeed};
use crate::services::CatalogService;
use crate::store::MemoryStore;

/// 应用主结构
pub struct App {
    config: Config,
    service: Arc<CatalogService<MemoryStore>>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        // 加载种子数据并构建内存仓库
        let seed = load_seed(&config).await?;
        log_catalog_ready(&seed);

        let store = Arc::new(MemoryStore::from_seed(seed));
        let service = Arc::new(CatalogService::new(store));

        Ok(Self { config, service })
    }

    /// 运行应用主逻辑
    pub async fn run(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.bind_host, self.config.bind_port)
            .parse()
            .with_context(|| {
                format!(
                    "无法解析监听地址: {}:{}",
                    self.config.bind_host, self.config.bind_port
                )
            })?;

        let routes = api::routes(self.service);

        info!("🚀 服务已启动，监听 {}", addr);
        warp::serve(routes).run(addr).await;

        Ok(())
    }
}

/// 加载种子数据；文件缺失时以空目录启动
async fn load_seed(config: &Config) -> Result<CatalogSeed> {
    let path = Path::new(&config.seed_file);

    if !path.exists() {
        warn!("⚠️ 种子文件 {} 不存在，以空目录启动", config.seed_file);
        return Ok(CatalogSeed::default());
    }

    load_catalog_seed(path).await
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 趣味问答题库目录服务");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📊 监听端口: {}", config.bind_port);
    info!("📁 种子文件: {}", config.seed_file);
    info!("{}", "=".repeat(60));
}

fn log_catalog_ready(seed: &CatalogSeed) {
    info!(
        "✓ 目录就绪: {} 个分类 / {} 个题目",
        seed.categories.len(),
        seed.questions.len()
    );
}
