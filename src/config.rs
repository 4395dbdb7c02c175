/// 服务配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听地址
    pub bind_host: String,
    /// 监听端口
    pub bind_port: u16,
    /// 目录种子文件路径
    pub seed_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            bind_port: 5000,
            seed_file: "catalog.toml".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            bind_host: std::env::var("TRIVIA_BIND_HOST").unwrap_or(default.bind_host),
            bind_port: std::env::var("TRIVIA_BIND_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.bind_port),
            seed_file: std::env::var("TRIVIA_SEED_FILE").unwrap_or(default.seed_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
