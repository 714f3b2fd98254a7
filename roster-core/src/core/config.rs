/// 应用配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ROSTER_LOCATION | /management-employee | 初始位置 (路径 + 可选 query) |
/// | LOG_LEVEL | info | 默认日志级别 |
/// | LOG_DIR | (未设置) | 滚动日志文件目录 |
/// | TOAST_TTL_MS | 4000 | 通知显示时长(毫秒) |
/// | UI_TICK_MS | 100 | 终端轮询间隔(毫秒) |
///
/// # 示例
///
/// ```ignore
/// ROSTER_LOCATION="/management-employee?page=2&limit=10" cargo run -p roster-tui
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 初始位置，page/limit 从其 query 中读取
    pub location: String,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 日志目录，设置后按天滚动写文件
    pub log_dir: Option<String>,
    /// 通知保留时长 (毫秒)
    pub toast_ttl_ms: u64,
    /// UI 事件轮询间隔 (毫秒)
    pub tick_ms: u64,
}

pub const DEFAULT_LOCATION: &str = "/management-employee";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            location: std::env::var("ROSTER_LOCATION").unwrap_or(defaults.location),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            toast_ttl_ms: std::env::var("TOAST_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_ttl_ms),
            tick_ms: std::env::var("UI_TICK_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.tick_ms),
        }
    }

    /// 覆盖初始位置 (命令行参数优先于环境变量)
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            log_level: "info".to_string(),
            log_dir: None,
            toast_ttl_ms: 4000,
            tick_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.location, "/management-employee");
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert_eq!(config.toast_ttl_ms, 4000);
        assert_eq!(config.tick_ms, 100);
    }

    #[test]
    fn test_with_location_overrides() {
        let config = Config::default().with_location("/staff?page=3");
        assert_eq!(config.location, "/staff?page=3");
        assert_eq!(config.log_level, "info");
    }
}
