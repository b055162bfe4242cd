// ==========================================
// 生产计划看板 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，把数据源/配置错误转换为用户可读的消息
// 引擎本身没有错误路径，这里只覆盖外围的取数与配置
// ==========================================

use crate::api::plan_source::SourceError;
use crate::i18n;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 外部依赖错误
    // ==========================================
    #[error("取数失败: {0}")]
    DataSourceError(String),

    #[error("配置读取失败: {0}")]
    ConfigError(String),
}

// ==========================================
// 从 SourceError 转换
// ==========================================
impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(path) => ApiError::NotFound(i18n::snapshot_not_found(&path)),
            SourceError::Io(e) => ApiError::DataSourceError(e.to_string()),
            SourceError::Parse(e) => ApiError::DataSourceError(format!("快照格式错误: {}", e)),
            SourceError::Unavailable(msg) => ApiError::DataSourceError(msg),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_conversion() {
        let api_err: ApiError = SourceError::NotFound("/tmp/day.json".to_string()).into();
        match api_err {
            ApiError::NotFound(msg) => assert!(msg.contains("/tmp/day.json")),
            _ => panic!("Expected NotFound"),
        }

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let api_err: ApiError = SourceError::Parse(parse_err).into();
        match api_err {
            ApiError::DataSourceError(msg) => assert!(msg.contains("快照格式错误")),
            _ => panic!("Expected DataSourceError"),
        }
    }
}
