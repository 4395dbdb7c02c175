//! 错误码映射
//!
//! 核心层只产出错误分类，这里统一翻译成 HTTP 状态码；
//! 应答体固定为 {success, error, message} 三个字段。

use serde::Serialize;
use tracing::warn;
use warp::{
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    Rejection, Reply,
};

use crate::error::CatalogError;

impl warp::reject::Reject for CatalogError {}

/// 错误应答体
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

/// 统一错误恢复
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(err) = r.find::<CatalogError>() {
        let status = match err {
            CatalogError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        warn!("请求失败: {}", err);
        Ok(error_reply(status, status_message(status)))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        warn!("CORS 拒绝: {}", error);
        Ok(error_reply(StatusCode::FORBIDDEN, "forbidden"))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        warn!("请求体解析失败: {}", error);
        Ok(error_reply(
            StatusCode::UNPROCESSABLE_ENTITY,
            "unprocessable",
        ))
    } else {
        // 没有命中任何路由（含方法不匹配），一律按资源不存在处理
        Ok(error_reply(StatusCode::NOT_FOUND, "resource not found"))
    }
}

fn error_reply(status: StatusCode, message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorBody {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }),
        status,
    )
}

fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}
