//! 请求处理函数与线上格式定义
//!
//! 每个处理函数对应一条路由：解析入参 → 调用门面 → 组装应答。
//! 应答一律带 success 包络，字段名用蛇形命名。

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use warp::{Rejection, Reply};

use crate::models::{CategoryId, Question, QuestionDraft, QuestionId};
use crate::services::{CatalogService, CategoryIndex, CategorySelector, QuizOutcome};
use crate::store::CatalogStore;

// ========== 请求体 ==========

/// 搜索请求体；searchTerm 缺省按空串处理（命中所有题目）
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

/// 测验请求体，两个字段都必须出现
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<QuestionId>>,
    pub quiz_category: Option<QuizCategoryPayload>,
}

/// 线上格式的测验分类，id 0 表示"全部分类"
#[derive(Debug, Deserialize)]
pub struct QuizCategoryPayload {
    pub id: Option<CategoryId>,
    /// 前端会带上分类名称（线上字段名沿用 type），服务端不使用
    #[serde(rename = "type")]
    pub label: Option<String>,
}

// ========== 应答体 ==========

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryIndex,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryIndex,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryIndex,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// 测验应答；question 为 null 表示可抽池已空、本轮测验结束
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

// ========== 处理函数 ==========

/// GET /categories
pub async fn get_categories<S: CatalogStore>(
    service: Arc<CatalogService<S>>,
) -> Result<impl Reply, Rejection> {
    let categories = service.list_categories().map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /questions?page=N
pub async fn get_questions<S: CatalogStore>(
    params: HashMap<String, String>,
    service: Arc<CatalogService<S>>,
) -> Result<impl Reply, Rejection> {
    let listing = service
        .list_questions(page_param(&params))
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&QuestionListResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: listing.categories,
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question<S: CatalogStore>(
    id: QuestionId,
    params: HashMap<String, String>,
    service: Arc<CatalogService<S>>,
) -> Result<impl Reply, Rejection> {
    let receipt = service
        .delete_question(id, page_param(&params))
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&DeleteResponse {
        success: true,
        deleted: receipt.deleted,
        questions: receipt.listing.questions,
        total_questions: receipt.listing.total_questions,
        categories: receipt.listing.categories,
    }))
}

/// POST /questions
pub async fn add_question<S: CatalogStore>(
    draft: QuestionDraft,
    service: Arc<CatalogService<S>>,
) -> Result<impl Reply, Rejection> {
    service.create_question(draft).map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&CreateResponse { success: true }))
}

/// POST /questions/search
pub async fn search_questions<S: CatalogStore>(
    body: SearchRequest,
    service: Arc<CatalogService<S>>,
) -> Result<impl Reply, Rejection> {
    let outcome = service
        .search_questions(&body.search_term)
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&SearchResponse {
        success: true,
        questions: outcome.questions,
        total_questions: outcome.total_questions,
    }))
}

/// GET /categories/{id}/questions?page=N
pub async fn get_questions_by_category<S: CatalogStore>(
    category_id: CategoryId,
    params: HashMap<String, String>,
    service: Arc<CatalogService<S>>,
) -> Result<impl Reply, Rejection> {
    let listing = service
        .list_by_category(category_id, page_param(&params))
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&CategoryQuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        current_category: listing.current_category,
    }))
}

/// POST /quizzes
pub async fn play_quiz<S: CatalogStore>(
    body: QuizRequest,
    service: Arc<CatalogService<S>>,
) -> Result<impl Reply, Rejection> {
    // quiz_category 存在但没有 id 时同样视为缺失
    let selector = body
        .quiz_category
        .as_ref()
        .and_then(|c| c.id)
        .map(CategorySelector::from_wire);

    let outcome = service
        .next_quiz_question(
            body.previous_questions.as_deref(),
            selector,
            &mut rand::thread_rng(),
        )
        .map_err(warp::reject::custom)?;

    let question = match outcome {
        QuizOutcome::Served(question) => Some(question),
        QuizOutcome::Exhausted => None,
    };

    Ok(warp::reply::json(&QuizResponse {
        success: true,
        question,
    }))
}

/// 从查询参数中取页码，非法值按缺省处理
fn page_param(params: &HashMap<String, String>) -> Option<u32> {
    params.get("page").and_then(|v| v.parse().ok())
}
