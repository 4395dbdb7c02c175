//! 路由组装
//!
//! 七条路由 + CORS + 统一错误恢复。组装结果既可交给 warp::serve，
//! 也可直接交给 warp::test 驱动。

use std::collections::HashMap;
use std::sync::Arc;

use warp::{http::Method, Filter, Rejection, Reply};

use super::{handlers, rejections};
use crate::models::{CategoryId, QuestionId};
use crate::services::CatalogService;
use crate::store::CatalogStore;

/// 组装全部路由
pub fn routes<S>(
    service: Arc<CatalogService<S>>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone
where
    S: CatalogStore + 'static,
{
    // CORS：任意来源 + 常用方法，前端单页应用跨域访问用
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type", "Authorization"])
        .allow_methods(&[
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    let service_filter = warp::any().map(move || service.clone());

    let get_categories = warp::get()
        .and(warp::path!("categories"))
        .and(service_filter.clone())
        .and_then(handlers::get_categories);

    let get_questions = warp::get()
        .and(warp::path!("questions"))
        .and(warp::query::<HashMap<String, String>>())
        .and(service_filter.clone())
        .and_then(handlers::get_questions);

    let delete_question = warp::delete()
        .and(warp::path!("questions" / QuestionId))
        .and(warp::query::<HashMap<String, String>>())
        .and(service_filter.clone())
        .and_then(handlers::delete_question);

    let search_questions = warp::post()
        .and(warp::path!("questions" / "search"))
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(handlers::search_questions);

    let add_question = warp::post()
        .and(warp::path!("questions"))
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(handlers::add_question);

    let questions_by_category = warp::get()
        .and(warp::path!("categories" / CategoryId / "questions"))
        .and(warp::query::<HashMap<String, String>>())
        .and(service_filter.clone())
        .and_then(handlers::get_questions_by_category);

    let play_quiz = warp::post()
        .and(warp::path!("quizzes"))
        .and(warp::body::json())
        .and(service_filter)
        .and_then(handlers::play_quiz);

    get_categories
        .or(get_questions)
        .or(delete_question)
        .or(search_questions)
        .or(add_question)
        .or(questions_by_category)
        .or(play_quiz)
        .with(cors)
        .recover(rejections::return_error)
}
