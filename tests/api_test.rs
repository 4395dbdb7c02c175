//! 接入层集成测试
//!
//! 用 warp::test 直接驱动完整路由，场景覆盖七条路由的成功与失败分支

use std::sync::Arc;

use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use trivia_catalog::api;
use trivia_catalog::models::{CatalogSeed, Category, SeedQuestion};
use trivia_catalog::{CatalogService, MemoryStore};

fn category(id: u32, label: &str) -> Category {
    Category {
        id,
        label: label.to_string(),
    }
}

fn seed_question(text: &str, answer: &str, difficulty: u8, category: u32) -> SeedQuestion {
    SeedQuestion {
        question: text.to_string(),
        answer: answer.to_string(),
        difficulty,
        category,
    }
}

/// 测试种子：3 个分类（其中 Geography 没有题目），12 道题目（两页）
///
/// 题目 id 按出现顺序分配：1-8 属于 Science，9-12 属于 History
fn sample_seed() -> CatalogSeed {
    CatalogSeed {
        categories: vec![
            category(1, "Science"),
            category(2, "History"),
            category(3, "Geography"),
        ],
        questions: vec![
            seed_question(
                "Which branch of science studies living organisms?",
                "Biology",
                1,
                1,
            ),
            seed_question(
                "Who developed the theory of general relativity?",
                "Albert Einstein",
                2,
                1,
            ),
            seed_question("What planet is known as the Red Planet?", "Mars", 1, 1),
            seed_question(
                "What gas do plants absorb from the atmosphere?",
                "Carbon dioxide",
                2,
                1,
            ),
            seed_question("What is the chemical symbol for gold?", "Au", 1, 1),
            seed_question("How many bones are in the adult human body?", "206", 3, 1),
            seed_question(
                "What force keeps planets in orbit around the sun?",
                "Gravity",
                2,
                1,
            ),
            seed_question("What is the powerhouse of the cell?", "The mitochondrion", 1, 1),
            seed_question(
                "Who was the first president of the United States?",
                "George Washington",
                1,
                2,
            ),
            seed_question("In which year did World War II end?", "1945", 2, 2),
            seed_question("Which empire built the Colosseum?", "The Roman Empire", 2, 2),
            seed_question(
                "Who wrote the Declaration of Independence?",
                "Thomas Jefferson",
                3,
                2,
            ),
        ],
    }
}

/// 每个测试构建独立的路由与仓库，互不影响
fn test_routes() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let store = Arc::new(MemoryStore::from_seed(sample_seed()));
    api::routes(Arc::new(CatalogService::new(store)))
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("应答体应是合法 JSON")
}

#[tokio::test]
async fn test_get_categories() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/categories")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(true));
    assert_eq!(
        data["categories"],
        json!({"1": "Science", "2": "History", "3": "Geography"})
    );
}

#[tokio::test]
async fn test_get_questions_first_page() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/questions")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(true));
    assert_eq!(data["total_questions"], json!(12));
    assert_eq!(data["questions"].as_array().unwrap().len(), 10);

    // 第一页按 id 升序是 1..=10
    let ids: Vec<u64> = data["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert!(data["categories"].is_object());
}

#[tokio::test]
async fn test_get_questions_pages_do_not_overlap() {
    let routes = test_routes();

    let first = warp::test::request()
        .method("GET")
        .path("/questions?page=1")
        .reply(&routes)
        .await;
    let second = warp::test::request()
        .method("GET")
        .path("/questions?page=2")
        .reply(&routes)
        .await;

    let first_ids: Vec<u64> = body_json(first.body())["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .collect();
    let second_ids: Vec<u64> = body_json(second.body())["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .collect();

    assert_eq!(second_ids, vec![11, 12]);
    assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
}

#[tokio::test]
async fn test_get_questions_page_out_of_range() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/questions?page=1000")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(false));
    assert_eq!(data["error"], json!(404));
    assert_eq!(data["message"], json!("resource not found"));
}

#[tokio::test]
async fn test_get_questions_invalid_page_defaults_to_first() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/questions?page=abc")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let data = body_json(res.body());
    assert_eq!(data["questions"][0]["id"], json!(1));
}

#[tokio::test]
async fn test_delete_question() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("DELETE")
        .path("/questions/12")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(true));
    assert_eq!(data["deleted"], json!(12));
    assert_eq!(data["total_questions"], json!(11));
    assert!(data["categories"].is_object());

    // 同一个 id 再删一次必须报 422
    let again = warp::test::request()
        .method("DELETE")
        .path("/questions/12")
        .reply(&routes)
        .await;
    assert_eq!(again.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_unknown_question_leaves_catalog_unchanged() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("DELETE")
        .path("/questions/1000")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(false));
    assert_eq!(data["message"], json!("unprocessable"));

    let listing = warp::test::request()
        .method("GET")
        .path("/questions")
        .reply(&routes)
        .await;
    assert_eq!(body_json(listing.body())["total_questions"], json!(12));
}

#[tokio::test]
async fn test_add_question() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/questions")
        .json(&json!({
            "question": "What is the largest lake in Africa?",
            "answer": "Lake Victoria",
            "difficulty": 2,
            "category": 1
        }))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res.body()), json!({"success": true}));

    // 新题目立即可以被搜索到
    let search = warp::test::request()
        .method("POST")
        .path("/questions/search")
        .json(&json!({"searchTerm": "largest lake"}))
        .reply(&routes)
        .await;
    let data = body_json(search.body());
    assert_eq!(data["total_questions"], json!(1));
    assert_eq!(data["questions"][0]["id"], json!(13));
}

#[tokio::test]
async fn test_add_question_with_blank_text_is_unprocessable() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/questions")
        .json(&json!({
            "question": "",
            "answer": "",
            "difficulty": 1,
            "category": 1
        }))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(res.body())["success"], json!(false));
}

#[tokio::test]
async fn test_add_question_with_missing_fields_is_unprocessable() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/questions")
        .json(&json!({}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_add_question_with_malformed_body_is_unprocessable() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/questions")
        .header("content-type", "application/json")
        .body("not json at all")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let routes = test_routes();

    let upper = warp::test::request()
        .method("POST")
        .path("/questions/search")
        .json(&json!({"searchTerm": "SCIENCE"}))
        .reply(&routes)
        .await;
    let lower = warp::test::request()
        .method("POST")
        .path("/questions/search")
        .json(&json!({"searchTerm": "science"}))
        .reply(&routes)
        .await;

    assert_eq!(upper.status(), StatusCode::OK);
    assert_eq!(body_json(upper.body()), body_json(lower.body()));
    assert_eq!(body_json(upper.body())["total_questions"], json!(1));
}

#[tokio::test]
async fn test_search_without_match_is_not_found() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/questions/search")
        .json(&json!({"searchTerm": "zzzqqq"}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(false));
    assert_eq!(data["message"], json!("resource not found"));
}

#[tokio::test]
async fn test_get_questions_by_category() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/categories/2/questions")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(true));
    assert_eq!(data["current_category"], json!("History"));
    // total_questions 统计的是整个目录，不是该分类
    assert_eq!(data["total_questions"], json!(12));

    let questions = data["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 4);
    assert!(questions.iter().all(|q| q["category"] == json!(2)));
}

#[tokio::test]
async fn test_get_questions_by_empty_category() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/categories/3/questions")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let data = body_json(res.body());
    assert_eq!(data["current_category"], json!("Geography"));
    assert!(data["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_questions_by_unknown_category() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/categories/1000/questions")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res.body())["success"], json!(false));
}

#[tokio::test]
async fn test_quiz_never_repeats_previous_questions() {
    let routes = test_routes();

    // History 分类是 9..=12 四道题，出过三道后只可能抽到 12 号
    for _ in 0..20 {
        let res = warp::test::request()
            .method("POST")
            .path("/quizzes")
            .json(&json!({
                "previous_questions": [9, 10, 11],
                "quiz_category": {"id": 2, "type": "History"}
            }))
            .reply(&routes)
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let data = body_json(res.body());
        assert_eq!(data["success"], json!(true));
        assert_eq!(data["question"]["id"], json!(12));
        assert_eq!(data["question"]["category"], json!(2));
    }
}

#[tokio::test]
async fn test_quiz_exhaustion_returns_null_question() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/quizzes")
        .json(&json!({
            "previous_questions": [9, 10, 11, 12],
            "quiz_category": {"id": 2, "type": "History"}
        }))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(true));
    assert!(data["question"].is_null());
}

#[tokio::test]
async fn test_quiz_with_all_categories_selector() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/quizzes")
        .json(&json!({
            "previous_questions": [],
            "quiz_category": {"id": 0, "type": "click"}
        }))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let data = body_json(res.body());
    let id = data["question"]["id"].as_u64().unwrap();
    assert!((1..=12).contains(&id));
}

#[tokio::test]
async fn test_quiz_with_missing_fields_is_bad_request() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/quizzes")
        .json(&json!({}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(false));
    assert_eq!(data["message"], json!("bad request"));
}

#[tokio::test]
async fn test_quiz_with_category_missing_id_is_bad_request() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/quizzes")
        .json(&json!({
            "previous_questions": [],
            "quiz_category": {}
        }))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let routes = test_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/nonexistent")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let data = body_json(res.body());
    assert_eq!(data["success"], json!(false));
    assert_eq!(data["message"], json!("resource not found"));
}
