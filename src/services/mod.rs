pub mod catalog;
pub mod category_index;
pub mod pagination;
pub mod quiz;
pub mod search;

pub use catalog::{
    CatalogService, CategoryListing, DeletionReceipt, QuestionListing, SearchOutcome,
};
pub use category_index::CategoryIndex;
pub use pagination::{paginate_questions, QUESTIONS_PER_PAGE};
pub use quiz::{draw_question, CategorySelector, QuizOutcome};
pub use search::filter_by_term;
