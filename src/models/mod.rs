pub mod loaders;
pub mod question;

pub use loaders::{load_catalog_seed, CatalogSeed, SeedQuestion};
pub use question::{Category, CategoryId, NewQuestion, Question, QuestionDraft, QuestionId};
