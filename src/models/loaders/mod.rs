pub mod toml_loader;

pub use toml_loader::{load_catalog_seed, CatalogSeed, SeedQuestion};
