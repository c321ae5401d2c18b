//! Localization engine.
//!
//! - `key`: catalog key derivation from raw text
//! - `locale`: locale tags, fallback chains, and the caller's locale source
//! - `catalog`: per-locale message catalogs and `.properties` loading
//! - `resolve`: text to translation resolution with pass-through on miss
//! - `walk`: depth-first traversal of structured values
//! - `translate`: translated copies of response data
//! - `store`: the deduplicating candidate file
//! - `extract`: collection of untranslated CJK text into the store
//! - `pending`: candidates not yet covered by a catalog

pub mod catalog;
pub mod extract;
pub mod key;
pub mod locale;
pub mod pending;
pub mod resolve;
pub mod store;
pub mod translate;
pub mod walk;

pub use catalog::{BundleCatalog, CatalogError, CatalogLoadResult, MessageCatalog};
pub use extract::{ExtractionReport, Extractor};
pub use key::{MESSAGE_SUFFIX, contains_target_script, derive_key};
pub use locale::{Locale, LocaleContext, LocaleSource};
pub use pending::pending_entries;
pub use resolve::{Resolver, catalog_key};
pub use store::{CandidateEntry, CandidateStore};
pub use translate::Translator;
pub use walk::{DEFAULT_EXCLUDED_FIELDS, TreeWalker};
