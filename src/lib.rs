/*!
 * # translatable - record-field translation resolution and upsert
 *
 * A Rust library implementing the read/resolve/write cycle for translatable
 * record fields over a SQLite-backed message store.
 *
 * ## Features
 *
 * - Resolve a stored message to its active-locale translation on read,
 *   falling back to the original text on a miss
 * - Reconcile changed attribute values on write: register new source
 *   messages or update existing translations for the current locale
 * - Explicit `on_read` / `on_before_write` hooks the host record layer
 *   calls directly, with no implicit event registration
 * - In-memory and store-backed message catalogs
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `store`: SQLite persistence for source messages and translations:
 *   - `store::connection`: Connection management and store statistics
 *   - `store::schema`: Table definitions and migrations
 *   - `store::repository`: The concrete `SqliteStore`
 * - `resolver`: Core translation resolution and reconciliation
 * - `catalog`: Message catalog lookup for the read path
 * - `behavior`: Record hooks over a configured set of attributes
 * - `locale`: Locale context and ISO language code utilities
 * - `errors`: Custom error types for the store
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod behavior;
pub mod catalog;
pub mod errors;
pub mod locale;
pub mod resolver;
pub mod store;

// Re-export main types for easier usage
pub use behavior::{TranslatableRecord, TranslateBehavior, sanitize_category};
pub use catalog::{InMemoryCatalog, MessageCatalog, StoreCatalog};
pub use errors::StorageError;
pub use locale::{LocaleContext, language_name, validate_locale};
pub use resolver::{ReconcileAction, ReconcileOutcome, TranslationResolver};
pub use store::{SourceMessage, SqliteStore, StoreConnection, Translation, TranslationStore};
