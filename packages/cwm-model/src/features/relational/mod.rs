//! Resource::Relational
//!
//! Catalogs, schemas, tables, views, columns and the SQL flavours of keys,
//! indexes and data types. Relational meta-classes specialise ObjectModel
//! and Foundation ones, so the generic APIs (`add_feature`,
//! `add_key_feature`, `set_spanned_class`, ...) apply to them directly.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use infrastructure::StandardRelationalPackage;
pub use ports::RelationalPackage;
