//! Render parameterized `SELECT` statements with a fluent API.
//!
//! ```
//! let mut query = selq::table("leads");
//! query.where_group(|g| {
//!     g.and_where("import_file_id", 1).or().where_null("blacklisted_at");
//! });
//! assert_eq!(
//!     "SELECT * FROM leads WHERE (import_file_id = $1 OR blacklisted_at IS NULL);",
//!     query.select(())
//! );
//! assert_eq!(vec![selq::Bind::I32(1)], query.values());
//! ```
//!
//! Values are always bound through `$n` placeholders. Table names, column
//! names and operator text are written verbatim and must not come from
//! untrusted input.

mod bind;
mod builder;
mod col;
mod error;
mod expr;
mod ident;
mod operator;
mod paginate;
mod writer;

pub use bind::{Bind, Binds, IntoBind};
pub use builder::Builder;
pub use col::{Array, Columns, IntoColumns};
pub use error::{Error, Result};
pub use expr::{IntoComparison, IntoOrdering, Ordering};
pub use ident::{Ident, IntoIdent};
pub use operator::{IntoOperator, Operator};

/// Starts a `SELECT` on `name`.
pub fn table<T: IntoIdent>(name: T) -> Builder {
    Builder::table(name)
}

pub fn ident_static(value: &'static str) -> Ident {
    Ident::new_static(value)
}

pub fn ident(value: &str) -> Ident {
    Ident::new(value)
}

/// Builds a column list from mixed identifier types.
#[macro_export]
macro_rules! col {
    () => {
        $crate::Columns::None
    };
    ( $($col:expr),+ $(,)? ) => {
        [$( $crate::IntoIdent::into_ident($col) ),+]
    };
}
