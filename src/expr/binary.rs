use std::{borrow::Cow, sync::Arc};

use smol_str::SmolStr;

use crate::{
    bind::{Bind, IntoBind},
    ident::Ident,
    operator::IntoOperator,
    writer::FormatWriter,
};

/// `column operator $n`
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub(crate) column: Ident,
    pub(crate) operator: SmolStr,
    pub(crate) value: Bind,
}

impl FormatWriter for Comparison {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        self.column.format_writer(context)?;
        context.writer.write_char(' ')?;
        context.writer.write_str(&self.operator)?;
        context.writer.write_char(' ')?;
        context.write_bind(&self.value)
    }
}

/// The right hand side of a comparison.
///
/// A bare value compares with `=`, an `(operator, value)` pair uses the
/// given operator, and `()` produces no comparison at all.
pub trait IntoComparison {
    fn into_comparison(self) -> Option<(SmolStr, Bind)>;
}

impl IntoComparison for () {
    #[inline]
    fn into_comparison(self) -> Option<(SmolStr, Bind)> {
        None
    }
}

impl<O, V> IntoComparison for (O, V)
where
    O: IntoOperator,
    V: IntoBind,
{
    #[inline]
    fn into_comparison(self) -> Option<(SmolStr, Bind)> {
        Some((self.0.into_operator(), self.1.into_bind()))
    }
}

impl<T> IntoComparison for Option<T>
where
    T: IntoBind,
{
    #[inline]
    fn into_comparison(self) -> Option<(SmolStr, Bind)> {
        Some((SmolStr::new_static("="), self.into_bind()))
    }
}

macro_rules! eq_comparison {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoComparison for $ty {
                #[inline]
                fn into_comparison(self) -> Option<(SmolStr, Bind)> {
                    Some((SmolStr::new_static("="), self.into_bind()))
                }
            }
        )+
    };
}

eq_comparison!(
    Bind, bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, char, String, &str, &String,
    Box<str>, Arc<str>, Cow<'_, str>, SmolStr,
);

#[cfg(feature = "json")]
eq_comparison!(serde_json::Value);

#[cfg(feature = "uuid")]
eq_comparison!(uuid::Uuid);

#[cfg(feature = "chrono")]
eq_comparison!(
    chrono::NaiveDate,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>
);

#[cfg(feature = "time")]
eq_comparison!(time::Date, time::PrimitiveDateTime, time::OffsetDateTime);
