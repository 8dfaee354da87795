use std::fmt;

use crate::{
    col::Array,
    ident::Ident,
    writer::{self, FormatWriter},
};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderExpr {
    pub(crate) column: Ident,
    pub(crate) ordering: Ordering,
}

impl FormatWriter for OrderExpr {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        self.column.format_writer(context)?;
        context.writer.write_char(' ')?;
        self.ordering.format_writer(context)
    }
}

pub type OrderProjections = Array<OrderExpr>;

/// ORDER BY entries in call order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Order {
    projections: OrderProjections,
}

impl FormatWriter for Order {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        for (index, proj) in self.projections.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(", ")?;
            }
            proj.format_writer(context)?;
        }
        Ok(())
    }
}

impl Order {
    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }

    pub fn push_column(&mut self, column: Ident, ordering: Ordering) {
        self.projections.push(OrderExpr { column, ordering });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderExpr> {
        self.projections.iter()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    #[default]
    Asc,
    Desc,
}

impl Ordering {
    /// Case-insensitive `asc`/`desc`. Anything else is ascending.
    pub fn parse(direction: &str) -> Self {
        if direction.eq_ignore_ascii_case("desc") {
            Ordering::Desc
        } else {
            Ordering::Asc
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Ordering::Asc => "ASC",
            Ordering::Desc => "DESC",
        }
    }
}

impl FormatWriter for Ordering {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_str(self.as_str())
    }
}

pub trait IntoOrdering {
    fn into_ordering(self) -> Ordering;
}

impl IntoOrdering for Ordering {
    #[inline(always)]
    fn into_ordering(self) -> Ordering {
        self
    }
}

impl IntoOrdering for &str {
    #[inline]
    fn into_ordering(self) -> Ordering {
        Ordering::parse(self)
    }
}

impl IntoOrdering for String {
    #[inline]
    fn into_ordering(self) -> Ordering {
        Ordering::parse(&self)
    }
}

impl IntoOrdering for &String {
    #[inline]
    fn into_ordering(self) -> Ordering {
        Ordering::parse(self)
    }
}
