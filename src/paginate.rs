use std::fmt;

use crate::{
    error::{Error, Result},
    writer::{FormatContext, FormatWriter},
};

/// LIMIT and OFFSET. Values are written as given, negative ones included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub maybe_limit: Option<i64>,
    pub maybe_offset: Option<i64>,
}

impl Paginator {
    pub fn limit(&mut self, limit: i64) {
        self.maybe_limit = Some(limit);
    }

    pub fn offset(&mut self, offset: i64) {
        self.maybe_offset = Some(offset);
    }

    /// `page` is 0-indexed.
    pub fn paginate(&mut self, per_page: i64, page: i64) {
        self.maybe_limit = Some(per_page);
        self.maybe_offset = Some(per_page.saturating_mul(page));
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(value) = self.maybe_limit.filter(|v| *v < 0) {
            return Err(Error::Negative { clause: "LIMIT", value });
        }
        if let Some(value) = self.maybe_offset.filter(|v| *v < 0) {
            return Err(Error::Negative { clause: "OFFSET", value });
        }
        Ok(())
    }
}

impl FormatWriter for Paginator {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        if let Some(limit) = self.maybe_limit {
            write!(context.writer, " LIMIT {limit}")?;
        }
        if let Some(offset) = self.maybe_offset {
            write!(context.writer, " OFFSET {offset}")?;
        }
        Ok(())
    }
}
