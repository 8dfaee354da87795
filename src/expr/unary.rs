use crate::{ident::Ident, writer::FormatWriter};

/// `column IS NULL`
#[derive(Debug, Clone, PartialEq)]
pub struct NullCheck {
    pub(crate) column: Ident,
}

impl FormatWriter for NullCheck {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        self.column.format_writer(context)?;
        context.writer.write_str(" IS NULL")
    }
}
