use std::{fmt::Write, ops::Deref};

use crate::bind::{Bind, Binds};

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result;
}

/// Render state threaded through one depth-first pass.
///
/// Placeholders and bound values are produced together by `write_bind`, so
/// `$n` always refers to `binds[n - 1]`.
pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
    pub(crate) placeholder: usize,
    pub(crate) binds: Binds,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self {
            writer,
            placeholder: 0,
            binds: Binds::new(),
        }
    }

    pub(crate) fn write_bind(&mut self, bind: &Bind) -> std::fmt::Result {
        self.placeholder += 1;
        self.binds.push(bind.clone());
        write!(self.writer, "${}", self.placeholder)
    }

    pub(crate) fn into_binds(self) -> Binds {
        self.binds
    }
}

/// A writer that drops everything, used when only the binds are wanted.
pub(crate) struct Discard;

impl Write for Discard {
    #[inline]
    fn write_str(&mut self, _: &str) -> std::fmt::Result {
        Ok(())
    }
}

impl<D> FormatWriter for D
where
    D: Deref,
    D::Target: FormatWriter,
{
    fn format_writer<W: std::fmt::Write>(
        &self,
        ctx: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        self.deref().format_writer(ctx)
    }
}
