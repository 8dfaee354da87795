use crate::{
    error::{Error, Result},
    operator::check_operator,
    writer::FormatWriter,
};

use super::{binary::Comparison, group::GroupCondition, unary::NullCheck};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    /// The joiner written before `current`, if any.
    ///
    /// An `or()` marker turns the next junction into `OR` and writes nothing
    /// itself.
    fn between(prev: Option<&Condition>, current: &Condition) -> Option<Self> {
        match (prev, current) {
            (Some(Condition::Or), _) => Some(Conjunction::Or),
            (_, Condition::Or) => None,
            _ => Some(Conjunction::And),
        }
    }
}

impl FormatWriter for Conjunction {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Conjunction::And => context.writer.write_str("AND"),
            Conjunction::Or => context.writer.write_str("OR"),
        }
    }
}

/// One WHERE entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Comparison(Comparison),
    NullCheck(NullCheck),
    Or,
    Group(GroupCondition),
}

impl FormatWriter for Condition {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Condition::Comparison(comparison) => comparison.format_writer(context),
            Condition::NullCheck(check) => check.format_writer(context),
            Condition::Or => Ok(()),
            Condition::Group(group) => group.format_writer(context),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Conditions(pub(crate) Vec<Condition>);

impl Conditions {
    pub fn push(&mut self, other: Condition) {
        self.0.push(other);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks the entries in render order and returns the first problem.
    pub(crate) fn validate(&self) -> Result<()> {
        let len = self.0.len();
        let mut prev: Option<&Condition> = None;
        for (index, condition) in self.0.iter().enumerate() {
            match condition {
                Condition::Comparison(comparison) => {
                    if comparison.column.is_empty() {
                        return Err(Error::EmptyColumn("WHERE"));
                    }
                    if let Some(reason) = check_operator(&comparison.operator) {
                        return Err(Error::InvalidOperator {
                            column: comparison.column.to_string(),
                            operator: comparison.operator.to_string(),
                            reason,
                        });
                    }
                }
                Condition::NullCheck(check) => {
                    if check.column.is_empty() {
                        return Err(Error::EmptyColumn("WHERE"));
                    }
                }
                Condition::Or => {
                    if index == 0 || index + 1 == len || matches!(prev, Some(Condition::Or)) {
                        return Err(Error::DanglingOr { index });
                    }
                }
                Condition::Group(group) => {
                    if group.conditions.is_empty() {
                        return Err(Error::EmptyGroup);
                    }
                    group.conditions.validate()?;
                }
            }
            prev = Some(condition);
        }
        Ok(())
    }
}

impl FormatWriter for Conditions {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        let mut prev: Option<&Condition> = None;
        for (index, condition) in self.0.iter().enumerate() {
            if index > 0 {
                if let Some(conjunction) = Conjunction::between(prev, condition) {
                    context.writer.write_char(' ')?;
                    conjunction.format_writer(context)?;
                    context.writer.write_char(' ')?;
                }
            }
            condition.format_writer(context)?;
            prev = Some(condition);
        }
        Ok(())
    }
}
