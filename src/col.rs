use std::fmt;

use crate::{
    ident::{Ident, IntoIdent},
    writer::FormatWriter,
};

// if T <= 32 bytes we are good and it's a free data structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Array<T> {
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Array<T> {
    pub fn push(&mut self, other: T) {
        let combined = match std::mem::replace(self, Self::None) {
            Self::None => Self::One(other),
            Self::One(a) => Self::Many(vec![a, other]),
            Self::Many(mut many) => {
                many.push(other);
                Self::Many(many)
            }
        };
        *self = combined;
    }

    pub fn len(&self) -> usize {
        match self {
            Array::None => 0,
            Array::One(_) => 1,
            Array::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Array::None => std::slice::Iter::default(),
            Array::One(one) => std::slice::from_ref(one).iter(),
            Array::Many(many) => many.iter(),
        }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(mut value: Vec<T>) -> Self {
        match value.len() {
            0 => Array::None,
            1 => match value.pop() {
                Some(one) => Array::One(one),
                None => Array::None,
            },
            _ => Array::Many(value),
        }
    }
}

/// Selected columns. No columns renders as `*`.
pub type Columns = Array<Ident>;

impl FormatWriter for Columns {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        match self {
            Columns::None => context.writer.write_char('*')?,
            Columns::One(ident) => ident.format_writer(context)?,
            Columns::Many(idents) => {
                for (index, elem) in idents.iter().enumerate() {
                    if index > 0 {
                        context.writer.write_str(", ")?;
                    }
                    elem.format_writer(context)?;
                }
            }
        };
        Ok(())
    }
}

pub trait IntoColumns {
    fn into_columns(self) -> Columns;
}

impl IntoColumns for () {
    fn into_columns(self) -> Columns {
        Columns::None
    }
}

impl IntoColumns for &str {
    fn into_columns(self) -> Columns {
        Columns::One(self.into_ident())
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Columns {
        Columns::One(self.into_ident())
    }
}

impl IntoColumns for Ident {
    fn into_columns(self) -> Columns {
        Columns::One(self)
    }
}

impl IntoColumns for Columns {
    fn into_columns(self) -> Columns {
        self
    }
}

impl<T: IntoIdent, const N: usize> IntoColumns for [T; N] {
    fn into_columns(self) -> Columns {
        Columns::from(self.into_iter().map(IntoIdent::into_ident).collect::<Vec<_>>())
    }
}

impl<T: IntoIdent> IntoColumns for Vec<T> {
    fn into_columns(self) -> Columns {
        Columns::from(self.into_iter().map(IntoIdent::into_ident).collect::<Vec<_>>())
    }
}

impl<T: IntoIdent + Clone> IntoColumns for &[T] {
    fn into_columns(self) -> Columns {
        Columns::from(self.iter().cloned().map(IntoIdent::into_ident).collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use crate::{col, ident_static, tests::format_writer};

    use super::*;

    fn select<T>(value: T) -> Columns
    where
        T: IntoColumns,
    {
        value.into_columns()
    }

    #[test]
    fn test_into_columns() {
        assert_eq!(Columns::None, select(()));
        assert_eq!(Columns::One(Ident::new("id")), select("id"));
        assert_eq!(Columns::One(Ident::new("id")), select(["id"]));
        assert_eq!(2, select(vec![String::from("id"), String::from("name")]).len());
        assert_eq!(Columns::None, select(Vec::<&str>::new()));
        assert_eq!(2, select(col!["id", ident_static("name")]).len());
    }

    #[test]
    fn test_format_wildcard() {
        let wildcard = format_writer(Columns::None);
        assert_eq!("*", wildcard);
        let empty: [&str; 0] = [];
        assert_eq!("*", format_writer(select(empty)));
    }

    #[test]
    fn test_single_column() {
        let s = select("id");
        assert_eq!("id", format_writer(&s));
    }

    #[test]
    fn test_multi_column() {
        let s = select(["id", "count(*)", "username"]);
        assert_eq!("id, count(*), username", format_writer(s));
    }

    #[test]
    fn test_array_push() {
        let mut cols = Columns::None;
        assert!(cols.is_empty());
        cols.push(Ident::new("a"));
        assert!(matches!(cols, Array::One(_)));
        cols.push(Ident::new("b"));
        cols.push(Ident::new("c"));
        let names: Vec<&str> = cols.iter().map(Ident::as_str).collect();
        assert_eq!(vec!["a", "b", "c"], names);
    }
}
