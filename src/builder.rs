use crate::{
    bind::Binds,
    col::{Columns, IntoColumns},
    error::{Error, Result},
    expr::{
        Comparison, Condition, Conditions, GroupCondition, IntoComparison, IntoOrdering,
        NullCheck, Order,
    },
    ident::{Ident, IntoIdent},
    paginate::Paginator,
    writer::{Discard, FormatContext, FormatWriter},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    #[default]
    Select,
    Where,
}

/// A `SELECT` statement under construction.
///
/// Every call mutates the builder in place and returns it for chaining.
/// A builder is single-writer: build independent builders rather than
/// sharing one across threads.
#[derive(Debug, Default, Clone)]
pub struct Builder {
    query: String,
    ty: QueryKind,
    table: Ident,
    columns: Columns,
    conditions: Conditions,
    order: Order,
    paginator: Paginator,
}

impl Builder {
    pub fn table<T>(table: T) -> Self
    where
        T: IntoIdent,
    {
        Self {
            table: table.into_ident(),
            ..Default::default()
        }
    }

    // where stuff

    /// Appends a comparison joined with `AND` (or `OR` after [`Self::or`]).
    ///
    /// `value` is either a bare value, compared with `=`, or an
    /// `(operator, value)` pair. The operator text is written verbatim.
    /// Passing `()` appends nothing.
    ///
    /// ```
    /// let mut builder = selq::table("total_stats");
    /// builder
    ///     .and_where("date", (">=", "2021-01-01"))
    ///     .and_where("date", ("<=", "2021-01-31"));
    /// assert_eq!(
    ///     "SELECT * FROM total_stats WHERE date >= $1 AND date <= $2;",
    ///     builder.select(())
    /// );
    /// ```
    pub fn and_where<C, V>(&mut self, column: C, value: V) -> &mut Self
    where
        C: IntoIdent,
        V: IntoComparison,
    {
        let Some((operator, value)) = value.into_comparison() else {
            return self;
        };
        let comparison = Comparison {
            column: column.into_ident(),
            operator,
            value,
        };
        self.conditions.push(Condition::Comparison(comparison));
        self
    }

    pub fn where_null<C>(&mut self, column: C) -> &mut Self
    where
        C: IntoIdent,
    {
        let check = NullCheck {
            column: column.into_ident(),
        };
        self.conditions.push(Condition::NullCheck(check));
        self
    }

    /// Joins the next condition with `OR` instead of `AND`.
    pub fn or(&mut self) -> &mut Self {
        self.conditions.push(Condition::Or);
        self
    }

    /// Appends a parenthesized group populated by `closure`.
    ///
    /// The closure runs once, right away, on a fresh builder that only
    /// shares the table name. Anything but conditions set on that builder
    /// is ignored.
    pub fn where_group<F>(&mut self, closure: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        // with a type of where, we should ignore most actions
        let mut inner = Self {
            ty: QueryKind::Where,
            table: self.table.clone(),
            ..Default::default()
        };
        closure(&mut inner);

        let group = GroupCondition {
            conditions: inner.conditions,
        };
        self.conditions.push(Condition::Group(group));
        self
    }

    // order and pagination

    /// Appends an ORDER BY entry. Directions other than `asc`/`desc`
    /// (any case) are ascending.
    pub fn order_by<C, D>(&mut self, column: C, direction: D) -> &mut Self
    where
        C: IntoIdent,
        D: IntoOrdering,
    {
        if matches!(self.ty, QueryKind::Where) {
            return self;
        }
        self.order
            .push_column(column.into_ident(), direction.into_ordering());
        self
    }

    pub fn limit(&mut self, limit: i64) -> &mut Self {
        if matches!(self.ty, QueryKind::Where) {
            return self;
        }
        self.paginator.limit(limit);
        self
    }

    pub fn offset(&mut self, offset: i64) -> &mut Self {
        if matches!(self.ty, QueryKind::Where) {
            return self;
        }
        self.paginator.offset(offset);
        self
    }

    /// Sets LIMIT to `per_page` and OFFSET to `per_page * page`.
    pub fn paginate(&mut self, per_page: i64, page: i64) -> &mut Self {
        if matches!(self.ty, QueryKind::Where) {
            return self;
        }
        self.paginator.paginate(per_page, page);
        self
    }

    // select stuff

    /// Sets the selected columns and renders the statement.
    ///
    /// `()` or an empty collection selects `*`.
    pub fn select<T>(&mut self, cols: T) -> &str
    where
        T: IntoColumns,
    {
        if matches!(self.ty, QueryKind::Where) {
            return self.query.as_str();
        }
        self.columns = cols.into_columns();
        self.to_sql()
    }

    /// Like [`Self::select`], but runs [`Self::validate`] first.
    ///
    /// On error the builder is left as it was, columns included.
    pub fn try_select<T>(&mut self, cols: T) -> Result<&str>
    where
        T: IntoColumns,
    {
        if matches!(self.ty, QueryKind::Where) {
            return Ok(self.query.as_str());
        }
        let columns = cols.into_columns();
        self.check(&columns)?;
        self.columns = columns;
        Ok(self.to_sql())
    }

    /// Checks for input that renders surprising or unsafe SQL.
    ///
    /// Rendering does not call this.
    pub fn validate(&self) -> Result<()> {
        self.check(&self.columns)
    }

    fn check(&self, columns: &Columns) -> Result<()> {
        let result = self.check_inner(columns);
        if let Err(ref error) = result {
            tracing::debug!(table = %self.table, %error, "select failed validation");
        }
        result
    }

    fn check_inner(&self, columns: &Columns) -> Result<()> {
        if self.table.is_empty() {
            return Err(Error::EmptyTable);
        }
        if columns.iter().any(Ident::is_empty) {
            return Err(Error::EmptyColumn("SELECT"));
        }
        self.conditions.validate()?;
        if self.order.iter().any(|expr| expr.column.is_empty()) {
            return Err(Error::EmptyColumn("ORDER BY"));
        }
        self.paginator.validate()
    }

    // building the builder

    /// Renders with the current column selection and keeps the result for
    /// [`Self::text`].
    pub fn to_sql(&mut self) -> &str {
        let (sql, binds) = self.build();
        tracing::trace!(sql = %sql, binds = binds.len(), "rendered select");
        self.query = sql;
        self.query.as_str()
    }

    /// Renders the statement and collects its values in one pass.
    pub fn build(&self) -> (String, Binds) {
        let size_hint = 64;
        let mut str = String::with_capacity(size_hint);
        let mut context = FormatContext::new(&mut str);
        self.format_writer(&mut context)
            .expect("should not fail on a string writer");
        let binds = context.into_binds();
        (str, binds)
    }

    /// The statement produced by the last [`Self::select`] or
    /// [`Self::to_sql`]; empty before either is called.
    pub fn text(&self) -> &str {
        self.query.as_str()
    }

    /// The value for each `$n`, in order.
    pub fn values(&self) -> Binds {
        let mut discard = Discard;
        let mut context = FormatContext::new(&mut discard);
        self.conditions
            .format_writer(&mut context)
            .expect("should not fail on a discarding writer");
        context.into_binds()
    }

    pub fn table_name(&self) -> &Ident {
        &self.table
    }
}

impl FormatWriter for Builder {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_str("SELECT ")?;
        self.columns.format_writer(context)?;
        context.writer.write_str(" FROM ")?;
        self.table.format_writer(context)?;

        if !self.conditions.is_empty() {
            context.writer.write_str(" WHERE ")?;
            self.conditions.format_writer(context)?;
        }

        if !self.order.is_empty() {
            context.writer.write_str(" ORDER BY ")?;
            self.order.format_writer(context)?;
        }

        self.paginator.format_writer(context)?;
        context.writer.write_char(';')
    }
}

#[cfg(test)]
mod tests {
    use crate::{bind::Bind, expr::Ordering, operator::Operator};

    use super::*;

    #[test]
    fn test_basic_select() {
        let mut builder = Builder::table("carriers");
        assert_eq!("", builder.text());
        assert_eq!("SELECT * FROM carriers;", builder.select(()));
        assert_eq!("SELECT id, name FROM carriers;", builder.select(["id", "name"]));
        assert_eq!("SELECT id, name FROM carriers;", builder.text());
        assert!(builder.values().is_empty());
    }

    #[test]
    fn test_where_eq_default() {
        let mut builder = Builder::table("conversations");
        builder.and_where("user_id", 1);
        assert_eq!(
            "SELECT * FROM conversations WHERE user_id = $1;",
            builder.select(())
        );
        assert_eq!(vec![Bind::I32(1)], builder.values());
    }

    #[test]
    fn test_explicit_eq_matches_default() {
        let mut single = Builder::table("users");
        single.and_where("status", "active");
        let mut explicit = Builder::table("users");
        explicit.and_where("status", ("=", "active"));
        assert_eq!(single.build(), explicit.build());
    }

    #[test]
    fn test_unit_value_is_noop() {
        let mut builder = Builder::table("users");
        builder.and_where("id", 1);
        let before = builder.build();
        builder.and_where("name", ());
        assert_eq!(before, builder.build());
    }

    #[test]
    fn test_where_null() {
        let mut builder = Builder::table("lead_enrichments");
        builder
            .and_where("import_file_id", 1)
            .where_null("blacklisted_at");
        assert_eq!(
            "SELECT lead_id FROM lead_enrichments WHERE import_file_id = $1 AND blacklisted_at IS NULL;",
            builder.select("lead_id")
        );
        assert_eq!(1, builder.values().len());
    }

    #[test]
    fn test_where_or() {
        let mut builder = Builder::table("users");
        builder
            .and_where("role", "admin")
            .or()
            .and_where("role", "owner")
            .and_where("active", true);
        assert_eq!(
            "SELECT * FROM users WHERE role = $1 OR role = $2 AND active = $3;",
            builder.select(())
        );
        assert_eq!(
            vec![
                Bind::String("admin".into()),
                Bind::String("owner".into()),
                Bind::Bool(true)
            ],
            builder.values()
        );
    }

    #[test]
    fn test_where_group_expr() {
        let mut builder = Builder::table("leads");
        builder.where_group(|builder| {
            builder
                .and_where("import_file_id", 1)
                .or()
                .where_null("blacklisted_at");
        });
        assert_eq!(
            "SELECT * FROM leads WHERE (import_file_id = $1 OR blacklisted_at IS NULL);",
            builder.select(())
        );
        assert_eq!(vec![Bind::I32(1)], builder.values());
    }

    #[test]
    fn test_group_counter_continues() {
        let mut builder = Builder::table("orders");
        builder
            .and_where("customer_id", 7)
            .where_group(|g| {
                g.and_where("status", "open")
                    .or()
                    .and_where("total", (">", 100));
            })
            .or()
            .where_group(|g| {
                g.and_where("priority", ("<=", 2));
            });
        assert_eq!(
            "SELECT * FROM orders WHERE customer_id = $1 AND (status = $2 OR total > $3) OR (priority <= $4);",
            builder.select(())
        );
        assert_eq!(
            vec![
                Bind::I32(7),
                Bind::String("open".into()),
                Bind::I32(100),
                Bind::I32(2)
            ],
            builder.values()
        );
    }

    #[test]
    fn test_group_ignores_non_where_calls() {
        let mut builder = Builder::table("users");
        builder.where_group(|g| {
            assert_eq!("users", g.table_name().as_str());
            g.order_by("id", "desc").limit(3).offset(4).paginate(1, 1);
            assert_eq!("", g.select(["id"]));
            g.and_where("id", 1);
        });
        assert_eq!("SELECT * FROM users WHERE (id = $1);", builder.select(()));
    }

    #[test]
    fn test_order_limit_offset() {
        let mut builder = Builder::table("users");
        builder
            .order_by("created_at", "DESC")
            .limit(10)
            .offset(20);
        assert_eq!(
            "SELECT id, name, email FROM users ORDER BY created_at DESC LIMIT 10 OFFSET 20;",
            builder.select(["id", "name", "email"])
        );
    }

    #[test]
    fn test_order_direction_fallback() {
        let mut builder = Builder::table("campaign_messages");
        builder
            .order_by("id", "sideways")
            .order_by("sent_at", Ordering::Desc)
            .order_by("name", "");
        assert_eq!(
            "SELECT * FROM campaign_messages ORDER BY id ASC, sent_at DESC, name ASC;",
            builder.select(())
        );
    }

    #[test]
    fn test_paginate() {
        let mut builder = Builder::table("posts");
        builder.paginate(25, 3);
        assert_eq!("SELECT * FROM posts LIMIT 25 OFFSET 75;", builder.select(()));
    }

    #[test]
    fn test_typed_operators() {
        let mut builder = Builder::table("products");
        builder
            .where_eq("category", "electronics")
            .where_gt("price", 1000)
            .or_where_lt("price", 20)
            .where_ilike("name", "%phone%");
        assert_eq!(
            "SELECT * FROM products WHERE category = $1 AND price > $2 OR price < $3 AND name ILIKE $4;",
            builder.select(())
        );
        assert_eq!(4, builder.values().len());

        let mut explicit = Builder::table("products");
        explicit.and_where("price", (Operator::Gte, 5));
        let mut typed = Builder::table("products");
        typed.where_gte("price", 5);
        assert_eq!(explicit.build(), typed.build());
    }

    #[test]
    fn test_values_before_select() {
        let mut builder = Builder::table("users");
        builder.and_where("id", 5u64).and_where("email", Some("a@b.c"));
        assert_eq!(
            vec![Bind::U64(5), Bind::String("a@b.c".into())],
            builder.values()
        );
        assert_eq!("", builder.text());
    }

    #[test]
    fn test_validate_defaults_untouched() {
        let mut builder = Builder::table("users");
        builder.and_where("id", ("= 1; --", 1)).limit(-5);
        assert_eq!(
            "SELECT * FROM users WHERE id = 1; -- $1 LIMIT -5;",
            builder.select(())
        );
        assert!(matches!(
            builder.try_select(()),
            Err(Error::InvalidOperator { .. })
        ));
    }

    #[test]
    fn test_failed_try_select_keeps_state() {
        let mut builder = Builder::table("users");
        builder.and_where("id", 1);
        assert_eq!("SELECT name FROM users WHERE id = $1;", builder.select("name"));

        assert!(builder.try_select(["email", ""]).is_err());
        assert_eq!("SELECT name FROM users WHERE id = $1;", builder.text());
        assert_eq!("SELECT name FROM users WHERE id = $1;", builder.to_sql());
    }

    #[test]
    fn test_every_operator_has_shorthand() {
        let mut builder = Builder::table("t");
        builder
            .where_eq("a", 1)
            .where_not_eq("b", 2)
            .where_lt("c", 3)
            .where_lte("d", 4)
            .where_gt("e", 5)
            .where_gte("f", 6)
            .where_like("g", "x%")
            .or_where_not_like("h", "y%")
            .where_ilike("i", "%z")
            .or_where_not_ilike("j", "%w");
        assert_eq!(
            "SELECT * FROM t WHERE a = $1 AND b != $2 AND c < $3 AND d <= $4 AND e > $5 AND f >= $6 \
             AND g LIKE $7 OR h NOT LIKE $8 AND i ILIKE $9 OR j NOT ILIKE $10;",
            builder.select(())
        );
        assert_eq!(10, builder.values().len());
    }

    #[test]
    fn test_validate() {
        assert_eq!(Err(Error::EmptyTable), Builder::table("").validate());
        assert_eq!(Err(Error::EmptyTable), Builder::table("  ").validate());
        assert_eq!(
            "table name is empty or blank",
            Error::EmptyTable.to_string()
        );

        let mut builder = Builder::table("users");
        builder.limit(-1);
        assert_eq!(
            Err(Error::Negative {
                clause: "LIMIT",
                value: -1
            }),
            builder.validate()
        );

        let mut builder = Builder::table("users");
        builder.order_by("", "asc");
        assert_eq!(Err(Error::EmptyColumn("ORDER BY")), builder.validate());

        let mut builder = Builder::table("users");
        assert_eq!(
            Err(Error::EmptyColumn("SELECT")),
            builder.try_select(["id", " "])
        );
        assert_eq!(Ok(()), builder.validate());

        let mut builder = Builder::table("users");
        builder.where_group(|_| {});
        assert_eq!(Err(Error::EmptyGroup), builder.validate());

        let mut builder = Builder::table("users");
        builder.and_where("tags", ("@>", "{rust}")).offset(0);
        assert_eq!(
            Ok("SELECT * FROM users WHERE tags @> $1 OFFSET 0;"),
            builder.try_select(())
        );
    }
}
