use std::{borrow::Cow, fmt, sync::Arc};

use smol_str::SmolStr;

/// A value bound to a `$n` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Null,
    String(String),
    Bool(bool),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),

    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),

    #[cfg(feature = "json")]
    Json(serde_json::Value),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    #[cfg(feature = "chrono")]
    ChronoDate(chrono::NaiveDate),
    #[cfg(feature = "chrono")]
    ChronoDateTime(chrono::NaiveDateTime),
    #[cfg(feature = "chrono")]
    ChronoDateTimeUtc(chrono::DateTime<chrono::Utc>),
    #[cfg(feature = "time")]
    TimeDate(time::Date),
    #[cfg(feature = "time")]
    TimePrimitiveDateTime(time::PrimitiveDateTime),
    #[cfg(feature = "time")]
    TimeOffsetDateTime(time::OffsetDateTime),
}

/// Bound values in placeholder order.
pub type Binds = Vec<Bind>;

impl Bind {
    pub fn is_null(&self) -> bool {
        matches!(self, Bind::Null)
    }
}

impl fmt::Display for Bind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bind::Null => f.write_str("NULL"),
            Bind::String(value) => write!(f, "{value:?}"),
            Bind::Bool(value) => write!(f, "{value}"),
            Bind::F32(value) => write!(f, "{value}"),
            Bind::F64(value) => write!(f, "{value}"),
            Bind::I8(value) => write!(f, "{value}"),
            Bind::I16(value) => write!(f, "{value}"),
            Bind::I32(value) => write!(f, "{value}"),
            Bind::I64(value) => write!(f, "{value}"),
            Bind::U8(value) => write!(f, "{value}"),
            Bind::U16(value) => write!(f, "{value}"),
            Bind::U32(value) => write!(f, "{value}"),
            Bind::U64(value) => write!(f, "{value}"),
            #[cfg(feature = "json")]
            Bind::Json(value) => write!(f, "{value}"),
            #[cfg(feature = "uuid")]
            Bind::Uuid(value) => write!(f, "{value}"),
            #[cfg(feature = "chrono")]
            Bind::ChronoDate(value) => write!(f, "{value}"),
            #[cfg(feature = "chrono")]
            Bind::ChronoDateTime(value) => write!(f, "{value}"),
            #[cfg(feature = "chrono")]
            Bind::ChronoDateTimeUtc(value) => write!(f, "{value}"),
            #[cfg(feature = "time")]
            Bind::TimeDate(value) => write!(f, "{value}"),
            #[cfg(feature = "time")]
            Bind::TimePrimitiveDateTime(value) => write!(f, "{value}"),
            #[cfg(feature = "time")]
            Bind::TimeOffsetDateTime(value) => write!(f, "{value}"),
        }
    }
}

pub trait IntoBind {
    fn into_bind(self) -> Bind;
}

impl IntoBind for Bind {
    #[inline(always)]
    fn into_bind(self) -> Bind {
        self
    }
}

impl<T> IntoBind for Option<T>
where
    T: IntoBind,
{
    fn into_bind(self) -> Bind {
        if let Some(value) = self {
            value.into_bind()
        } else {
            Bind::Null
        }
    }
}

macro_rules! into_bind {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl IntoBind for $ty {
                #[inline]
                fn into_bind(self) -> Bind {
                    Bind::$variant(self)
                }
            }
        )+
    };
}

into_bind! {
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    String => String,
}

#[cfg(feature = "json")]
into_bind! { serde_json::Value => Json }

#[cfg(feature = "uuid")]
into_bind! { uuid::Uuid => Uuid }

#[cfg(feature = "chrono")]
into_bind! {
    chrono::NaiveDate => ChronoDate,
    chrono::NaiveDateTime => ChronoDateTime,
    chrono::DateTime<chrono::Utc> => ChronoDateTimeUtc,
}

#[cfg(feature = "time")]
into_bind! {
    time::Date => TimeDate,
    time::PrimitiveDateTime => TimePrimitiveDateTime,
    time::OffsetDateTime => TimeOffsetDateTime,
}

impl IntoBind for &str {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::String(self.to_owned())
    }
}

impl IntoBind for &String {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::String(self.clone())
    }
}

impl IntoBind for Box<str> {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::String(self.into_string())
    }
}

impl IntoBind for Arc<str> {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::String(self.as_ref().to_owned())
    }
}

impl<'a> IntoBind for Cow<'a, str> {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::String(self.into_owned())
    }
}

impl IntoBind for SmolStr {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::String(self.to_string())
    }
}

impl IntoBind for char {
    #[inline]
    fn into_bind(self) -> Bind {
        Bind::String(self.to_string())
    }
}
