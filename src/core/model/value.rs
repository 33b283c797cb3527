//! Cell values and the row-source capability

use std::fmt;

/// Scalar content of a table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
}

impl CellValue {
    /// Text value with surrounding whitespace removed
    pub fn text(s: impl AsRef<str>) -> Self {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric interpretation, parsing text when possible
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Empty => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::text(s)
    }
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(v: $t) -> Self {
                    CellValue::Int(v as i64)
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32, isize);

impl From<usize> for CellValue {
    fn from(v: usize) -> Self {
        match i64::try_from(v) {
            Ok(i) => CellValue::Int(i),
            Err(_) => CellValue::Float(v as f64),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(v as f64)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// Anything that can be viewed as a sequence of rows of scalar values
///
/// Implemented for every nested iterable whose items convert into
/// [`CellValue`], e.g. `Vec<Vec<i32>>`, `[[&str; 3]; 2]` or the rows
/// produced by the CSV/JSON loaders.
pub trait RowSource {
    fn into_rows(self) -> Vec<Vec<CellValue>>;
}

impl<I, R, T> RowSource for I
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Into<CellValue>,
{
    fn into_rows(self) -> Vec<Vec<CellValue>> {
        self.into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect()
    }
}
