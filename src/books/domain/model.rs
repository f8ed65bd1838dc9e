use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// BookEntity is a single record of the persisted catalog. Title and author are
// stored as given by the client, an absent value is left out of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(deserialize_with = "deserialize_book_id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
}

impl BookEntity {
    pub fn new(id: i64, title: Option<Value>, author: Option<Value>) -> Self {
        Self {
            id,
            title,
            author,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

fn deserialize_book_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where D: Deserializer<'de> {
    let value = Value::deserialize(deserializer)?;
    coerce_book_id(&value)
        .ok_or_else(|| de::Error::custom(format!("book id {} is not a number", value)))
}

/// Numeric value of a stored book id. Hand-edited files may carry ids as
/// strings (`"3"`, `" 0x1A "`), booleans or null; these count as the number
/// they spell. Fractions and anything else have no numeric value.
pub fn coerce_book_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Some(0);
            }
            match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => i64::from_str_radix(hex, 16).ok(),
                None => s.parse::<i64>().ok(),
            }
        }
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null => Some(0),
        _ => None,
    }
}

// CatalogDocument is the whole content of the catalog file. A document without
// `bookList` is the state of a store that has never been written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(rename = "bookList", default, skip_serializing_if = "Option::is_none")]
    pub book_list: Option<Vec<BookEntity>>,
}

impl CatalogDocument {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            book_list: Some(books),
        }
    }

    pub fn books(&self) -> &[BookEntity] {
        self.book_list.as_deref().unwrap_or(&[])
    }

    /// Id for the next created book: one past the largest id in the catalog,
    /// or zero when the catalog is empty. Ids freed by deletes below the
    /// maximum are never handed out again.
    pub fn next_book_id(&self) -> LibraryResult<i64> {
        match self.books().iter().map(|book| book.id()).max() {
            Some(max_id) => max_id.checked_add(1).ok_or_else(|| {
                LibraryError::runtime(format!("no book id available after {}", max_id).as_str(), None)
            }),
            None => Ok(0),
        }
    }

    pub fn find(&self, id: i64) -> Option<&BookEntity> {
        self.books().iter().find(|book| book.id == id)
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.books().iter().position(|book| book.id == id)
    }

    pub fn append(&mut self, book: BookEntity) {
        self.book_list.get_or_insert_with(Vec::new).push(book);
    }

    pub fn replace_details(&mut self, ndx: usize, title: Option<Value>, author: Option<Value>) -> Option<BookEntity> {
        let book = self.book_list.as_mut()?.get_mut(ndx)?;
        book.title = title;
        book.author = author;
        Some(book.clone())
    }

    pub fn remove_at(&mut self, ndx: usize) -> Option<BookEntity> {
        let books = self.book_list.as_mut()?;
        if ndx < books.len() {
            Some(books.remove(ndx))
        } else {
            None
        }
    }
}

/// Reads a book id out of a path segment the way a lenient integer parser
/// does: leading whitespace and an optional sign are accepted, then the
/// longest run of digits is taken (hexadecimal after a `0x` prefix) and any
/// trailing text is ignored. `None` when no digit is found or the value does
/// not fit, which matches no book.
pub fn parse_book_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = if s.starts_with("0x") || s.starts_with("0X") {
        (16, &s[2..])
    } else {
        (10, s)
    };
    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = i64::from_str_radix(&s[..end], radix).ok()?;
    if negative {
        value.checked_neg()
    } else {
        Some(value)
    }
}
