use crate::ConvertError;
use std::fmt;

/// Generic value storage for a single cell of a result set.
/// The variant matters for presentation: numeric cells are
/// right-aligned when rendered, everything else is left-aligned.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil, // no value
    Bigint(i64),
    Double(f64),
    Blob(Vec<u8>),
    Text(String),
}

impl Value {
    /// whether this value is a number and should be displayed right-aligned
    pub fn is_numeric(&self) -> bool { matches!(self, Value::Bigint(_) | Value::Double(_)) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, ""),
            Value::Bigint(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Blob(v) => write!(f, "{}", String::from_utf8_lossy(v)),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// A trait to allow passing of values ergonomically
/// when building rows by hand
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value {
    ($ty:ty, $variant:ident) => {
        impl ToValue for $ty {
            fn to_value(&self) -> Value { Value::$variant(self.to_owned()) }
        }
    };
}

impl_to_value!(i64, Bigint);
impl_to_value!(f64, Double);
impl_to_value!(Vec<u8>, Blob);
impl_to_value!(String, Text);

impl ToValue for &str {
    fn to_value(&self) -> Value { Value::Text(self.to_string()) }
}

/// counts, as the listings show them
impl ToValue for usize {
    fn to_value(&self) -> Value { Value::Bigint(*self as i64) }
}

impl<T> From<T> for Value
where
    T: ToValue,
{
    fn from(v: T) -> Value { v.to_value() }
}

/// A trait to allow reading a typed value back out of a cell
pub trait FromValue: Sized {
    fn from_value(v: &Value) -> Result<Self, ConvertError>;
}

/// Blobs can be read as String as long as they are valid utf8,
/// some server versions report `SHOW GRANTS` columns as blobs
impl FromValue for String {
    fn from_value(v: &Value) -> Result<Self, ConvertError> {
        match *v {
            Value::Text(ref v) => Ok(v.to_owned()),
            Value::Blob(ref v) => {
                String::from_utf8(v.to_owned()).map_err(|e| {
                    ConvertError::NotSupported(format!("{:?}", v), format!("String: {}", e))
                })
            }
            _ => {
                Err(ConvertError::NotSupported(
                    format!("{:?}", v),
                    "String".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_variants() {
        assert!(Value::Bigint(3).is_numeric());
        assert!(Value::Double(0.5).is_numeric());
        assert!(3usize.to_value().is_numeric());
        assert!(!Value::Text("3".into()).is_numeric());
        assert!(!Value::Nil.is_numeric());
        assert!(!Value::Blob(b"3".to_vec()).is_numeric());
    }

    #[test]
    fn display() {
        assert_eq!("", Value::Nil.to_string());
        assert_eq!("42", Value::Bigint(42).to_string());
        assert_eq!("0.5", Value::Double(0.5).to_string());
        assert_eq!("root", Value::Text("root".into()).to_string());
        assert_eq!("GRANT", Value::Blob(b"GRANT".to_vec()).to_string());
    }

    #[test]
    fn blob_as_string() {
        let v = Value::Blob(b"GRANT USAGE ON *.* TO 'a'@'%'".to_vec());
        let s: String = FromValue::from_value(&v).unwrap();
        assert_eq!(s, "GRANT USAGE ON *.* TO 'a'@'%'");

        let invalid = Value::Blob(vec![0xff, 0xfe]);
        let s: Result<String, _> = FromValue::from_value(&invalid);
        assert!(s.is_err());
    }

    #[test]
    fn numbers_are_not_strings() {
        let s: Result<String, _> = FromValue::from_value(&Value::Bigint(7));
        assert!(s.is_err());
        let s: Result<String, _> = FromValue::from_value(&Value::Nil);
        assert!(s.is_err());
    }
}
