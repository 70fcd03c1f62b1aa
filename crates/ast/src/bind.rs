// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Bind Variables
//!
//! Rendered text keeps every bind variable as a `:name` placeholder, so it
//! re-parses to the same tree. The buffer records where each placeholder
//! landed; [`ParsedQuery`] pairs the text with those locations so values can
//! be substituted later without re-rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encode::LiteralEncoder;
use crate::error::{BindError, BindResult};

/// Byte range of one `:name` placeholder in rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindLocation {
    /// Offset of the `:` marker
    pub offset: usize,
    /// Length including the marker
    pub length: usize,
}

/// Rendered SQL plus the placeholders it contains
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub query: String,
    pub bind_locations: Vec<BindLocation>,
}

/// A value to substitute for a bind variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindValue {
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<BindValue>),
}

impl BindLocation {
    fn end(self) -> Option<usize> {
        self.offset.checked_add(self.length)
    }

    fn invalid(self) -> BindError {
        BindError::InvalidLocation {
            offset: self.offset,
            length: self.length,
        }
    }
}

impl ParsedQuery {
    pub fn new(query: String, bind_locations: Vec<BindLocation>) -> Self {
        Self {
            query,
            bind_locations,
        }
    }

    /// Placeholder names without the marker, in order of appearance
    ///
    /// A name referenced twice appears twice.
    pub fn bind_var_names(&self) -> Vec<&str> {
        self.bind_locations
            .iter()
            .filter_map(|loc| self.query.get(loc.offset.checked_add(1)?..loc.end()?))
            .collect()
    }

    /// Produce the final query text with every placeholder replaced
    pub fn generate(
        &self,
        values: &HashMap<String, BindValue>,
        encoder: &dyn LiteralEncoder,
    ) -> BindResult<String> {
        let mut out = String::with_capacity(self.query.len());
        let mut current = 0;

        for &loc in &self.bind_locations {
            let (Some(before), Some(end)) = (self.query.get(current..loc.offset), loc.end()) else {
                debug!("bind location {:?} does not fit the query", loc);
                return Err(loc.invalid());
            };
            let Some(name) = self
                .query
                .get(loc.offset..end)
                .and_then(|placeholder| placeholder.strip_prefix(':'))
                .filter(|name| !name.is_empty())
            else {
                debug!("bind location {:?} is not a placeholder", loc);
                return Err(loc.invalid());
            };

            out.push_str(before);
            let Some(value) = values.get(name) else {
                debug!("bind variable {} has no value", name);
                return Err(BindError::Missing(name.to_string()));
            };
            value.write(name, encoder, &mut out)?;
            current = end;
        }

        // `current` is always a char boundary inside the query here
        out.push_str(self.query.get(current..).unwrap_or_default());
        Ok(out)
    }
}

impl BindValue {
    fn write(&self, name: &str, encoder: &dyn LiteralEncoder, out: &mut String) -> BindResult<()> {
        match self {
            BindValue::Null => out.push_str("null"),
            BindValue::Int(v) => out.push_str(&v.to_string()),
            BindValue::UInt(v) => out.push_str(&v.to_string()),
            BindValue::Float(v) => {
                if !v.is_finite() {
                    debug!("bind variable {} is not a finite float", name);
                    return Err(BindError::NonFiniteFloat(name.to_string()));
                }
                out.push_str(&v.to_string());
            }
            BindValue::Str(s) => encoder.encode(s, out),
            BindValue::List(items) => {
                if items.is_empty() {
                    debug!("bind variable {} is an empty list", name);
                    return Err(BindError::EmptyList(name.to_string()));
                }
                out.push('(');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write(name, encoder, out)?;
                }
                out.push(')');
            }
        }
        Ok(())
    }
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        BindValue::Int(v)
    }
}

impl From<u64> for BindValue {
    fn from(v: u64) -> Self {
        BindValue::UInt(v)
    }
}

impl From<f64> for BindValue {
    fn from(v: f64) -> Self {
        BindValue::Float(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        BindValue::Str(v.to_string())
    }
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        BindValue::Str(v)
    }
}

impl<T: Into<BindValue>> From<Vec<T>> for BindValue {
    fn from(items: Vec<T>) -> Self {
        BindValue::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::MySqlEncoder;

    fn query(text: &str, names: &[&str]) -> ParsedQuery {
        let locations = names
            .iter()
            .map(|name| {
                let needle = format!(":{name}");
                let offset = text.find(&needle).unwrap();
                BindLocation {
                    offset,
                    length: needle.len(),
                }
            })
            .collect();
        ParsedQuery::new(text.to_string(), locations)
    }

    #[test]
    fn test_bind_var_names() {
        let q = query("select * from t where a = :a and b = :bb", &["a", "bb"]);
        assert_eq!(q.bind_var_names(), vec!["a", "bb"]);
    }

    #[test]
    fn test_generate_scalars() {
        let q = query("select * from t where a = :a and b = :b and c = :c", &["a", "b", "c"]);
        let values = HashMap::from([
            ("a".to_string(), BindValue::Int(-3)),
            ("b".to_string(), BindValue::from("it's")),
            ("c".to_string(), BindValue::Null),
        ]);

        let sql = q.generate(&values, &MySqlEncoder).unwrap();
        assert_eq!(sql, "select * from t where a = -3 and b = 'it\\'s' and c = null");
    }

    #[test]
    fn test_generate_list() {
        let q = query("select * from t where id in :ids", &["ids"]);
        let values = HashMap::from([("ids".to_string(), BindValue::from(vec![1i64, 2, 3]))]);
        assert_eq!(
            q.generate(&values, &MySqlEncoder).unwrap(),
            "select * from t where id in (1, 2, 3)"
        );
    }

    #[test]
    fn test_generate_errors() {
        let q = query("select :x", &["x"]);
        assert_eq!(
            q.generate(&HashMap::new(), &MySqlEncoder),
            Err(BindError::Missing("x".to_string()))
        );

        let values = HashMap::from([("x".to_string(), BindValue::List(Vec::new()))]);
        assert_eq!(
            q.generate(&values, &MySqlEncoder),
            Err(BindError::EmptyList("x".to_string()))
        );
    }

    #[test]
    fn test_location_past_end_is_error() {
        let q = ParsedQuery::new(
            "select :x".to_string(),
            vec![BindLocation {
                offset: 20,
                length: 2,
            }],
        );
        let values = HashMap::from([("x".to_string(), BindValue::Int(1))]);
        assert_eq!(
            q.generate(&values, &MySqlEncoder),
            Err(BindError::InvalidLocation {
                offset: 20,
                length: 2
            })
        );
        assert!(q.bind_var_names().is_empty());
    }

    #[test]
    fn test_locations_out_of_order_is_error() {
        let mut q = query("select :a, :b", &["a", "b"]);
        q.bind_locations.reverse();
        let values = HashMap::from([
            ("a".to_string(), BindValue::Int(1)),
            ("b".to_string(), BindValue::Int(2)),
        ]);
        assert_eq!(
            q.generate(&values, &MySqlEncoder),
            Err(BindError::InvalidLocation {
                offset: 7,
                length: 2
            })
        );
    }

    #[test]
    fn test_location_off_placeholder_is_error() {
        let q = ParsedQuery::new(
            "select :x".to_string(),
            vec![BindLocation {
                offset: 0,
                length: 3,
            }],
        );
        assert!(matches!(
            q.generate(&HashMap::new(), &MySqlEncoder),
            Err(BindError::InvalidLocation { offset: 0, .. })
        ));

        let overflow = ParsedQuery::new(
            "select :x".to_string(),
            vec![BindLocation {
                offset: 7,
                length: usize::MAX,
            }],
        );
        assert!(matches!(
            overflow.generate(&HashMap::new(), &MySqlEncoder),
            Err(BindError::InvalidLocation { offset: 7, .. })
        ));
    }

    #[test]
    fn test_non_finite_float_rejected() {
        let q = query("select :f", &["f"]);
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let values = HashMap::from([("f".to_string(), BindValue::Float(v))]);
            assert_eq!(
                q.generate(&values, &MySqlEncoder),
                Err(BindError::NonFiniteFloat("f".to_string()))
            );
        }

        let values = HashMap::from([("f".to_string(), BindValue::Float(1.5))]);
        assert_eq!(q.generate(&values, &MySqlEncoder).unwrap(), "select 1.5");
    }

    #[test]
    fn test_generate_without_placeholders() {
        let q = ParsedQuery::new("select 1".to_string(), Vec::new());
        assert_eq!(q.generate(&HashMap::new(), &MySqlEncoder).unwrap(), "select 1");
    }
}
