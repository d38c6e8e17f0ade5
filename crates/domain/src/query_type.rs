use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Requested record type of a query.
///
/// `ANY`, `SOA` and `AXFR` get dedicated treatment by the resolver; every
/// other type is matched verbatim against stored records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryType {
    Any,
    Soa,
    Axfr,
    Rr(Arc<str>),
}

impl QueryType {
    pub fn as_str(&self) -> &str {
        match self {
            QueryType::Any => "ANY",
            QueryType::Soa => "SOA",
            QueryType::Axfr => "AXFR",
            QueryType::Rr(t) => t,
        }
    }

    pub fn is_address(&self) -> bool {
        matches!(self, QueryType::Rr(t) if t.as_ref() == "A")
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper.is_empty() {
            return Err("Query type cannot be empty".to_string());
        }
        if !upper.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("Invalid query type '{}'", s));
        }
        Ok(match upper.as_str() {
            "ANY" => QueryType::Any,
            "SOA" => QueryType::Soa,
            "AXFR" => QueryType::Axfr,
            _ => QueryType::Rr(Arc::from(upper.as_str())),
        })
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
