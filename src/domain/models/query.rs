//! List query parameters: pagination, sorting, field selection and filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ClientError;

/// Sort direction accepted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("Invalid sort direction '{s}': must be asc or desc")),
        }
    }
}

/// Query sent with a collection GET.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Page size; `None` lets the server decide and disables link following
    pub page_size: Option<u32>,
    pub sort: Vec<(String, SortDir)>,
    pub fields: Vec<String>,
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    /// Pair sort keys with directions positionally.
    ///
    /// Keys without a direction sort ascending. Supplying more
    /// directions than keys is rejected.
    pub fn with_sort(mut self, keys: &[String], dirs: &[SortDir]) -> Result<Self, ClientError> {
        if dirs.len() > keys.len() {
            return Err(ClientError::Validation(format!(
                "{} sort direction(s) given for {} sort key(s)",
                dirs.len(),
                keys.len()
            )));
        }
        self.sort = keys
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), dirs.get(i).copied().unwrap_or_default()))
            .collect();
        Ok(self)
    }

    /// Flatten into ordered query pairs.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self.filters.clone();
        for field in &self.fields {
            pairs.push(("fields".to_string(), field.clone()));
        }
        for (key, dir) in &self.sort {
            pairs.push(("sort_key".to_string(), key.clone()));
            pairs.push(("sort_dir".to_string(), dir.to_string()));
        }
        if let Some(limit) = self.page_size {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Parse a `key=value` filter argument.
pub fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid filter '{s}': expected key=value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_dir_parse() {
        assert_eq!("ASC".parse::<SortDir>().unwrap(), SortDir::Asc);
        assert_eq!("desc".parse::<SortDir>().unwrap(), SortDir::Desc);
        assert!("up".parse::<SortDir>().is_err());
    }

    #[test]
    fn test_with_sort_defaults_missing_dirs() {
        let query = ListQuery::default()
            .with_sort(&["name".into(), "id".into()], &[SortDir::Desc])
            .unwrap();
        assert_eq!(
            query.sort,
            vec![("name".to_string(), SortDir::Desc), ("id".to_string(), SortDir::Asc)]
        );
    }

    #[test]
    fn test_with_sort_rejects_extra_dirs() {
        let err = ListQuery::default()
            .with_sort(&[], &[SortDir::Asc])
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn test_to_pairs_order() {
        let query = ListQuery {
            page_size: Some(2),
            sort: vec![("name".into(), SortDir::Asc)],
            fields: vec!["id".into()],
            filters: vec![("admin_state_up".into(), "true".into())],
        };
        let pairs = query.to_pairs();
        assert_eq!(pairs[0], ("admin_state_up".to_string(), "true".to_string()));
        assert_eq!(pairs[1], ("fields".to_string(), "id".to_string()));
        assert_eq!(pairs.last().unwrap(), &("limit".to_string(), "2".to_string()));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("name=web").unwrap(), ("name".into(), "web".into()));
        assert_eq!(parse_filter("a=b=c").unwrap(), ("a".into(), "b=c".into()));
        assert!(parse_filter("=x").is_err());
        assert!(parse_filter("novalue").is_err());
    }
}
