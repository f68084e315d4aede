use crate::errors::QueryError;

/// A key/value pair carried by an indexed record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Matches records carrying `name` with any one of `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    name: String,
    values: Vec<String>,
}

impl TagFilter {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QueryError::EmptyTagName);
        }
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(QueryError::EmptyTagValues(name));
        }
        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn matches(&self, tags: &[Tag]) -> bool {
        tags.iter()
            .any(|tag| tag.name == self.name && self.values.iter().any(|v| *v == tag.value))
    }
}

/// Every filter must match; an empty filter set matches everything.
pub fn matches_all(filters: &[TagFilter], tags: &[Tag]) -> bool {
    filters.iter().all(|filter| filter.matches(tags))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<Tag> {
        vec![
            Tag::new("Content-Type", "application/json"),
            Tag::new("App-Name", "ArweavePH-Cohort-0"),
        ]
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(
            TagFilter::new("  ", ["a"]),
            Err(QueryError::EmptyTagName)
        );
    }

    #[test]
    fn test_rejects_empty_values() {
        assert_eq!(
            TagFilter::new("App-Name", Vec::<String>::new()),
            Err(QueryError::EmptyTagValues("App-Name".to_string()))
        );
    }

    #[test]
    fn test_values_are_alternatives() {
        let filter = TagFilter::new("Content-Type", ["text/html", "application/json"]).unwrap();
        assert!(filter.matches(&tags()));

        let filter = TagFilter::new("Content-Type", ["text/html"]).unwrap();
        assert!(!filter.matches(&tags()));
    }

    #[test]
    fn test_name_and_value_must_pair_up() {
        // value exists, but under a different name
        let filter = TagFilter::new("Title", ["ArweavePH-Cohort-0"]).unwrap();
        assert!(!filter.matches(&tags()));
    }

    #[test]
    fn test_matches_all() {
        let content_type = TagFilter::new("Content-Type", ["application/json"]).unwrap();
        let app_name = TagFilter::new("App-Name", ["ArweavePH-Cohort-0"]).unwrap();
        let missing = TagFilter::new("App-Name", ["ArweavePH-Cohort-1"]).unwrap();

        assert!(matches_all(&[], &tags()));
        assert!(matches_all(&[content_type.clone(), app_name], &tags()));
        assert!(!matches_all(&[content_type, missing], &tags()));
    }
}
