use std::collections::HashSet;

use super::error::TaggingError;

/// Validates a tag name before creation.
pub fn validate_tag_name(name: &str) -> Result<(), TaggingError> {
    if name.trim().is_empty() {
        return Err(TaggingError::EmptyTagName);
    }
    Ok(())
}

/// Validates an item name before creation.
pub fn validate_item_name(name: &str) -> Result<(), TaggingError> {
    if name.trim().is_empty() {
        return Err(TaggingError::EmptyItemName);
    }
    Ok(())
}

/// Removes repeated tag names, keeping the first occurrence of each.
pub fn dedupe_tag_names(tag_names: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tag_names.len());
    tag_names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_validate_tag_name() {
        assert!(validate_tag_name("red").is_ok());
        assert_eq!(validate_tag_name(""), Err(TaggingError::EmptyTagName));
        assert_eq!(validate_tag_name(" \t"), Err(TaggingError::EmptyTagName));
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("shirt").is_ok());
        assert_eq!(validate_item_name(""), Err(TaggingError::EmptyItemName));
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let deduped = dedupe_tag_names(&names(&["b", "a", "b", "c", "a"]));
        assert_eq!(deduped, names(&["b", "a", "c"]));
    }

    #[test]
    fn test_dedupe_is_case_sensitive() {
        let deduped = dedupe_tag_names(&names(&["Red", "red"]));
        assert_eq!(deduped, names(&["Red", "red"]));
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe_tag_names(&[]).is_empty());
    }
}
