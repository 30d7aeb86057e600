pub mod commands;

use crate::domain::error::DomainError;
use crate::domain::values::topic_set::TopicSet;
use crate::domain::values::trend_tab::TrendTab;

/// Topics from the command line plus the preset topic of `tab`, if any.
pub fn collect_topics(topics: &[String], tab: Option<&str>) -> Result<TopicSet, DomainError> {
    let mut set: TopicSet = topics.iter().collect();
    if let Some(tab) = tab {
        let tab: TrendTab = tab.parse().map_err(DomainError::InvalidInput)?;
        if let Some(preset) = tab.preset_topic() {
            set.add(preset);
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_topics_with_tab() {
        let topics = vec!["Foldables".to_string(), " Foldables ".to_string()];
        let set = collect_topics(&topics, Some("cmf")).unwrap();
        assert_eq!(set.as_slice(), ["Foldables", "CMF Design"]);
    }

    #[test]
    fn test_collect_topics_unknown_tab() {
        let err = collect_topics(&[], Some("audio")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_custom_tab_adds_nothing() {
        let set = collect_topics(&["Haptics".to_string()], Some("Custom")).unwrap();
        assert_eq!(set.len(), 1);
    }
}
