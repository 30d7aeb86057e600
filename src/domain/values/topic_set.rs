use serde::{Deserialize, Serialize};

/// Research topics in insertion order, trimmed, without blanks or duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicSet(Vec<String>);

impl TopicSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a topic. Returns false when it is blank or already present.
    pub fn add(&mut self, topic: &str) -> bool {
        let trimmed = topic.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.0.push(trimmed.to_string());
        true
    }

    pub fn remove(&mut self, topic: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != topic.trim());
        self.0.len() != before
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.0.iter().any(|t| t == topic)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-separated label used inside the prompt.
    pub fn label(&self) -> String {
        self.0.join(", ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for TopicSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TopicSet::new();
        for topic in iter {
            set.add(topic.as_ref());
        }
        set
    }
}
