use std::collections::BTreeSet;

/// Maps each distinct region label to an integer code.
///
/// Codes follow the sorted order of the labels seen at fit time, so the same
/// set of regions always gets the same codes regardless of row order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionEncoder {
    classes: Vec<String>,
}

impl RegionEncoder {
    pub fn fit<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes: BTreeSet<&str> = labels.into_iter().collect();
        Self {
            classes: classes.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .ok()
    }

    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
