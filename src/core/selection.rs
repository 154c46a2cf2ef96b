/// Ordered set of the service ids the user has picked. Insertion order is
/// display order; duplicates are rejected as silent no-ops.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionState {
    ids: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the id was already selected.
    pub fn add(&mut self, id: &str) -> bool {
        if self.ids.iter().any(|existing| existing == id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Returns false when the id was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() < before
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut selection = SelectionState::new();
        assert!(selection.add("balancing"));
        assert!(selection.add("tire-change"));
        assert_eq!(selection.ids(), ["balancing", "tire-change"]);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut selection = SelectionState::new();
        assert!(selection.add("tire-change"));
        assert!(!selection.add("tire-change"));
        assert_eq!(selection.ids().len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut selection = SelectionState::new();
        selection.add("tire-change");
        assert!(selection.remove("tire-change"));
        assert!(!selection.remove("tire-change"));
        assert!(selection.is_empty());
    }
}
