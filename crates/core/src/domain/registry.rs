use serde::{Deserialize, Serialize};

use super::participant::Participant;
use crate::error::{CoreError, Result};

/// The in-memory store of participants for the current session.
///
/// Names are unique by construction; iteration order is insertion order.
/// Backed by a Vec because a gift exchange has a handful of entries and
/// the participants tab wants them listed in the order they signed up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    participants: Vec<Participant>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a participant, rejecting duplicate names.
    pub fn register(&mut self, participant: Participant) -> Result<()> {
        if self.contains(&participant.name) {
            return Err(CoreError::DuplicateName {
                name: participant.name,
            });
        }
        self.participants.push(participant);
        Ok(())
    }

    /// Remove a participant by name, returning the removed entry.
    pub fn remove(&mut self, name: &str) -> Result<Participant> {
        match self.participants.iter().position(|p| p.name == name) {
            Some(idx) => Ok(self.participants.remove(idx)),
            None => Err(CoreError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Participants in registration order.
    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    /// Names in registration order - the base order for a draw.
    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str) -> Participant {
        Participant::new(name, format!("{}@example.com", name.to_lowercase()), "", 10.0, 50.0)
            .unwrap()
    }

    #[test]
    fn test_register_and_list_in_insertion_order() {
        let mut registry = Registry::new();
        registry.register(participant("Carol")).unwrap();
        registry.register(participant("Alice")).unwrap();
        registry.register(participant("Bob")).unwrap();

        let names: Vec<_> = registry.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected_and_registry_unchanged() {
        let mut registry = Registry::new();
        registry.register(participant("Alice")).unwrap();

        let err = registry.register(participant("Alice")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName { ref name } if name == "Alice"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_existing_shrinks_by_one() {
        let mut registry = Registry::new();
        registry.register(participant("Alice")).unwrap();
        registry.register(participant("Bob")).unwrap();

        let removed = registry.remove("Alice").unwrap();
        assert_eq!(removed.name, "Alice");
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("Alice"));
        assert!(registry.contains("Bob"));
    }

    #[test]
    fn test_remove_missing_fails_and_registry_unchanged() {
        let mut registry = Registry::new();
        registry.register(participant("Alice")).unwrap();

        let err = registry.remove("Mallory").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { ref name } if name == "Mallory"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_returns_registered_record() {
        let mut registry = Registry::new();
        registry.register(participant("Alice")).unwrap();

        let found = registry.get("Alice").unwrap();
        assert_eq!(found.contact, "alice@example.com");
        assert!(registry.get("Bob").is_none());
    }
}
