use crate::domain::model::{Participant, ResponseEntry, ResponseValue, RsvpSummary};
use crate::utils::error::Result;
use std::collections::HashMap;

/// In-memory RSVP table for a single event.
///
/// Keyed by participant id, so a participant holds at most one entry and a
/// later submission replaces the earlier one. Counts are never cached; every
/// read scans the current entries.
#[derive(Debug, Clone, Default)]
pub struct RsvpRegistry {
    entries: HashMap<String, ResponseEntry>,
}

impl RsvpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 驗證 id 與原始回覆後寫入；任何一項無效都不會改動資料
    pub fn submit(&mut self, participant: Participant, response: &str) -> Result<()> {
        participant.validate_id()?;
        let response: ResponseValue = response.parse()?;
        self.record(participant, response)
    }

    /// Stores an already-parsed response, replacing any previous entry for the
    /// same id (including its display name). A blank id is rejected.
    pub fn record(&mut self, participant: Participant, response: ResponseValue) -> Result<()> {
        participant.validate_id()?;

        let id = participant.id.clone();
        self.entries.insert(
            id,
            ResponseEntry {
                participant,
                response,
            },
        );
        Ok(())
    }

    /// Participants whose current response is `Yes`, sorted by id.
    pub fn list_confirmed(&self) -> Vec<Participant> {
        let mut confirmed: Vec<Participant> = self
            .entries
            .values()
            .filter(|entry| entry.response == ResponseValue::Yes)
            .map(|entry| entry.participant.clone())
            .collect();
        confirmed.sort_by(|a, b| a.id.cmp(&b.id));
        confirmed
    }

    pub fn summarize(&self) -> RsvpSummary {
        let mut summary = RsvpSummary {
            total: self.entries.len(),
            ..RsvpSummary::default()
        };

        for entry in self.entries.values() {
            match entry.response {
                ResponseValue::Yes => summary.confirmed += 1,
                ResponseValue::No => summary.declined += 1,
                ResponseValue::Maybe => summary.maybe += 1,
            }
        }

        summary
    }

    pub fn get(&self, id: &str) -> Option<&ResponseEntry> {
        self.entries.get(id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ResponseEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RsvpError;

    fn alice() -> Participant {
        Participant::new("1", "Alice").unwrap()
    }

    fn bob() -> Participant {
        Participant::new("2", "Bob").unwrap()
    }

    fn summary(total: usize, confirmed: usize, declined: usize, maybe: usize) -> RsvpSummary {
        RsvpSummary {
            total,
            confirmed,
            declined,
            maybe,
        }
    }

    #[test]
    fn test_add_new_rsvp() {
        let mut registry = RsvpRegistry::new();
        registry.submit(alice(), "Yes").unwrap();

        assert_eq!(registry.summarize(), summary(1, 1, 0, 0));
        assert_eq!(registry.list_confirmed(), vec![alice()]);
    }

    #[test]
    fn test_update_rsvp_for_same_participant() {
        let mut registry = RsvpRegistry::new();
        registry.submit(alice(), "Yes").unwrap();
        registry.submit(alice(), "No").unwrap();

        assert_eq!(registry.summarize(), summary(1, 0, 1, 0));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("1").unwrap().response, ResponseValue::No);
        assert!(registry.list_confirmed().is_empty());
    }

    #[test]
    fn test_overwrite_replaces_display_name() {
        let mut registry = RsvpRegistry::new();
        registry.submit(alice(), "Yes").unwrap();
        registry
            .submit(Participant::new("1", "Alice B.").unwrap(), "Yes")
            .unwrap();

        assert_eq!(registry.get("1").unwrap().participant.name, "Alice B.");
        assert_eq!(registry.list_confirmed()[0].name, "Alice B.");
    }

    #[test]
    fn test_count_all_types() {
        let mut registry = RsvpRegistry::new();
        registry.submit(alice(), "Maybe").unwrap();
        registry.submit(bob(), "No").unwrap();

        assert_eq!(registry.summarize(), summary(2, 0, 1, 1));
        assert!(registry.list_confirmed().is_empty());
    }

    #[test]
    fn test_invalid_rsvp_leaves_registry_untouched() {
        let mut registry = RsvpRegistry::new();

        let err = registry.submit(alice(), "Definitely").unwrap_err();
        assert!(matches!(err, RsvpError::InvalidResponseValue { .. }));
        assert_eq!(registry.summarize(), summary(0, 0, 0, 0));
        assert!(registry.is_empty());

        registry.submit(alice(), "Yes").unwrap();
        assert!(registry.submit(alice(), "Definitely").is_err());
        assert_eq!(registry.get("1").unwrap().response, ResponseValue::Yes);
        assert_eq!(registry.summarize(), summary(1, 1, 0, 0));
    }

    #[test]
    fn test_blank_id_is_rejected_before_any_write() {
        let mut registry = RsvpRegistry::new();
        let ghost = Participant {
            id: String::new(),
            name: "Ghost".to_string(),
        };

        let err = registry.submit(ghost.clone(), "Yes").unwrap_err();
        assert!(matches!(err, RsvpError::InvalidParticipant { ref field, .. } if field == "id"));

        // id 檢查先於回覆值檢查
        let err = registry.submit(ghost.clone(), "Definitely").unwrap_err();
        assert!(matches!(err, RsvpError::InvalidParticipant { .. }));

        let blank = Participant {
            id: "   ".to_string(),
            name: "Blank".to_string(),
        };
        assert!(registry.record(blank, ResponseValue::No).is_err());
        assert!(registry.record(ghost, ResponseValue::No).is_err());

        assert!(registry.is_empty());
        assert!(registry.get("").is_none());
        assert_eq!(registry.summarize(), summary(0, 0, 0, 0));
    }

    #[test]
    fn test_list_confirmed_only_latest_yes() {
        let mut registry = RsvpRegistry::new();
        let carol = Participant::new("3", "Carol").unwrap();

        registry.record(bob(), ResponseValue::Yes).unwrap();
        registry.record(alice(), ResponseValue::Yes).unwrap();
        registry.record(carol.clone(), ResponseValue::Yes).unwrap();
        registry.record(carol, ResponseValue::Maybe).unwrap();

        assert_eq!(registry.list_confirmed(), vec![alice(), bob()]);
    }

    #[test]
    fn test_counts_stay_consistent() {
        let mut registry = RsvpRegistry::new();
        let responses = ["Yes", "No", "Maybe", "Maybe", "Yes", "No", "Yes"];

        for (i, response) in responses.iter().enumerate() {
            // ids cycle so later submissions overwrite earlier ones
            let participant = Participant::new(format!("p{}", i % 4), format!("P{}", i)).unwrap();
            registry.submit(participant, response).unwrap();

            let s = registry.summarize();
            assert_eq!(s.total, s.confirmed + s.declined + s.maybe);
            assert_eq!(s.total, registry.entries().count());
        }

        assert_eq!(registry.summarize().total, 4);
    }

    #[test]
    fn test_registries_are_independent() {
        let mut first = RsvpRegistry::new();
        let second = RsvpRegistry::new();
        first.submit(alice(), "Yes").unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }
}
