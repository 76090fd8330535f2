use team_rsvp::{Participant, ResponseValue, RsvpError, RsvpRegistry, RsvpSummary};

fn participant(id: &str, name: &str) -> Participant {
    Participant::new(id, name).unwrap()
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
fn test_single_yes() {
    let mut registry = RsvpRegistry::new();
    registry.submit(participant("1", "Alice"), "Yes").unwrap();

    assert_eq!(registry.summarize(), summary(1, 1, 0, 0));
}

#[test]
fn test_yes_then_no_is_one_decline() {
    let mut registry = RsvpRegistry::new();
    let alice = participant("1", "Alice");
    registry.submit(alice.clone(), "Yes").unwrap();
    registry.submit(alice, "No").unwrap();

    assert_eq!(registry.summarize(), summary(1, 0, 1, 0));
}

#[test]
fn test_maybe_and_no() {
    let mut registry = RsvpRegistry::new();
    registry.submit(participant("1", "Alice"), "Maybe").unwrap();
    registry.submit(participant("2", "Bob"), "No").unwrap();

    assert_eq!(registry.summarize(), summary(2, 0, 1, 1));
    assert!(registry.list_confirmed().is_empty());
}

#[test]
fn test_unrecognized_response_is_rejected() {
    let mut registry = RsvpRegistry::new();

    let result = registry.submit(participant("1", "Alice"), "Definitely");
    assert!(matches!(
        result,
        Err(RsvpError::InvalidResponseValue { ref value }) if value == "Definitely"
    ));
    assert_eq!(registry.summarize(), summary(0, 0, 0, 0));
}

#[test]
fn test_every_pair_of_responses_keeps_last() {
    for first in ResponseValue::ALL {
        for second in ResponseValue::ALL {
            let mut registry = RsvpRegistry::new();
            let alice = participant("1", "Alice");

            registry.submit(alice.clone(), first.as_str()).unwrap();
            let total_after_first = registry.summarize().total;
            registry.submit(alice, second.as_str()).unwrap();

            assert_eq!(registry.summarize().total, total_after_first);
            assert_eq!(registry.get("1").unwrap().response, second);
        }
    }
}

#[test]
fn test_team_roster_tally() -> anyhow::Result<()> {
    let mut registry = RsvpRegistry::new();
    let submissions = [
        ("Alice", "Yes"),
        ("Bob", "No"),
        ("Carol", "Maybe"),
        ("Dave", "Yes"),
        ("Bob", "Yes"),
        ("Carol", "No"),
        ("Erin", "Maybe"),
    ];

    for (name, response) in submissions {
        registry.submit(Participant::from_name(name)?, response)?;
    }

    let s = registry.summarize();
    assert_eq!(s, summary(5, 3, 1, 1));
    assert_eq!(s.total, s.confirmed + s.declined + s.maybe);

    let confirmed: Vec<String> = registry
        .list_confirmed()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(confirmed, vec!["Alice", "Bob", "Dave"]);

    Ok(())
}
