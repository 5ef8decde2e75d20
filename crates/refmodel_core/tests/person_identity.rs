use refmodel_core::{identity, member_of, Person, PersonSnapshot, Shared};

#[test]
fn independent_persons_are_equal_but_not_identical() {
    let a = Person::new("Alper", "Walker").unwrap();
    let b = Person::new("Alper", "Walker").unwrap();

    assert!(!identity(&a, &b));
    assert_eq!(a, b);
}

#[test]
fn assigned_handle_is_identical_and_observes_mutation() {
    let alper = Person::new("Alper", "Akinci").unwrap();
    let friend = alper.clone();

    assert!(identity(&alper, &friend));
    assert_eq!(alper.handle_count(), 2);

    friend.set_last_name("Walker").unwrap();
    assert_eq!(alper.full_name(), "Alper Walker");
    assert_eq!(friend.full_name(), "Alper Walker");
}

#[test]
fn mutation_breaks_field_equality_but_not_identity() {
    let a = Person::new("Johny", "Stalk").unwrap();
    let b = Person::new("Johny", "Stalk").unwrap();
    let a_again = a.clone();

    a.set_first_name("Johnny").unwrap();

    assert_ne!(a, b);
    assert!(identity(&a, &a_again));
}

#[test]
fn member_of_scans_the_whole_group() {
    let p = Person::new("Alper", "Walker").unwrap();
    let x = Person::new("Johny", "Stalk").unwrap();
    let y = Person::new("Jane", "Doe").unwrap();
    let z = Person::new("Alper", "Walker").unwrap();

    assert!(member_of(&p, &[p.clone(), x.clone(), y.clone()]));
    assert!(member_of(&p, &[x.clone(), p.clone(), y.clone()]));
    assert!(member_of(&p, &[x.clone(), y.clone(), p.clone()]));
    assert!(!member_of(&p, &[x.clone(), y.clone(), z]));
    assert!(!member_of(&p, &[]));
}

#[test]
fn snapshot_is_detached_from_later_mutation() {
    let person = Person::new("Alper", "Akinci").unwrap();
    let snapshot = person.snapshot();
    person.set_last_name("Walker").unwrap();

    assert_eq!(
        snapshot,
        PersonSnapshot {
            first_name: "Alper".to_string(),
            last_name: "Akinci".to_string(),
        }
    );
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["last_name"], "Akinci");
}

#[test]
fn dropped_handles_release_the_count() {
    let person = Person::new("Alper", "Akinci").unwrap();
    {
        let _group = vec![person.clone(), person.clone()];
        assert_eq!(person.handle_count(), 3);
    }
    assert_eq!(person.handle_count(), 1);
}
