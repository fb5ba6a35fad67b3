use proptest::prelude::*;
use recordkit_api::{copy_with, ErrorKind, Record, RecordBuilder};

mod shapes {
    use recordkit_api::RecordBuilder;

    #[derive(Debug, Clone, PartialEq, Eq, RecordBuilder)]
    pub struct Person {
        #[record(copy)]
        id: u32,
        #[record(into)]
        name: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq, RecordBuilder)]
    #[record(with, new)]
    pub struct NewPerson {
        #[record(copy)]
        id: u32,
        #[record(into)]
        name: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq, RecordBuilder)]
    #[record(new, setters)]
    pub struct MutablePerson {
        #[record(copy)]
        id: u32,
        #[record(into)]
        name: String,
    }

    #[derive(Debug, Clone, PartialEq, RecordBuilder)]
    #[record(with)]
    pub struct Account {
        #[record(required, into)]
        owner: String,
        #[record(copy, default = "100")]
        limit: u64,
        tags: Vec<String>,
        nickname: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq, RecordBuilder)]
    #[record(with, new)]
    pub struct Tagged<T>
    where
        T: PartialEq,
    {
        tag: T,
        #[record(copy)]
        version: u16,
    }
}

use shapes::{Account, MutablePerson, NewPerson, NewPersonBuilder, Person, Tagged};

#[test]
fn fresh_builder_defaults_unset_fields() {
    let person = Person::builder().build().unwrap();
    assert_eq!(person.id(), 0);
    assert_eq!(person.name(), "");

    let only_id = Person::builder().id(7).build().unwrap();
    assert_eq!(only_id.id(), 7);
    assert_eq!(only_id.name(), "");
}

#[test]
fn seeded_builder_overrides_only_named_fields() {
    let angelo = Person::builder().id(1).name("Angelo").build().unwrap();
    let angelo_with_new_id = Person::builder_from(&angelo).id(2).build().unwrap();

    assert_eq!(angelo.name(), "Angelo");
    assert_eq!(angelo.id(), 1);
    assert_eq!(angelo_with_new_id.id(), 2);
    assert_eq!(angelo_with_new_id.name(), "Angelo");
}

#[test]
fn chained_copy_construction() {
    let p1 = NewPerson::new(1, "Angelo");
    let p2 = p1.with_name("Zero");
    let p3 = p2.with_id(2);
    let p4 = p3.to_builder().id(3).name("Jake").build().unwrap();
    let p5 = p4.with(|person| {
        person.set_id(4).set_name("Java");
    });
    let p6 = p5.with(|person| {
        if let Some(name) = person.get_name().filter(|name| name.as_str() == "Java") {
            let cool = format!("{name} is cool!");
            person.set_name(cool);
        }
    });
    let p7 = NewPersonBuilder::from(&p6).id(25).build().unwrap();

    assert_eq!(p1, NewPerson::new(1, "Angelo"));
    assert_eq!(p2, NewPerson::new(1, "Zero"));
    assert_eq!(p3, NewPerson::new(2, "Zero"));
    assert_eq!(p4, NewPerson::new(3, "Jake"));
    assert_eq!(p5, NewPerson::new(4, "Java"));
    assert_eq!(p6, NewPerson::new(4, "Java is cool!"));
    assert_eq!(p7, NewPerson::new(25, "Java is cool!"));
}

#[test]
fn conditional_with_skips_when_condition_fails() {
    let jake = NewPerson::new(3, "Jake");
    let same = jake.with(|person| {
        if person.get_name().is_some_and(|name| name == "Java") {
            person.set_name("never");
        }
    });
    assert_eq!(same, jake);
}

#[test]
fn owned_from_consumes_record() {
    let p = NewPerson::new(9, "Owned");
    let rebuilt = NewPersonBuilder::from(p).name("Moved").build().unwrap();
    assert_eq!(rebuilt, NewPerson::new(9, "Moved"));
}

#[test]
fn data_class_constructors_and_setters() {
    let mut blank = MutablePerson::default();
    assert_eq!(blank.id(), 0);
    assert_eq!(blank.name(), "");

    blank.set_id(5);
    blank.set_name("Dana");
    assert_eq!(blank, MutablePerson::new(5, "Dana"));

    let built = MutablePerson::builder().id(5).name("Dana").build().unwrap();
    assert_eq!(built, blank);
}

#[test]
fn missing_required_field_is_invalid_state() {
    let err = Account::builder().limit(5).build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(err.record(), "Account");
    assert_eq!(err.field(), "owner");
}

#[test]
fn explicit_default_applies_to_unset_field() {
    let account = Account::builder().owner("ops").build().unwrap();
    assert_eq!(account.limit(), 100);
    assert!(account.tags().is_empty());
    assert_eq!(account.nickname(), &None);
}

#[test]
fn with_helpers_never_fail_on_required_fields() {
    let account = Account::builder()
        .owner("ops")
        .tags(vec!["prod".to_string()])
        .build()
        .unwrap();

    let renamed = account.with_owner("sre");
    assert_eq!(renamed.owner(), "sre");
    assert_eq!(renamed.tags(), &vec!["prod".to_string()]);
    assert_eq!(account.owner(), "ops");

    let nicknamed = account.with_nickname(Some("pager".to_string()));
    assert_eq!(nicknamed.nickname().as_deref(), Some("pager"));
    assert_eq!(nicknamed.limit(), 100);
}

#[test]
fn generic_records_build_and_copy() {
    let first = Tagged::new("alpha", 1);
    let second = first.with_version(2);
    assert_eq!(*second.tag(), "alpha");
    assert_eq!(second.version(), 2);
    assert_eq!(first.version(), 1);

    let built = Tagged::<u8>::builder().tag(4).build().unwrap();
    assert_eq!(built, Tagged::new(4, 0));
}

#[test]
fn trait_level_copy_with() {
    let p = Person::builder().id(1).name("Angelo").build().unwrap();
    let q = copy_with(&p, |b| {
        b.set_name("Zero");
    })
    .unwrap();

    assert_eq!(q.id(), 1);
    assert_eq!(q.name(), "Zero");
    assert_eq!(p.name(), "Angelo");

    let r = <Person as Record>::to_builder(&q).id(2).build().unwrap();
    assert_eq!(r.id(), 2);
    let s = RecordBuilder::build(<Person as Record>::builder()).unwrap();
    assert_eq!(s, Person::builder().build().unwrap());
}

#[test]
fn records_are_shareable_across_threads() {
    let shared = std::sync::Arc::new(NewPerson::new(1, "Angelo"));
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || shared.with_id(i).id())
        })
        .collect();

    let ids: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(shared.id(), 1);
}

proptest! {
    #[test]
    fn builder_round_trips_each_field(id in any::<u32>(), name in ".*") {
        let person = Person::builder().id(id).name(name.clone()).build().unwrap();
        prop_assert_eq!(person.id(), id);
        prop_assert_eq!(person.name(), &name);
    }

    #[test]
    fn seeded_override_changes_only_that_field(
        id in any::<u32>(),
        name in ".*",
        new_id in any::<u32>(),
    ) {
        let original = NewPerson::new(id, name.clone());
        let copy = NewPerson::builder_from(&original).id(new_id).build().unwrap();
        prop_assert_eq!(copy.id(), new_id);
        prop_assert_eq!(copy.name(), original.name());
    }

    #[test]
    fn with_helper_matches_seeded_builder(id in any::<u32>(), name in ".*", new_name in ".*") {
        let original = NewPerson::new(id, name);
        let via_helper = original.with_name(new_name.clone());
        let via_builder = NewPerson::builder_from(&original).name(new_name).build().unwrap();
        prop_assert_eq!(via_helper, via_builder);
    }

    #[test]
    fn with_helper_is_idempotent(id in any::<u32>(), name in ".*", new_id in any::<u32>()) {
        let original = NewPerson::new(id, name);
        let once = original.with_id(new_id);
        let twice = once.with_id(new_id);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn original_is_never_mutated(id in any::<u32>(), name in ".*", other in ".*") {
        let original = NewPerson::new(id, name.clone());
        let _ = original.with_name(other.clone());
        let _ = original.with(|b| { b.set_id(id.wrapping_add(1)).set_name(other.clone()); });
        let _ = NewPerson::builder_from(&original).name(other).build().unwrap();
        prop_assert_eq!(original, NewPerson::new(id, name));
    }
}
