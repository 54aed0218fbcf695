use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ints(values: &[i64]) -> Value {
    Value::list(values.iter().map(|&n| Value::int(n)).collect())
}

fn elements(value: &Value) -> Vec<Value> {
    value.as_seq().unwrap().to_vec()
}

// Contract

#[test]
fn test_list_contract() {
    let list = ints(&[10, 20, 30]);
    let seq = list.as_seq().unwrap();
    assert_eq!(seq.size(), 3);
    assert_eq!(seq.at(1), Some(Value::int(20)));
    assert_eq!(seq.at(3), None);
    assert_eq!(seq.head(), Some(Value::int(10)));
    assert_eq!(list.tail().unwrap(), ints(&[20, 30]));
}

#[test]
fn test_string_elements_are_code_points() {
    let text = Value::string("hé");
    let seq = text.as_seq().unwrap();
    assert_eq!(seq.size(), 2);
    assert_eq!(seq.at(0), Some(Value::int(104)));
    assert_eq!(seq.at(1), Some(Value::int(233)));
}

#[test]
fn test_tail_of_short_sequences_is_empty_list() {
    assert!(matches!(ints(&[]).tail(), Some(Value::List(items)) if items.is_empty()));
    assert!(matches!(ints(&[1]).tail(), Some(Value::List(items)) if items.is_empty()));
    assert!(Value::int(1).tail().is_none());
}

// Slice

#[test]
fn test_slice_of_slice_rebases() {
    let list = ints(&[0, 1, 2, 3, 4, 5]);
    let outer = Value::slice(&list, 1, 5);
    let inner = Value::slice(&outer, 1, 3);
    let Value::Slice(view) = &inner else {
        panic!("expected slice");
    };
    assert!(matches!(view.base(), Value::List(_)));
    assert_eq!((view.begin(), view.end()), (2, 4));
    assert_eq!(elements(&inner), elements(&ints(&[2, 3])));
}

#[test]
fn test_slice_at_out_of_range() {
    let slice = Value::slice(&ints(&[1, 2, 3]), 0, 2);
    assert_eq!(slice.as_seq().unwrap().at(2), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_slice_bounds_are_checked() {
    let _ = Value::slice(&ints(&[1, 2]), 1, 3);
}

// Join

#[test]
fn test_join_wraps_without_copy() {
    let joined = ints(&[1, 2]).join(ints(&[3]));
    let Value::Join(segments) = &joined else {
        panic!("expected join");
    };
    assert_eq!(segments.len(), 2);
    assert_eq!(joined.as_seq().unwrap().size(), 3);
    assert_eq!(joined.as_seq().unwrap().at(2), Some(Value::int(3)));
}

#[test]
fn test_join_flattens_adjacent_joins() {
    let left = ints(&[1]).join(ints(&[2]));
    let right = ints(&[3]).join(ints(&[4]));
    let joined = left.join(right);
    let Value::Join(segments) = &joined else {
        panic!("expected join");
    };
    assert_eq!(segments.len(), 4);
    assert!(segments.iter().all(|s| !matches!(s, Value::Join(_))));
    assert_eq!(joined, ints(&[1, 2, 3, 4]));
}

#[test]
fn test_unique_join_extends_in_place() {
    let joined = ints(&[1]).join(ints(&[2]));
    let Value::Join(before) = &joined else {
        panic!("expected join");
    };
    let address = std::ptr::from_ref::<Vec<Value>>(before);
    let extended = joined.join(ints(&[3]));
    let Value::Join(after) = &extended else {
        panic!("expected join");
    };
    assert_eq!(std::ptr::from_ref::<Vec<Value>>(after), address);
    assert_eq!(extended, ints(&[1, 2, 3]));
}

#[test]
fn test_shared_join_copies() {
    let joined = ints(&[1]).join(ints(&[2]));
    let alias = joined.clone();
    let extended = joined.join(ints(&[3]));
    assert_eq!(alias, ints(&[1, 2]));
    assert_eq!(extended, ints(&[1, 2, 3]));
}

#[test]
fn test_string_join() {
    let unique = Value::string("ab").join(Value::string("cd"));
    assert_eq!(unique.as_str(), Some("abcd"));

    let shared = Value::string("ab");
    let alias = shared.clone();
    let joined = shared.join(Value::string("cd"));
    assert_eq!(alias.as_str(), Some("ab"));
    assert_eq!(joined.as_str(), Some("abcd"));
}

#[test]
fn test_string_slice_joins_as_text() {
    let tail = Value::slice(&Value::string("hello"), 1, 5);
    let joined = Value::string("x").join(tail.clone());
    assert_eq!(joined.as_str(), Some("xello"));

    let both = tail.clone().join(tail);
    assert_eq!(both.as_str(), Some("elloello"));
}

#[test]
fn test_string_slice_joined_with_list_stays_a_join() {
    let tail = Value::slice(&Value::string("ab"), 1, 2);
    let joined = tail.join(ints(&[1]));
    assert!(matches!(joined, Value::Join(_)));
    assert_eq!(joined, ints(&[98, 1]));
}

#[test]
fn test_as_text() {
    let text = Value::string("hello");
    assert_eq!(text.as_text().as_deref(), Some("hello"));
    let tail = Value::slice(&text, 1, 4);
    assert!(tail.is_text());
    assert_eq!(tail.as_text().as_deref(), Some("ell"));
    let list_tail = Value::slice(&ints(&[1, 2]), 1, 2);
    assert!(!list_tail.is_text());
    assert_eq!(list_tail.as_text(), None);
}

#[test]
fn test_join_coerces_scalars() {
    let joined = Value::int(1).join(Value::int(2));
    assert_eq!(joined, ints(&[1, 2]));
}

// Materialize / reverse

#[test]
fn test_materialize() {
    let joined = ints(&[1]).join(ints(&[2, 3]));
    let copy = joined.materialize();
    assert!(matches!(copy, Value::List(_)));
    assert_eq!(copy, ints(&[1, 2, 3]));
    let text = Value::slice(&Value::string("hello"), 1, 3).materialize();
    assert_eq!(text.as_str(), Some("el"));
}

#[test]
fn test_reversed() {
    assert_eq!(ints(&[1, 2, 3]).reversed(), Some(ints(&[3, 2, 1])));
    assert_eq!(
        Value::string("abc").reversed().unwrap().as_str(),
        Some("cba")
    );
    let tail = Value::slice(&Value::string("hello"), 1, 5);
    assert_eq!(tail.reversed().unwrap().as_str(), Some("olle"));
    assert!(Value::int(1).reversed().is_none());
}

// Properties

fn int_vec() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-1000i64..1000, 0..24)
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod properties {
    use super::*;

    proptest! {
        #[test]
        fn at_agrees_across_representations(a in int_vec(), b in int_vec()) {
            let all: Vec<i64> = a.iter().chain(b.iter()).copied().collect();
            let list = ints(&all);
            let joined = ints(&a).join(ints(&b));
            let padded = ints(&[-1].iter().chain(all.iter()).chain([-1].iter()).copied().collect::<Vec<_>>());
            let sliced = Value::slice(&padded, 1, all.len() + 1);
            let list_seq = list.as_seq().unwrap();
            let join_seq = joined.as_seq().unwrap();
            let slice_seq = sliced.as_seq().unwrap();
            prop_assert_eq!(join_seq.size(), list_seq.size());
            prop_assert_eq!(slice_seq.size(), list_seq.size());
            for i in 0..all.len() {
                prop_assert_eq!(join_seq.at(i).unwrap().to_string(), list_seq.at(i).unwrap().to_string());
                prop_assert_eq!(slice_seq.at(i).unwrap().to_string(), list_seq.at(i).unwrap().to_string());
            }
        }

        #[test]
        fn slice_of_slice_never_nests(values in int_vec(), cuts in proptest::collection::vec(0usize..32, 4)) {
            let list = ints(&values);
            let len = values.len();
            let (a, b) = (cuts[0].min(len), cuts[1].min(len));
            let (begin, end) = (a.min(b), a.max(b));
            let outer = Value::slice(&list, begin, end);
            let width = end - begin;
            let (c, d) = (cuts[2].min(width), cuts[3].min(width));
            let inner = Value::slice(&outer, c.min(d), c.max(d));
            let Value::Slice(view) = &inner else { panic!("expected slice") };
            prop_assert!(matches!(view.base(), Value::List(_)));
            prop_assert_eq!(view.begin(), begin + c.min(d));
            prop_assert_eq!(view.end(), begin + c.max(d));
        }

        #[test]
        fn join_paths_agree(a in int_vec(), b in int_vec(), shared in any::<bool>()) {
            let receiver = ints(&a).join(ints(&[]));
            let alias = if shared { Some(receiver.clone()) } else { None };
            let joined = receiver.join(ints(&b));
            let expected: Vec<i64> = a.iter().chain(b.iter()).copied().collect();
            prop_assert_eq!(joined.to_string(), ints(&expected).to_string());
            if let Some(alias) = alias {
                prop_assert_eq!(alias.to_string(), ints(&a).to_string());
            }
        }
    }
}
