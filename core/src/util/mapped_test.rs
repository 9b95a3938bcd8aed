//! Tests for the lazy mapping view

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use mu_types::ty;
use mu_values::{dynamic::Value, traits::ArrayView};
use pretty_assertions::assert_eq;

use super::{map_array, map_value};
use crate::{Error, test_utils::init_test_logging};

#[test]
fn test_view_matches_source() {
    let source = vec![1_i64, 2, 3, 4];
    let view = map_array(&source, |n: i64| n * 10);

    assert_eq!(view.len(), source.len());
    for (i, n) in source.iter().enumerate() {
        assert_eq!(view.get(i), Some(n * 10));
    }
    assert_eq!(view.iter().collect::<Vec<_>>(), vec![10, 20, 30, 40]);
}

#[test]
fn test_empty_source() {
    let source: Vec<i64> = vec![];
    let view = map_array(&source, |n: i64| n + 1);
    assert!(view.is_empty());
    assert_eq!(view.get(0), None);
}

#[test]
fn test_out_of_range_matches_source() {
    let source = vec!["x", "y"];
    let view = map_array(&source, |s: &str| s.to_uppercase());
    assert_eq!(ArrayView::get(&source, 2), None);
    assert_eq!(view.get(2), None);
    assert_eq!(view.get(usize::MAX), None);
}

#[test]
fn test_mapper_runs_only_on_access() {
    let calls = Cell::new(0);
    let source = vec![1_i64, 2, 3];
    let view = map_array(&source, |n: i64| {
        calls.set(calls.get() + 1);
        n
    });

    assert_eq!(view.len(), 3);
    assert_eq!(calls.get(), 0);

    assert_eq!(view.get(1), Some(2));
    assert_eq!(calls.get(), 1);

    // Not cached: a repeated read runs the mapper again.
    assert_eq!(view.get(1), Some(2));
    assert_eq!(calls.get(), 2);

    // Out of range never reaches the mapper.
    assert_eq!(view.get(3), None);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_view_reflects_source_mutation() {
    let source = RefCell::new(vec![1_i64, 2]);
    let view = map_array(&source, |n: i64| n * n);
    assert_eq!(view.get(1), Some(4));

    source.borrow_mut()[1] = 5;
    source.borrow_mut().push(6);

    assert_eq!(view.len(), 3);
    assert_eq!(view.get(1), Some(25));
    assert_eq!(view.get(2), Some(36));
}

#[test]
fn test_view_over_shared_source() {
    let source = Rc::new(RefCell::new(vec![String::from("a")]));
    let view = map_array(Rc::clone(&source), |s: String| s.len());

    source.borrow_mut().push(String::from("abc"));
    assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 3]);
    assert!(Rc::ptr_eq(view.source(), &source));
}

#[test]
fn test_into_inner() {
    let view = map_array(vec![1_i64], |n: i64| n + 1);
    let (source, mapper) = view.into_inner();
    assert_eq!(source, vec![1]);
    assert_eq!(mapper(1), 2);
}

#[test]
fn test_map_value_over_array() {
    let value = Value::array(ty!(Int), [1_i64, 2, 3].map(Value::from));
    let view = map_value(&value, |v| v.as_int().map(|n| n * 2)).unwrap();

    assert_eq!(view.len(), 3);
    assert_eq!(view.iter().collect::<Vec<_>>(), vec![Some(2), Some(4), Some(6)]);
    assert_eq!(view.get(3), None);
    assert_eq!(view.source().element_ty(), &ty!(Int));
}

#[test]
fn test_map_value_rejects_null_eagerly() {
    init_test_logging();

    let calls = Cell::new(0);
    let result = map_value(&Value::Null, |v| {
        calls.set(calls.get() + 1);
        v
    });

    assert_eq!(
        result.map(|_| ()),
        Err(Error::InvalidArgument(
            "expected an array to map over, found Null".to_string()
        ))
    );
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_map_value_rejects_scalar() {
    let err = map_value(&Value::from("abc"), |v| v).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: expected an array to map over, found Str");
}
