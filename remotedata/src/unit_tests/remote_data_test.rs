use crate::{always, apply, derive, must, never, RemoteData, RemoteError};
use std::cell::Cell;

#[test]
fn test_not_asked() {
    let not_asked: RemoteData<i32> = RemoteData::default();
    assert_eq!(not_asked, RemoteData::not_asked());
    assert!(not_asked.is_not_asked());
    assert!(!not_asked.is_loading());
    assert!(!not_asked.is_error());
    assert!(!not_asked.is_success());
    assert!(!not_asked.is_complete());
    assert!(not_asked.is_incomplete());
    assert!(not_asked.value_ref().is_none());
    assert!(not_asked.error_ref().is_none());
    assert!(not_asked.value().is_none());
}

#[test]
fn test_loading() {
    let loading = RemoteData::<i32>::loading();
    assert!(!loading.is_not_asked());
    assert!(loading.is_loading());
    assert!(!loading.is_complete());
    assert!(loading.is_incomplete());
    assert!(loading.value_ref().is_none());
    assert!(loading.value().is_none());
}

#[test]
fn test_success() {
    let success = RemoteData::success(8);
    assert!(success.is_success());
    assert!(!success.is_error());
    assert!(success.is_complete());
    assert!(!success.is_incomplete());
    assert_eq!(success.value_ref(), Some(&8));
    assert!(success.error_ref().is_none());
    assert_eq!(success.value(), Some(8));
}

#[test]
fn test_error() {
    let error = RemoteData::<i32>::fail_with_message("Connection failed");
    assert!(error.is_error());
    assert!(!error.is_success());
    assert!(error.is_complete());
    assert!(!error.is_incomplete());
    assert_eq!(
        error.error_ref(),
        Some(&RemoteError::message("Connection failed"))
    );
    assert!(error.value_ref().is_none());
    assert_eq!(error.value(), None);
}

// The sentinel stays distinct even when T can itself be "empty".
#[test]
fn test_not_asked_is_distinct_from_empty_payloads() {
    assert_ne!(RemoteData::<Option<i32>>::NotAsked, always(None));
    assert_ne!(RemoteData::<()>::NotAsked, always(()));
    assert_eq!(must(always(None::<i32>)), Some(None));
}

#[test]
fn test_as_ref() {
    let success = RemoteData::success("hello".to_string());
    assert_eq!(success.as_ref(), RemoteData::Success(&"hello".to_string()));

    let error = RemoteData::<String>::fail_with_message("nope");
    assert_eq!(error.as_ref(), RemoteData::fail_with_message("nope"));

    assert_eq!(RemoteData::<String>::Loading.as_ref(), RemoteData::Loading);
    assert_eq!(RemoteData::<String>::NotAsked.as_ref(), RemoteData::NotAsked);
}

#[test]
fn test_always_and_never() {
    assert_eq!(always(42), RemoteData::Success(42));

    let error = RemoteError::message("bad");
    assert_eq!(never::<i32>(Some(error.clone())), RemoteData::Error(error));

    // Without an error, a valid placeholder payload is still produced.
    assert_eq!(
        never::<i32>(None),
        RemoteData::Error(RemoteError::Unspecified)
    );
}

#[test]
fn test_derive_transforms_success() {
    let calls = Cell::new(0);
    let derived = derive(always(21), |value| {
        calls.set(calls.get() + 1);
        value * 2
    });
    assert_eq!(derived, RemoteData::Success(42));
    assert_eq!(calls.get(), 1);

    let derived = always(3).derive(|value| value.to_string());
    assert_eq!(derived, RemoteData::Success("3".to_string()));
}

#[test]
fn test_derive_passes_other_variants_through() {
    let error = RemoteError::message("bad");
    let inputs = vec![
        RemoteData::<i32>::NotAsked,
        RemoteData::Loading,
        RemoteData::Error(error.clone()),
    ];

    for input in inputs {
        let calls = Cell::new(0);
        let derived = derive(input.clone(), |value| {
            calls.set(calls.get() + 1);
            value.to_string()
        });
        assert_eq!(calls.get(), 0);
        match (input, derived) {
            (RemoteData::NotAsked, RemoteData::NotAsked) => {}
            (RemoteData::Loading, RemoteData::Loading) => {}
            (RemoteData::Error(before), RemoteData::Error(after)) => assert_eq!(before, after),
            (input, derived) => panic!("{input:?} turned into {derived:?}"),
        }
    }
}

#[test]
#[should_panic(expected = "derive does not catch")]
fn test_derive_does_not_catch_panics() {
    let _ = always(1).derive(|_| -> i32 { panic!("derive does not catch") });
}

#[test]
fn test_apply_and_must() {
    let double = |value: i32| value * 2;

    assert_eq!(apply(always(4), double), Some(8));
    assert_eq!(apply(always(4), double), must(always(4)).map(double));

    for input in [
        RemoteData::<i32>::NotAsked,
        RemoteData::Loading,
        never(None),
    ] {
        let calls = Cell::new(0);
        let applied = apply(input.clone(), |value| {
            calls.set(calls.get() + 1);
            value
        });
        assert_eq!(applied, None);
        assert_eq!(calls.get(), 0);
        assert_eq!(must(input), None);
    }
}

#[test]
fn test_apply_result_is_distinct_from_miss() {
    // A handler returning "nothing" is still a hit.
    assert_eq!(always(1).apply(|_| None::<i32>), Some(None));
    assert_eq!(RemoteData::<i32>::Loading.apply(|_| None::<i32>), None);
}

#[test]
fn test_from_result() {
    let ok: Result<i32, &'static str> = Ok(42);
    assert_eq!(RemoteData::from(ok), RemoteData::Success(42));

    let err: Result<i32, &'static str> = Err("error");
    assert_eq!(
        RemoteData::from(err),
        RemoteData::Error(RemoteError::message("error"))
    );

    let err: Result<i32, RemoteError> = Err(RemoteError::Unspecified);
    let data: RemoteData<i32> = err.into();
    assert_eq!(data, never(None));
}

#[test]
fn test_into_option() {
    let option: Option<i32> = always(7).into();
    assert_eq!(option, Some(7));

    let option: Option<i32> = RemoteData::Loading.into();
    assert_eq!(option, None);
}

#[cfg(feature = "serde")]
#[test]
fn test_remote_data_serde() {
    let success = always(5);
    let serialized = serde_json::to_string(&success).unwrap();
    assert_eq!(serialized, r#"{"state":"success","value":5}"#);
    let deserialized: RemoteData<i32> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, success);

    let loading = RemoteData::<i32>::Loading;
    let serialized = serde_json::to_string(&loading).unwrap();
    assert_eq!(serialized, r#"{"state":"loading"}"#);

    let not_asked = RemoteData::<i32>::NotAsked;
    let serialized = serde_json::to_string(&not_asked).unwrap();
    assert_eq!(serialized, r#"{"state":"not_asked"}"#);
    let deserialized: RemoteData<i32> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, not_asked);

    let error = RemoteData::<i32>::fail_with_message("boom");
    let serialized = serde_json::to_string(&error).unwrap();
    assert_eq!(
        serialized,
        r#"{"state":"error","value":{"kind":"message","message":"boom"}}"#
    );
    let deserialized: RemoteData<i32> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, error);
}
