mod common;

use common::init_tracing;
use outcome_core::{Error, ErrorKind, Outcome};
use rayon::prelude::*;
use std::sync::mpsc;

fn produce(id: u32) -> Outcome<u32> {
    if id % 3 == 0 {
        let err = Error::invalid_argument(format!("id {id} rejected"));
        Outcome::failure(err.with_context("id", id.to_string()))
    } else {
        Outcome::success(id * 2)
    }
}

#[test]
fn test_outcome_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Outcome<u32>>();
    assert_send_sync::<Outcome<Vec<String>, &'static str>>();
    assert_send_sync::<Outcome<&'static [u8], std::io::Error>>();
}

#[test]
fn test_outcomes_pass_through_channel() {
    init_tracing();

    const COUNT: u32 = 256;
    let (tx, rx) = mpsc::channel();

    (1..=COUNT).into_par_iter().for_each_with(tx, |tx, id| {
        tx.send((id, produce(id))).expect("receiver alive");
    });

    let mut received = rx.into_iter().collect::<Vec<_>>();
    received.sort_by_key(|(id, _)| *id);

    assert_eq!(received.len(), COUNT as usize);
    for (id, outcome) in received {
        if id % 3 == 0 {
            assert!(!outcome.is_ok(), "id {id} should be a failure");
            let error = outcome.error().expect("failure slot");
            assert_eq!(error.kind(), ErrorKind::InvalidArgument);
            assert_eq!(error.message(), format!("id {id} rejected"));
            assert_eq!(error.context(), &[("id", id.to_string())]);
        } else {
            assert!(outcome.is_ok(), "id {id} should be a success");
            assert_eq!(outcome.value_or(0), id * 2);
        }
    }
}

#[test]
fn test_shared_outcome_reads_consistently() {
    let success: Outcome<String> = Outcome::success("shared".to_string());
    let failure: Outcome<String> = Outcome::failure(Error::timeout("slow"));
    let fallback = String::from("fallback");

    let seen = (0..64)
        .into_par_iter()
        .map(|i| {
            let outcome = if i % 2 == 0 { &success } else { &failure };
            (
                outcome.is_ok(),
                outcome.as_ref().value_or(&fallback).clone(),
            )
        })
        .collect::<Vec<_>>();

    for (i, (ok, value)) in seen.into_iter().enumerate() {
        if i % 2 == 0 {
            assert!(ok);
            assert_eq!(value, "shared");
        } else {
            assert!(!ok);
            assert_eq!(value, "fallback");
        }
    }
}

#[test]
fn test_chains_run_independently_on_worker_threads() {
    let totals = (1..=100u64)
        .into_par_iter()
        .map(|n| {
            Outcome::<u64, String>::success(n)
                .then(|v| Outcome::success(v * v))
                .then(|v| {
                    if v > 2_500 {
                        Outcome::failure(format!("{v} over limit"))
                    } else {
                        Outcome::success(v)
                    }
                })
        })
        .collect::<Vec<_>>();

    let ok = totals.iter().filter(|o| o.is_ok()).count();
    assert_eq!(ok, 50);
    assert_eq!(totals[49], Outcome::success(2_500));
    assert_eq!(totals[50], Outcome::failure("2601 over limit".to_string()));
}
