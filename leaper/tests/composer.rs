use leaper::composer::{Hop, HopSource, LeapComposer};
use leaper::perm::Perm;
use leaper::Error;
use proptest::prelude::*;

fn hop(one_line: Vec<u32>) -> Hop {
    Hop::from_perm(Perm::from_one_line(one_line).unwrap(), HopSource::Oracle)
}

#[test]
fn first_hop_relabels_from_identity() {
    let mut c = LeapComposer::new();
    // new[hop[i]] = i
    let labels = c.perform_hop(&hop(vec![1, 2, 0]), 3).unwrap();
    assert_eq!(labels.as_slice(), &[2, 0, 1]);
    assert_eq!(c.working().unwrap().history.len(), 1);
}

#[test]
fn two_hops_equal_the_combined_hop() {
    let p = hop(vec![1, 2, 0]);
    let q = hop(vec![0, 2, 1]);

    let mut sequential = LeapComposer::new();
    sequential.perform_hop(&p, 3).unwrap();
    sequential.perform_hop(&q, 3).unwrap();

    // combined[i] = q[p[i]]
    let combined: Vec<u32> = (0..3)
        .map(|i| q.perm.image(p.perm.image(i) as usize))
        .collect();
    let mut single = LeapComposer::new();
    single
        .perform_hop(&hop(combined), 3)
        .unwrap();

    assert_eq!(
        sequential.working().unwrap().labels,
        single.working().unwrap().labels
    );
}

#[test]
fn size_mismatch_is_rejected_before_any_change() {
    let mut c = LeapComposer::new();
    c.perform_hop(&hop(vec![1, 0]), 2).unwrap();
    let before = c.working().unwrap().clone();
    assert!(matches!(
        c.perform_hop(&hop(vec![1, 2, 0]), 2),
        Err(Error::IncompatibleHop {
            expected: 2,
            got: 3
        })
    ));
    assert_eq!(c.working().unwrap(), &before);
}

#[test]
fn stale_working_leap_is_rejected_not_indexed() {
    let mut c = LeapComposer::new();
    c.perform_hop(&hop(vec![1, 2, 0]), 3).unwrap();
    // The hop fits the new size but the working leap does not; folding
    // would index past its labels.
    assert!(matches!(
        c.perform_hop(&hop(vec![1, 2, 3, 4, 0]), 5),
        Err(Error::IncompatibleHop {
            expected: 5,
            got: 3
        })
    ));
    assert_eq!(c.working().unwrap().labels.len(), 3);
}

#[test]
fn reset_clears_working_state_only() {
    let mut c = LeapComposer::new();
    c.perform_hop(&hop(vec![1, 0]), 2).unwrap();
    c.save_working("swap").unwrap();
    c.reset();
    assert!(c.working().is_none());
    assert_eq!(c.saved().len(), 1);
}

#[test]
fn save_requires_an_active_leap() {
    let mut c = LeapComposer::new();
    assert!(matches!(c.save_working("nothing"), Err(Error::NoActiveLeap)));
}

#[test]
fn save_and_recall_round_trip_the_permutation() {
    let mut c = LeapComposer::new();
    c.perform_hop(&hop(vec![1, 2, 0]), 3).unwrap();
    c.perform_hop(&hop(vec![0, 2, 1]), 3).unwrap();
    let labels = c.working().unwrap().labels.clone();
    c.save_working("spin").unwrap();
    c.reset();

    c.recall(0).unwrap();
    let recalled = c.working().unwrap();
    assert_eq!(recalled.labels, labels);
    // History survives as cycle strings only.
    assert_eq!(recalled.history.len(), 2);
    assert!(recalled.history.iter().all(|h| h.one_line.is_empty()));
}

#[test]
fn delete_saved_by_position() {
    let mut c = LeapComposer::new();
    c.perform_hop(&hop(vec![1, 0]), 2).unwrap();
    c.save_working("a").unwrap();
    c.save_working("b").unwrap();
    c.delete_saved(0).unwrap();
    assert_eq!(c.saved().len(), 1);
    assert_eq!(c.saved()[0].name, "b");
    assert!(matches!(c.delete_saved(5), Err(Error::NoSuchIndex(5))));
    assert!(matches!(c.recall(9), Err(Error::NoSuchIndex(9))));
}

#[test]
fn hop_cycle_strings_are_stored_one_indexed() {
    let h = hop(vec![1, 2, 0]);
    assert_eq!(h.cycle, "(1 2 3)");
}

proptest! {
    /// Sequential application of any two same-size hops matches the single
    /// combined hop, and the labels stay a bijection throughout.
    #[test]
    fn composition_matches_combined(seed_p in any::<u64>(), seed_q in any::<u64>()) {
        fn shuffled(mut seed: u64) -> Vec<u32> {
            let mut v: Vec<u32> = (0..6).collect();
            for i in (1..v.len()).rev() {
                seed = seed
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                v.swap(i, (seed % (i as u64 + 1)) as usize);
            }
            v
        }
        let p = shuffled(seed_p);
        let q = shuffled(seed_q);

        let hp = hop(p.clone());
        let hq = hop(q.clone());

        let mut sequential = LeapComposer::new();
        sequential.perform_hop(&hp, 6).unwrap();
        sequential.perform_hop(&hq, 6).unwrap();

        let combined: Vec<u32> = (0..6)
            .map(|i| hq.perm.image(hp.perm.image(i) as usize))
            .collect();
        let mut single = LeapComposer::new();
        single.perform_hop(&hop(combined), 6).unwrap();

        prop_assert_eq!(
            &sequential.working().unwrap().labels,
            &single.working().unwrap().labels
        );
    }
}
