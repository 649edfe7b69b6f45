use futures::executor::block_on;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vizij_sort_core::{
    bubble_sort, selection_sort, sequence, Result, SortAlgorithm, Step, StepDelay, StepSink,
};

/// Entry recorded by the test sink: either a painted step or a pause.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Event {
    Paint(Step),
    Pause(StepDelay),
}

#[derive(Default)]
struct RecordingSink {
    events: Vec<Event>,
    snapshots: Vec<Vec<f64>>,
}

impl RecordingSink {
    fn steps(&self) -> Vec<Step> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Paint(s) => Some(*s),
                Event::Pause(_) => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&Step) -> bool) -> usize {
        self.steps().iter().filter(|s| pred(s)).count()
    }
}

impl StepSink for RecordingSink {
    fn paint(&mut self, values: &[f64], step: Step) -> Result<()> {
        self.events.push(Event::Paint(step));
        self.snapshots.push(values.to_vec());
        Ok(())
    }

    async fn pause(&mut self, delay: StepDelay) {
        self.events.push(Event::Pause(delay));
    }
}

fn run(algo: SortAlgorithm, values: &mut [f64]) -> RecordingSink {
    let mut sink = RecordingSink::default();
    block_on(algo.run(values, &mut sink)).expect("sort should not fail");
    sink
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(|a, b| a.total_cmp(b));
    v
}

fn random_inputs() -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut inputs = vec![
        vec![],
        vec![0.5],
        vec![0.3, 0.3, 0.3],
        vec![0.9, 0.7, 0.5, 0.3, 0.1],
        vec![0.2, 0.8, 0.2, 0.8, 0.5],
    ];
    for n in [2usize, 7, 16, 33] {
        inputs.push(sequence::uniform(n, &mut rng));
        inputs.push(sequence::shuffled_ramp(n, &mut rng));
    }
    // Duplicate-heavy input
    inputs.push((0..20).map(|_| rng.gen_range(0..4) as f64 / 4.0).collect());
    inputs
}

#[test]
fn bubble_sort_scenario_emits_expected_protocol() {
    let mut values = vec![0.9, 0.1, 0.5];
    let mut sink = RecordingSink::default();
    block_on(bubble_sort(&mut values, &mut sink)).unwrap();

    use Event::*;
    use Step::*;
    assert_eq!(
        sink.events,
        vec![
            Paint(Comparing(0, 1)),
            Pause(StepDelay::Compare),
            Paint(WrongSpot(1)),
            Pause(StepDelay::WrongSpot),
            Paint(Swapped(0, 1)),
            Pause(StepDelay::Swap),
            Paint(Comparing(1, 2)),
            Pause(StepDelay::Compare),
            Paint(WrongSpot(2)),
            Pause(StepDelay::WrongSpot),
            Paint(Swapped(1, 2)),
            Pause(StepDelay::Swap),
            Paint(Settled(2)),
            Pause(StepDelay::CorrectSpot),
            Paint(Comparing(0, 1)),
            Pause(StepDelay::Compare),
            Paint(StoppedCompare(0)),
            Paint(StoppedCompare(1)),
            Pause(StepDelay::StoppedCompare),
            Paint(Settled(1)),
            Pause(StepDelay::CorrectSpot),
            Paint(Settled(0)),
            Pause(StepDelay::CorrectSpot),
        ]
    );
    assert_eq!(values, vec![0.1, 0.5, 0.9]);

    // Swapped is painted with post-swap values.
    let swapped_at = sink
        .steps()
        .iter()
        .position(|s| *s == Swapped(0, 1))
        .unwrap();
    assert_eq!(sink.snapshots[swapped_at], vec![0.1, 0.9, 0.5]);
}

#[test]
fn both_algorithms_sort_and_preserve_the_multiset() {
    for algo in SortAlgorithm::ALL {
        for input in random_inputs() {
            let mut values = input.clone();
            run(algo, &mut values);
            assert!(
                values.windows(2).all(|w| w[0] <= w[1]),
                "{algo} left {values:?} unsorted"
            );
            assert_eq!(sorted_copy(&values), sorted_copy(&input));
        }
    }
}

#[test]
fn comparison_count_is_quadratic_regardless_of_order() {
    for algo in SortAlgorithm::ALL {
        for input in random_inputs() {
            let n = input.len();
            let mut values = input;
            let sink = run(algo, &mut values);
            let compares = sink.count(|s| matches!(s, Step::Comparing(..)));
            assert_eq!(compares, n * n.saturating_sub(1) / 2, "{algo} with n={n}");
        }
    }
}

#[test]
fn selection_sort_settles_every_index_once() {
    for input in random_inputs().into_iter().filter(|v| v.len() >= 2) {
        let n = input.len();
        let mut values = input;
        let sink = run(SortAlgorithm::Selection, &mut values);
        let mut settled: Vec<usize> = sink
            .steps()
            .into_iter()
            .filter_map(|s| match s {
                Step::Settled(k) => Some(k),
                _ => None,
            })
            .collect();
        assert_eq!(settled.len(), n);
        settled.sort_unstable();
        assert_eq!(settled, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn bubble_sort_on_sorted_input_never_swaps() {
    let mut values = sequence::ramp(12, 0.05, 0.95);
    let sink = run(SortAlgorithm::Bubble, &mut values);
    assert_eq!(sink.count(|s| matches!(s, Step::Swapped(..))), 0);
    assert_eq!(sink.count(|s| matches!(s, Step::WrongSpot(_))), 0);
    assert_eq!(values, sequence::ramp(12, 0.05, 0.95));
}

#[test]
fn selection_sort_swaps_on_every_pass_even_without_new_minimum() {
    let mut values = vec![0.1, 0.2, 0.3, 0.4];
    let sink = run(SortAlgorithm::Selection, &mut values);
    let swaps: Vec<Step> = sink
        .steps()
        .into_iter()
        .filter(|s| matches!(s, Step::Swapped(..)))
        .collect();
    assert_eq!(
        swaps,
        vec![Step::Swapped(0, 0), Step::Swapped(1, 1), Step::Swapped(2, 2)]
    );
    assert_eq!(sink.count(|s| matches!(s, Step::WrongSpot(_))), 0);
}

#[test]
fn selection_sort_resets_unsorted_tail_with_one_pause() {
    let mut values = vec![0.3, 0.1, 0.2];
    let mut sink = RecordingSink::default();
    block_on(selection_sort(&mut values, &mut sink)).unwrap();

    use Event::*;
    use Step::*;
    // First pass: minimum 0.1 found at slot 1.
    assert_eq!(
        &sink.events[..12],
        &[
            Paint(Comparing(1, 0)),
            Pause(StepDelay::Compare),
            Paint(Comparing(2, 1)),
            Pause(StepDelay::Compare),
            Paint(WrongSpot(1)),
            Pause(StepDelay::WrongSpot),
            Paint(Swapped(1, 0)),
            Pause(StepDelay::Swap),
            Paint(Settled(0)),
            Pause(StepDelay::CorrectSpot),
            Paint(StoppedCompare(1)),
            Paint(StoppedCompare(2)),
        ]
    );
    assert_eq!(sink.events[12], Pause(StepDelay::StoppedCompare));
    assert_eq!(sink.events.last(), Some(&Pause(StepDelay::CorrectSpot)));
    assert_eq!(values, vec![0.1, 0.2, 0.3]);
}

#[test]
fn settled_slots_are_never_recolored() {
    for algo in SortAlgorithm::ALL {
        for input in random_inputs() {
            let mut values = input;
            let sink = run(algo, &mut values);
            let mut settled = std::collections::HashSet::new();
            for step in sink.steps() {
                if let Step::Settled(k) = step {
                    settled.insert(k);
                    continue;
                }
                for slot in step.slots() {
                    assert!(
                        !settled.contains(&slot),
                        "{algo} repainted settled slot {slot} with {step:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn short_sequences_emit_nothing() {
    for algo in SortAlgorithm::ALL {
        let mut empty: Vec<f64> = vec![];
        assert!(run(algo, &mut empty).events.is_empty());
        let mut single = vec![0.4];
        assert!(run(algo, &mut single).events.is_empty());
        assert_eq!(single, vec![0.4]);
    }
}
