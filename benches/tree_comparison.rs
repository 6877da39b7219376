use std::collections::BTreeSet;

use rand::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
// Looking to measure container implementation, not hasher performance, so
// using a faster hasher
use fnv::FnvHashSet;

use avl_bst::AvlTree;

/// The operations shared by every container under comparison
trait SortedSet: Default {
    fn len(&self) -> usize;

    fn contains(&self, value: &i64) -> bool;

    fn insert(&mut self, value: i64) -> bool;

    fn remove(&mut self, value: &i64) -> bool;
}

impl SortedSet for AvlTree<i64, i64> {
    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn contains(&self, value: &i64) -> bool {
        AvlTree::contains(self, value)
    }

    fn insert(&mut self, value: i64) -> bool {
        AvlTree::insert(self, value)
    }

    fn remove(&mut self, value: &i64) -> bool {
        AvlTree::delete(self, value)
    }
}

impl SortedSet for BTreeSet<i64> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, value: &i64) -> bool {
        BTreeSet::contains(self, value)
    }

    fn insert(&mut self, value: i64) -> bool {
        BTreeSet::insert(self, value)
    }

    fn remove(&mut self, value: &i64) -> bool {
        BTreeSet::remove(self, value)
    }
}

impl SortedSet for FnvHashSet<i64> {
    fn len(&self) -> usize {
        FnvHashSet::len(self)
    }

    fn contains(&self, value: &i64) -> bool {
        FnvHashSet::contains(self, value)
    }

    fn insert(&mut self, value: i64) -> bool {
        FnvHashSet::insert(self, value)
    }

    fn remove(&mut self, value: &i64) -> bool {
        FnvHashSet::remove(self, value)
    }
}

#[derive(Debug, Clone)]
struct Values {
    values: Vec<i64>,
}

impl Values {
    /// Deterministically generates a set of at least `nvalues` values
    ///
    /// All values are guaranteed to be unique and ordered randomly.
    pub fn generate(nvalues: u32) -> Self {
        // Spread the values out so the generated trees are interesting:
        // no consecutive values and no strictly increasing magnitudes
        let mut values = Vec::new();

        let n = nvalues as i64;
        for i in 0..n {
            let value = (i - n/2) * 10;
            values.push(value);
        }

        // Use a seed to make this deterministic
        let mut rng = StdRng::seed_from_u64(45930923092);
        values.shuffle(&mut rng);

        Self {values}
    }

    pub fn get(&self, value_i: i64) -> i64 {
        // Make sure index is >= 0
        let index = value_i.max(0);
        self.values[index as usize]
    }
}

fn slice_max<T: Copy + Ord>(data: &[T]) -> T {
    data.iter().max().copied().expect("bug: slice was empty")
}

/// Runs many consecutive inserts on a container
fn benchmark_inserts<S: SortedSet>(values: &Values, inserts: usize) -> S {
    let mut set = S::default();

    for value_i in 0..inserts {
        black_box(set.insert(values.get(value_i as i64)));
    }
    black_box(set.len());

    set
}

/// Fills a container for the search/remove benchmarks
fn setup_filled<S: SortedSet>(values: &Values, entries: usize) -> S {
    let mut set = S::default();

    for value_i in 0..entries {
        set.insert(values.get(value_i as i64));
    }

    set
}

/// Runs many consecutive search operations on a container
fn benchmark_searches<S: SortedSet>(values: &Values, set: &S, searches: usize) {
    for i in 0..searches {
        // Search for values in the opposite order to how they were inserted
        let value_i = searches - i - 1;
        let value = values.get(value_i as i64);
        black_box(set.contains(&value));
    }
}

/// Runs many consecutive remove operations on a container
fn benchmark_removes<S: SortedSet>(values: &Values, set: &mut S, removes: usize) {
    for i in 0..removes {
        // Remove values in the opposite order to how they were inserted
        let value_i = removes - i - 1;
        let value = values.get(value_i as i64);
        black_box(set.remove(&value));
        // Should always yield `false` since the value has been removed
        black_box(set.remove(&value));
    }
}

pub fn bench_tree_insert(c: &mut Criterion) {
    const INSERTS: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(INSERTS) as u32);

    let mut group = c.benchmark_group("tree insert");
    for inserts in INSERTS {
        group.bench_with_input(BenchmarkId::new("FnvHashSet", inserts), inserts, |b, &inserts| {
            b.iter(|| benchmark_inserts::<FnvHashSet<i64>>(&values, inserts))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", inserts), inserts, |b, &inserts| {
            b.iter(|| benchmark_inserts::<BTreeSet<i64>>(&values, inserts))
        });
        group.bench_with_input(BenchmarkId::new("AvlTree", inserts), inserts, |b, &inserts| {
            b.iter(|| benchmark_inserts::<AvlTree<i64, i64>>(&values, inserts))
        });
    }
    group.finish();
}

pub fn bench_tree_search(c: &mut Criterion) {
    const SEARCHES: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(SEARCHES) as u32);

    let mut group = c.benchmark_group("tree search");
    for searches in SEARCHES {
        group.bench_with_input(BenchmarkId::new("FnvHashSet", searches), searches, |b, &searches| {
            let set: FnvHashSet<i64> = setup_filled(&values, searches);
            b.iter(|| benchmark_searches(&values, &set, searches))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", searches), searches, |b, &searches| {
            let set: BTreeSet<i64> = setup_filled(&values, searches);
            b.iter(|| benchmark_searches(&values, &set, searches))
        });
        group.bench_with_input(BenchmarkId::new("AvlTree", searches), searches, |b, &searches| {
            let set: AvlTree<i64, i64> = setup_filled(&values, searches);
            b.iter(|| benchmark_searches(&values, &set, searches))
        });
    }
    group.finish();
}

pub fn bench_tree_remove(c: &mut Criterion) {
    const REMOVES: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(REMOVES) as u32);

    let mut group = c.benchmark_group("tree remove");
    for removes in REMOVES {
        group.bench_with_input(BenchmarkId::new("FnvHashSet", removes), removes, |b, &removes| {
            let mut set: FnvHashSet<i64> = setup_filled(&values, removes);
            b.iter(|| benchmark_removes(&values, &mut set, removes))
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet", removes), removes, |b, &removes| {
            let mut set: BTreeSet<i64> = setup_filled(&values, removes);
            b.iter(|| benchmark_removes(&values, &mut set, removes))
        });
        group.bench_with_input(BenchmarkId::new("AvlTree", removes), removes, |b, &removes| {
            let mut set: AvlTree<i64, i64> = setup_filled(&values, removes);
            b.iter(|| benchmark_removes(&values, &mut set, removes))
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_tree_insert,
    bench_tree_search,
    bench_tree_remove,
);

criterion_main!(benches);
