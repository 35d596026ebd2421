use quantsort::prelude::*;
use quantsort::quantile::bucket_count;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn test_basic_sort() {
    let mut rng = StdRng::seed_from_u64(42);
    let sorted = quantsort_with_rng(&[5, 3, 1, 4, 2], &mut rng).unwrap();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_partition_of_small_input() {
    // n = 5: two buckets, whole input sampled, boundary at sorted index 2
    let mut rng = StdRng::seed_from_u64(42);
    let buckets = QuantSorter::default()
        .partition(vec![5, 3, 1, 4, 2], &mut rng)
        .unwrap();

    assert_eq!(buckets.num_buckets(), 2);
    assert_eq!(buckets.boundaries(), &[3]);
    assert_eq!(buckets.bucket(0), Some(&[3, 1, 2][..]));
    assert_eq!(buckets.bucket(1), Some(&[5, 4][..]));
    assert_eq!(buckets.into_sorted(false), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_all_equal_goes_to_lower_bucket() {
    let mut rng = StdRng::seed_from_u64(42);
    let buckets = QuantSorter::default()
        .partition(vec![2, 2, 2, 2], &mut rng)
        .unwrap();

    assert_eq!(buckets.boundaries(), &[2]);
    assert_eq!(buckets.loads(), vec![4, 0]);
    assert_eq!(buckets.into_sorted(false), vec![2, 2, 2, 2]);
}

#[test]
fn test_empty() {
    let input: Vec<i64> = vec![];
    let sorted = quantsort(&input).unwrap();
    assert!(sorted.is_empty());
}

#[test]
fn test_single_element() {
    assert_eq!(quantsort(&[7]).unwrap(), vec![7]);
    // Nothing to compare a lone NaN against
    let lone = quantsort(&[f64::NAN]).unwrap();
    assert!(lone[0].is_nan());
}

#[test]
fn test_already_sorted_is_unchanged() {
    let mut rng = StdRng::seed_from_u64(1);
    let input: Vec<u32> = (0..5_000).collect();
    let sorted = quantsort_with_rng(&input, &mut rng).unwrap();
    assert_eq!(sorted, input);
}

#[test]
fn test_reversed() {
    let mut rng = StdRng::seed_from_u64(1);
    let input: Vec<i32> = (0..2_000).rev().collect();
    let sorted = quantsort_with_rng(&input, &mut rng).unwrap();
    assert_eq!(sorted, (0..2_000).collect::<Vec<_>>());
}

#[test]
fn test_bucket_count_and_boundaries() {
    let mut rng = StdRng::seed_from_u64(9);
    for n in [2usize, 3, 4, 17, 100, 1_000, 12_345] {
        let input: Vec<u64> = (0..n).map(|_| rng.random_range(0..1_000)).collect();
        let buckets = QuantSorter::default().partition(input, &mut rng).unwrap();

        assert_eq!(buckets.num_buckets(), bucket_count(n));
        assert_eq!(buckets.num_buckets(), (n as f64).sqrt().floor() as usize);
        assert_eq!(buckets.boundaries().len(), buckets.num_buckets() - 1);
        assert!(is_sorted(buckets.boundaries()));
        assert_eq!(buckets.len(), n);
    }
}

#[test]
fn test_equal_to_boundary_never_splits() {
    let mut rng = StdRng::seed_from_u64(11);
    let input: Vec<u8> = (0..10_000).map(|_| rng.random_range(0..8)).collect();
    let buckets = QuantSorter::default().partition(input.clone(), &mut rng).unwrap();

    for value in 0..8u8 {
        let holders = (0..buckets.num_buckets())
            .filter(|&i| buckets.bucket(i).unwrap().contains(&value))
            .count();
        assert!(holders <= 1, "value {} split across {} buckets", value, holders);
    }

    let mut expected = input;
    expected.sort_unstable();
    assert_eq!(buckets.into_sorted(false), expected);
}

#[test]
fn test_fuzz_random() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..200 {
        let len = rng.random_range(0..3_000);
        let input: Vec<i64> = (0..len).map(|_| rng.random_range(-500..500)).collect();

        let mut expected = input.clone();
        expected.sort();

        let sorted = quantsort_with_rng(&input, &mut rng).unwrap();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn test_fuzz_random_mut() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..1_000 {
        let count = rng.random_range(0..20);
        let mut input: Vec<f32> = (0..count).map(|_| rng.random_range(-1.0..1.0)).collect();

        let mut expected = input.clone();
        expected.sort_by(f32::total_cmp);

        quantsort_mut(&mut input, &mut rng).unwrap();
        assert_eq!(input, expected);
    }
}

#[test]
fn test_vec_sort_moves_elements() {
    let mut rng = StdRng::seed_from_u64(8);
    let input: Vec<u128> = (0..3_000).map(|_| rng.random()).collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    assert_eq!(quantsort_vec(input, &mut rng).unwrap(), expected);
}

#[test]
fn test_floats_with_infinities_and_signed_zero() {
    let mut rng = StdRng::seed_from_u64(2);
    let input = vec![1.0, f64::INFINITY, -0.0, 0.0, f64::NEG_INFINITY, -3.5];
    let sorted = quantsort_with_rng(&input, &mut rng).unwrap();

    assert!(is_sorted(&sorted));
    assert_eq!(sorted[0], f64::NEG_INFINITY);
    assert_eq!(sorted[5], f64::INFINITY);
}

#[test]
fn test_nan_is_rejected() {
    let mut rng = StdRng::seed_from_u64(2);
    let err = quantsort_with_rng(&[1.0, 2.0, f64::NAN], &mut rng).unwrap_err();
    assert_eq!(err, SortError::IncomparableElement { index: 2 });
}

#[test]
fn test_failed_sort_leaves_slice_untouched() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut data = vec![3.0, f64::NAN, 1.0, 2.0];
    let before: Vec<u64> = data.iter().map(|x| x.to_bits()).collect();

    assert!(quantsort_mut(&mut data, &mut rng).is_err());

    let after: Vec<u64> = data.iter().map(|x| x.to_bits()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = QuantSorter::new(SortConfig::default().with_sample_fraction(-0.01)).unwrap_err();
    assert!(matches!(err, SortError::InvalidInput(_)));
}

#[test]
fn test_empty_sample_config_is_rejected() {
    let config = SortConfig::default()
        .with_min_sample_size(0)
        .with_sample_fraction(0.0);
    let err = QuantSorter::new(config).unwrap_err();
    assert!(matches!(err, SortError::InvalidInput(_)));

    // Smallest valid request still yields sqrt(n) buckets
    let sorter = QuantSorter::new(
        SortConfig::default()
            .with_min_sample_size(1)
            .with_sample_fraction(0.0),
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let input: Vec<i32> = (0..100).rev().collect();
    let buckets = sorter.partition(input, &mut rng).unwrap();
    assert_eq!(buckets.num_buckets(), 10);
    assert_eq!(buckets.boundaries().len(), 9);
    assert_eq!(buckets.into_sorted(false), (0..100).collect::<Vec<_>>());
}

#[test]
fn test_sub_sampling_config() {
    let config = SortConfig::default()
        .with_min_sample_size(64)
        .with_sample_fraction(0.001);
    let sorter = QuantSorter::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(21);

    let input: Vec<i32> = (0..50_000).map(|_| rng.random()).collect();
    let mut expected = input.clone();
    expected.sort_unstable();

    assert_eq!(sorter.sort(&input, &mut rng).unwrap(), expected);
}

#[test]
fn test_parallel_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(13);
    let input: Vec<f64> = (0..20_000).map(|_| rng.random::<f64>() * 1e6).collect();

    let sequential = QuantSorter::default();
    let parallel = QuantSorter::new(
        SortConfig::default()
            .with_parallel(true)
            .with_parallel_threshold(1),
    )
    .unwrap();

    let a = sequential.sort(&input, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = parallel.sort(&input, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
    assert!(is_sorted(&a));
}
