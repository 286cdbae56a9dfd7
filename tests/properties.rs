use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigcraft::{
    InterpolationMode, ramp_signal, signal_addition, signal_multiplication, time_scale,
    time_scale_with, time_shift, trim_shift, unit_impulse, unit_step,
};

const TRIALS: usize = 200;

fn random_domain(rng: &mut StdRng) -> Vec<i64> {
    let len = rng.gen_range(0..64);
    (0..len).map(|_| rng.gen_range(-100..100)).collect()
}

fn random_samples(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

#[test]
fn test_step_is_one_exactly_for_nonnegative_indices() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..TRIALS {
        let n = random_domain(&mut rng);
        let step = unit_step(&n);
        assert_eq!(step.len(), n.len());
        for (&i, &x) in n.iter().zip(step.iter()) {
            assert_eq!(x == 1.0, i >= 0);
            assert!(x == 0.0 || x == 1.0);
        }
    }
}

#[test]
fn test_impulse_has_single_unit_at_origin() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..TRIALS {
        let start = rng.gen_range(-50..=0);
        let stop = rng.gen_range(1..50);
        let n: Vec<i64> = (start..stop).collect();
        let impulse = unit_impulse(&n);

        let nonzero: Vec<usize> = impulse
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x != 0.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(nonzero.len(), 1);
        assert_eq!(n[nonzero[0]], 0);
        assert_eq!(impulse[nonzero[0]], 1.0);
    }
}

#[test]
fn test_ramp_is_clamped_index() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..TRIALS {
        let n = random_domain(&mut rng);
        let ramp = ramp_signal(&n);
        for (&i, &x) in n.iter().zip(ramp.iter()) {
            assert_eq!(x, i.max(0) as f64);
        }
    }
}

#[test]
fn test_shift_then_trim_round_trips() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..TRIALS {
        let len = rng.gen_range(0..40);
        let samples = random_samples(&mut rng, len);
        let k: isize = rng.gen_range(-20..=20);

        let shifted = time_shift(&samples, k);
        assert_eq!(shifted.len(), samples.len() + k.unsigned_abs());
        assert_eq!(trim_shift(&shifted, k).unwrap(), samples);
    }
}

#[test]
fn test_delay_pads_front_with_zeros() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..TRIALS {
        let len = rng.gen_range(1..40);
        let samples = random_samples(&mut rng, len);
        let k: isize = rng.gen_range(0..=20);

        let shifted = time_shift(&samples, k);
        let pad = k as usize;
        assert!(shifted.as_slice()[..pad].iter().all(|&x| x == 0.0));
        assert_eq!(&shifted.as_slice()[pad..], samples.as_slice());
    }
}

#[test]
fn test_scale_length_is_floor_of_ratio() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..TRIALS {
        let len = rng.gen_range(0..100);
        let samples = random_samples(&mut rng, len);
        assert_eq!(time_scale(&samples, 2.0).unwrap().len(), len / 2);

        let k: usize = rng.gen_range(1..6);
        let expanded = time_scale(&samples, 1.0 / k as f64).unwrap();
        assert_eq!(expanded.len(), len * k);
        for (m, &x) in expanded.iter().enumerate() {
            assert_eq!(x, samples[m / k]);
        }
    }
}

#[test]
fn test_linear_scale_stays_within_signal_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..TRIALS {
        let len = rng.gen_range(1..50);
        let samples = random_samples(&mut rng, len);
        let k = rng.gen_range(0.1..4.0);

        let lo = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let scaled = time_scale_with(&samples, k, InterpolationMode::Linear).unwrap();
        assert!(scaled.iter().all(|&x| x >= lo - 1e-9 && x <= hi + 1e-9));
    }
}

#[test]
fn test_addition_and_multiplication_are_elementwise() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..TRIALS {
        let len = rng.gen_range(0..50);
        let a = random_samples(&mut rng, len);
        let b = random_samples(&mut rng, len);

        let sum = signal_addition(&a, &b).unwrap();
        let product = signal_multiplication(&a, &b).unwrap();
        for i in 0..len {
            assert_eq!(sum[i], a[i] + b[i]);
            assert_eq!(product[i], a[i] * b[i]);
        }
    }
}

#[test]
fn test_binary_operations_never_truncate() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..TRIALS {
        let len_a = rng.gen_range(0..30);
        let len_b = rng.gen_range(0..30);
        if len_a == len_b {
            continue;
        }
        let a = random_samples(&mut rng, len_a);
        let b = random_samples(&mut rng, len_b);
        assert!(signal_addition(&a, &b).is_err());
        assert!(signal_multiplication(&a, &b).is_err());
    }
}
