use crate::bench_harness::fill_seeded;
use crate::radix_key::KeyOrder;
use block_pseudorand::block_rand;

/// Random keys over the full 32-bit range, with half shifted right and half shifted left by
/// `shift` to skew the digit distribution.
pub fn gen_inputs(n: usize, shift: u32) -> Vec<i32> {
    let mut inputs: Vec<u32> = block_rand(n);

    inputs[0..(n / 2)].iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].iter_mut().for_each(|v| *v <<= shift);

    inputs.into_iter().map(|v| v as i32).collect()
}

/// Non-negative 31-bit keys, reproducible from `seed`.
pub fn gen_seeded_inputs(n: usize, seed: u64) -> Vec<i32> {
    let mut inputs = vec![0i32; n];
    fill_seeded(&mut inputs, seed);

    inputs
}

pub fn gen_input_set(shift: u32) -> Vec<Vec<i32>> {
    let n = 200_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 32)..(half + 32)].to_vec(),
        inputs[(half - 32)..(half + 33)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

/// Sorts a copy of `inputs` by the unsigned key `order` defines. For `KeyOrder::Signed` this
/// is plain `i32` order.
pub fn expected_order(inputs: &[i32], order: KeyOrder) -> Vec<i32> {
    let mut expected = inputs.to_vec();
    expected.sort_unstable_by_key(|v| order.sort_key(*v));

    expected
}

pub fn validate_sort<F>(mut inputs: Vec<i32>, order: KeyOrder, sort_fn: F)
where
    F: Fn(&mut [i32]),
{
    let expected = expected_order(&inputs, order);

    sort_fn(&mut inputs);

    assert_eq!(inputs, expected);
}

pub fn sort_comparison_suite<F>(shift: u32, order: KeyOrder, sort_fn: F)
where
    F: Fn(&mut [i32]),
{
    let input_set = gen_input_set(shift);

    for s in input_set {
        validate_sort(s, order, &sort_fn);
    }
}

pub fn validate_i32_patterns<F>(order: KeyOrder, sort_fn: F)
where
    F: Fn(&mut [i32]),
{
    let input_sets: Vec<Vec<i32>> = vec![
        vec![i32::MAX; 128],
        vec![i32::MIN; 128],
        vec![-1; 128],
        (0..10_000).collect(),
        (0..10_000).rev().collect(),
        (-5_000..5_000).rev().collect(),
        gen_inputs(128, 0),
        gen_inputs(128_000, 0),
        gen_inputs(4, 0),
    ];

    let masks: [u32; 12] = [
        0xFFFF_FF00,
        0xFFFF_00FF,
        0xFF00_FFFF,
        0x00FF_FFFF,
        0x0000_FFFF,
        0xFFFF_0000,
        0b10000000000000000000000000000000,
        0b00000000000000000000000000000001,
        0b11111111111111111111111111111110,
        0b01111111111111111111111111111111,
        0b10101010101010101010101010101010,
        0b01010101010101010101010101010101,
    ];

    for inputs in input_sets.iter() {
        validate_sort(inputs.clone(), order, &sort_fn);

        // Empty levels
        for mask in masks {
            validate_sort(
                inputs.iter().map(|v| *v & mask as i32).collect(),
                order,
                &sort_fn,
            );
        }
    }
}
