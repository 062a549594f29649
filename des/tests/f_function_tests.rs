use des::crypto::f_function::round_function;

#[test]
fn test_round_function_is_deterministic() {
    let a = round_function(0xCAFE_BABE, 0x0000_1234_5678_9ABC);
    let b = round_function(0xCAFE_BABE, 0x0000_1234_5678_9ABC);
    assert_eq!(a, b);
}

#[test]
fn test_zero_inputs_do_not_collapse_to_zero() {
    // Нулевой вход проходит через ненулевые строки S-блоков.
    assert_ne!(round_function(0, 0), 0);
}

#[test]
fn test_subkey_changes_output() {
    let base = round_function(0, 0);
    assert_ne!(base, round_function(0, 1));
    assert_ne!(base, round_function(0, (1u64 << 48) - 1));
}

#[test]
fn test_half_block_changes_output() {
    let subkey = 0x0000_5555_AAAA_5555;
    let outputs: Vec<u32> = (0..16u32).map(|r| round_function(r, subkey)).collect();
    let mut distinct = outputs.clone();
    distinct.sort_unstable();
    distinct.dedup();
    // Шестнадцать соседних входов не должны склеиться в одно значение.
    assert!(distinct.len() > 1);
}
