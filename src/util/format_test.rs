use super::*;

#[test]
fn group_thousands_leaves_short_numbers_alone() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(7), "7");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn group_thousands_inserts_commas_every_three_digits() {
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(12_345), "12,345");
    assert_eq!(group_thousands(123_456), "123,456");
    assert_eq!(group_thousands(41_000_000), "41,000,000");
    assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
}

#[test]
fn to_khr_multiplies_by_rate() {
    assert_eq!(to_khr(10_000, 4100), 41_000_000);
    assert_eq!(to_khr(0, 4100), 0);
}

#[test]
fn to_khr_saturates() {
    assert_eq!(to_khr(u64::MAX, 2), u64::MAX);
}
