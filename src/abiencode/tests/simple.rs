use super::types::U256;
use super::*;

#[test]
fn u64() {
    /*
    ```solidity
        function u64() public pure returns(bytes memory) {
            uint64 d = 0x1337000012341111;
            return abi.encodePacked(d);
        }
    ```
    */

    let d: u64 = 0x1337000012341111;

    let expected = "
    1337000012341111
    ";

    serialize_and_compare(&d, expected)
}

#[test]
fn u8_and_bool() {
    let d = (0x7fu8, true, false);

    let expected = "
    7f
    01
    00
    ";

    serialize_and_compare(&d, expected)
}

#[test]
fn negative_i32() {
    let d: i32 = -2;

    let expected = "
    fffffffe
    ";

    serialize_and_compare(&d, expected)
}

#[test]
fn u256_is_a_full_word() {
    let expected = "
    0000000000000000000000000000000000000000000000000000000000000001
    ";
    serialize_and_compare(&U256::one(), expected);

    let expected = "
    ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff
    ";
    serialize_and_compare(&U256::MAX, expected);
}

#[test]
fn string() {
    let expected = "
    48656c6c6f
    ";
    serialize_and_compare(&"Hello", expected);
}

#[test]
fn empty_string_writes_nothing() {
    assert_eq!(to_vec("").unwrap(), Vec::<u8>::new());
}

#[test]
fn string_hash_matches_keccak_of_text() {
    // keccak256(abi.encodePacked("hello")) == keccak256("hello")
    assert_eq!(
        format!("{:?}", to_hash("hello").unwrap()),
        "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
    );
}
