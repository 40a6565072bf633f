use super::types::{Address, Hash, U256};
use super::*;

#[derive(Serialize, Debug)]
struct Transfer {
    contract: Address,
    sender: Address,
    receiver: Address,
    nonce: U256,
    amount: U256,
}

#[test]
fn transfer_layout() {
    /*
    ```solidity
        abi.encodePacked(
            address(0x1111111111111111111111111111111111111111),
            address(0x2222222222222222222222222222222222222222),
            address(0x3333333333333333333333333333333333333333),
            uint256(1),
            uint256(1000000000000000000)
        )
    ```
    */
    let d = Transfer {
        contract: Address([0x11; 20]),
        sender: Address([0x22; 20]),
        receiver: Address([0x33; 20]),
        nonce: U256::one(),
        amount: U256::exp10(18),
    };

    let expected = "
    1111111111111111111111111111111111111111                          contract
    2222222222222222222222222222222222222222                          sender
    3333333333333333333333333333333333333333                          receiver
    0000000000000000000000000000000000000000000000000000000000000001  nonce
    0000000000000000000000000000000000000000000000000de0b6b3a7640000  amount
    ";

    serialize_and_compare(&d, expected);
    assert_eq!(to_vec(&d).unwrap().len(), 3 * 20 + 2 * 32);
    assert_eq!(
        to_hash(&d).unwrap(),
        Hash(
            <[u8; 32]>::try_from(
                hex::decode("5c09cbea8964c0161f649d173b21af767bfa45d513710cbe9ab2a2413f82963d")
                    .unwrap()
            )
            .unwrap()
        )
    );
}

#[test]
fn tuple_and_struct_agree() {
    let a = Address([0xab; 20]);
    let n = U256::from(42u64);

    #[derive(Serialize)]
    struct S {
        a: Address,
        n: U256,
    }
    #[derive(Serialize)]
    struct T(Address, U256);

    let from_struct = to_vec(&S { a, n }).unwrap();
    assert_eq!(to_vec(&(a, n)).unwrap(), from_struct);
    assert_eq!(to_vec(&T(a, n)).unwrap(), from_struct);
}

#[test]
fn unsupported_types() {
    #[derive(Serialize)]
    enum E {
        A,
    }

    assert!(matches!(to_vec(&1.5f64), Err(Error::TypeNotRepresentable(_))));
    assert!(matches!(to_vec(&'x'), Err(Error::TypeNotYetSupported(_))));
    assert!(matches!(to_vec(&None::<u8>), Err(Error::TypeNotRepresentable(_))));
    assert!(matches!(to_vec(&()), Err(Error::TypeNotRepresentable(_))));
    assert!(matches!(to_vec(&E::A), Err(Error::TypeNotRepresentable(_))));
    assert!(matches!(to_vec(&vec![1u8, 2]), Err(Error::TypeNotYetSupported(_))));
}
