use super::types::Address;
use super::*;

#[test]
fn bare() {
    /*
    ```solidity
        function Address() public pure returns(bytes memory) {
            address d = 0x95222290DD7278Aa3Ddd389Cc1E1d165CC4BAfe5;
            return abi.encodePacked(d);
        }
    ```
    */

    // Random address from etherscan, do not use!
    let addr: Address = "0x95222290DD7278Aa3Ddd389Cc1E1d165CC4BAfe5".parse().unwrap();

    // No left padding in packed mode.
    let expected = "
95222290dd7278aa3ddd389cc1e1d165cc4bafe5
    ";

    serialize_and_compare(&addr, expected)
}

#[test]
fn in_container() {
    let addr: Address = "0x95222290DD7278Aa3Ddd389Cc1E1d165CC4BAfe5".parse().unwrap();

    #[derive(Serialize, Debug)]
    struct AddrContainer {
        a: Address,
        b: Address,
    }

    let d = AddrContainer {
        a: addr,
        b: Address([0x11; 20]),
    };

    let expected = "
95222290dd7278aa3ddd389cc1e1d165cc4bafe5  a
1111111111111111111111111111111111111111  b
    ";

    serialize_and_compare(&d, expected)
}
