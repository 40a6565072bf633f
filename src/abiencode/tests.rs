mod address;
mod simple;
mod structs;

use super::*;
use serde::Serialize;

use core::fmt::Debug;

/*
Add the following before a `serialize_and_compare` call to print the packed
output one chunk per line.
```
    let mut writer = PrintWriter {};
    to_writer(&d, &mut writer).unwrap();
```
*/
#[allow(dead_code)]
struct PrintWriter;

impl Writer for PrintWriter {
    fn write(&mut self, chunk: &[u8]) {
        println!("0x{}", hex::encode(chunk));
    }
}

/// Compares every chunk handed to the writer with the next expected line.
struct AssertWriter<'a, I>
where
    I: Iterator<Item = (&'a str, &'a str)>,
{
    expected_iter: I,
}

struct Chunk<'a>(&'a [u8]);

impl<'a> Debug for Chunk<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl<'a> PartialEq for Chunk<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<'a, I> Writer for AssertWriter<'a, I>
where
    I: Iterator<Item = (&'a str, &'a str)>,
{
    fn write(&mut self, chunk: &[u8]) {
        match self.expected_iter.next() {
            Some((expected, line)) => {
                // Print current expected line to make debugging easier.
                println!("{}", line);

                let expected = hex::decode(expected)
                    .expect("The expected input must be hex, without 0x.");

                // Wrapping both in Chunk makes assert_eq! format them as hex.
                assert_eq!(
                    Chunk(chunk),
                    Chunk(expected.as_slice()),
                    "chunk did not match the expected value"
                );
            }
            None => {
                panic!("Expected end of data, got {:?}", Chunk(chunk));
            }
        }
    }
}

macro_rules! expected_iter {
    ( $expected:expr ) => {
        // One chunk per non-empty line: hex data first, optionally followed by
        // whitespace and a free-form annotation.
        $expected
            .split("\n")
            .filter(|&line| !line.trim().is_empty())
            .map(|line| {
                let trimmed = line.trim();
                let data = trimmed.split_whitespace().next().unwrap_or(trimmed);
                (data, line)
            })
    };
}

/// Serialize `value` and check it chunk by chunk against `expected`.
///
/// Additionally checks that the concatenation equals [to_vec] and that
/// [to_hash] hashes exactly those bytes.
pub fn serialize_and_compare<T>(value: &T, expected: &str)
where
    T: Serialize,
{
    let mut writer = AssertWriter {
        expected_iter: expected_iter!(expected),
    };
    to_writer(&value, &mut writer).unwrap();

    // Make sure we're not missing a chunk.
    let next = writer.expected_iter.next();
    assert_eq!(next, None, "there are less chunks than expected.");

    let concatenated: Vec<u8> = expected_iter!(expected)
        .flat_map(|(data, _)| hex::decode(data).unwrap())
        .collect();
    assert_eq!(to_vec(value).unwrap(), concatenated);

    use sha3::{Digest, Keccak256};
    let direct: [u8; 32] = Keccak256::digest(&concatenated).into();
    assert_eq!(to_hash(value).unwrap().0, direct);
}
