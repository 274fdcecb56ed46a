//! Conversion between byte strings and bit sequences.
//!
//! Bytes are laid out least-significant bit first: `b'A'` (0x41) becomes
//! `[true, false, false, false, false, false, true, false]`.

const BITS_PER_BYTE: usize = 8;

/// Expands every byte into its 8 bits, least-significant first.
pub fn encode(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * BITS_PER_BYTE);
    for &byte in bytes {
        bits.extend((0..BITS_PER_BYTE).map(|shift| (byte >> shift) & 1 == 1));
    }
    bits
}

/// Packs bits back into bytes, least-significant first.
///
/// A trailing group of fewer than 8 bits is treated as if padded with zeros.
pub fn decode(bits: &[bool]) -> Vec<u8> {
    bits.chunks(BITS_PER_BYTE)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (shift, &bit)| byte | (u8::from(bit) << shift))
        })
        .collect()
}

/// Input bits consumed once, left to right. Reads past the end yield `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
    position: usize,
}

impl BitStream {
    pub fn new(bits: Vec<bool>) -> Self {
        BitStream { bits, position: 0 }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(encode(bytes))
    }

    pub fn next_bit(&mut self) -> bool {
        match self.bits.get(self.position) {
            Some(&bit) => {
                self.position += 1;
                bit
            }
            None => false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boolf_test_utils::random_bytes;

    #[test]
    fn test_encode_is_lsb_first() {
        assert_eq!(
            encode(b"A"),
            vec![true, false, false, false, false, false, true, false]
        );
        assert_eq!(encode(&[0x80, 0x01]).len(), 16);
        assert!(encode(&[0x80])[7]);
        assert!(encode(b"").is_empty());
    }

    #[test]
    fn test_decode_pads_short_trailing_group() {
        assert_eq!(decode(&[]), Vec::<u8>::new());
        assert_eq!(decode(&[true]), vec![1]);
        assert_eq!(decode(&[false, true, true]), vec![6]);
        // One full byte followed by a single set bit
        let mut bits = encode(b"Z");
        bits.push(true);
        assert_eq!(decode(&bits), vec![b'Z', 1]);
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(decode(&encode(b"")), b"");
        assert_eq!(decode(&encode(b"Hello, world!\n")), b"Hello, world!\n");

        let all_bytes: Vec<u8> = (0..=u8::MAX).collect();
        assert_eq!(decode(&encode(&all_bytes)), all_bytes);

        let random = random_bytes(4096);
        assert_eq!(decode(&encode(&random)), random);
    }

    #[test]
    fn test_bit_stream_yields_false_after_exhaustion() {
        let mut stream = BitStream::from_bytes(&[0xFF]);
        assert_eq!(stream.remaining(), 8);
        for _ in 0..8 {
            assert!(stream.next_bit());
        }
        assert!(stream.is_exhausted());
        for _ in 0..100 {
            assert!(!stream.next_bit());
        }
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_empty_bit_stream() {
        let mut stream = BitStream::default();
        assert!(stream.is_exhausted());
        assert!(!stream.next_bit());
    }
}
