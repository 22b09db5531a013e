//! Data codeword construction: mode indicator, character count, payload, terminator, padding

use crate::encoder::tables::{BYTE_MODE_INDICATOR, MODE_INDICATOR_BITS};
use crate::error::{EncodeError, Result, zeroed_buffer};

/// Alternating pad codewords appended after the terminator
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];
const TERMINATOR_BITS: usize = 4;

/// Append-only MSB-first bit buffer with a fixed byte capacity.
pub struct BitBuffer {
    bytes: Vec<u8>,
    bit_length: usize,
}

impl BitBuffer {
    /// Empty buffer holding at most `capacity_bytes` bytes
    pub fn with_capacity(capacity_bytes: usize) -> Result<Self> {
        Ok(Self {
            bytes: zeroed_buffer(capacity_bytes)?,
            bit_length: 0,
        })
    }

    /// Bits written so far
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Fixed capacity in bits
    pub fn capacity_bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Append the low `count` bits of `value`, most significant first.
    /// Rejects the whole append if it would overflow the capacity.
    pub fn append_bits(&mut self, value: u32, count: usize) -> Result<()> {
        if count > 24 {
            return Err(EncodeError::InvalidArgument("at most 24 bits per append"));
        }
        if self.bit_length + count > self.capacity_bits() {
            return Err(EncodeError::CapacityExceeded {
                length: (self.bit_length + count).div_ceil(8),
                capacity: self.bytes.len(),
            });
        }
        for bit in (0..count).rev() {
            if (value >> bit) & 1 != 0 {
                self.bytes[self.bit_length / 8] |= 0x80 >> (self.bit_length % 8);
            }
            self.bit_length += 1;
        }
        Ok(())
    }

    /// Whole backing buffer; unwritten bits are zero
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Build exactly `data_capacity` data codewords holding `payload` as one byte-mode segment.
pub fn build_data_codewords(
    payload: &[u8],
    data_capacity: usize,
    char_count_bits: usize,
) -> Result<Vec<u8>> {
    let count_limit = 1usize
        .checked_shl(char_count_bits as u32)
        .ok_or(EncodeError::InvalidArgument("character count field too wide"))?;
    if payload.len() >= count_limit {
        return Err(EncodeError::CapacityExceeded {
            length: payload.len(),
            capacity: count_limit - 1,
        });
    }

    let mut buffer = BitBuffer::with_capacity(data_capacity)?;
    buffer.append_bits(BYTE_MODE_INDICATOR, MODE_INDICATOR_BITS)?;
    buffer.append_bits(payload.len() as u32, char_count_bits)?;
    for &byte in payload {
        buffer.append_bits(byte as u32, 8)?;
    }

    // Terminator is shortened when fewer than four bits remain
    let remaining = buffer.capacity_bits() - buffer.bit_length();
    buffer.append_bits(0, remaining.min(TERMINATOR_BITS))?;

    let partial = buffer.bit_length() % 8;
    if partial != 0 {
        buffer.append_bits(0, 8 - partial)?;
    }

    for pad in PAD_CODEWORDS.iter().cycle() {
        if buffer.bit_length() >= buffer.capacity_bits() {
            break;
        }
        buffer.append_bits(*pad as u32, 8)?;
    }

    Ok(buffer.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_bits_msb_first() {
        let mut buffer = BitBuffer::with_capacity(2).unwrap();
        buffer.append_bits(0b0100, 4).unwrap();
        buffer.append_bits(0b1010_1010, 8).unwrap();
        assert_eq!(buffer.bit_length(), 12);
        assert_eq!(buffer.into_bytes(), vec![0x4A, 0xA0]);
    }

    #[test]
    fn test_append_rejects_overflow() {
        let mut buffer = BitBuffer::with_capacity(1).unwrap();
        buffer.append_bits(0x7F, 7).unwrap();
        assert!(matches!(
            buffer.append_bits(0b11, 2),
            Err(EncodeError::CapacityExceeded { .. })
        ));
        // Rejected append leaves the buffer untouched
        assert_eq!(buffer.bit_length(), 7);
        buffer.append_bits(1, 1).unwrap();
        assert_eq!(buffer.into_bytes(), vec![0xFF]);
    }

    #[test]
    fn test_hello_version1() {
        let codewords = build_data_codewords(b"HELLO", 19, 8).unwrap();
        assert_eq!(codewords.len(), 19);
        // 0100 | 00000101 | 'H' 'E' 'L' 'L' 'O' | 0000
        assert_eq!(
            &codewords[..7],
            &[0x40, 0x54, 0x84, 0x54, 0xC4, 0xC4, 0xF0]
        );
        // Padding alternates 0xEC / 0x11
        assert_eq!(&codewords[7..11], &[0xEC, 0x11, 0xEC, 0x11]);
        assert_eq!(codewords[18], 0x11);
    }

    #[test]
    fn test_sixteen_bit_length_field() {
        let payload: Vec<u8> = (0..300).map(|i| (i & 0xFF) as u8).collect();
        // Version 10-L holds 274 data codewords
        assert!(matches!(
            build_data_codewords(&payload, 274, 8),
            Err(EncodeError::CapacityExceeded { .. })
        ));
        // Version 11-L holds 324
        let codewords = build_data_codewords(&payload, 324, 16).unwrap();
        assert_eq!(codewords[0], 0x40 | ((300 >> 12) & 0x0F) as u8);
        assert_eq!(codewords[1], ((300 >> 4) & 0xFF) as u8);
        assert_eq!(codewords[2] & 0xF0, ((300 & 0x0F) << 4) as u8);
    }

    #[test]
    fn test_terminator_fills_last_nibble() {
        // 4 + 8 + 17*8 = 148 bits, 4 bits short of version 1-L's 152
        let payload = [0xFFu8; 17];
        let codewords = build_data_codewords(&payload, 19, 8).unwrap();
        assert_eq!(codewords.len(), 19);
        assert_eq!(codewords[18], 0xF0);
    }

    #[test]
    fn test_payload_too_large_for_capacity() {
        let payload = [0u8; 18];
        assert!(matches!(
            build_data_codewords(&payload, 19, 8),
            Err(EncodeError::CapacityExceeded { .. })
        ));
    }
}
