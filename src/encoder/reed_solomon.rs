//! Reed-Solomon error correction encoding for QR codes
//! Generator polynomial has roots alpha^0 .. alpha^(k-1) over GF(256)

use crate::encoder::gf256::Gf256;
use crate::error::{Result, zeroed_buffer};

/// Generator polynomial of degree `degree`, coefficients in descending order.
/// `result[0]` is the leading coefficient (always 1).
pub fn compute_generator_polynomial(degree: usize) -> Result<Vec<u8>> {
    let mut result = zeroed_buffer(degree + 1)?;
    result[0] = 1;

    // Multiply by (x - alpha^d) = (x + alpha^d) for each root
    for d in 0..degree {
        let root = Gf256::power_of_two(d);
        for i in (1..=d + 1).rev() {
            result[i] ^= Gf256::mul(result[i - 1], root);
        }
    }

    Ok(result)
}

/// Reed-Solomon encoder for a fixed number of parity codewords
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Encoder producing `num_ecc_codewords` parity bytes per block
    pub fn new(num_ecc_codewords: usize) -> Result<Self> {
        Ok(Self {
            generator: compute_generator_polynomial(num_ecc_codewords)?,
        })
    }

    /// Degree of the generator polynomial
    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len() - 1
    }

    /// Remainder of `data * x^k` divided by the generator polynomial
    pub fn compute_parity(&self, data: &[u8]) -> Result<Vec<u8>> {
        let k = self.num_ecc_codewords();
        let mut parity = zeroed_buffer(k)?;
        if k == 0 {
            return Ok(parity);
        }

        for &byte in data {
            let factor = byte ^ parity[0];
            parity.copy_within(1.., 0);
            parity[k - 1] = 0;
            for (slot, &coeff) in parity.iter_mut().zip(&self.generator[1..]) {
                *slot ^= Gf256::mul(coeff, factor);
            }
        }

        Ok(parity)
    }
}
