//! GF(256) arithmetic for QR Reed-Solomon codes
//! Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D), generator alpha = 2

use std::sync::OnceLock;

const GF_SIZE: usize = 256;
const GF_PRIMITIVE_POLYNOMIAL: u16 = 0x11D;

struct Tables {
    /// alpha^i, duplicated past index 255 so `exp[log a + log b]` needs no reduction
    exp: [u8; GF_SIZE * 2],
    log: [u8; GF_SIZE],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> Tables {
    let mut exp = [0u8; GF_SIZE * 2];
    let mut log = [0u8; GF_SIZE];

    let mut value: u16 = 1;
    for i in 0..GF_SIZE - 1 {
        exp[i] = value as u8;
        log[value as usize] = i as u8;
        value <<= 1;
        if value & GF_SIZE as u16 != 0 {
            value ^= GF_PRIMITIVE_POLYNOMIAL;
        }
    }
    for i in GF_SIZE - 1..GF_SIZE * 2 {
        exp[i] = exp[i - (GF_SIZE - 1)];
    }

    Tables { exp, log }
}

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// Field product of `a` and `b`
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        // log sums stay below 510, inside the duplicated exp table
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    /// alpha^n
    pub fn power_of_two(n: usize) -> u8 {
        tables().exp[n % (GF_SIZE - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_log_known_values() {
        assert_eq!(Gf256::power_of_two(0), 1);
        assert_eq!(Gf256::power_of_two(7), 128);
        assert_eq!(Gf256::power_of_two(8), 29);
        assert_eq!(Gf256::power_of_two(25), 3);
        assert_eq!(Gf256::power_of_two(254), 142);
        assert_eq!(tables().log[3], 25);
    }

    #[test]
    fn test_power_of_two_wraps() {
        assert_eq!(Gf256::power_of_two(255), 1);
        assert_eq!(Gf256::power_of_two(256), 2);
        assert_eq!(Gf256::power_of_two(260), Gf256::power_of_two(5));
    }

    #[test]
    fn test_mul_basic() {
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::mul(1, 123), 123);
        assert_eq!(Gf256::mul(2, 128), 29);
        // Commutative
        assert_eq!(Gf256::mul(0x53, 0xCA), Gf256::mul(0xCA, 0x53));
    }

    #[test]
    fn test_mul_matches_shift_and_add() {
        fn slow_mul(mut a: u8, mut b: u8) -> u8 {
            let mut product = 0u8;
            while b != 0 {
                if b & 1 != 0 {
                    product ^= a;
                }
                let carry = a & 0x80 != 0;
                a <<= 1;
                if carry {
                    a ^= (GF_PRIMITIVE_POLYNOMIAL & 0xFF) as u8;
                }
                b >>= 1;
            }
            product
        }

        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(11) {
                assert_eq!(Gf256::mul(a, b), slow_mul(a, b), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_tables_are_idempotent() {
        let first = build_tables();
        let second = build_tables();
        assert_eq!(first.exp, second.exp);
        assert_eq!(first.log, second.log);
        assert_eq!(tables().exp[..], first.exp[..]);
    }
}
