//! GF(2^8) arithmetic
//!
//! Elements are bytes. Addition is XOR; multiplication goes through discrete
//! log / antilog tables for the generator 3 under the AES reduction
//! polynomial x^8 + x^4 + x^3 + x + 1. Both tables are built at compile time.

/// AES reduction polynomial x^8 + x^4 + x^3 + x + 1
const REDUCTION: u16 = 0x11b;

/// Multiplicative generator
const GENERATOR: u8 = 0x03;

/// Order of the multiplicative group
const ORDER: usize = 255;

/// `LOG[a]` is the discrete log of `a` base 3. `LOG[0]` is unused and holds 0xff.
pub(crate) static LOG: [u8; 256] = generate_log_table();

/// `EXP[i] = 3^i`, extended past 255 so that `LOG[a] + LOG[b]` indexes it
/// directly.
pub(crate) static EXP: [u8; 512] = generate_exp_table();

/// Multiply two elements without tables (compile time only)
const fn const_mul(a: u8, b: u8) -> u8 {
    let mut a = a as u16;
    let mut b = b;
    let mut result = 0u16;
    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    result as u8
}

const fn generate_exp_table() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut x = 1u8;
    let mut i = 0;
    while i < ORDER {
        table[i] = x;
        x = const_mul(x, GENERATOR);
        i += 1;
    }
    // 3^255 = 1, so the tail repeats the cycle
    while i < 512 {
        table[i] = table[i - ORDER];
        i += 1;
    }
    table
}

const fn generate_log_table() -> [u8; 256] {
    let exp = generate_exp_table();
    let mut table = [0u8; 256];
    table[0] = 0xff;
    let mut i = 0;
    while i < ORDER {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Field addition (XOR)
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field subtraction. Identical to [`add`] in characteristic 2.
#[inline]
pub fn sub(a: u8, b: u8) -> u8 {
    add(a, b)
}

/// Field multiplication
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    EXP[LOG[a as usize] as usize + LOG[b as usize] as usize]
}

/// Field division, `a * b^-1`.
///
/// `b` must be nonzero. Callers only divide by differences of distinct part
/// indices, so this never happens; the result for `b = 0` is meaningless.
#[inline]
pub fn div(a: u8, b: u8) -> u8 {
    mul(a, EXP[ORDER - LOG[b as usize] as usize])
}

/// Index of the highest nonzero coefficient at position >= 1 of the
/// polynomial `p`, or 0 if `p` is constant.
pub fn degree(p: &[u8]) -> usize {
    (1..p.len()).rev().find(|&i| p[i] != 0).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_match_reference_prefix() {
        assert_eq!(&EXP[..8], &[0x01, 0x03, 0x05, 0x0f, 0x11, 0x33, 0x55, 0xff]);
        assert_eq!(&LOG[..8], &[0xff, 0x00, 0x19, 0x01, 0x32, 0x02, 0x1a, 0xc6]);
        assert_eq!(EXP[254], 0xf6);
        assert_eq!(LOG[255], 0x07);
    }

    #[test]
    fn test_tables_are_inverse() {
        for a in 1..=255u8 {
            assert_eq!(EXP[LOG[a as usize] as usize], a, "exp(log({}))", a);
        }
        for i in 0..ORDER {
            assert_eq!(EXP[i], EXP[i + ORDER]);
        }
    }

    #[test]
    fn test_table_mul_matches_shift_and_add() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(mul(a, b), const_mul(a, b), "{} * {}", a, b);
            }
        }
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(add(100, 30), 122);
        assert_eq!(sub(100, 30), 122);
        assert_eq!(add(0xff, 0xff), 0);
    }

    #[test]
    fn test_mul_vectors() {
        assert_eq!(mul(90, 21), 254);
        assert_eq!(mul(133, 5), 167);
        assert_eq!(mul(0xb6, 0x53), 0x36);
        assert_eq!(mul(0, 21), 0);
        assert_eq!(mul(21, 0), 0);
    }

    #[test]
    fn test_div_vectors() {
        assert_eq!(div(90, 21), 189);
        assert_eq!(div(6, 55), 151);
        assert_eq!(div(22, 192), 138);
        assert_eq!(div(0, 192), 0);
    }

    #[test]
    fn test_degree() {
        assert_eq!(degree(&[1, 2]), 1);
        assert_eq!(degree(&[1, 2, 0]), 1);
        assert_eq!(degree(&[1, 2, 3]), 2);
        assert_eq!(degree(&[0, 0, 0]), 0);
        assert_eq!(degree(&[7]), 0);
        assert_eq!(degree(&[]), 0);
    }

    #[test]
    fn test_inverse() {
        for b in 1..=255u8 {
            assert_eq!(mul(b, div(1, b)), 1, "inverse failed for {}", b);
        }
    }
}
