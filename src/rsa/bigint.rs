// RSA Big Integer Operations
// Number-theory helpers over num-bigint: gcd, modular inverse, modular power

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Greatest common divisor (Euclid).
///
/// `gcd(a, 0) == a` and `gcd(0, b) == b`.
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (gcd, x1, y1) = extended_gcd(b, &(a % b));
    let y = x1 - (a / b) * &y1;

    (gcd, y1, y)
}

/// Modular inverse of `e` modulo `phi`.
///
/// Returns the smallest `d` in `[2, phi)` with `(e * d) mod phi == 1`, or
/// `None` when that window holds no such value. The inverse is unique modulo
/// `phi`, so the extended Euclidean result only has to be reduced into
/// `[0, phi)` and rejected when it falls below 2. This gives exactly the
/// answer of [`mod_inverse_search`] without the scan.
pub fn mod_inverse(e: &RsaBigInt, phi: &RsaBigInt) -> Option<RsaBigInt> {
    if phi <= &from_u64(2) {
        return None;
    }

    let a = BigInt::from(e.clone());
    let m = BigInt::from(phi.clone());
    let (gcd, x, _) = extended_gcd(&a, &m);

    if !gcd.is_one() {
        return None;
    }

    let d = x.mod_floor(&m).to_biguint()?;
    if d <= RsaBigInt::one() {
        return None;
    }

    Some(d)
}

/// Modular inverse by linear search over `[2, phi)`.
///
/// Returns the first candidate `d` with `(e * d) mod phi == 1`.
pub fn mod_inverse_search(e: &RsaBigInt, phi: &RsaBigInt) -> Option<RsaBigInt> {
    let one = RsaBigInt::one();
    let mut d = from_u64(2);

    while &d < phi {
        if (e * &d) % phi == one {
            return Some(d);
        }
        d += 1u8;
    }

    None
}
