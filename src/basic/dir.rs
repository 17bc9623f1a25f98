use rand::Rng;
use std::ops::Neg;
use Dir::*;

// matches the joystick encoding: U, D, L, R
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    D = 1,
    L = 2,
    R = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        // SAFETY: (num % 4) is between 0 and 3
        unsafe { std::mem::transmute(num % 4) }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from(rng.gen_range(0..4u8))
    }
}

#[test]
fn test_neg() {
    for (dir, opposite) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, opposite);
    }
}

#[test]
fn test_from_u8_wraps() {
    assert_eq!(Dir::from(0), U);
    assert_eq!(Dir::from(3), R);
    assert_eq!(Dir::from(4), U);
    assert_eq!(Dir::from(255), R);
}
