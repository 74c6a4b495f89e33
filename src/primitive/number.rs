//! Representation of numbers.
//!
//! Numbers are signed 64-bit integers. Arithmetic wraps on overflow, as
//! fixed-width machine arithmetic does.

use std::{fmt, ops};


#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Number(i64);


impl Number {
    pub fn new(val: i64) -> Self {
        Number(val)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Integer division truncating toward zero; None for a zero divisor.
    pub fn checked_div(self, other: Self) -> Option<Self> {
        if other.0 == 0 {
            None
        } else {
            Some(Number(self.0.wrapping_div(other.0)))
        }
    }

    pub fn abs(self) -> Self {
        Number(self.0.wrapping_abs())
    }
}


impl ops::AddAssign for Number {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.wrapping_add(other.0);
    }
}

impl ops::SubAssign for Number {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.wrapping_sub(other.0);
    }
}

impl ops::MulAssign for Number {
    fn mul_assign(&mut self, other: Self) {
        self.0 = self.0.wrapping_mul(other.0);
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


impl_try_from!(Number => Number);
