use std::{fmt, ops};

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError, format::number::format_number, interpreter::evaluator::core::EvalResult,
};

/// `0 + 0i`.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1 + 0i`.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The imaginary unit bound to the constant `i`.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// A value `real + imaginary·i`.
///
/// Produced by the imaginary literal `i`, by `3i` style literals and by any
/// operation whose result leaves the real line (`sqrt(-4)`, `log(-1)`).
/// Results are never folded back into reals, even when the imaginary part
/// ends up zero.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    pub real:      f64,
    pub imaginary: f64,
}

/// Both parts go through [`format_number`]. Zero parts are left out and an
/// imaginary part of magnitude one is written as a bare `i`.
///
/// ```
/// use calcboard::interpreter::value::complex::ComplexNumber;
///
/// assert_eq!(ComplexNumber::new(0.0, 2.0).to_string(), "2i");
/// assert_eq!(ComplexNumber::new(1.0, -1.0).to_string(), "1 - i");
/// assert_eq!(ComplexNumber::new(0.5, 0.0).to_string(), "0.5");
/// ```
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = |magnitude: f64| {
            if magnitude == 1.0 {
                String::new()
            } else {
                format_number(magnitude)
            }
        };

        match (self.real, self.imaginary) {
            (real, 0.0) => f.write_str(&format_number(real)),
            (0.0, im) if im < 0.0 => write!(f, "-{}i", coefficient(-im)),
            (0.0, im) => write!(f, "{}i", coefficient(im)),
            (real, im) => {
                let sign = if im < 0.0 { '-' } else { '+' };
                write!(f, "{} {sign} {}i", format_number(real), coefficient(im.abs()))
            },
        }
    }
}

impl ComplexNumber {
    /// ```
    /// use calcboard::interpreter::value::complex::ComplexNumber;
    ///
    /// let z = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!((z.real, z.imaginary), (5.0, -1.0));
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// The point at distance `radius` from the origin and angle `angle`.
    fn from_polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    /// Modulus `|z|`.
    ///
    /// ```
    /// use calcboard::interpreter::value::complex::ComplexNumber;
    /// assert_eq!(ComplexNumber::new(3.0, 4.0).abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Principal argument, in `(-π, π]`.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    #[must_use]
    pub const fn conj(&self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// `z ^ n` for an integral exponent, by binary exponentiation.
    ///
    /// Negative exponents invert the positive power, so zero raised to a
    /// negative power is a division by zero. `z ^ 0` is `1` for every `z`.
    ///
    /// ```
    /// use calcboard::interpreter::value::complex::{ComplexNumber, ONE};
    ///
    /// let i = ComplexNumber::new(0.0, 1.0);
    /// assert_eq!(i.checked_powi(0, 1).unwrap(), ONE);
    /// assert_eq!(i.checked_powi(2, 1).unwrap(), ComplexNumber::new(-1.0, 0.0));
    /// assert!(ComplexNumber::new(0.0, 0.0).checked_powi(-1, 1).is_err());
    /// ```
    pub fn checked_powi(self, exp: i64, line: usize) -> EvalResult<Self> {
        if exp < 0 && self.is_zero() {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let mut remaining = exp.unsigned_abs();
        let mut square = self;
        let mut product = ONE;
        while remaining != 0 {
            if remaining & 1 == 1 {
                product = product * square;
            }
            square = square * square;
            remaining >>= 1;
        }

        Ok(if exp < 0 { ONE / product } else { product })
    }

    /// `z ^ x` for a real exponent, through the polar form.
    ///
    /// ```
    /// use calcboard::interpreter::value::complex::ComplexNumber;
    ///
    /// let root = ComplexNumber::new(-4.0, 0.0).powf(0.5);
    /// assert!(root.real.abs() < 1e-10);
    /// assert!((root.imaginary - 2.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn powf(self, exp: f64) -> Self {
        if self.is_zero() {
            return if exp == 0.0 { ONE } else { ZERO };
        }
        Self::from_polar(self.abs().powf(exp), self.arg() * exp)
    }

    /// `z ^ w` as `exp(w · ln z)`.
    #[must_use]
    pub fn powc(self, exp: Self) -> Self {
        if self.is_zero() {
            return if exp.is_zero() { ONE } else { ZERO };
        }
        (exp * self.ln()).exp()
    }

    /// Principal square root; the imaginary part takes the sign of `z`'s.
    ///
    /// ```
    /// use calcboard::interpreter::value::complex::ComplexNumber;
    ///
    /// let s = ComplexNumber::new(-9.0, 0.0).sqrt();
    /// assert_eq!((s.real, s.imaginary), (0.0, 3.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let modulus = self.abs();
        Self::new(f64::midpoint(modulus, self.real).sqrt(),
                  ((modulus - self.real) / 2.0).sqrt().copysign(self.imaginary))
    }

    #[must_use]
    pub fn exp(self) -> Self {
        Self::from_polar(self.real.exp(), self.imaginary)
    }

    /// Principal natural logarithm, `ln|z| + i·arg z`.
    ///
    /// ```
    /// use calcboard::interpreter::value::complex::ComplexNumber;
    ///
    /// let ln = ComplexNumber::new(-1.0, 0.0).ln();
    /// assert_eq!(ln.real, 0.0);
    /// assert_eq!(ln.imaginary, std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    // Circular and hyperbolic functions expanded over the real and imaginary
    // parts.

    #[must_use]
    pub fn sin(self) -> Self {
        let (x, y) = (self.real, self.imaginary);
        Self::new(x.sin() * y.cosh(), x.cos() * y.sinh())
    }

    #[must_use]
    pub fn cos(self) -> Self {
        let (x, y) = (self.real, self.imaginary);
        Self::new(x.cos() * y.cosh(), -(x.sin() * y.sinh()))
    }

    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    #[must_use]
    pub fn sinh(self) -> Self {
        let (x, y) = (self.real, self.imaginary);
        Self::new(x.sinh() * y.cos(), x.cosh() * y.sin())
    }

    #[must_use]
    pub fn cosh(self) -> Self {
        let (x, y) = (self.real, self.imaginary);
        Self::new(x.cosh() * y.cos(), x.sinh() * y.sin())
    }

    #[must_use]
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

/// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b, c, d) = (self.real, self.imaginary, rhs.real, rhs.imaginary);
        Self::new(a.mul_add(c, -(b * d)), a.mul_add(d, b * c))
    }
}

/// Multiplies by the conjugate of `rhs` and divides by `|rhs|²`. A zero
/// divisor yields non-finite parts; callers that need an error check
/// [`ComplexNumber::is_zero`] first.
impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let (a, b, c, d) = (self.real, self.imaginary, rhs.real, rhs.imaginary);
        let norm = c.mul_add(c, d * d);
        Self::new(a.mul_add(c, b * d) / norm, b.mul_add(c, -(a * d)) / norm)
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

/// Part-wise equality in which `NaN` equals `NaN`, so values holding `NaN`
/// can still be compared in tests and map lookups.
impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        (OrderedFloat(self.real), OrderedFloat(self.imaginary))
        == (OrderedFloat(other.real), OrderedFloat(other.imaginary))
    }
}

impl Eq for ComplexNumber {}
