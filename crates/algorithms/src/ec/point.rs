//! Affine points on a binary curve

use super::curve::Curve;
use crate::error::Result;
use crate::gf2m::FieldElement;

/// A point on y² + xy = x³ + ax² + b in affine coordinates
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The group identity
    Infinity,
    /// A finite point
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// Build a finite point without checking the curve equation
    pub fn affine(x: FieldElement, y: FieldElement) -> Self {
        Point::Affine { x, y }
    }

    /// Check if this point is the identity element
    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The x-coordinate of a finite point
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The y-coordinate of a finite point
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Check y² + xy == x³ + ax² + b; infinity is always on the curve
    pub fn is_on_curve(&self, curve: &Curve) -> bool {
        let (x, y) = match self {
            Point::Infinity => return true,
            Point::Affine { x, y } => (x, y),
        };
        let f = curve.field();

        let x2 = f.square(x);
        let lhs = f.add(&f.square(y), &f.mul(x, y));
        let rhs = f.add(&f.add(&f.mul(&x2, x), &f.mul(curve.a(), &x2)), curve.b());
        lhs == rhs
    }

    /// -P = (x, x + y)
    pub fn negate(&self, curve: &Curve) -> Point {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: curve.field().add(x, y),
            },
        }
    }

    /// 2P
    ///
    /// A point with x = 0 is its own negative, so its double is infinity.
    pub fn double(&self, curve: &Curve) -> Result<Point> {
        let (x, y) = match self {
            Point::Affine { x, y } if !x.is_zero() => (x, y),
            _ => return Ok(Point::Infinity),
        };
        let f = curve.field();

        // λ = y/x + x
        let lambda = f.add(&f.div(y, x)?, x);

        // x₃ = λ² + λ + a
        let x3 = f.add(&f.add(&f.square(&lambda), &lambda), curve.a());

        // y₃ = x² + λx₃ + x₃
        let y3 = f.add(&f.add(&f.square(x), &f.mul(&lambda, &x3)), &x3);

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// P + Q
    pub fn add(&self, other: &Point, curve: &Curve) -> Result<Point> {
        let ((x1, y1), (x2, y2)) = match (self, other) {
            (Point::Infinity, _) => return Ok(other.clone()),
            (_, Point::Infinity) => return Ok(self.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 {
            if y1 != y2 {
                // Q = -P
                return Ok(Point::Infinity);
            }
            return self.double(curve);
        }

        let f = curve.field();
        let dx = f.add(x1, x2);
        let dy = f.add(y1, y2);

        // λ = (y₁ + y₂) / (x₁ + x₂)
        let lambda = f.mul(&dy, &f.inv(&dx)?);

        // x₃ = λ² + λ + x₁ + x₂ + a
        let x3 = f.add(&f.add(&f.add(&f.square(&lambda), &lambda), &dx), curve.a());

        // y₃ = λ(x₁ + x₃) + x₃ + y₁
        let y3 = f.add(&f.add(&f.mul(&lambda, &f.add(x1, &x3)), &x3), y1);

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// kP with the curve's configured algorithm
    pub fn mul(&self, k: &FieldElement, curve: &Curve) -> Result<Point> {
        curve.scalar_multiplication().multiply(k, self, curve)
    }
}
