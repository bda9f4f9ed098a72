mod ops;

use std::fmt;

use crate::{
    error::{check_blend, Error, Result, Shape},
    kernel::{self, ScalarKernel, ZipKernel},
    traits::{clamp_unit, one_half, Number, One, Trig, Zero},
    vec4, Vector,
};

/// A quaternion consisting of 3 imaginary parts and a real part.
///
/// `x`, `y` and `z` are the coefficients of the imaginary units `i`, `j` and `k`, `w` is the real
/// part. Unit-length quaternions represent rotations in 3D space, see
/// [`Quaternion::from_axis_angle`] and [`Quaternion::rotate`].
///
/// Unlike [`Vector`] and [`Matrix`][crate::Matrix], a quaternion is a plain `Copy` value.
/// [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when the element type implements
/// them, so slices of quaternions can be reinterpreted as slices of `[T; 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

impl<T: Zero + One> Quaternion<T> {
    /// The multiplicative identity `(0, 0, 0, 1)`.
    ///
    /// As a rotation, it leaves every vector unchanged.
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

impl<T: Zero> Quaternion<T> {
    /// The additive identity `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
}

impl<T> Quaternion<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Converts this quaternion into a 4-dimensional [`Vector`] `(x, y, z, w)`.
    pub fn into_vector(self) -> Vector<T> {
        vec4(self.x, self.y, self.z, self.w)
    }

    fn into_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    fn from_array([x, y, z, w]: [T; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Number> Quaternion<T> {
    /// Creates a quaternion from the components of a 4-dimensional vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let q = Quaternion::from_vector(&vec4(1, 2, 3, 4))?;
    /// assert_eq!(q, Quaternion::new(1, 2, 3, 4));
    /// assert!(Quaternion::from_vector(&vec3(1, 2, 3)).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn from_vector(vector: &Vector<T>) -> Result<Self> {
        match *vector.as_slice() {
            [x, y, z, w] => Ok(Self::new(x, y, z, w)),
            _ => Err(Error::mismatch(
                "quaternion construction",
                vector.shape(),
                Shape::column(4),
            )),
        }
    }

    fn zip_with(self, other: Self, kernel: ZipKernel<T>) -> Self {
        let mut out = [T::ZERO; 4];
        kernel(&self.into_array(), &other.into_array(), &mut out);
        Self::from_array(out)
    }

    fn with_scalar(self, scalar: T, kernel: ScalarKernel<T>) -> Self {
        let mut out = [T::ZERO; 4];
        kernel(&self.into_array(), scalar, &mut out);
        Self::from_array(out)
    }

    /// Component-wise sum.
    pub fn sum(self, other: Self) -> Self {
        self.zip_with(other, kernel::add())
    }

    /// Component-wise difference.
    pub fn difference(self, other: Self) -> Self {
        self.zip_with(other, kernel::subtract())
    }

    pub fn scale(self, scalar: T) -> Self {
        self.with_scalar(scalar, kernel::scale())
    }

    pub fn negate(self) -> Self {
        let mut out = [T::ZERO; 4];
        kernel::negate()(&self.into_array(), &mut out);
        Self::from_array(out)
    }

    /// Computes the Hamilton product `self * other`.
    ///
    /// The product is not commutative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let i = Quaternion::new(1, 0, 0, 0);
    /// let j = Quaternion::new(0, 1, 0, 0);
    /// assert_eq!(i.product(j), Quaternion::new(0, 0, 1, 0));
    /// assert_eq!(j.product(i), Quaternion::new(0, 0, -1, 0));
    /// ```
    pub fn product(self, other: Self) -> Self {
        let (l, r) = (self, other);
        Self {
            x: l.x * r.w + l.w * r.x + l.y * r.z - l.z * r.y,
            y: l.y * r.w + l.w * r.y + l.z * r.x - l.x * r.z,
            z: l.z * r.w + l.w * r.z + l.x * r.y - l.y * r.x,
            w: l.w * r.w - l.x * r.x - l.y * r.y - l.z * r.z,
        }
    }

    /// Pre-multiplies the 3-component `vector`, viewed as the pure quaternion `(x, y, z; 0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let i = Quaternion::new(1, 0, 0, 0);
    /// assert_eq!(i.product_vector(&vec3(0, 1, 0))?, Quaternion::new(0, 0, 1, 0));
    /// assert!(i.product_vector(&vec2(0, 1)).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn product_vector(self, vector: &Vector<T>) -> Result<Self> {
        match *vector.as_slice() {
            [x, y, z] => Ok(self.product(Self::new(x, y, z, T::ZERO))),
            _ => Err(Error::mismatch(
                "quaternion-vector product",
                vector.shape(),
                Shape::column(3),
            )),
        }
    }

    /// Returns the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T {
        kernel::dot()(&self.into_array(), &other.into_array())
    }

    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Returns the length of this quaternion.
    ///
    /// Fails with [`Error::UnsupportedOperationForType`] if `T` has no square root.
    pub fn magnitude(self) -> Result<T> {
        self.magnitude_squared()
            .sqrt()
            .ok_or_else(|| Error::unsupported::<T>("magnitude"))
    }

    /// Negates the imaginary parts, keeping `w`.
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Divides this quaternion by its length, resulting in a unit quaternion.
    ///
    /// A quaternion with a length of exactly zero normalizes to [`Quaternion::IDENTITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let q = Quaternion::new(0.0, 3.0, 0.0, 4.0);
    /// assert_eq!(q.normalize()?, Quaternion::new(0.0, 0.6, 0.0, 0.8));
    /// assert_eq!(Quaternion::<f32>::ZERO.normalize()?, Quaternion::IDENTITY);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn normalize(self) -> Result<Self> {
        if self.magnitude_squared() == T::ZERO {
            return Ok(Self::IDENTITY);
        }
        Ok(self.with_scalar(self.magnitude()?, kernel::divide()))
    }

    /// Computes the multiplicative inverse `conjugate / |q|²`.
    ///
    /// A quaternion with a squared length of exactly zero is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
    /// assert_eq!(q.invert(), Quaternion::new(-0.25, -0.25, -0.25, 0.25));
    /// assert_eq!(q * q.invert(), Quaternion::IDENTITY);
    /// assert_eq!(Quaternion::<f64>::ZERO.invert(), Quaternion::ZERO);
    /// ```
    pub fn invert(self) -> Self {
        let magnitude_squared = self.magnitude_squared();
        if magnitude_squared == T::ZERO {
            return self;
        }
        self.conjugate()
            .with_scalar(magnitude_squared, kernel::divide())
    }

    /// Linearly interpolates between `self` (at `blend = 0`) and `other` (at `blend = 1`).
    ///
    /// The result is not normalized. Fails with [`Error::InvalidArgument`] if `blend` is not in
    /// the range `[0, 1]`.
    pub fn lerp(self, other: Self, blend: T) -> Result<Self> {
        check_blend(blend)?;
        Ok(self.sum(other.difference(self).scale(blend)))
    }

    /// Rotates `vector` by this quaternion, computing the sandwich product `q * (v, 0) * q*`.
    ///
    /// `vector` needs 3 or 4 components. The `x`, `y` and `z` components are rotated, a fourth
    /// component is copied to the result unchanged. Only unit quaternions rotate without also
    /// scaling the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let quarter_turn = Quaternion::from_axis_angle(&vec3(0.0, 0.0, 1.0), FRAC_PI_2)?;
    /// let rotated = quarter_turn.rotate(&vec3(1.0, 0.0, 0.0))?;
    /// assert!(rotated.approx_eq(&vec3(0.0, 1.0, 0.0), 1e-12));
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn rotate(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        let (x, y, z) = match *vector.as_slice() {
            [x, y, z] | [x, y, z, _] => (x, y, z),
            _ => {
                return Err(Error::mismatch(
                    "quaternion rotation",
                    vector.shape(),
                    Shape::column(3),
                ))
            }
        };

        let rotated = self
            .product(Self::new(x, y, z, T::ZERO))
            .product(self.conjugate());

        let mut out = vector.clone();
        out[0] = rotated.x;
        out[1] = rotated.y;
        out[2] = rotated.z;
        Ok(out)
    }

    /// Compares each component of `self` and `other`, allowing a difference of up to `leniency`.
    pub fn approx_eq(&self, other: &Self, leniency: T) -> bool {
        self.into_array()
            .iter()
            .zip(other.into_array())
            .all(|(&a, b)| (a - b).abs() <= leniency)
    }
}

impl<T: Number + Trig> Quaternion<T> {
    /// Creates a unit quaternion that rotates by `angle` radians around `axis`.
    ///
    /// `axis` needs 3 components and does not need to be normalized. A zero axis results in
    /// [`Quaternion::IDENTITY`].
    pub fn from_axis_angle(axis: &Vector<T>, angle: T) -> Result<Self> {
        let [x, y, z] = match *axis.as_slice() {
            [x, y, z] => [x, y, z],
            _ => {
                return Err(Error::mismatch(
                    "axis-angle conversion",
                    axis.shape(),
                    Shape::column(3),
                ))
            }
        };

        let length = axis.magnitude()?;
        if length == T::ZERO {
            return Ok(Self::IDENTITY);
        }

        let half = angle * one_half();
        let sin = half.sin() / length;
        Self::new(x * sin, y * sin, z * sin, half.cos()).normalize()
    }

    /// Spherically interpolates between the unit quaternions `self` and `other`, taking the
    /// shorter path.
    ///
    /// Fails with [`Error::InvalidArgument`] if `blend` is not in the range `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    ///
    /// let z = vec3(0.0, 0.0, 1.0);
    /// let quarter_turn = Quaternion::from_axis_angle(&z, FRAC_PI_2)?;
    /// let eighth_turn = Quaternion::IDENTITY.slerp(quarter_turn, 0.5)?;
    /// assert!(eighth_turn.approx_eq(&Quaternion::from_axis_angle(&z, FRAC_PI_4)?, 1e-12));
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn slerp(self, other: Self, blend: T) -> Result<Self> {
        check_blend(blend)?;

        let mut dot = self.dot(other);
        let mut other = other;
        if dot < T::ZERO {
            dot = -dot;
            other = other.negate();
        }

        let angle = clamp_unit(dot).acos();
        let sin = angle.sin();
        if sin == T::ZERO {
            return self.lerp(other, blend)?.normalize();
        }

        let from = (angle - angle * blend).sin() / sin;
        let to = (angle * blend).sin() / sin;
        Ok(self.scale(from).sum(other.scale(to)))
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}; {})", self.x, self.y, self.z, self.w)
    }
}

impl<T: Number> From<Quaternion<T>> for Vector<T> {
    fn from(q: Quaternion<T>) -> Self {
        q.into_vector()
    }
}

impl<T: Number> TryFrom<&Vector<T>> for Quaternion<T> {
    type Error = Error;

    fn try_from(vector: &Vector<T>) -> Result<Self> {
        Self::from_vector(vector)
    }
}
