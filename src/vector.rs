use std::fmt;

use crate::{
    error::{check_blend, Error, Result, Shape},
    kernel::{self, ZipKernel},
    traits::{clamp_unit, Number, Trig},
    Quaternion,
};

mod ops;

/// Creates a 2-dimensional vector.
pub fn vec2<T>(x: T, y: T) -> Vector<T> {
    Vector(vec![x, y])
}

/// Creates a 3-dimensional vector.
pub fn vec3<T>(x: T, y: T, z: T) -> Vector<T> {
    Vector(vec![x, y, z])
}

/// Creates a 4-dimensional vector.
pub fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T> {
    Vector(vec![x, y, z, w])
}

/// A column vector with a fixed, non-zero number of elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::new`] creates an all-zero vector, [`Vector::splat`] copies one value into every
///   element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::from_slice`] copies existing elements, [`Vector::from_vec`] takes ownership of them.
///
/// Every fallible constructor rejects zero-length vectors with [`Error::InvalidDimensions`].
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls work like they do on slices, and panic when out of
///   bounds.
/// - [`Vector::get`] and [`Vector::component`] are the checked equivalents.
/// - [`Vector::x`], [`Vector::y`], [`Vector::z`] and [`Vector::w`] are checked aliases for the
///   first four elements.
///
/// # Arithmetic
///
/// Binary operations come in a fallible `try_*` form that reports mismatched dimensions as
/// [`Error::DimensionMismatch`], and as `std::ops` operators that panic instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector<T>(Vec<T>);

fn check_dimensions(dimensions: usize) -> Result<()> {
    if dimensions == 0 {
        return Err(Error::InvalidDimensions {
            rows: 0,
            columns: 1,
        });
    }
    Ok(())
}

impl<T> Vector<T> {
    /// Creates a vector that takes ownership of `elements`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let v = Vector::from_vec(vec![1, 2, 3])?;
    /// assert_eq!(v, vec3(1, 2, 3));
    /// assert!(Vector::<i32>::from_vec(Vec::new()).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Result<Self> {
        check_dimensions(elements.len())?;
        Ok(Self(elements))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let v = Vector::from_fn(3, |i| i + 100)?;
    /// assert_eq!(v, vec3(100, 101, 102));
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn from_fn<F>(dimensions: usize, cb: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        check_dimensions(dimensions)?;
        Ok(Self((0..dimensions).map(cb).collect()))
    }

    /// Returns the number of elements in this vector.
    ///
    /// This is always at least 1.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Returns the shape of this vector, viewed as a column matrix.
    pub fn shape(&self) -> Shape {
        Shape::column(self.dimensions())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this vector into its underlying [`Vec`].
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let v = vec3(1, 2, 3).map(|i| i as f32 * 0.5);
    /// assert_eq!(v, vec3(0.5, 1.0, 1.5));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.into_iter().map(f).collect())
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a vector by copying `elements`.
    pub fn from_slice(elements: &[T]) -> Result<Self> {
        check_dimensions(elements.len())?;
        Ok(Self(elements.to_vec()))
    }

    /// Creates a vector with each of its `dimensions` elements initialized to `elem`.
    pub fn splat(dimensions: usize, elem: T) -> Result<Self> {
        check_dimensions(dimensions)?;
        Ok(Self(vec![elem; dimensions]))
    }
}

impl<T: Number> Vector<T> {
    /// Creates an all-zero vector with the given number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// assert_eq!(Vector::<i32>::new(2)?, vec2(0, 0));
    /// assert_eq!(
    ///     Vector::<f32>::new(0),
    ///     Err(Error::InvalidDimensions { rows: 0, columns: 1 }),
    /// );
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn new(dimensions: usize) -> Result<Self> {
        Self::splat(dimensions, T::ZERO)
    }

    /// Creates a vector with every element set to one.
    pub fn one(dimensions: usize) -> Result<Self> {
        Self::splat(dimensions, T::ONE)
    }

    /// Returns the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if `index` is not less than
    /// [`dimensions`][Self::dimensions].
    pub fn component(&self, index: usize) -> Result<T> {
        self.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            len: self.dimensions(),
        })
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.dimensions();
        let slot = self
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Returns the first element.
    pub fn x(&self) -> Result<T> {
        self.component(0)
    }

    /// Returns the second element, or an [`Error::IndexOutOfRange`] for 1-dimensional vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.y(), Ok(6));
    /// assert_eq!(v.z(), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn y(&self) -> Result<T> {
        self.component(1)
    }

    /// Returns the third element.
    pub fn z(&self) -> Result<T> {
        self.component(2)
    }

    /// Returns the fourth element.
    pub fn w(&self) -> Result<T> {
        self.component(3)
    }

    fn check_same_dimensions(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::mismatch(operation, self.shape(), other.shape()));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, operation: &'static str, kernel: ZipKernel<T>) -> Result<Self> {
        self.check_same_dimensions(other, operation)?;
        let mut out = vec![T::ZERO; self.dimensions()];
        kernel(&self.0, &other.0, &mut out);
        Ok(Self(out))
    }

    /// Element-wise addition.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// assert_eq!(vec2(1, 2).try_add(&vec2(10, 20))?, vec2(11, 22));
    /// assert!(vec2(1, 2).try_add(&vec3(1, 2, 3)).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "vector addition", kernel::add())
    }

    /// Element-wise subtraction.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "vector subtraction", kernel::subtract())
    }

    /// Negates every element.
    pub fn negate(&self) -> Self {
        let mut out = vec![T::ZERO; self.dimensions()];
        kernel::negate()(&self.0, &mut out);
        Self(out)
    }

    /// Multiplies every element with `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        let mut out = vec![T::ZERO; self.dimensions()];
        kernel::scale()(&self.0, scalar, &mut out);
        Self(out)
    }

    /// Divides every element by `scalar`.
    pub fn divide(&self, scalar: T) -> Self {
        let mut out = vec![T::ZERO; self.dimensions()];
        kernel::divide()(&self.0, scalar, &mut out);
        Self(out)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(&b)?, 3);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_same_dimensions(other, "dot product")?;
        Ok(kernel::dot()(&self.0, &other.0))
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// Both vectors must be 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let x = vec3(1, 0, 0);
    /// let y = vec3(0, 1, 0);
    /// assert_eq!(x.cross(&y)?, vec3(0, 0, 1));
    /// assert_eq!(y.cross(&x)?, vec3(0, 0, -1));
    /// assert!(vec2(1, 0).cross(&vec2(0, 1)).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.dimensions() != 3 {
            return Err(Error::mismatch("cross product", self.shape(), Shape::column(3)));
        }
        self.check_same_dimensions(other, "cross product")?;

        let (a, b) = (&self.0, &other.0);
        #[rustfmt::skip]
        let cross = vec3(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        );
        Ok(cross)
    }

    /// Returns the squared length of this vector.
    pub fn magnitude_squared(&self) -> T {
        kernel::dot()(&self.0, &self.0)
    }

    /// Returns the length of this vector.
    ///
    /// Fails with [`Error::UnsupportedOperationForType`] if `T` has no square root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude()?, 5.0);
    /// assert!(vec2(3, 4).magnitude().is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn magnitude(&self) -> Result<T> {
        self.magnitude_squared()
            .sqrt()
            .ok_or_else(|| Error::unsupported::<T>("magnitude"))
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A vector with a length of exactly zero is returned as an all-zero vector, even when `T`
    /// has no square root. Fails with [`Error::UnsupportedOperationForType`] if `T` has no square
    /// root and the vector is not all-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize()?, vec3(0.0, 0.0, 1.0));
    /// assert_eq!(vec2(0.0, 0.0).normalize()?, vec2(0.0, 0.0));
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn normalize(&self) -> Result<Self> {
        if self.magnitude_squared() == T::ZERO {
            return Self::new(self.dimensions());
        }
        Ok(self.divide(self.magnitude()?))
    }

    /// Linearly interpolates between `self` (at `blend = 0`) and `other` (at `blend = 1`).
    ///
    /// Fails with [`Error::InvalidArgument`] if `blend` is not in the range `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let a = vec2(0.0, 10.0);
    /// let b = vec2(4.0, 20.0);
    /// assert_eq!(a.lerp(&b, 0.25)?, vec2(1.0, 12.5));
    /// assert!(a.lerp(&b, 1.5).is_err());
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn lerp(&self, other: &Self, blend: T) -> Result<Self> {
        self.check_same_dimensions(other, "linear interpolation")?;
        check_blend(blend)?;
        self.try_add(&other.try_sub(self)?.scale(blend))
    }

    /// Interpolates across the triangle `a`, `b`, `c` using barycentric coordinates.
    ///
    /// Computes `a + u * (b - a) + v * (c - a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let a = vec2(0, 0);
    /// let b = vec2(10, 0);
    /// let c = vec2(0, 10);
    /// assert_eq!(Vector::barycentric(&a, &b, &c, 1, 0)?, b);
    /// assert_eq!(Vector::barycentric(&a, &b, &c, 0, 1)?, c);
    /// assert_eq!(Vector::barycentric(&a, &b, &c, 0, 0)?, a);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn barycentric(a: &Self, b: &Self, c: &Self, u: T, v: T) -> Result<Self> {
        a.check_same_dimensions(b, "barycentric interpolation")?;
        a.check_same_dimensions(c, "barycentric interpolation")?;
        let along_b = b.try_sub(a)?.scale(u);
        let along_c = c.try_sub(a)?.scale(v);
        a.try_add(&along_b)?.try_add(&along_c)
    }

    /// Compares `self` and `other` element-wise, allowing each pair to differ by up to
    /// `leniency`.
    ///
    /// Vectors with different dimensions are never equal.
    pub fn approx_eq(&self, other: &Self, leniency: T) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .iter()
                .zip(other.iter())
                .all(|(&a, &b)| (a - b).abs() <= leniency)
    }

    /// Rotates this vector by `rotation`.
    ///
    /// This is the same as [`Quaternion::rotate`].
    pub fn rotate_by(&self, rotation: &Quaternion<T>) -> Result<Self> {
        rotation.rotate(self)
    }

    /// Rotates this vector by `angle` radians around `axis`.
    ///
    /// `axis` needs 3 components and does not need to be normalized, see
    /// [`Quaternion::from_axis_angle`]. A zero axis leaves the vector unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let rotated = vec3(1.0, 0.0, 0.0).rotate_axis_angle(FRAC_PI_2, &vec3(0.0, 0.0, 2.0))?;
    /// assert!(rotated.approx_eq(&vec3(0.0, 1.0, 0.0), 1e-12));
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn rotate_axis_angle(&self, angle: T, axis: &Self) -> Result<Self>
    where
        T: Trig,
    {
        Quaternion::from_axis_angle(axis, angle)?.rotate(self)
    }

    /// Computes the angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have a non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// use approx::assert_abs_diff_eq;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let angle = vec3(0.0, 2.0, 0.0).angle(&vec3(3.0, 0.0, 0.0))?;
    /// assert_abs_diff_eq!(angle, FRAC_PI_2, epsilon = 1e-12);
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn angle(&self, other: &Self) -> Result<T>
    where
        T: Trig,
    {
        let dot = self.dot(other)?;
        let cos = dot / (self.magnitude()? * other.magnitude()?);
        Ok(clamp_unit(cos).acos())
    }

    /// Spherically interpolates between the unit vectors `self` and `other`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `blend` is not in the range `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seven_algebra::*;
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// let half = std::f64::consts::FRAC_1_SQRT_2;
    /// assert!(x.slerp(&y, 0.5)?.approx_eq(&vec3(half, half, 0.0), 1e-12));
    /// assert!(x.slerp(&y, 1.0)?.approx_eq(&y, 1e-12));
    /// # Ok::<(), seven_algebra::Error>(())
    /// ```
    pub fn slerp(&self, other: &Self, blend: T) -> Result<Self>
    where
        T: Trig,
    {
        self.check_same_dimensions(other, "spherical interpolation")?;
        check_blend(blend)?;

        let dot = clamp_unit(self.dot(other)?);
        let theta = dot.acos() * blend;
        let relative = other.try_sub(&self.scale(dot))?.normalize()?;
        self.scale(theta.cos())
            .try_add(&relative.scale(theta.sin()))
    }
}

impl<T> TryFrom<Vec<T>> for Vector<T> {
    type Error = Error;

    fn try_from(value: Vec<T>) -> Result<Self> {
        Self::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.0
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}
