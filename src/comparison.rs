//! [`approx`] comparisons for vectors, matrices and quaternions.
//!
//! Values of different shapes never compare equal, no matter the tolerance. Everything else is
//! compared element by element using the element type's own impls.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Quaternion, Vector};

impl<T> AbsDiffEq for Vector<T>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        // the slice impls compare lengths first
        self.as_slice().abs_diff_eq(other.as_slice(), epsilon)
    }
}

impl<T> RelativeEq for Vector<T>
where
    T: RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.as_slice()
            .relative_eq(other.as_slice(), epsilon, max_relative)
    }
}

impl<T> UlpsEq for Vector<T>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice().ulps_eq(other.as_slice(), epsilon, max_ulps)
    }
}

// A 1x2 and a 2x1 matrix have slices of the same length, so the shape is checked explicitly.

impl<T> AbsDiffEq for Matrix<T>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape() && self.as_slice().abs_diff_eq(other.as_slice(), epsilon)
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .relative_eq(other.as_slice(), epsilon, max_relative)
    }
}

impl<T> UlpsEq for Matrix<T>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .ulps_eq(other.as_slice(), epsilon, max_ulps)
    }
}

fn components<T>(q: &Quaternion<T>) -> [&T; 4] {
    [&q.x, &q.y, &q.z, &q.w]
}

impl<T> AbsDiffEq for Quaternion<T>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        components(self)
            .into_iter()
            .zip(components(other))
            .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

impl<T> RelativeEq for Quaternion<T>
where
    T: RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        components(self)
            .into_iter()
            .zip(components(other))
            .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

impl<T> UlpsEq for Quaternion<T>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        components(self)
            .into_iter()
            .zip(components(other))
            .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::{
        assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne,
        assert_ulps_eq, assert_ulps_ne,
    };

    use crate::{vec2, vec3, Matrix, Quaternion};

    #[test]
    fn vectors() {
        assert_relative_eq!(vec2(0.1 + 0.2, 1.0), vec2(0.3, 1.0));
        assert_ulps_eq!(vec2(0.1 + 0.2, 1.0), vec2(0.3, 1.0));
        assert_relative_ne!(vec2(1.0, 1.0), vec2(1.0, 1.1));
        assert_abs_diff_eq!(vec2(1.0, 1.0), vec2(1.0, 1.1), epsilon = 0.2);
        assert_abs_diff_ne!(vec2(1.0, 1.0), vec3(1.0, 1.0, 1.0), epsilon = 10.0);
    }

    #[test]
    fn matrices() {
        let row = Matrix::from_rows(&[[0.1 + 0.2, 1.0]]).unwrap();
        assert_relative_eq!(row, Matrix::from_rows(&[[0.3, 1.0]]).unwrap());
        assert_ulps_eq!(row, Matrix::from_rows(&[[0.3, 1.0]]).unwrap());

        let column = Matrix::from_rows(&[[0.3], [1.0]]).unwrap();
        assert_abs_diff_ne!(row, column, epsilon = 10.0);
        assert_relative_ne!(row, column, epsilon = 10.0, max_relative = 10.0);
        assert_ulps_ne!(row, column, max_ulps = u32::MAX);
    }

    #[test]
    fn quaternions() {
        let q = Quaternion::new(1.0f32, -2.0, 0.5, 3.0);
        assert_relative_eq!(q, Quaternion::new(1.0 + 1e-7, -2.0, 0.5, 3.0));
        assert_abs_diff_eq!(q, Quaternion::new(1.0, -2.0, 0.5, 3.25), epsilon = 0.5);
        assert_abs_diff_ne!(q, Quaternion::new(1.0, -2.0, 0.5, 3.25), epsilon = 0.1);
        assert_ulps_ne!(q, Quaternion::new(1.0, -2.0, 0.5, -3.0));
    }
}
