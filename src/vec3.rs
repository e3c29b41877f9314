use crate::renderer::EPSILON;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, o: Vec3) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    pub fn cross(&self, o: Vec3) -> Vec3 {
        Vec3::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. A vector shorter than EPSILON is
    /// returned unchanged rather than blowing up to non-finite components.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len < EPSILON {
            self
        } else {
            self * (1.0 / len)
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

// Component-wise product.
impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

// Division by a zero scalar is not checked; the components go non-finite,
// same as plain f64 division.
impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid index for Vec3"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Invalid index for Vec3"),
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const TOLERANCE: f64 = 1e-9;

    fn random_vec(rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        )
    }

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < TOLERANCE
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Vec3::default(), Vec3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn add_assign_vectors() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(v, Vec3::new(6.0, 7.0, 8.0));
    }

    #[test]
    fn divide_vector_by_scalar() {
        let v = Vec3::new(18.0, 18.0, 18.0) / 3.0;
        assert_eq!(v, Vec3::new(6.0, 6.0, 6.0));
    }

    #[test]
    fn dot_product() {
        let u = Vec3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(u.dot(v), 30.0);
    }

    #[test]
    fn addition_and_dot_commute() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let u = random_vec(&mut rng);
            let v = random_vec(&mut rng);
            assert_eq!(u + v, v + u);
            assert!((u.dot(v) - v.dot(u)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn length_squared_matches_dot() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let v = random_vec(&mut rng);
            assert!((v.length_squared() - v.dot(v)).abs() < TOLERANCE);
            assert!((v.length() - v.length_squared().sqrt()).abs() < TOLERANCE);
        }
    }

    #[test]
    fn normalized_has_unit_length() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let v = random_vec(&mut rng) + Vec3::new(1.0, 1.0, 1.0);
            assert!((v.normalized().length() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn normalized_zero_vector_stays_zero() {
        assert_eq!(Vec3::default().normalized(), Vec3::default());
    }

    #[test]
    fn cross_is_anticommutative_and_orthogonal() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let u = random_vec(&mut rng);
            let v = random_vec(&mut rng);
            assert!(approx_eq(u.cross(v), -(v.cross(u))));
            assert!(u.dot(u.cross(v)).abs() < 1e-6);
        }
    }

    #[test]
    fn cross_right_handed_basis() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn scalar_multiplication_distributes() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let v = random_vec(&mut rng);
            let s: f64 = rng.random_range(-5.0..5.0);
            let t: f64 = rng.random_range(-5.0..5.0);
            assert!(approx_eq(v * (s * t), s * (t * v)));
        }
    }

    #[test]
    fn compound_scalar_ops() {
        let mut v = Vec3::new(1.0, -2.0, 4.0);
        v *= 2.0;
        assert_eq!(v, Vec3::new(2.0, -4.0, 8.0));
        v /= 4.0;
        assert_eq!(v, Vec3::new(0.5, -1.0, 2.0));
    }

    #[test]
    fn negation_flips_every_component() {
        assert_eq!(-Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn componentwise_product() {
        let u = Vec3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(u * v, Vec3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn indexing_reads_and_writes() {
        let mut v = Vec3::new(11.0, 25.0, 33.0);
        assert_eq!(v[0], 11.0);
        assert_eq!(v[1], 25.0);
        assert_eq!(v[2], 33.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    #[should_panic(expected = "Invalid index")]
    fn indexing_out_of_range_panics() {
        let _ = Vec3::default()[3];
    }

    #[test]
    fn display_is_space_separated() {
        assert_eq!(Vec3::new(1.0, 2.5, -3.0).to_string(), "1 2.5 -3");
    }
}
