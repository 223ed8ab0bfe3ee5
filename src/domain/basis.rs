//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, Mul, Neg, Sub},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        ((self.x - position.x).powi(2) + (self.y - position.y).powi(2)).sqrt()
    }

    /// Point reached by travelling `distance` from `self` along `angle`.
    pub fn project(&self, angle: Angle, distance: f64) -> Position {
        Position::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }
}

impl From<Position> for (f64, f64) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    pub fn to_deg(self) -> f64 {
        self.0 * (180.0 / PI)
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

/// Robot position and heading in the world frame. The heading is kept
/// unnormalized; it stays finite but is not wrapped into any range.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Pose {
    position: Position,
    heading: Angle,
}

impl Pose {
    pub const fn new(position: Position, heading: Angle) -> Self {
        Self { position, heading }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn x(&self) -> f64 {
        self.position.x()
    }

    pub fn y(&self) -> f64 {
        self.position.y()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_position() {
        let position = Position::new(1.0, 2.0);
        assert_abs_diff_eq!(position.x(), 1.0);
        assert_abs_diff_eq!(position.y(), 2.0);
    }

    #[rstest]
    #[case(Position::new(0.0, 0.0), Position::new(3.0, 4.0), 5.0)]
    #[case(Position::new(-1.0, -1.0), Position::new(-1.0, -1.0), 0.0)]
    fn test_position_distance(#[case] a: Position, #[case] b: Position, #[case] expected: f64) {
        assert_abs_diff_eq!(a.distance(b), expected);
    }

    #[rstest]
    #[case(Angle::new(0.0), Position::new(3.0, 0.0))]
    #[case(Angle::new(0.5 * PI), Position::new(1.0, 2.0))]
    #[case(Angle::new(PI), Position::new(-1.0, 0.0))]
    fn test_position_project(#[case] angle: Angle, #[case] expected: Position) {
        let projected = Position::new(1.0, 0.0).project(angle, 2.0);
        assert_abs_diff_eq!(projected, expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(Angle::new(0.0), 0.0)]
    #[case(Angle::new(0.5 * PI), 90.0)]
    #[case(Angle::new(1.0 * PI), 180.0)]
    #[case(Angle::new(-0.5 * PI), -90.0)]
    fn test_angle_to_deg(#[case] angle: Angle, #[case] expected: f64) {
        assert_abs_diff_eq!(angle.to_deg(), expected);
    }

    #[test]
    fn test_angle_arithmetic() {
        let quarter = Angle::new(0.25 * PI);
        assert_abs_diff_eq!(quarter + quarter, Angle::new(0.5 * PI));
        assert_abs_diff_eq!(quarter - quarter, Angle::new(0.0));
        assert_abs_diff_eq!(quarter * 2.0, Angle::new(0.5 * PI));
        assert_abs_diff_eq!(-quarter, Angle::new(-0.25 * PI));
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }

    impl AbsDiffEq for Angle {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.0, &other.0, epsilon)
        }
    }
}
