// Copyright (c) 2023-2026 The Umbra Foundation

//! Affine points with a complete projective group law underneath.
//!
//! Addition uses the exception-free formulas of Renes, Costello and Batina
//! (eprint 2015/1060, algorithm 1), which handle doubling, inverses and the
//! identity without branches. Scalar multiplication runs a fixed 256-step
//! double-and-add ladder that performs one addition per bit regardless of the
//! scalar, writing into a dummy accumulator on zero bits.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    field::{add_mod, mod_pow, mul_mod, sub_mod},
    CurveContext, Error,
};

/// A point on the curve in affine coordinates.
///
/// The identity is represented as `(0, 0)`, which is never a valid affine
/// point on a curve with `b != 0`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Point {
    x: BigUint,
    y: BigUint,
}

impl Point {
    /// The identity of the group.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Construct a point from coordinates, verifying they satisfy the curve
    /// equation.
    pub fn new(ctx: &CurveContext, x: BigUint, y: BigUint) -> Result<Self, Error> {
        let p = ctx.p();
        if x >= *p || y >= *p || (x.is_zero() && y.is_zero()) {
            return Err(Error::PointNotOnCurve);
        }
        let lhs = mul_mod(&y, &y, p);
        let x2 = mul_mod(&x, &x, p);
        let x3 = mul_mod(&x2, &x, p);
        let ax = mul_mod(ctx.a(), &x, p);
        let rhs = add_mod(&add_mod(&x3, &ax, p), ctx.b(), p);
        if lhs != rhs {
            return Err(Error::PointNotOnCurve);
        }
        Ok(Self { x, y })
    }

    /// Construct a point from coordinates already known to lie on the curve.
    pub fn new_unchecked(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The affine x coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The affine y coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Whether this is the identity.
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Group addition.
    pub fn add(&self, ctx: &CurveContext, other: &Point) -> Point {
        Projective::from_affine(self)
            .add(ctx, &Projective::from_affine(other))
            .to_affine(ctx)
    }

    /// Group doubling.
    pub fn double(&self, ctx: &CurveContext) -> Point {
        let proj = Projective::from_affine(self);
        proj.add(ctx, &proj).to_affine(ctx)
    }

    /// The inverse point `(x, -y)`.
    pub fn negate(&self, ctx: &CurveContext) -> Point {
        if self.is_identity() {
            return Point::identity();
        }
        Point {
            x: self.x.clone(),
            y: ctx.p() - &self.y,
        }
    }

    /// Scalar multiplication, reducing `scalar` modulo the group order first.
    ///
    /// Returns [`Error::InvalidScalar`] when the reduced scalar is zero, so a
    /// successful multiplication never yields the identity for a non-identity
    /// base.
    pub fn mul(&self, ctx: &CurveContext, scalar: &BigUint) -> Result<Point, Error> {
        let s = scalar % ctx.n();
        if s.is_zero() {
            return Err(Error::InvalidScalar);
        }
        let mut acc = Projective::identity();
        // Keeps the add count independent of the scalar's hamming weight.
        let mut dummy = Projective::from_affine(&ctx.generator());
        let mut base = Projective::from_affine(self);
        for bit in 0..256u64 {
            if s.bit(bit) {
                acc = acc.add(ctx, &base);
            } else {
                dummy = dummy.add(ctx, &base);
            }
            base = base.add(ctx, &base);
        }
        Ok(acc.to_affine(ctx))
    }

    /// SEC1 compressed encoding: `02`/`03` parity prefix followed by the
    /// zero-padded 64-digit hex x coordinate.
    pub fn compress(&self) -> String {
        let prefix = if self.y.bit(0) { "03" } else { "02" };
        format!("{prefix}{:064x}", self.x)
    }

    /// Decode a compressed point, recovering y as a square root modulo `p`.
    pub fn decompress(ctx: &CurveContext, encoded: &str) -> Result<Self, Error> {
        if encoded.len() != 66 {
            return Err(Error::InvalidEncoding);
        }
        let (prefix, digits) = encoded.split_at(2);
        if prefix != "02" && prefix != "03" {
            return Err(Error::InvalidEncoding);
        }
        let x = BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(Error::InvalidEncoding)?;
        let p = ctx.p();
        if x >= *p {
            return Err(Error::InvalidEncoding);
        }
        let x2 = mul_mod(&x, &x, p);
        let x3 = mul_mod(&x2, &x, p);
        let ax = mul_mod(ctx.a(), &x, p);
        let rhs = add_mod(&add_mod(&x3, &ax, p), ctx.b(), p);
        // p = 3 mod 4, so the square root (when it exists) is rhs^((p+1)/4).
        let exp = (p + BigUint::from(1u32)) >> 2;
        let mut y = mod_pow(&rhs, &exp, p);
        if mul_mod(&y, &y, p) != rhs {
            return Err(Error::PointNotOnCurve);
        }
        let want_odd = prefix == "03";
        if y.bit(0) != want_odd {
            y = p - &y;
        }
        Self::new(ctx, x, y)
    }
}

/// A point in homogeneous projective coordinates, `(X : Y : Z)` with
/// `x = X/Z`, `y = Y/Z` and identity `(0 : 1 : 0)`.
struct Projective {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Projective {
    fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::from(1u32),
            z: BigUint::zero(),
        }
    }

    fn from_affine(point: &Point) -> Self {
        if point.is_identity() {
            return Self::identity();
        }
        Self {
            x: point.x.clone(),
            y: point.y.clone(),
            z: BigUint::from(1u32),
        }
    }

    fn to_affine(&self, ctx: &CurveContext) -> Point {
        let p = ctx.p();
        if self.z.is_zero() {
            return Point::identity();
        }
        // z != 0 mod a prime is always invertible; Fermat keeps this total.
        let z_inv = mod_pow(&self.z, &(p - BigUint::from(2u32)), p);
        Point {
            x: mul_mod(&self.x, &z_inv, p),
            y: mul_mod(&self.y, &z_inv, p),
        }
    }

    /// Complete addition, RCB algorithm 1 for arbitrary `a`.
    fn add(&self, ctx: &CurveContext, other: &Projective) -> Projective {
        let p = ctx.p();
        let a = ctx.a();
        let b3 = mul_mod(&BigUint::from(3u32), ctx.b(), p);
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let mut t0 = mul_mod(x1, x2, p);
        let mut t1 = mul_mod(y1, y2, p);
        let mut t2 = mul_mod(z1, z2, p);
        let mut t3 = add_mod(x1, y1, p);
        let mut t4 = add_mod(x2, y2, p);
        t3 = mul_mod(&t3, &t4, p);
        t4 = add_mod(&t0, &t1, p);
        t3 = sub_mod(&t3, &t4, p);
        t4 = add_mod(x1, z1, p);
        let mut t5 = add_mod(x2, z2, p);
        t4 = mul_mod(&t4, &t5, p);
        t5 = add_mod(&t0, &t2, p);
        t4 = sub_mod(&t4, &t5, p);
        t5 = add_mod(y1, z1, p);
        let mut x3 = add_mod(y2, z2, p);
        t5 = mul_mod(&t5, &x3, p);
        x3 = add_mod(&t1, &t2, p);
        t5 = sub_mod(&t5, &x3, p);
        let mut z3 = mul_mod(a, &t4, p);
        x3 = mul_mod(&b3, &t2, p);
        z3 = add_mod(&x3, &z3, p);
        x3 = sub_mod(&t1, &z3, p);
        z3 = add_mod(&t1, &z3, p);
        let mut y3 = mul_mod(&x3, &z3, p);
        t1 = add_mod(&t0, &t0, p);
        t1 = add_mod(&t1, &t0, p);
        t2 = mul_mod(a, &t2, p);
        t4 = mul_mod(&b3, &t4, p);
        t1 = add_mod(&t1, &t2, p);
        t2 = sub_mod(&t0, &t2, p);
        t2 = mul_mod(a, &t2, p);
        t4 = add_mod(&t4, &t2, p);
        t0 = mul_mod(&t1, &t4, p);
        y3 = add_mod(&y3, &t0, p);
        t0 = mul_mod(&t5, &t4, p);
        x3 = mul_mod(&x3, &t3, p);
        x3 = sub_mod(&x3, &t0, p);
        t0 = mul_mod(&t3, &t1, p);
        z3 = mul_mod(&t5, &z3, p);
        z3 = add_mod(&z3, &t0, p);

        Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
