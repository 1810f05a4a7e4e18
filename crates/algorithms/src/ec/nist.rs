//! NIST prime-curve backends
//!
//! Thin adapters from the byte-level [`Curve`] trait onto the RustCrypto
//! arithmetic crates. Points cross the boundary as SEC1 uncompressed
//! encodings; scalars as canonical field representations.

use common::security::SecretVec;
use elliptic_curve::ff::PrimeField;
use elliptic_curve::group::{Curve as _, Group};
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PrimeCurve, ProjectivePoint, Scalar,
};
use params::{EcParams, NIST_P224, NIST_P256, NIST_P384, NIST_P521};

use super::{Curve, Point};
use crate::error::{validate, Error, Result};

/// Decode a big-endian scalar, zero-extending to the field width.
fn scalar_from_be<C>(k: &[u8]) -> Result<Scalar<C>>
where
    C: CurveArithmetic,
{
    let mut repr = FieldBytes::<C>::default();
    let len = repr.as_slice().len();
    validate::max_length("EC scalar", k.len(), len)?;
    repr.as_mut_slice()[len - k.len()..].copy_from_slice(k);
    let scalar = Option::<Scalar<C>>::from(Scalar::<C>::from_repr(repr.clone()));
    repr.as_mut_slice().iter_mut().for_each(|b| *b = 0);
    scalar.ok_or_else(|| Error::param("EC scalar", "value not below the group order"))
}

fn point_from_affine<C>(p: &Point, params: &EcParams) -> Result<ProjectivePoint<C>>
where
    C: CurveArithmetic + PrimeCurve,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    validate::length("EC point x coordinate", p.x().len(), params.field_size)?;
    validate::length("EC point y coordinate", p.y().len(), params.field_size)?;
    if p.is_identity() {
        return Ok(ProjectivePoint::<C>::identity());
    }
    let x = FieldBytes::<C>::from_slice(p.x());
    let y = FieldBytes::<C>::from_slice(p.y());
    let encoded = EncodedPoint::<C>::from_affine_coordinates(x, y, false);
    let affine = Option::<AffinePoint<C>>::from(AffinePoint::<C>::from_encoded_point(&encoded))
        .ok_or_else(|| Error::param("EC point", "coordinates are not on the curve"))?;
    Ok(ProjectivePoint::<C>::from(affine))
}

fn point_to_affine<C>(p: &ProjectivePoint<C>, params: &EcParams) -> Point
where
    C: CurveArithmetic + PrimeCurve,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let encoded = p.to_affine().to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => Point::new(x.as_slice().to_vec(), y.as_slice().to_vec()),
        _ => Point::identity(params.field_size),
    }
}

fn mul_add_mod_order<C>(a: &[u8], b: &[u8], c: &[u8]) -> Result<SecretVec>
where
    C: CurveArithmetic,
{
    let product = scalar_from_be::<C>(a)? * scalar_from_be::<C>(b)? + scalar_from_be::<C>(c)?;
    let mut repr = product.to_repr();
    let out = SecretVec::from_slice(repr.as_slice());
    repr.as_mut_slice().iter_mut().for_each(|byte| *byte = 0);
    Ok(out)
}

macro_rules! nist_curve {
    ($(#[$doc:meta])* $name:ident, $backend:ty, $params:expr) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl Curve for $name {
            fn params(&self) -> &'static EcParams {
                $params
            }

            fn scalar_base_mult(&self, k: &[u8]) -> Result<Point> {
                let scalar = scalar_from_be::<$backend>(k)?;
                let point = ProjectivePoint::<$backend>::generator() * scalar;
                Ok(point_to_affine::<$backend>(&point, $params))
            }

            fn scalar_mult(&self, point: &Point, k: &[u8]) -> Result<Point> {
                let scalar = scalar_from_be::<$backend>(k)?;
                let p = point_from_affine::<$backend>(point, $params)?;
                Ok(point_to_affine::<$backend>(&(p * scalar), $params))
            }

            fn add(&self, a: &Point, b: &Point) -> Result<Point> {
                let pa = point_from_affine::<$backend>(a, $params)?;
                let pb = point_from_affine::<$backend>(b, $params)?;
                Ok(point_to_affine::<$backend>(&(pa + pb), $params))
            }

            fn mul_add_mod_n(&self, a: &[u8], b: &[u8], c: &[u8]) -> Result<SecretVec> {
                mul_add_mod_order::<$backend>(a, b, c)
            }
        }
    };
}

nist_curve!(
    /// NIST P-224, backed by the `p224` crate.
    P224,
    p224::NistP224,
    &NIST_P224
);

nist_curve!(
    /// NIST P-256, backed by the `p256` crate.
    P256,
    p256::NistP256,
    &NIST_P256
);

nist_curve!(
    /// NIST P-384, backed by the `p384` crate.
    P384,
    p384::NistP384,
    &NIST_P384
);

nist_curve!(
    /// NIST P-521, backed by the `p521` crate.
    P521,
    p521::NistP521,
    &NIST_P521
);
