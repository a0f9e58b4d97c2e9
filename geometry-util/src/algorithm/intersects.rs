use geo::Intersects;

use crate::geo_adapter::ToGeo;

/// Returns true if the geometries have at least one common point.
///
/// Touching geometries intersect. Empty geometries (e.g. a linestring without points) never intersect anything.
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: ToGeo + ?Sized,
    B: ToGeo + ?Sized,
{
    a.to_geo().intersects(&b.to_geo())
}

/// Returns true if the geometries have no common points. This is always the negation of [`intersects`].
pub fn disjoint<A, B>(a: &A, b: &B) -> bool
where
    A: ToGeo + ?Sized,
    B: ToGeo + ?Sized,
{
    !intersects(a, b)
}
