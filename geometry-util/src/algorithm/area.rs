use geo::Area;

use crate::geo_adapter::ToGeo;

/// Area of the geometry, always non-negative. Points and linestrings have zero area.
pub fn area<G: ToGeo + ?Sized>(geometry: &G) -> f64 {
    geometry.to_geo().unsigned_area()
}

/// Signed area of the geometry: positive for counter-clockwise exterior rings, negative for clockwise ones.
pub fn signed_area<G: ToGeo + ?Sized>(geometry: &G) -> f64 {
    geometry.to_geo().signed_area()
}
