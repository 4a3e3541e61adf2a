pub mod compare;
pub mod series;
pub mod trig;

/// Homogeneous point type. The geometric layer reads only the `x` and `y`
/// components; `z` and `w` are carried through untouched.
pub type Vertex = nalgebra::Vector4<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance below which two values compare equal.
pub const EPSILON: f64 = 1e-6;

/// Bound below which a series term is negligible, terminating accumulation.
pub const CUTOFF: f64 = 1e-7;

/// Creates a vertex at `(x, y)` on the plane `z = 0` with unit weight.
#[must_use]
pub fn vertex(x: f64, y: f64) -> Vertex {
    Vertex::new(x, y, 0.0, 1.0)
}

/// Euclidean distance between two vertices, summed over all four components.
#[must_use]
pub fn distance(a: &Vertex, b: &Vertex) -> f64 {
    let mut r = 0.0;
    for i in 0..4 {
        r += series::powi(b[i] - a[i], 2);
    }
    series::sqrt(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    #[test]
    fn vertex_carries_unit_weight() {
        let v = vertex(3.0, -2.0);
        assert!((v.x - 3.0).abs() < TOL);
        assert!((v.y + 2.0).abs() < TOL);
        assert!(v.z.abs() < TOL);
        assert!((v.w - 1.0).abs() < TOL);
    }

    #[test]
    fn distance_is_planar_for_unit_weight_vertices() {
        let a = vertex(0.0, 0.0);
        let b = vertex(3.0, 4.0);
        let d = distance(&a, &b);
        assert!((d - 5.0).abs() < 1e-5, "d={d}");
    }
}
