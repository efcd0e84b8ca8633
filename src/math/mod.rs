pub mod cross;
pub mod norm;

/// Dynamically sized coordinate storage shared by points and vectors.
pub type Coords = nalgebra::DVector<f64>;

/// 3D vector type used by the dedicated 3D cross product.
pub type Vector3 = nalgebra::Vector3<f64>;
