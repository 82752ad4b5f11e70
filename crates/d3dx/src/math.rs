//! Vector, matrix and plane math by value.
//!
//! Each function forwards to the D3DX routine of the same name, so results
//! match what D3DX computes bit for bit, SIMD paths included.

use crate::sys::{self, D3DXMATRIX, D3DXPLANE, D3DXVECTOR3, D3DXVECTOR4};

macro_rules! out {
    ($ty:ty, |$out:ident| $call:expr) => {{
        let mut $out = <$ty>::default();
        unsafe { $call };
        $out
    }};
}

/// `v * s`.
pub fn vec3_scale(v: &D3DXVECTOR3, s: f32) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3Scale(&mut o, v, s))
}

/// `a + b`.
pub fn vec3_add(a: &D3DXVECTOR3, b: &D3DXVECTOR3) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3Add(&mut o, a, b))
}

/// `a - b`.
pub fn vec3_subtract(a: &D3DXVECTOR3, b: &D3DXVECTOR3) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3Subtract(&mut o, a, b))
}

/// The squared length of `v`.
pub fn vec3_length_sq(v: &D3DXVECTOR3) -> f32 {
    unsafe { sys::HELPERS_D3DX_Vec3LengthSq(v) }
}

/// The dot product of `a` and `b`.
pub fn vec3_dot(a: &D3DXVECTOR3, b: &D3DXVECTOR3) -> f32 {
    unsafe { sys::HELPERS_D3DX_Vec3Dot(a, b) }
}

/// The cross product of `a` and `b`.
pub fn vec3_cross(a: &D3DXVECTOR3, b: &D3DXVECTOR3) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3Cross(&mut o, a, b))
}

/// `v` scaled to unit length. A zero vector stays zero.
pub fn vec3_normalize(v: &D3DXVECTOR3) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3Normalize(&mut o, v))
}

/// The component-wise maximum.
pub fn vec3_maximize(a: &D3DXVECTOR3, b: &D3DXVECTOR3) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3Maximize(&mut o, a, b))
}

/// The component-wise minimum.
pub fn vec3_minimize(a: &D3DXVECTOR3, b: &D3DXVECTOR3) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3Minimize(&mut o, a, b))
}

/// Transforms the point `v` by `m`, projecting the result back to `w = 1`.
pub fn vec3_transform_coord(v: &D3DXVECTOR3, m: &D3DXMATRIX) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3TransformCoord(&mut o, v, m))
}

/// Transforms the direction `v` by `m`, ignoring the translation.
pub fn vec3_transform_normal(v: &D3DXVECTOR3, m: &D3DXMATRIX) -> D3DXVECTOR3 {
    out!(D3DXVECTOR3, |o| sys::HELPERS_D3DX_Vec3TransformNormal(&mut o, v, m))
}

/// `a + b`.
pub fn vec4_add(a: &D3DXVECTOR4, b: &D3DXVECTOR4) -> D3DXVECTOR4 {
    out!(D3DXVECTOR4, |o| sys::HELPERS_D3DX_Vec4Add(&mut o, a, b))
}

/// `a - b`.
pub fn vec4_subtract(a: &D3DXVECTOR4, b: &D3DXVECTOR4) -> D3DXVECTOR4 {
    out!(D3DXVECTOR4, |o| sys::HELPERS_D3DX_Vec4Subtract(&mut o, a, b))
}

/// A left-handed view matrix looking from `eye` at `at`.
pub fn matrix_look_at_lh(eye: &D3DXVECTOR3, at: &D3DXVECTOR3, up: &D3DXVECTOR3) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixLookAtLH(&mut o, eye, at, up))
}

/// A left-handed perspective projection. `fovy` is the vertical field of
/// view in radians.
pub fn matrix_perspective_fov_lh(fovy: f32, aspect: f32, near: f32, far: f32) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixPerspectiveFovLH(
        &mut o, fovy, aspect, near, far
    ))
}

/// A scaling along the three axes.
pub fn matrix_scaling(x: f32, y: f32, z: f32) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixScaling(&mut o, x, y, z))
}

/// A translation by `(x, y, z)`.
pub fn matrix_translation(x: f32, y: f32, z: f32) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixTranslation(&mut o, x, y, z))
}

/// `a * b`: the transform of `a` followed by that of `b`.
pub fn matrix_multiply(a: &D3DXMATRIX, b: &D3DXMATRIX) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixMultiply(&mut o, a, b))
}

/// A rotation of `angle` radians around the x axis.
pub fn matrix_rotation_x(angle: f32) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixRotationX(&mut o, angle))
}

/// A rotation of `angle` radians around the y axis.
pub fn matrix_rotation_y(angle: f32) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixRotationY(&mut o, angle))
}

/// A rotation of `angle` radians around the z axis.
pub fn matrix_rotation_z(angle: f32) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixRotationZ(&mut o, angle))
}

/// A rotation of `angle` radians around `axis`.
pub fn matrix_rotation_axis(axis: &D3DXVECTOR3, angle: f32) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixRotationAxis(&mut o, axis, angle))
}

/// The identity matrix.
pub fn matrix_identity() -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixIdentity(&mut o))
}

/// The inverse of `m` and the determinant of `m`, or `None` when `m` is
/// singular.
pub fn matrix_inverse(m: &D3DXMATRIX) -> Option<(D3DXMATRIX, f32)> {
    let mut inverse = D3DXMATRIX::default();
    let mut determinant = 0.0;
    let result = unsafe { sys::HELPERS_D3DX_MatrixInverse(&mut inverse, &mut determinant, m) };
    (!result.is_null()).then_some((inverse, determinant))
}

/// The transpose of `m`.
pub fn matrix_transpose(m: &D3DXMATRIX) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixTranspose(&mut o, m))
}

/// A reflection about `plane`, which is normalized first.
pub fn matrix_reflect(plane: &D3DXPLANE) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixReflect(&mut o, plane))
}

/// Flattens geometry onto `plane` as seen from `light`. A `light.w` of `0`
/// is a directional light, `1` a point light.
pub fn matrix_shadow(light: &D3DXVECTOR4, plane: &D3DXPLANE) -> D3DXMATRIX {
    out!(D3DXMATRIX, |o| sys::HELPERS_D3DX_MatrixShadow(&mut o, light, plane))
}

/// `a * x + b * y + c * z + d`: the signed distance of `point` from a
/// normalized plane.
pub fn plane_dot_coord(plane: &D3DXPLANE, point: &D3DXVECTOR3) -> f32 {
    unsafe { sys::HELPERS_D3DX_PlaneDotCoord(plane, point) }
}

/// `plane` scaled so that its normal has unit length.
pub fn plane_normalize(plane: &D3DXPLANE) -> D3DXPLANE {
    out!(D3DXPLANE, |o| sys::HELPERS_D3DX_PlaneNormalize(&mut o, plane))
}
