//! Meshes through `ID3DXMesh`.

use std::ffi::CStr;

use crate::{sys, Error, Result};

/// A material loaded along with a mesh from an `.x` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// The Direct3D material of the subset.
    pub material: sys::D3DMATERIAL9,
    /// The texture file of the subset, relative to the `.x` file.
    pub texture_filename: Option<String>,
}

/// How an optimization reordered a mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshRemap {
    /// The adjacency of the optimized mesh.
    pub adjacency: Vec<u32>,
    /// For every new face, the index of the face it came from.
    pub face_remap: Vec<u32>,
    /// For every new vertex, the index of the vertex it came from, when
    /// D3DX reports one.
    pub vertex_remap: Option<Vec<u32>>,
}

/// The size of one index of a mesh created with `options`: 4 bytes with
/// `D3DXMESH_32BIT`, 2 otherwise.
pub fn index_size(options: u32) -> usize {
    if options & sys::D3DXMESH_32BIT != 0 {
        4
    } else {
        2
    }
}

/// Checks that `adjacency` holds three entries per face.
pub fn check_adjacency(adjacency: &[u32], num_faces: u32) -> Result {
    let expected = num_faces as usize * 3;
    if adjacency.len() != expected {
        return Err(format!(
            "The adjacency has {} entries, the mesh needs {expected}.",
            adjacency.len()
        )
        .into());
    }
    Ok(())
}

/// The vertex count and stride `D3DXComputeBoundingBox` is called with for
/// `len` bytes of vertices. A trailing partial vertex is not counted.
#[cfg_attr(not(windows), allow(dead_code))]
fn bounding_box_layout(len: usize, stride: usize) -> Result<(u32, u32)> {
    if stride < std::mem::size_of::<sys::D3DXVECTOR3>() {
        return Err(format!("A stride of {stride} bytes cannot hold a position.").into());
    }
    let count = u32::try_from(len / stride).map_err(|_| Error::from("Too many vertices."))?;
    let stride = u32::try_from(stride).map_err(|_| Error::from("The stride is too large."))?;
    Ok((count, stride))
}

/// Reads `count` materials from the `len` bytes at `data`, as returned by
/// `D3DXLoadMeshFromX`.
///
/// # Safety
///
/// `data` must be null or point to `len` readable bytes, and every
/// non-null texture file name within them must be NUL terminated.
#[cfg_attr(not(windows), allow(dead_code))]
unsafe fn read_materials(data: *const u8, len: usize, count: usize) -> Result<Vec<Material>> {
    let size = std::mem::size_of::<sys::D3DXMATERIAL>();
    let needed = count
        .checked_mul(size)
        .ok_or_else(|| Error::from(format!("{count} materials do not fit in memory.")))?;
    if len < needed {
        return Err(format!("The material buffer holds {len} bytes, {count} materials need {needed}.").into());
    }
    let data = data.cast::<sys::D3DXMATERIAL>();
    if count == 0 || data.is_null() {
        return Ok(Vec::new());
    }
    if data as usize % std::mem::align_of::<sys::D3DXMATERIAL>() != 0 {
        return Err(Error::from("The material buffer is misaligned."));
    }
    let materials = std::slice::from_raw_parts(data, count);
    Ok(materials
        .iter()
        .map(|material| Material {
            material: material.MatD3D,
            texture_filename: (!material.pTextureFilename.is_null()).then(|| {
                CStr::from_ptr(material.pTextureFilename)
                    .to_string_lossy()
                    .into_owned()
            }),
        })
        .collect())
}

#[cfg(windows)]
pub use platform::*;

#[cfg(windows)]
mod platform {
    use std::{marker::PhantomData, path::Path};

    use windows::Win32::Graphics::Direct3D9::IDirect3DDevice9;

    use super::{bounding_box_layout, check_adjacency, index_size, read_materials, Material, MeshRemap};
    use crate::{
        buffer::Buffer,
        com::{device_ptr, ComPtr},
        path_to_c_string, sys,
        vertex::{check_declaration, terminated_len},
        HResult, Result,
    };

    /// A mesh loaded from an `.x` file. The materials are indexed by attribute
    /// id, so `materials[i]` belongs to `mesh.draw_subset(i)`.
    #[derive(Debug)]
    pub struct XMesh {
        /// The loaded mesh.
        pub mesh: Mesh,
        /// Three neighbouring faces per face, `u32::MAX` for none.
        pub adjacency: Vec<u32>,
        /// One material per attribute id.
        pub materials: Vec<Material>,
    }

    /// The result of [`Mesh::optimize`].
    #[derive(Debug)]
    pub struct OptimizedMesh {
        /// The optimized copy.
        pub mesh: Mesh,
        /// Where its faces and vertices came from.
        pub remap: MeshRemap,
    }

    /// An `ID3DXMesh`.
    #[derive(Debug)]
    pub struct Mesh(ComPtr<sys::ID3DXMesh>);

    /// Reads an adjacency buffer returned by D3DX.
    fn adjacency_from(buffer: sys::LPD3DXBUFFER) -> Result<Vec<u32>> {
        match unsafe { Buffer::from_raw(buffer) } {
            Some(buffer) => Ok(buffer.as_slice::<u32>()?.to_vec()),
            None => Ok(Vec::new()),
        }
    }

    impl Mesh {
        fn shape(
            name: &str,
            create: impl FnOnce(*mut sys::LPD3DXMESH, *mut sys::LPD3DXBUFFER) -> HResult,
        ) -> Result<(Self, Vec<u32>)> {
            let mut mesh = std::ptr::null_mut();
            let mut adjacency = std::ptr::null_mut();
            let result = create(&mut mesh as *mut _, &mut adjacency as *mut _);
            let adjacency = adjacency_from(adjacency);
            Result::from(result)?;
            let mesh = Self(unsafe { ComPtr::from_created(mesh) }?);
            log::debug!("Created {name} mesh with {} faces.", mesh.num_faces());
            Ok((mesh, adjacency?))
        }

        /// Creates an axis aligned box centered on the origin. Returns the
        /// mesh and its adjacency.
        pub fn create_box(
            device: &IDirect3DDevice9,
            width: f32,
            height: f32,
            depth: f32,
        ) -> Result<(Self, Vec<u32>)> {
            Self::shape("box", |mesh, adjacency| unsafe {
                sys::HELPERS_D3DX_CreateBox(device_ptr(device), width, height, depth, mesh, adjacency)
            })
        }

        /// Creates a sphere centered on the origin.
        pub fn create_sphere(
            device: &IDirect3DDevice9,
            radius: f32,
            slices: u32,
            stacks: u32,
        ) -> Result<(Self, Vec<u32>)> {
            Self::shape("sphere", |mesh, adjacency| unsafe {
                sys::HELPERS_D3DX_CreateSphere(device_ptr(device), radius, slices, stacks, mesh, adjacency)
            })
        }

        /// Creates a cylinder along the z axis, centered on the origin.
        /// `radius1` is the radius at the negative z end.
        pub fn create_cylinder(
            device: &IDirect3DDevice9,
            radius1: f32,
            radius2: f32,
            length: f32,
            slices: u32,
            stacks: u32,
        ) -> Result<(Self, Vec<u32>)> {
            Self::shape("cylinder", |mesh, adjacency| unsafe {
                sys::HELPERS_D3DX_CreateCylinder(
                    device_ptr(device),
                    radius1,
                    radius2,
                    length,
                    slices,
                    stacks,
                    mesh,
                    adjacency,
                )
            })
        }

        /// Creates the Utah teapot.
        pub fn create_teapot(device: &IDirect3DDevice9) -> Result<(Self, Vec<u32>)> {
            Self::shape("teapot", |mesh, adjacency| unsafe {
                sys::HELPERS_D3DX_CreateTeapot(device_ptr(device), mesh, adjacency)
            })
        }

        /// Creates an empty mesh. `declaration` must end with `D3DDECL_END`,
        /// see [`crate::VertexDeclaration::build`].
        pub fn new(
            num_faces: u32,
            num_vertices: u32,
            options: u32,
            declaration: &[sys::D3DVERTEXELEMENT9],
            device: &IDirect3DDevice9,
        ) -> Result<Self> {
            check_declaration(declaration)?;
            let mut mesh = std::ptr::null_mut();
            Result::from(unsafe {
                sys::HELPERS_D3DX_CreateMesh(
                    num_faces,
                    num_vertices,
                    options,
                    declaration.as_ptr(),
                    device_ptr(device),
                    &mut mesh,
                )
            })?;
            log::debug!("Created mesh with {num_faces} faces and {num_vertices} vertices.");
            unsafe { ComPtr::from_created(mesh) }.map(Self)
        }

        /// Loads a mesh with its materials and adjacency from an `.x` file.
        pub fn load_from_x(
            path: impl AsRef<Path>,
            options: u32,
            device: &IDirect3DDevice9,
        ) -> Result<XMesh> {
            let path = path.as_ref();
            let c_path = path_to_c_string(path)?;
            let mut adjacency = std::ptr::null_mut();
            let mut materials = std::ptr::null_mut();
            let mut num_materials = 0;
            let mut mesh = std::ptr::null_mut();
            let result = unsafe {
                sys::HELPERS_D3DX_LoadMeshFromX(
                    c_path.as_ptr(),
                    options,
                    device_ptr(device),
                    &mut adjacency,
                    &mut materials,
                    std::ptr::null_mut(),
                    &mut num_materials,
                    &mut mesh,
                )
            };
            let adjacency = adjacency_from(adjacency);
            let materials = unsafe { Buffer::from_raw(materials) };
            Result::from(result)?;
            let mesh = Self(unsafe { ComPtr::from_created(mesh) }?);

            let materials = match materials {
                Some(buffer) => unsafe {
                    read_materials(buffer.as_ptr().cast(), buffer.len(), num_materials as usize)
                }?,
                None => Vec::new(),
            };
            log::debug!(
                "Loaded mesh {path:?} with {} faces and {} materials.",
                mesh.num_faces(),
                materials.len()
            );
            Ok(XMesh {
                mesh,
                adjacency: adjacency?,
                materials,
            })
        }

        fn base(&self) -> sys::LPD3DXBASEMESH {
            // ID3DXMesh derives from ID3DXBaseMesh.
            self.0.as_raw().cast()
        }

        /// The number of vertices in the vertex buffer.
        pub fn num_vertices(&self) -> u32 {
            unsafe { sys::HELPERS_D3DX_ID3DXBaseMesh_GetNumVertices(self.base()) }
        }

        /// The number of triangles.
        pub fn num_faces(&self) -> u32 {
            unsafe { sys::HELPERS_D3DX_ID3DXBaseMesh_GetNumFaces(self.base()) }
        }

        /// The stride of the vertex buffer.
        pub fn num_bytes_per_vertex(&self) -> u32 {
            unsafe { sys::HELPERS_D3DX_ID3DXBaseMesh_GetNumBytesPerVertex(self.base()) }
        }

        /// The `D3DXMESH_*` options the mesh was created with.
        pub fn options(&self) -> u32 {
            unsafe { sys::HELPERS_D3DX_ID3DXBaseMesh_GetOptions(self.base()) }
        }

        /// The size of one index: 4 bytes for `D3DXMESH_32BIT` meshes, 2
        /// otherwise.
        pub fn index_size(&self) -> usize {
            index_size(self.options())
        }

        /// Draws the faces whose attribute id is `attribute_id`.
        pub fn draw_subset(&self, attribute_id: u32) -> Result {
            Result::from(unsafe { sys::HELPERS_D3DX_ID3DXBaseMesh_DrawSubset(self.base(), attribute_id) })
        }

        /// Copies the mesh into one with other options or another vertex
        /// layout. Vertex data is converted element by element.
        pub fn clone_mesh(
            &self,
            options: u32,
            declaration: &[sys::D3DVERTEXELEMENT9],
            device: &IDirect3DDevice9,
        ) -> Result<Self> {
            check_declaration(declaration)?;
            let mut mesh = std::ptr::null_mut();
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseMesh_CloneMesh(
                    self.base(),
                    options,
                    declaration.as_ptr(),
                    device_ptr(device),
                    &mut mesh,
                )
            })?;
            unsafe { ComPtr::from_created(mesh) }.map(Self)
        }

        /// The vertex layout of the mesh, including the `D3DDECL_END`
        /// terminator so it can be passed back to [`Mesh::clone_mesh`].
        pub fn declaration(&self) -> Result<Vec<sys::D3DVERTEXELEMENT9>> {
            let mut elements = [sys::D3DDECL_END; sys::MAX_FVF_DECL_SIZE as usize];
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseMesh_GetDeclaration(self.base(), elements.as_mut_ptr())
            })?;
            Ok(elements[..terminated_len(&elements)].to_vec())
        }

        /// Computes the adjacency of the mesh. Vertices closer than `epsilon`
        /// are treated as one.
        pub fn generate_adjacency(&self, epsilon: f32) -> Result<Vec<u32>> {
            let mut adjacency = vec![0; self.adjacency_len()];
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseMesh_GenerateAdjacency(
                    self.base(),
                    epsilon,
                    adjacency.as_mut_ptr(),
                )
            })?;
            Ok(adjacency)
        }

        fn adjacency_len(&self) -> usize {
            self.num_faces() as usize * 3
        }

        fn check_adjacency(&self, adjacency: &[u32]) -> Result {
            check_adjacency(adjacency, self.num_faces())
        }

        /// Returns an optimized copy of the mesh. `flags` is a combination of
        /// `D3DXMESHOPT_*` and `D3DXMESH_*` options for the new mesh.
        pub fn optimize(&self, flags: u32, adjacency: &[u32]) -> Result<OptimizedMesh> {
            self.check_adjacency(adjacency)?;
            let mut adjacency_out = vec![0; self.adjacency_len()];
            let mut face_remap = vec![0; self.num_faces() as usize];
            let mut vertex_remap = std::ptr::null_mut();
            let mut mesh = std::ptr::null_mut();
            let result = unsafe {
                sys::HELPERS_D3DX_ID3DXMesh_Optimize(
                    self.0.as_raw(),
                    flags,
                    adjacency.as_ptr(),
                    adjacency_out.as_mut_ptr(),
                    face_remap.as_mut_ptr(),
                    &mut vertex_remap,
                    &mut mesh,
                )
            };
            let vertex_remap = unsafe { Buffer::from_raw(vertex_remap) };
            Result::from(result)?;
            let mesh = Self(unsafe { ComPtr::from_created(mesh) }?);

            let faces = mesh.num_faces() as usize;
            adjacency_out.truncate(faces * 3);
            face_remap.truncate(faces);
            let remap = MeshRemap {
                adjacency: adjacency_out,
                face_remap,
                vertex_remap: remap_from(vertex_remap)?,
            };
            Ok(OptimizedMesh { mesh, remap })
        }

        /// Optimizes the mesh in place. Only attribute sorting and reordering
        /// are possible, see [`Mesh::optimize`] for the flags.
        pub fn optimize_in_place(&mut self, flags: u32, adjacency: &[u32]) -> Result<MeshRemap> {
            self.check_adjacency(adjacency)?;
            let mut adjacency_out = vec![0; self.adjacency_len()];
            let mut face_remap = vec![0; self.num_faces() as usize];
            let mut vertex_remap = std::ptr::null_mut();
            let result = unsafe {
                sys::HELPERS_D3DX_ID3DXMesh_OptimizeInplace(
                    self.0.as_raw(),
                    flags,
                    adjacency.as_ptr(),
                    adjacency_out.as_mut_ptr(),
                    face_remap.as_mut_ptr(),
                    &mut vertex_remap,
                )
            };
            let vertex_remap = unsafe { Buffer::from_raw(vertex_remap) };
            Result::from(result)?;

            let faces = self.num_faces() as usize;
            adjacency_out.truncate(faces * 3);
            face_remap.truncate(faces);
            Ok(MeshRemap {
                adjacency: adjacency_out,
                face_remap,
                vertex_remap: remap_from(vertex_remap)?,
            })
        }

        /// Recomputes the vertex normals from the faces. With an adjacency
        /// normals are not shared across discontinuities.
        pub fn compute_normals(&mut self, adjacency: Option<&[u32]>) -> Result {
            if let Some(adjacency) = adjacency {
                self.check_adjacency(adjacency)?;
            }
            let adjacency = adjacency.map_or(std::ptr::null(), <[u32]>::as_ptr);
            Result::from(unsafe { sys::HELPERS_D3DX_ComputeNormals(self.base(), adjacency) })
        }

        /// Maps the vertex buffer, `num_vertices * num_bytes_per_vertex` bytes.
        /// `flags` is a combination of `D3DLOCK_*`.
        pub fn lock_vertex_buffer(&mut self, flags: u32) -> Result<MeshLock<'_, u8>> {
            let len = self.num_vertices() as usize * self.num_bytes_per_vertex() as usize;
            let mut data = std::ptr::null_mut();
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseMesh_LockVertexBuffer(self.base(), flags, &mut data)
            })?;
            Ok(MeshLock::new(self, data.cast(), len, |mesh| {
                Result::from(unsafe { sys::HELPERS_D3DX_ID3DXBaseMesh_UnlockVertexBuffer(mesh.base()) })
            }))
        }

        /// Maps the index buffer, three indices of [`Mesh::index_size`] bytes
        /// per face.
        pub fn lock_index_buffer(&mut self, flags: u32) -> Result<MeshLock<'_, u8>> {
            let len = self.adjacency_len() * self.index_size();
            let mut data = std::ptr::null_mut();
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXBaseMesh_LockIndexBuffer(self.base(), flags, &mut data)
            })?;
            Ok(MeshLock::new(self, data.cast(), len, |mesh| {
                Result::from(unsafe { sys::HELPERS_D3DX_ID3DXBaseMesh_UnlockIndexBuffer(mesh.base()) })
            }))
        }

        /// Maps the attribute ids, one per face.
        pub fn lock_attribute_buffer(&mut self, flags: u32) -> Result<MeshLock<'_, u32>> {
            let len = self.num_faces() as usize;
            let mut data = std::ptr::null_mut();
            Result::from(unsafe {
                sys::HELPERS_D3DX_ID3DXMesh_LockAttributeBuffer(self.0.as_raw(), flags, &mut data)
            })?;
            Ok(MeshLock::new(self, data, len, |mesh| {
                Result::from(unsafe { sys::HELPERS_D3DX_ID3DXMesh_UnlockAttributeBuffer(mesh.0.as_raw()) })
            }))
        }

        /// Returns the underlying interface.
        pub fn as_raw(&self) -> sys::LPD3DXMESH {
            self.0.as_raw()
        }
    }

    fn remap_from(buffer: Option<Buffer>) -> Result<Option<Vec<u32>>> {
        buffer
            .map(|buffer| buffer.as_slice::<u32>().map(<[u32]>::to_vec))
            .transpose()
    }

    /// A mapped buffer of a [`Mesh`]. The buffer is unlocked when the guard is
    /// dropped; use [`MeshLock::unlock`] to see whether that succeeded.
    pub struct MeshLock<'a, T> {
        mesh: &'a Mesh,
        data: *mut T,
        len: usize,
        unlock: fn(&Mesh) -> Result,
        locked: bool,
        _marker: PhantomData<&'a mut [T]>,
    }

    impl<'a, T> MeshLock<'a, T> {
        fn new(mesh: &'a Mesh, data: *mut T, len: usize, unlock: fn(&Mesh) -> Result) -> Self {
            Self {
                mesh,
                data,
                len,
                unlock,
                locked: true,
                _marker: PhantomData,
            }
        }

        /// Unlocks the buffer.
        pub fn unlock(mut self) -> Result {
            self.locked = false;
            (self.unlock)(self.mesh)
        }
    }

    impl<T> std::ops::Deref for MeshLock<'_, T> {
        type Target = [T];

        fn deref(&self) -> &[T] {
            if self.data.is_null() {
                return &[];
            }
            unsafe { std::slice::from_raw_parts(self.data, self.len) }
        }
    }

    impl<T> std::ops::DerefMut for MeshLock<'_, T> {
        fn deref_mut(&mut self) -> &mut [T] {
            if self.data.is_null() {
                return &mut [];
            }
            unsafe { std::slice::from_raw_parts_mut(self.data, self.len) }
        }
    }

    impl<T> std::fmt::Debug for MeshLock<'_, T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("MeshLock")
                .field("mesh", self.mesh)
                .field("data", &self.data)
                .field("len", &self.len)
                .finish()
        }
    }

    impl<T> Drop for MeshLock<'_, T> {
        fn drop(&mut self) {
            if self.locked {
                if let Err(e) = (self.unlock)(self.mesh) {
                    log::error!("Couldn't unlock the buffer of {:?}: {e}", self.mesh);
                }
            }
        }
    }

    /// Computes the axis aligned bounds of `vertices`, whose first field must
    /// be the `D3DXVECTOR3` position.
    pub fn compute_bounding_box<T: bytemuck::Pod>(
        vertices: &[T],
    ) -> Result<(sys::D3DXVECTOR3, sys::D3DXVECTOR3)> {
        compute_bounding_box_strided(bytemuck::cast_slice(vertices), std::mem::size_of::<T>())
    }

    /// Like [`compute_bounding_box`], for raw vertex data such as a locked
    /// vertex buffer with a stride of [`Mesh::num_bytes_per_vertex`].
    pub fn compute_bounding_box_strided(
        vertices: &[u8],
        stride: usize,
    ) -> Result<(sys::D3DXVECTOR3, sys::D3DXVECTOR3)> {
        let (count, stride) = bounding_box_layout(vertices.len(), stride)?;
        let mut min = sys::D3DXVECTOR3::default();
        let mut max = sys::D3DXVECTOR3::default();
        Result::from(unsafe {
            sys::HELPERS_D3DX_ComputeBoundingBox(
                vertices.as_ptr().cast(),
                count,
                stride,
                &mut min,
                &mut max,
            )
        })?;
        Ok((min, max))
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;

    #[test]
    fn index_sizes() {
        assert_eq!(index_size(sys::D3DXMESH_MANAGED), 2);
        assert_eq!(index_size(sys::D3DXMESH_MANAGED | sys::D3DXMESH_32BIT), 4);
    }

    #[test]
    fn adjacency_needs_three_entries_per_face() {
        assert!(check_adjacency(&[u32::MAX; 36], 12).is_ok());
        assert!(check_adjacency(&[], 0).is_ok());
        assert!(matches!(check_adjacency(&[0; 35], 12), Err(Error::Other(_))));
        assert!(matches!(check_adjacency(&[0; 39], 12), Err(Error::Other(_))));
    }

    #[test]
    fn bounding_boxes_need_room_for_a_position() {
        assert_eq!(bounding_box_layout(24 * 3, 24).unwrap(), (3, 24));
        assert_eq!(bounding_box_layout(12, 12).unwrap(), (1, 12));
        assert!(matches!(bounding_box_layout(44, 11), Err(Error::Other(_))));
        assert!(matches!(bounding_box_layout(0, 0), Err(Error::Other(_))));
    }

    #[test]
    fn partial_vertices_are_not_counted() {
        assert_eq!(bounding_box_layout(24 * 3 + 20, 24).unwrap(), (3, 24));
        assert_eq!(bounding_box_layout(11, 12).unwrap(), (0, 12));
    }

    fn raw_material(power: f32, texture: Option<&CString>) -> sys::D3DXMATERIAL {
        sys::D3DXMATERIAL {
            MatD3D: sys::D3DMATERIAL9 {
                Power: power,
                ..Default::default()
            },
            pTextureFilename: texture.map_or(std::ptr::null_mut(), |name| name.as_ptr() as *mut _),
        }
    }

    #[test]
    fn materials_are_read() {
        let texture = CString::new("crate.dds").unwrap();
        let raw = [raw_material(8.0, Some(&texture)), raw_material(2.0, None)];
        let len = std::mem::size_of_val(&raw);
        let materials = unsafe { read_materials(raw.as_ptr().cast(), len, 2) }.unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].material.Power, 8.0);
        assert_eq!(materials[0].texture_filename.as_deref(), Some("crate.dds"));
        assert_eq!(materials[1].material.Power, 2.0);
        assert_eq!(materials[1].texture_filename, None);
    }

    #[test]
    fn material_count_must_fit_the_buffer() {
        let raw = [raw_material(1.0, None)];
        let len = std::mem::size_of_val(&raw);
        let result = unsafe { read_materials(raw.as_ptr().cast(), len, 2) };
        assert!(matches!(result, Err(Error::Other(_))));
        let result = unsafe { read_materials(raw.as_ptr().cast(), len - 1, 1) };
        assert!(matches!(result, Err(Error::Other(_))));
        let result = unsafe { read_materials(raw.as_ptr().cast(), len, usize::MAX) };
        assert!(matches!(result, Err(Error::Other(_))));
    }

    #[test]
    fn no_materials() {
        let materials = unsafe { read_materials(std::ptr::null(), 0, 0) }.unwrap();
        assert!(materials.is_empty());
    }
}
