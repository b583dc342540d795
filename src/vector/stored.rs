//! Vectors stored in an external `Real` buffer.
//!
//! Large point sets can be kept in one flat `Vec<Real>` (or memory shared
//! with other code) without a per-vector allocation. A stored vector is a view
//! of the three consecutive slots `storage[offset..offset + 3]`; `stride` is the
//! distance between successive vectors in the buffer and is used to step a
//! view through a packed buffer.
//!
//! Layout invariant (caller's responsibility, not validated): for `count`
//! vectors, `offset + stride * (count - 1) + 2 < storage.len()`. Accessing a
//! view outside the buffer panics with the slice bounds check.

use crate::float_types::Real;
use crate::traits::{ModifiableVector3d, Vector3d};
use std::fmt;

/// The number of `Real` slots one vector occupies (3).
pub const STRUCT_SIZE: usize = 3;

/// A read-only vector view into an external buffer.
#[derive(Debug, Clone, Copy)]
pub struct StoredVec3<'a> {
    storage: &'a [Real],
    offset: usize,
    stride: usize,
}

impl<'a> StoredVec3<'a> {
    /// View the vector at `offset` of a tightly packed buffer (stride [`STRUCT_SIZE`]).
    pub const fn from_storage(storage: &'a [Real], offset: usize) -> Self {
        Self::with_stride(storage, offset, STRUCT_SIZE)
    }

    pub const fn with_stride(storage: &'a [Real], offset: usize, stride: usize) -> Self {
        StoredVec3 {
            storage,
            offset,
            stride,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    pub const fn storage(&self) -> &'a [Real] {
        self.storage
    }

    pub fn set_storage(&mut self, storage: &'a [Real]) {
        self.storage = storage;
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn set_stride(&mut self, stride: usize) {
        self.stride = stride;
    }

    /// The view `n` strides further along the buffer.
    pub const fn nth(&self, n: usize) -> StoredVec3<'a> {
        Self::with_stride(self.storage, self.offset + n * self.stride, self.stride)
    }

    /// Moves this view one stride forward.
    pub fn advance(&mut self) {
        self.offset += self.stride;
    }
}

impl Vector3d for StoredVec3<'_> {
    #[inline]
    fn x(&self) -> Real {
        self.storage[self.offset]
    }

    #[inline]
    fn y(&self) -> Real {
        self.storage[self.offset + 1]
    }

    #[inline]
    fn z(&self) -> Real {
        self.storage[self.offset + 2]
    }
}

impl fmt::Display for StoredVec3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x(), self.y(), self.z())
    }
}

/// A writable vector view into an external buffer.
#[derive(Debug)]
pub struct StoredVec3Mut<'a> {
    storage: &'a mut [Real],
    offset: usize,
    stride: usize,
}

impl<'a> StoredVec3Mut<'a> {
    /// View the vector at `offset` of a tightly packed buffer (stride [`STRUCT_SIZE`]).
    pub fn from_storage(storage: &'a mut [Real], offset: usize) -> Self {
        Self::with_stride(storage, offset, STRUCT_SIZE)
    }

    pub fn with_stride(storage: &'a mut [Real], offset: usize, stride: usize) -> Self {
        StoredVec3Mut {
            storage,
            offset,
            stride,
        }
    }

    /// A writable view into `storage` using the offset and stride of `layout`.
    pub fn with_layout_of(storage: &'a mut [Real], layout: &StoredVec3<'_>) -> Self {
        Self::with_stride(storage, layout.offset(), layout.stride())
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn set_stride(&mut self, stride: usize) {
        self.stride = stride;
    }

    /// Moves this view one stride forward.
    pub fn advance(&mut self) {
        self.offset += self.stride;
    }

    /// A read-only view of the same slots.
    pub fn as_view(&self) -> StoredVec3<'_> {
        StoredVec3::with_stride(&*self.storage, self.offset, self.stride)
    }

    /// Releases the view and hands the buffer back.
    pub fn into_storage(self) -> &'a mut [Real] {
        self.storage
    }
}

impl Vector3d for StoredVec3Mut<'_> {
    #[inline]
    fn x(&self) -> Real {
        self.storage[self.offset]
    }

    #[inline]
    fn y(&self) -> Real {
        self.storage[self.offset + 1]
    }

    #[inline]
    fn z(&self) -> Real {
        self.storage[self.offset + 2]
    }
}

impl ModifiableVector3d for StoredVec3Mut<'_> {
    #[inline]
    fn set_x(&mut self, x: Real) {
        self.storage[self.offset] = x;
    }

    #[inline]
    fn set_y(&mut self, y: Real) {
        self.storage[self.offset + 1] = y;
    }

    #[inline]
    fn set_z(&mut self, z: Real) {
        self.storage[self.offset + 2] = z;
    }
}

impl fmt::Display for StoredVec3Mut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x(), self.y(), self.z())
    }
}

/// Iterates `count` read-only views starting at `offset`, `stride` slots apart.
pub fn stored_vectors(
    storage: &[Real],
    offset: usize,
    stride: usize,
    count: usize,
) -> impl Iterator<Item = StoredVec3<'_>> {
    let first = StoredVec3::with_stride(storage, offset, stride);
    (0..count).map(move |n| first.nth(n))
}
