//! Owned single-channel plane in row-major layout (stride == width).
//!
//! One generic container backs every buffer of the edge pipeline: the 8-bit
//! source, the `i16` derivative/magnitude planes and the 8-bit label planes.
use super::border::clamp_index;
use super::traits::ImageView;
use crate::error::EdgeError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane<T> {
    /// Width in pixels
    pub w: usize,
    /// Height in pixels
    pub h: usize,
    /// Elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

impl<T: Copy + Default> Plane<T> {
    /// Construct a default-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }
}

impl<T: Copy> Plane<T> {
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap an existing row-major buffer. Fails when `data.len() != w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self, EdgeError> {
        if data.len() != w * h {
            return Err(EdgeError::BufferSizeMismatch {
                width: w,
                height: h,
                len: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.cols(), self.rows())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h, "({x}, {y}) outside plane");
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Sample with replicate-border resolution of signed coordinates.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> T {
        self.get(clamp_index(x, self.w), clamp_index(y, self.h))
    }

    /// Copy the contents of `other`, which must have the same dimensions.
    pub fn copy_from(&mut self, other: &Plane<T>) {
        debug_assert_eq!(self.dims(), other.dims());
        self.data.copy_from_slice(&other.data);
    }

    /// Number of samples satisfying `pred`.
    pub fn count(&self, pred: impl Fn(T) -> bool) -> usize {
        self.data.iter().filter(|&&v| pred(v)).count()
    }
}

impl<T: Copy + Send> Plane<T> {
    /// Run `f(y, row)` over every row, across the rayon pool when the
    /// `parallel` feature is enabled. Rows are disjoint, so the result does
    /// not depend on scheduling.
    pub fn for_each_row_mut<F>(&mut self, f: F)
    where
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        if self.w == 0 {
            return;
        }
        let stride = self.stride;
        #[cfg(feature = "parallel")]
        self.data
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
        #[cfg(not(feature = "parallel"))]
        self.data
            .chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}

impl<T: Copy> ImageView for Plane<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Plane::from_vec(4, 3, vec![0u8; 11]).unwrap_err();
        assert_eq!(
            err,
            EdgeError::BufferSizeMismatch {
                width: 4,
                height: 3,
                len: 11
            }
        );
    }

    #[test]
    fn clamped_access_replicates_edges() {
        let data: Vec<i16> = (0..12).collect();
        let p = Plane::from_vec(4, 3, data).unwrap();
        assert_eq!(p.get_clamped(-3, 0), 0);
        assert_eq!(p.get_clamped(10, 0), 3);
        assert_eq!(p.get_clamped(1, -1), 1);
        assert_eq!(p.get_clamped(1, 7), 9);
        assert_eq!(p.get_clamped(2, 1), 6);
    }

    #[test]
    fn row_writer_visits_every_row_once() {
        let mut p = Plane::<u32>::new(5, 7);
        p.for_each_row_mut(|y, row| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = (y * 100 + x) as u32;
            }
        });
        for y in 0..7 {
            for x in 0..5 {
                assert_eq!(p.get(x, y), (y * 100 + x) as u32);
            }
        }
        assert_eq!((p.cols(), p.rows()), (5, 7));
        assert_eq!(p.row_iter().count(), 7);
    }

    #[test]
    fn row_writer_matches_serial_rows() {
        let (w, h) = (37, 53);
        let write = |y: usize, row: &mut [i16]| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = ((x * 31 + y * 17) % 251) as i16 - 125;
            }
        };
        let mut p = Plane::<i16>::new(w, h);
        p.for_each_row_mut(write);
        let mut serial = Plane::<i16>::new(w, h);
        for (y, row) in serial.data.chunks_mut(w).enumerate().rev() {
            write(y, row);
        }
        assert_eq!(p, serial);
    }
}
