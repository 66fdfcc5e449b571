//! Collapse the hysteresis plane into the 0/255 edge mask.
use super::nms::STRONG;
use crate::image::{ImageView, Plane};

/// Mask value of an edge pixel.
pub const EDGE: u8 = 255;

/// Interior pixels become [`EDGE`] iff strong; the 1-pixel frame is always 0,
/// matching the hysteresis stage which never resolves it.
pub fn finalize_mask(hyst: &Plane<u8>, mask: &mut Plane<u8>) {
    debug_assert_eq!(hyst.dims(), mask.dims());
    let (w, h) = hyst.dims();
    mask.for_each_row_mut(|y, out| {
        if y == 0 || y + 1 >= h {
            out.fill(0);
            return;
        }
        let src = hyst.row(y);
        for (x, (px, &label)) in out.iter_mut().zip(src).enumerate() {
            let interior = x > 0 && x + 1 < w;
            *px = if interior && label == STRONG { EDGE } else { 0 };
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::nms::{REJECT, WEAK};

    #[test]
    fn only_interior_strong_pixels_survive() {
        let hyst = Plane::filled(4, 4, STRONG);
        let mut mask = Plane::filled(4, 4, 7u8);
        finalize_mask(&hyst, &mut mask);
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0,
            0, EDGE, EDGE, 0,
            0, EDGE, EDGE, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(mask.data, expected);
    }

    #[test]
    fn weak_and_rejected_map_to_zero() {
        let hyst = Plane::from_vec(3, 3, vec![0, 0, 0, 0, WEAK, 0, 0, REJECT, 0]).unwrap();
        let mut mask = Plane::filled(3, 3, 1u8);
        finalize_mask(&hyst, &mut mask);
        assert!(mask.data.iter().all(|&v| v == 0));
    }
}
