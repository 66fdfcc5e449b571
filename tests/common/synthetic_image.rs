use marker_edges::Plane;

/// Dark left half, bright right half starting at column `split_x`.
pub fn vertical_step_u8(width: usize, height: usize, split_x: usize) -> Plane<u8> {
    let mut img = Plane::new(width, height);
    for y in 0..height {
        for x in split_x..width {
            img.set(x, y, 255);
        }
    }
    img
}

/// Single `fg` pixel at (`x`, `y`) on a `bg` background.
pub fn single_dot_u8(
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    bg: u8,
    fg: u8,
) -> Plane<u8> {
    let mut img = Plane::filled(width, height, bg);
    img.set(x, y, fg);
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Plane<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = Plane::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img.set(x, y, val);
        }
    }
    img
}

/// Checkerboard with deterministic pseudo-random noise (LCG) added.
pub fn noisy_checkerboard_u8(width: usize, height: usize, cell: usize, seed: u32) -> Plane<u8> {
    let mut img = checkerboard_u8(width, height, cell);
    let mut state = seed;
    for px in img.data.iter_mut() {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let noise = ((state >> 24) as i32 % 41) - 20;
        *px = (*px as i32 + noise).clamp(0, 255) as u8;
    }
    img
}
