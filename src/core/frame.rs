//! RGBA8 frame buffers with an explicit row stride.
//!
//! Hosts frequently pad rows, so a row starts at `y * stride` rather than at
//! `y * width * 4`. Kernels must always go through [`FrameBuffer::row`] /
//! [`FrameBuffer::row_mut`].

use crate::core::error::{EffectError, EffectResult};
use image::RgbaImage;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// An 8-bit RGBA image with a row stride that may exceed `width * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a zeroed, tightly packed buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            stride,
            data: vec![0; stride * height as usize],
        }
    }

    /// Create a zeroed buffer with padded rows.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> EffectResult<Self> {
        check_stride(width, stride)?;
        Ok(Self {
            width,
            height,
            stride,
            data: vec![0; stride * height as usize],
        })
    }

    /// Wrap existing pixel storage.
    pub fn from_raw(width: u32, height: u32, stride: usize, data: Vec<u8>) -> EffectResult<Self> {
        check_stride(width, stride)?;
        let required = stride * height as usize;
        if data.len() < required {
            return Err(EffectError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Create a tightly packed buffer where every pixel has the same value.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Self {
        let mut frame = Self::new(width, height);
        frame.fill(pixel);
        frame
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw storage, including row padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of meaningful bytes in a row.
    pub fn row_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Pixel bytes of row `y`, excluding padding.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.row_len()]
    }

    /// Mutable pixel bytes of row `y`, excluding padding.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        let len = self.row_len();
        &mut self.data[start..start + len]
    }

    /// Read the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = x as usize * BYTES_PER_PIXEL;
        let row = self.row(y);
        [row[offset], row[offset + 1], row[offset + 2], row[offset + 3]]
    }

    /// Write the pixel at `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        let offset = x as usize * BYTES_PER_PIXEL;
        self.row_mut(y)[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&pixel);
    }

    /// Set every pixel to the same value. Row padding is left as is.
    pub fn fill(&mut self, pixel: [u8; 4]) {
        for y in 0..self.height {
            for px in self.row_mut(y).chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&pixel);
            }
        }
    }

    /// Check that the storage covers every row.
    pub fn check_storage(&self) -> EffectResult<()> {
        check_stride(self.width, self.stride)?;
        let required = self.stride * self.height as usize;
        if self.data.len() < required {
            return Err(EffectError::BufferTooSmall {
                required,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Copy pixels row by row from another buffer of the same dimensions.
    pub(crate) fn copy_pixels_from(&mut self, other: &FrameBuffer) {
        for y in 0..self.height {
            self.row_mut(y).copy_from_slice(other.row(y));
        }
    }

    /// Convert into an `image` crate buffer (drops row padding).
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut packed = Vec::with_capacity(self.row_len() * self.height as usize);
        for y in 0..self.height {
            packed.extend_from_slice(self.row(y));
        }
        RgbaImage::from_raw(self.width, self.height, packed)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}

impl From<&RgbaImage> for FrameBuffer {
    fn from(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            stride: width as usize * BYTES_PER_PIXEL,
            data: image.as_raw().clone(),
        }
    }
}

impl From<RgbaImage> for FrameBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            stride: width as usize * BYTES_PER_PIXEL,
            data: image.into_raw(),
        }
    }
}

fn check_stride(width: u32, stride: usize) -> EffectResult<()> {
    let min = width as usize * BYTES_PER_PIXEL;
    if stride < min {
        return Err(EffectError::StrideTooSmall { stride, min });
    }
    Ok(())
}
