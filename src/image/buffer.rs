//! Owned grid of packed ARGB words in row-major layout.
//!
//! Origin is the top-left pixel, `data[y * width + x]` holds pixel `(x, y)`.
//! Words follow the layout of [`crate::color`]; the buffer itself stores
//! whatever it is given and does not validate alpha.
//!
//! A `0 × 0` buffer is the "no image" sentinel returned when a load fails.
use crate::error::PixelError;
use crate::image::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Allocate a `width × height` buffer of transparent black (`0x00000000`).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// The zero-size sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adopt existing packed words. Returns `None` if `data.len()` is not
    /// `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u32>) -> Option<Self> {
        (data.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Give up the backing storage.
    pub fn into_raw(self) -> Vec<u32> {
        self.data
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Linear index of `(x, y)`, or `IndexOutOfRange`.
    #[inline]
    fn index(&self, x: i64, y: i64) -> Result<usize, PixelError> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return Err(PixelError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Packed word at `(x, y)`.
    #[inline]
    pub fn word(&self, x: i64, y: i64) -> Result<u32, PixelError> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Store a packed word at `(x, y)`. Nothing is written on error.
    #[inline]
    pub fn set_word(&mut self, x: i64, y: i64, word: u32) -> Result<(), PixelError> {
        let i = self.index(x, y)?;
        self.data[i] = word;
        Ok(())
    }
}

impl ImageView for PixelBuffer {
    type Pixel = u32;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }
    #[inline]
    fn height(&self) -> u32 {
        self.height
    }
    #[inline]
    fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }
    #[inline]
    fn as_slice(&self) -> &[u32] {
        &self.data
    }
}

impl ImageViewMut for PixelBuffer {
    #[inline]
    fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::PixelBuffer;
    use crate::error::PixelError;
    use crate::image::traits::{ImageView, ImageViewMut};

    #[test]
    fn new_buffer_is_transparent_black() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.dimensions(), (3, 2));
        assert!(buf.as_slice().iter().all(|&w| w == 0));
        assert!(!buf.is_empty());
    }

    #[test]
    fn sentinel_is_empty() {
        let buf = PixelBuffer::empty();
        assert!(buf.is_empty());
        assert_eq!(buf.rows().count(), 0);
        assert!(matches!(
            buf.word(0, 0),
            Err(PixelError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn words_are_row_major() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.set_word(2, 1, 0xDEAD_BEEF).unwrap();
        assert_eq!(buf.as_slice()[5], 0xDEAD_BEEF);
        assert_eq!(buf.row(1), &[0, 0, 0xDEAD_BEEF]);
        buf.row_mut(0)[1] = 7;
        assert_eq!(buf.word(1, 0), Ok(7));
    }

    #[test]
    fn out_of_range_writes_leave_buffer_untouched() {
        let mut buf = PixelBuffer::new(2, 2);
        let before = buf.clone();
        for (x, y) in [(2, 0), (0, 2), (-1, 0), (0, -1), (i64::MAX, 0)] {
            let err = buf.set_word(x, y, 1).unwrap_err();
            assert_eq!(
                err,
                PixelError::IndexOutOfRange {
                    x,
                    y,
                    width: 2,
                    height: 2
                }
            );
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 3]).is_none());
        let buf = PixelBuffer::from_raw(2, 1, vec![1, 2]).expect("valid size");
        assert_eq!(buf.word(1, 0), Ok(2));
        assert_eq!(buf.into_raw(), vec![1, 2]);
    }

    #[test]
    fn zero_width_rows_are_empty_slices() {
        let buf = PixelBuffer::new(0, 3);
        assert!(!buf.is_empty());
        assert_eq!(buf.rows().len(), 3);
        assert!(buf.rows().all(|r| r.is_empty()));
    }
}
