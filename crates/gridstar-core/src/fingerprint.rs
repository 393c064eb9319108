//! Cheap, order-sensitive grid fingerprints.
//!
//! The fingerprint is a 64-bit FNV-1a hash over every cell followed by the
//! width and height. It only answers "is this probably the grid I saw last
//! time", so collisions are an accepted risk.

use crate::grid::GridView;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Cell types that can be folded into a fingerprint.
pub trait CellBits {
    /// The cell value widened to 64 bits.
    fn bits(&self) -> u64;
}

macro_rules! impl_cell_bits {
    ($($t:ty),*) => {
        $(
            impl CellBits for $t {
                #[inline]
                fn bits(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_cell_bits!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl CellBits for bool {
    #[inline]
    fn bits(&self) -> u64 {
        u64::from(*self)
    }
}

impl CellBits for char {
    #[inline]
    fn bits(&self) -> u64 {
        u64::from(*self)
    }
}

#[inline]
fn fold(hash: u64, value: u64) -> u64 {
    (hash ^ value).wrapping_mul(FNV_PRIME)
}

impl<T: CellBits> GridView<'_, T> {
    /// Fingerprint of the grid contents and dimensions.
    pub fn fingerprint(&self) -> u64 {
        let hash = self
            .iter()
            .fold(FNV_OFFSET_BASIS, |hash, cell| fold(hash, cell.bits()));
        let hash = fold(hash, self.width() as u64);
        fold(hash, self.height() as u64)
    }
}
