//! 寄存器位域描述符.
//!
//! 硬件寄存器镜像中每个字段由 {字索引, 起始位, 位宽} 三元组唯一描述.
//! 不依赖任何语言级位域布局 (跨编译器/ABI 不可移植), 所有布局信息
//! 显式声明, 由 [`crate::RegWords`] 以确定的掩码/移位运算读写.

/// 寄存器位域描述符
///
/// 描述一个字段在寄存器镜像中的精确位置: 位于第 `word` 个 32 位字,
/// 从第 `lsb` 位开始, 占 `width` 位. 字段不得跨字.
///
/// # 示例
/// ```
/// use vdec_core::BitField;
///
/// // 第 9 个字的低 10 位
/// const DEC_MODE: BitField = BitField::new(9, 0, 10);
/// assert_eq!(DEC_MODE.mask(), 0x3ff);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// 字索引 (从寄存器镜像起始算起)
    pub word: usize,
    /// 字内起始位 (0 为最低位)
    pub lsb: u32,
    /// 位宽 (1-32)
    pub width: u32,
}

impl BitField {
    /// 创建位域描述符
    ///
    /// 位宽为 0 或越过字边界时在编译期 (const 上下文) 直接报错.
    pub const fn new(word: usize, lsb: u32, width: u32) -> Self {
        assert!(width >= 1 && width <= 32, "BitField: 位宽必须在 1-32 之间");
        assert!(lsb < 32 && lsb + width <= 32, "BitField: 字段越过字边界");
        Self { word, lsb, width }
    }

    /// 创建占满整个字的位域 (DMA 地址、长度计数等)
    pub const fn word32(word: usize) -> Self {
        Self::new(word, 0, 32)
    }

    /// 字段在字内的掩码 (已移位到 lsb 位置)
    pub const fn mask(self) -> u32 {
        if self.width == 32 {
            u32::MAX
        } else {
            ((1u32 << self.width) - 1) << self.lsb
        }
    }

    /// 字段可表示的最大值
    pub const fn max_value(self) -> u32 {
        self.mask() >> self.lsb
    }

    /// 是否与另一字段占用重叠的位
    pub const fn overlaps(self, other: Self) -> bool {
        self.word == other.word && self.mask() & other.mask() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_basic() {
        let f = BitField::new(0, 4, 3);
        assert_eq!(f.mask(), 0b0111_0000);
        assert_eq!(f.max_value(), 7);
    }

    #[test]
    fn test_mask_full_word() {
        let f = BitField::word32(5);
        assert_eq!(f.mask(), u32::MAX);
        assert_eq!(f.max_value(), u32::MAX);
    }

    #[test]
    fn test_mask_high_bits() {
        // 最高 4 位
        let f = BitField::new(0, 28, 4);
        assert_eq!(f.mask(), 0xf000_0000);
    }

    #[test]
    fn test_overlaps() {
        let a = BitField::new(3, 0, 8);
        let b = BitField::new(3, 7, 2);
        let c = BitField::new(3, 8, 4);
        let d = BitField::new(4, 0, 8);

        assert!(a.overlaps(b));
        assert!(!a.overlaps(c));
        assert!(!a.overlaps(d));
    }
}
