//! 硬件对齐工具.
//!
//! 解码输出缓冲区的行距与高度需要按硬件固定粒度向上对齐,
//! 对齐粒度由硬件总线宽度决定, 不可配置.

/// 向上取整到 `align` 的整数倍
///
/// `align` 必须为 2 的幂.
pub const fn round_up(value: u32, align: u32) -> u32 {
    debug_assert!(align.is_power_of_two());
    (value + align - 1) & !(align - 1)
}

/// 值是否已按 `align` 对齐
///
/// `align` 必须为 2 的幂.
pub const fn is_aligned(value: u32, align: u32) -> bool {
    debug_assert!(align.is_power_of_two());
    value & (align - 1) == 0
}
