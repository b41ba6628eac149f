//! POC 高位扩展块 (字 200-204).
//!
//! H.264/HEVC 的 POC 取值范围超出参数块字段宽度, 每个参考槽与
//! 当前帧各有 4 位高位放在此扩展块中; VP9 镜像不含此区域.

use vdec_core::BitField;

/// POC 高位扩展块字数 (字 200-204)
pub const HIGHPOC_WORDS: usize = 5;

/// 参考槽高位数量
pub const REF_HIGHBIT_COUNT: usize = 32;

/// 参考槽 POC 高 4 位 (每字 8 个槽)
pub const fn ref_poc_highbit(i: usize) -> BitField {
    assert!(i < REF_HIGHBIT_COUNT);
    BitField::new(200 + i / 8, (i % 8) as u32 * 4, 4)
}

/// 当前帧 POC 高 4 位
pub const CUR_POC_HIGHBIT: BitField = BitField::new(204, 0, 4);
