//! H.264 格式参数块 (字 64-112).
//!
//! 当前帧与 32 个参考槽的 POC、每参考帧的场/colmv 使用标志,
//! 以及错误参考帧信息.

use vdec_core::BitField;

/// 格式参数块字数 (字 64-112)
pub const PARAMS_WORDS: usize = 49;

/// 参考 POC 槽数
pub const REF_POC_COUNT: usize = 32;
/// 参考帧信息槽数
pub const REF_INFO_COUNT: usize = 16;

// ========================
// reg064: h26x 码流设置
// ========================

/// 帧模式/片模式
pub const FRAME_ORSLICE: BitField = BitField::new(64, 0, 1);
/// RPS 模式
pub const RPS_MODE: BitField = BitField::new(64, 1, 1);
/// 码流模式
pub const STREAM_MODE: BitField = BitField::new(64, 2, 1);
/// 码流末包标志
pub const STREAM_LASTPACKET: BitField = BitField::new(64, 3, 1);
/// 首片标志
pub const FIRSTSLICE_FLAG: BitField = BitField::new(64, 4, 1);

// ========================
// reg065-098: POC
// ========================

/// 当前帧顶场 POC
pub const CUR_TOP_POC: BitField = BitField::word32(65);
/// 当前帧底场 POC
pub const CUR_BOT_POC: BitField = BitField::word32(66);

/// 参考槽 POC (32 个槽, 顶/底场各占一槽)
pub const fn ref_poc(i: usize) -> BitField {
    assert!(i < REF_POC_COUNT);
    BitField::word32(67 + i)
}

// ========================
// reg099-102: 参考帧信息 (每字段 8 位, 每字 4 个)
// ========================

/// 参考帧为场编码
pub const fn ref_field(i: usize) -> BitField {
    ref_info_bit(i, 0)
}

/// 参考帧顶场被使用
pub const fn ref_topfield_used(i: usize) -> BitField {
    ref_info_bit(i, 1)
}

/// 参考帧底场被使用
pub const fn ref_botfield_used(i: usize) -> BitField {
    ref_info_bit(i, 2)
}

/// 参考帧 colmv 被使用
pub const fn ref_colmv_use_flag(i: usize) -> BitField {
    ref_info_bit(i, 3)
}

const fn ref_info_bit(i: usize, bit: u32) -> BitField {
    assert!(i < REF_INFO_COUNT);
    BitField::new(99 + i / 4, (i % 4) as u32 * 8 + bit, 1)
}

// ========================
// reg112: 错误参考帧信息
// ========================

/// 错误参考帧为场编码
pub const REF_ERROR_FIELD: BitField = BitField::new(112, 0, 1);
/// 错误参考帧顶场标志
pub const REF_ERROR_TOPFIELD: BitField = BitField::new(112, 1, 1);
/// 错误参考帧顶场被使用
pub const REF_ERROR_TOPFIELD_USED: BitField = BitField::new(112, 2, 1);
/// 错误参考帧底场被使用
pub const REF_ERROR_BOTFIELD_USED: BitField = BitField::new(112, 3, 1);
