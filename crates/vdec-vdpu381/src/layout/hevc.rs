//! HEVC 格式参数块 (字 64-112).
//!
//! 当前帧与 16 个参考槽的 POC、参考有效位、MVC 层间参数,
//! 以及错误参考帧信息. reg064 的 h26x 码流设置与 H.264 共用
//! 同一布局 (见 [`super::h264`]).

use vdec_core::BitField;

/// 格式参数块字数 (字 64-112)
pub const PARAMS_WORDS: usize = 49;

/// 参考 POC 槽数
pub const REF_POC_COUNT: usize = 16;
/// 参考有效位数
pub const REF_VALID_COUNT: usize = 15;

// reg064 与 H.264 共用 h26x 码流设置布局
pub use super::h264::{FIRSTSLICE_FLAG, FRAME_ORSLICE, RPS_MODE, STREAM_LASTPACKET, STREAM_MODE};

// ========================
// reg065-082: POC
// ========================

/// 当前帧顶场 POC
pub const CUR_TOP_POC: BitField = BitField::word32(65);
/// 当前帧底场 POC
pub const CUR_BOT_POC: BitField = BitField::word32(66);

/// 参考槽 POC (16 个槽)
pub const fn ref_poc(i: usize) -> BitField {
    assert!(i < REF_POC_COUNT);
    BitField::word32(67 + i)
}

// ========================
// reg099: 参考有效位 (每 4 位一组, 组间隔 4 位保留)
// ========================

/// 参考槽有效位
pub const fn ref_valid(i: usize) -> BitField {
    assert!(i < REF_VALID_COUNT);
    BitField::new(99, (i / 4) as u32 * 8 + (i % 4) as u32, 1)
}

// ========================
// reg103-104: MVC 层间参数
// ========================

/// 参考帧与当前帧同层标志 (按参考槽的位掩码)
pub const REF_PIC_LAYER_SAME_WITH_CUR: BitField = BitField::new(103, 0, 16);

/// poc_lsb_not_present_flag
pub const POC_LSB_NOT_PRESENT_FLAG: BitField = BitField::new(104, 0, 1);
/// 直接参考层数量
pub const NUM_DIRECT_REF_LAYERS: BitField = BitField::new(104, 1, 6);
/// 参考层图像数量
pub const NUM_REFLAYER_PICS: BitField = BitField::new(104, 8, 6);
/// default_ref_layers_active_flag
pub const DEFAULT_REF_LAYERS_ACTIVE_FLAG: BitField = BitField::new(104, 14, 1);
/// max_one_active_ref_layer_flag
pub const MAX_ONE_ACTIVE_REF_LAYER_FLAG: BitField = BitField::new(104, 15, 1);
/// poc_reset_info_present_flag
pub const POC_RESET_INFO_PRESENT_FLAG: BitField = BitField::new(104, 16, 1);
/// vps_poc_lsb_aligned_flag
pub const VPS_POC_LSB_ALIGNED_FLAG: BitField = BitField::new(104, 17, 1);
/// MVC POC15 有效标志
pub const MVC_POC15_VALID_FLAG: BitField = BitField::new(104, 18, 1);

// ========================
// reg112: 错误参考帧信息 (与 H.264 同布局)
// ========================

pub use super::h264::{
    REF_ERROR_BOTFIELD_USED, REF_ERROR_FIELD, REF_ERROR_TOPFIELD, REF_ERROR_TOPFIELD_USED,
};
