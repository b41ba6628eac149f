//! 地址块 (公共: 字 128-142; 格式变体: 字 160-197).
//!
//! 全部为完整 32 位 DMA 地址寄存器. 公共地址块为三种格式共用;
//! 格式地址块按 H.26x / VP9 变体布局, 两个变体的扫描表、colmv
//! 与 CABAC 表地址位置一致.

use vdec_core::BitField;

/// 公共地址块字数 (字 128-142)
pub const COMMON_ADDR_WORDS: usize = 15;
/// 格式地址块字数 (字 160-197)
pub const CODEC_ADDR_WORDS: usize = 38;

/// RCB (行缓冲) 槽数
pub const RCB_COUNT: usize = 10;
/// 参考帧地址槽数 (H.26x)
pub const REF_BASE_COUNT: usize = 16;
/// colmv 地址槽数
pub const COLMV_BASE_COUNT: usize = 16;

// ========================
// 公共地址块
// ========================

/// 码流 (RLC) 基地址
pub const RLC_BASE: BitField = BitField::word32(128);
/// 码流回写基地址
pub const RLCWRITE_BASE: BitField = BitField::word32(129);
/// 解码输出基地址
pub const DECOUT_BASE: BitField = BitField::word32(130);
/// 当前帧 colmv 基地址
pub const COLMV_CUR_BASE: BitField = BitField::word32(131);
/// 错误参考帧基地址
pub const ERROR_REF_BASE: BitField = BitField::word32(132);

/// RCB 行缓冲基地址
pub const fn rcb_base(i: usize) -> BitField {
    assert!(i < RCB_COUNT);
    BitField::word32(133 + i)
}

// ========================
// H.26x 格式地址块
// ========================

/// PPS 表基地址
pub const H26X_PPS_BASE: BitField = BitField::word32(161);
/// RPS 表基地址
pub const H26X_RPS_BASE: BitField = BitField::word32(163);

/// 参考帧基地址
pub const fn h26x_ref_base(i: usize) -> BitField {
    assert!(i < REF_BASE_COUNT);
    BitField::word32(164 + i)
}

/// 扫描表基地址
pub const H26X_SCANLIST_ADDR: BitField = BitField::word32(180);

/// 参考帧 colmv 基地址
pub const fn h26x_colmv_base(i: usize) -> BitField {
    assert!(i < COLMV_BASE_COUNT);
    BitField::word32(181 + i)
}

/// CABAC 表基地址
pub const H26X_CABACTBL_BASE: BitField = BitField::word32(197);

// ========================
// VP9 格式地址块
// ========================

/// 概率增量表基地址
pub const VP9_DELTA_PROB_BASE: BitField = BitField::word32(160);
/// 上一帧概率表基地址
pub const VP9_LAST_PROB_BASE: BitField = BitField::word32(162);
/// last 参考帧基地址
pub const VP9_REFERLAST_BASE: BitField = BitField::word32(164);
/// golden 参考帧基地址
pub const VP9_REFERGOLDEN_BASE: BitField = BitField::word32(165);
/// altref 参考帧基地址
pub const VP9_REFERALTREF_BASE: BitField = BitField::word32(166);
/// 符号计数缓冲基地址
pub const VP9_COUNT_BASE: BitField = BitField::word32(167);
/// 上一帧分段图基地址
pub const VP9_SEGIDLAST_BASE: BitField = BitField::word32(168);
/// 当前帧分段图基地址
pub const VP9_SEGIDCUR_BASE: BitField = BitField::word32(169);
/// 参考帧 colmv 基地址
pub const VP9_REFCOLMV_BASE: BitField = BitField::word32(170);
/// 帧间命令缓冲基地址
pub const VP9_INTERCMD_BASE: BitField = BitField::word32(171);
/// 概率表更新回写基地址
pub const VP9_UPDATE_PROB_WR_BASE: BitField = BitField::word32(172);
/// 扫描表基地址
pub const VP9_SCANLIST_ADDR: BitField = BitField::word32(180);

/// colmv 基地址
pub const fn vp9_colmv_base(i: usize) -> BitField {
    assert!(i < COLMV_BASE_COUNT);
    BitField::word32(181 + i)
}

/// CABAC 表基地址
pub const VP9_CABACTBL_BASE: BitField = BitField::word32(197);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{OFFSET_CODEC_ADDR_REGS, OFFSET_COMMON_ADDR_REGS};

    #[test]
    fn test_common_addr_bounds() {
        assert_eq!(RLC_BASE.word, OFFSET_COMMON_ADDR_REGS);
        assert_eq!(rcb_base(9).word, OFFSET_COMMON_ADDR_REGS + COMMON_ADDR_WORDS - 1);
    }

    #[test]
    fn test_codec_addr_bounds() {
        assert_eq!(VP9_DELTA_PROB_BASE.word, OFFSET_CODEC_ADDR_REGS);
        assert_eq!(H26X_CABACTBL_BASE.word, OFFSET_CODEC_ADDR_REGS + CODEC_ADDR_WORDS - 1);
        assert_eq!(VP9_CABACTBL_BASE.word, H26X_CABACTBL_BASE.word);
    }

    #[test]
    fn test_variants_share_tail() {
        // 两个变体的扫描表与 colmv 槽位置一致
        assert_eq!(H26X_SCANLIST_ADDR, VP9_SCANLIST_ADDR);
        for i in 0..COLMV_BASE_COUNT {
            assert_eq!(h26x_colmv_base(i), vp9_colmv_base(i));
        }
    }

    #[test]
    fn test_ref_base_slots() {
        assert_eq!(h26x_ref_base(0).word, 164);
        assert_eq!(h26x_ref_base(15).word, 179);
    }
}
