//! VP9 格式参数块 (字 64-112).
//!
//! 分段参数、上一帧延续状态、三个参考帧 (last/golden/altref) 的
//! 几何与缩放系数、参考 POC 以及概率表更新控制.

use vdec_core::BitField;

/// 格式参数块字数 (字 64-112)
pub const PARAMS_WORDS: usize = 49;

/// 分段 (segment) 组数
pub const SEGID_GROUP_COUNT: usize = 8;

// ========================
// reg064-065: 头部
// ========================

/// 压缩头在码流中的字节偏移
pub const CPRHEADER_OFFSET: BitField = BitField::new(64, 0, 16);
/// 当前帧 POC
pub const CUR_POC: BitField = BitField::word32(65);

// ========================
// reg067-074: 分段参数 (每段一字)
// ========================

/// 分段特征值为绝对值 (而非增量)
pub const fn segid_abs_delta(i: usize) -> BitField {
    segid_bit(i, 0, 1)
}

/// 分段 QP 增量使能
pub const fn segid_frame_qp_delta_en(i: usize) -> BitField {
    segid_bit(i, 1, 1)
}

/// 分段 QP 增量
pub const fn segid_frame_qp_delta(i: usize) -> BitField {
    segid_bit(i, 2, 9)
}

/// 分段环路滤波值使能
pub const fn segid_frame_loopfilter_value_en(i: usize) -> BitField {
    segid_bit(i, 11, 1)
}

/// 分段环路滤波值
pub const fn segid_frame_loopfilter_value(i: usize) -> BitField {
    segid_bit(i, 12, 7)
}

/// 分段参考帧调整使能
pub const fn segid_referinfo_en(i: usize) -> BitField {
    segid_bit(i, 19, 1)
}

/// 分段参考帧调整值
pub const fn segid_referinfo(i: usize) -> BitField {
    segid_bit(i, 20, 2)
}

/// 分段跳过使能
pub const fn segid_frame_skip_en(i: usize) -> BitField {
    segid_bit(i, 22, 1)
}

const fn segid_bit(i: usize, lsb: u32, width: u32) -> BitField {
    assert!(i < SEGID_GROUP_COUNT);
    BitField::new(67 + i, lsb, width)
}

// ========================
// reg075: 上一帧延续状态
// ========================

/// 上一帧模式增量
pub const MODE_DELTAS_LASTFRAME: BitField = BitField::new(75, 0, 14);
/// 上一帧分段使能
pub const SEGMENTATION_ENABLE_LSTFRAME: BitField = BitField::new(75, 16, 1);
/// 上一帧 show_frame
pub const LAST_SHOWFRAME: BitField = BitField::new(75, 17, 1);
/// 上一帧 intra_only
pub const LAST_INTRA_ONLY: BitField = BitField::new(75, 18, 1);
/// 上一帧宽高与当前帧相同
pub const LAST_WIDHHEIGHT_EQCUR: BitField = BitField::new(75, 19, 1);
/// 上一关键帧色彩空间
pub const COLOR_SPACE_LASTKEYFRAME: BitField = BitField::new(75, 20, 3);

// ========================
// reg076-078: 压缩头配置与码流
// ========================

/// 变换模式
pub const TX_MODE: BitField = BitField::new(76, 0, 3);
/// 帧参考模式
pub const FRAME_REFERENCE_MODE: BitField = BitField::new(76, 3, 2);
/// 帧间命令数量
pub const INTERCMD_NUM: BitField = BitField::new(77, 0, 24);
/// VP9 码流长度 (字节)
pub const STREAM_SIZE: BitField = BitField::word32(78);

// ========================
// reg079-087: 参考帧行距
// ========================

/// last 参考帧 Y 水平行距
pub const LASTF_Y_HOR_VIRSTRIDE: BitField = BitField::new(79, 0, 16);
/// last 参考帧 UV 水平行距
pub const LASTF_UV_HOR_VIRSTRIDE: BitField = BitField::new(80, 0, 16);
/// golden 参考帧 Y 水平行距
pub const GOLDENF_Y_HOR_VIRSTRIDE: BitField = BitField::new(81, 0, 16);
/// golden 参考帧 UV 水平行距
pub const GOLDENF_UV_HOR_VIRSTRIDE: BitField = BitField::new(82, 0, 16);
/// altref 参考帧 Y 水平行距
pub const ALTREFF_Y_HOR_VIRSTRIDE: BitField = BitField::new(83, 0, 16);
/// altref 参考帧 UV 水平行距
pub const ALTREFF_UV_HOR_VIRSTRIDE: BitField = BitField::new(84, 0, 16);
/// last 参考帧 Y 总行距
pub const LASTF_Y_VIRSTRIDE: BitField = BitField::new(85, 0, 28);
/// golden 参考帧 Y 总行距
pub const GOLDEN_Y_VIRSTRIDE: BitField = BitField::new(86, 0, 28);
/// altref 参考帧 Y 总行距
pub const ALTREF_Y_VIRSTRIDE: BitField = BitField::new(87, 0, 28);

// ========================
// reg088-093: 参考帧缩放系数
// ========================

/// last 参考帧水平缩放
pub const LREF_HOR_SCALE: BitField = BitField::new(88, 0, 16);
/// last 参考帧垂直缩放
pub const LREF_VER_SCALE: BitField = BitField::new(89, 0, 16);
/// golden 参考帧水平缩放
pub const GREF_HOR_SCALE: BitField = BitField::new(90, 0, 16);
/// golden 参考帧垂直缩放
pub const GREF_VER_SCALE: BitField = BitField::new(91, 0, 16);
/// altref 参考帧水平缩放
pub const AREF_HOR_SCALE: BitField = BitField::new(92, 0, 16);
/// altref 参考帧垂直缩放
pub const AREF_VER_SCALE: BitField = BitField::new(93, 0, 16);

// ========================
// reg094-100: 参考 POC
// ========================

/// 上一帧参考增量
pub const REF_DELTAS_LASTFRAME: BitField = BitField::new(94, 0, 28);
/// last 参考帧 POC
pub const LAST_POC: BitField = BitField::word32(95);
/// golden 参考帧 POC
pub const GOLDEN_POC: BitField = BitField::word32(96);
/// altref 参考帧 POC
pub const ALTREF_POC: BitField = BitField::word32(97);
/// colmv 参考帧 POC
pub const COL_REF_POC: BitField = BitField::word32(98);
/// 概率表参考 POC
pub const PROB_REF_POC: BitField = BitField::new(99, 0, 16);
/// 分段图参考 POC
pub const SEGID_REF_POC: BitField = BitField::new(100, 0, 16);

// ========================
// reg103: 概率表更新控制
// ========================

/// 概率表更新使能
pub const PROB_UPDATE_EN: BitField = BitField::new(103, 20, 1);
/// 概率表刷新使能
pub const REFRESH_EN: BitField = BitField::new(103, 21, 1);
/// 概率表保存使能
pub const PROB_SAVE_EN: BitField = BitField::new(103, 22, 1);
/// 仅帧内标志
pub const INTRA_ONLY_FLAG: BitField = BitField::new(103, 23, 1);
/// 变换模式刷新使能
pub const TXFMMODE_RFSH_EN: BitField = BitField::new(103, 24, 1);
/// 参考模式刷新使能
pub const REF_MODE_RFSH_EN: BitField = BitField::new(103, 25, 1);
/// 单参考刷新使能
pub const SINGLE_REF_RFSH_EN: BitField = BitField::new(103, 26, 1);
/// 复合参考刷新使能
pub const COMP_REF_RFSH_EN: BitField = BitField::new(103, 27, 1);
/// 插值滤波切换使能
pub const INTERP_FILTER_SWITCH_EN: BitField = BitField::new(103, 28, 1);
/// 允许高精度运动矢量
pub const ALLOW_HIGH_PRECISION_MV: BitField = BitField::new(103, 29, 1);
/// 上一帧为关键帧
pub const LAST_KEY_FRAME_FLAG: BitField = BitField::new(103, 30, 1);
/// 帧间系数刷新标志
pub const INTER_COEF_RFSH_FLAG: BitField = BitField::new(103, 31, 1);

// ========================
// reg105: 计数更新使能
// ========================

/// AVS2 头长度 (与 VP9 共用寄存器)
pub const AVS2_HEAD_LEN: BitField = BitField::new(105, 0, 4);
/// 符号计数回写使能
pub const COUNT_UPDATE_EN: BitField = BitField::new(105, 4, 1);

// ========================
// reg106-111: 参考帧几何
// ========================

/// last 参考帧宽度
pub const FRAMEWIDTH_LAST: BitField = BitField::new(106, 0, 16);
/// last 参考帧高度
pub const FRAMEHEIGHT_LAST: BitField = BitField::new(107, 0, 16);
/// golden 参考帧宽度
pub const FRAMEWIDTH_GOLDEN: BitField = BitField::new(108, 0, 16);
/// golden 参考帧高度
pub const FRAMEHEIGHT_GOLDEN: BitField = BitField::new(109, 0, 16);
/// altref 参考帧宽度
pub const FRAMEWIDTH_ALTREF: BitField = BitField::new(110, 0, 16);
/// altref 参考帧高度
pub const FRAMEHEIGHT_ALTREF: BitField = BitField::new(111, 0, 16);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{OFFSET_CODEC_PARAMS_REGS, OFFSET_COMMON_ADDR_REGS};

    #[test]
    fn test_region_bounds() {
        assert_eq!(CPRHEADER_OFFSET.word, OFFSET_CODEC_PARAMS_REGS);
        assert!(OFFSET_CODEC_PARAMS_REGS + PARAMS_WORDS <= OFFSET_COMMON_ADDR_REGS);
    }

    #[test]
    fn test_segid_groups() {
        assert_eq!(segid_abs_delta(0).word, 67);
        assert_eq!(segid_frame_skip_en(7).word, 74);
        assert_eq!(segid_frame_qp_delta(2), BitField::new(69, 2, 9));
    }

    #[test]
    fn test_segid_group_no_overlap() {
        let fields = [
            segid_abs_delta(0),
            segid_frame_qp_delta_en(0),
            segid_frame_qp_delta(0),
            segid_frame_loopfilter_value_en(0),
            segid_frame_loopfilter_value(0),
            segid_referinfo_en(0),
            segid_referinfo(0),
            segid_frame_skip_en(0),
        ];
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert!(!a.overlaps(*b), "{a:?} 与 {b:?} 重叠");
            }
        }
        // 组内字段总占位 1+1+9+1+7+1+2+1 = 23 位
        let used: u32 = fields.iter().map(|f| f.width).sum();
        assert_eq!(used, 23);
    }

    #[test]
    fn test_prob_en_positions() {
        // reg103 低 20 位保留
        assert_eq!(PROB_UPDATE_EN, BitField::new(103, 20, 1));
        assert_eq!(INTER_COEF_RFSH_FLAG, BitField::new(103, 31, 1));
    }

    #[test]
    fn test_ref_geometry_words() {
        assert_eq!(FRAMEWIDTH_LAST.word, 106);
        assert_eq!(FRAMEHEIGHT_ALTREF.word, 111);
    }
}
