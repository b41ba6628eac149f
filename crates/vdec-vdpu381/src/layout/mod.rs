//! VDPU381 寄存器镜像布局表.
//!
//! 镜像布局的唯一事实来源. 每个字段以 [`BitField`] 常量显式声明
//! {字索引, 起始位, 位宽}, 字索引为寄存器镜像内的绝对字号
//! (与硬件手册的 swreg 编号一致, 如 reg009 即字 9).
//!
//! 区域偏移与各区域字数均为编译期常量, 镜像总长由其推导,
//! 运行期从不调整.

use crate::mode::DecMode;

pub mod addr;
pub mod common;
pub mod h264;
pub mod hevc;
pub mod highpoc;
pub mod vp9;

/// 公共控制块起始字
pub const OFFSET_COMMON_REGS: usize = 8;
/// 格式参数块起始字
pub const OFFSET_CODEC_PARAMS_REGS: usize = 64;
/// 公共地址块起始字
pub const OFFSET_COMMON_ADDR_REGS: usize = 128;
/// 格式地址块起始字
pub const OFFSET_CODEC_ADDR_REGS: usize = 160;
/// POC 高位扩展块起始字
pub const OFFSET_POC_HIGHBIT_REGS: usize = 200;

/// H.264/HEVC 镜像字数 (含 POC 高位扩展块)
pub const H26X_IMAGE_WORDS: usize = OFFSET_POC_HIGHBIT_REGS + highpoc::HIGHPOC_WORDS;
/// VP9 镜像字数 (无 POC 高位扩展块)
pub const VP9_IMAGE_WORDS: usize = OFFSET_CODEC_ADDR_REGS + addr::CODEC_ADDR_WORDS;

/// 指定模式的镜像字数
///
/// AVS2 无布局定义, 返回 None.
pub const fn image_words(mode: DecMode) -> Option<usize> {
    match mode {
        DecMode::Hevc | DecMode::H264 => Some(H26X_IMAGE_WORDS),
        DecMode::Vp9 => Some(VP9_IMAGE_WORDS),
        DecMode::Avs2 => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_order() {
        // 五个区域按固定顺序排列, 不重叠
        assert!(OFFSET_COMMON_REGS + common::COMMON_WORDS <= OFFSET_CODEC_PARAMS_REGS);
        assert!(
            OFFSET_CODEC_PARAMS_REGS + h264::PARAMS_WORDS.max(vp9::PARAMS_WORDS)
                <= OFFSET_COMMON_ADDR_REGS
        );
        assert!(
            OFFSET_COMMON_ADDR_REGS + addr::COMMON_ADDR_WORDS <= OFFSET_CODEC_ADDR_REGS
        );
        assert!(
            OFFSET_CODEC_ADDR_REGS + addr::CODEC_ADDR_WORDS <= OFFSET_POC_HIGHBIT_REGS
        );
    }

    #[test]
    fn test_image_sizes() {
        // 镜像定长: H.264/HEVC 205 字 (820 字节), VP9 198 字 (792 字节)
        assert_eq!(image_words(DecMode::Hevc), Some(205));
        assert_eq!(image_words(DecMode::H264), Some(205));
        assert_eq!(image_words(DecMode::Vp9), Some(198));
        assert_eq!(image_words(DecMode::Avs2), None);
    }
}
