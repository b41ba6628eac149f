//! 已解码缓冲区元数据与运动矢量平面地址.
//!
//! 每帧参数解析完成时把几何信息 (宽/高/位深) 记到输出缓冲区上;
//! 之后该缓冲区被后续帧引用时, 用这份元数据算出紧跟在 Y/UV 平面
//! 之后的 colmv 辅助平面 DMA 地址. 缓冲区生命周期由外部缓冲池
//! 管理, 调用方需持有缓冲池约定的同步纪律.

use vdec_core::align::round_up;

/// 已解码帧几何信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInfo {
    /// 宽度 (像素)
    pub width: u32,
    /// 高度 (像素)
    pub height: u32,
    /// 位深 (8/10/12)
    pub bit_depth: u32,
}

/// VP9 帧参数中本库消费的字段
///
/// 完整帧参数由外部码流解析器产出, 这里只声明元数据记录所需的
/// 几何字段 (按码流语法为减一编码).
#[derive(Debug, Clone, Copy)]
pub struct Vp9FrameParams {
    /// 帧宽减一
    pub frame_width_minus_1: u16,
    /// 帧高减一
    pub frame_height_minus_1: u16,
    /// 位深
    pub bit_depth: u8,
}

/// 已解码缓冲区
///
/// 外部缓冲池中一个输出缓冲区在本库视角下的形态: 唯一的展示时间戳、
/// 主平面 DMA 基地址和随帧覆写的几何元数据.
#[derive(Debug, Clone)]
pub struct DecodedBuffer {
    /// 展示时间戳 (缓冲池内唯一)
    pub timestamp: u64,
    /// 主平面 (Y/UV) DMA 基地址
    pub dma_base: u64,
    /// 帧几何元数据
    pub info: FrameInfo,
}

impl DecodedBuffer {
    /// 创建缓冲区描述 (元数据待首次记录)
    pub fn new(timestamp: u64, dma_base: u64) -> Self {
        Self {
            timestamp,
            dma_base,
            info: FrameInfo::default(),
        }
    }

    /// 记录本帧几何元数据
    ///
    /// 覆写既有值; 参数范围由外部码流解析器保证, 这里不做校验.
    pub fn update_info(&mut self, params: &Vp9FrameParams) {
        self.info = FrameInfo {
            width: u32::from(params.frame_width_minus_1) + 1,
            height: u32::from(params.frame_height_minus_1) + 1,
            bit_depth: u32::from(params.bit_depth),
        };
    }

    /// 运动矢量辅助平面的 DMA 地址
    ///
    /// 硬件要求 colmv 平面紧跟在同一缓冲区的 Y/UV 平面之后:
    /// 高度按 64 对齐, 行距按 512 位对齐, 4:2:0 下 YUV 总量为
    /// 亮度的 3/2 倍. 仅支持 4:2:0 色度抽样.
    pub fn mv_base_addr(&self) -> u64 {
        let aligned_height = round_up(self.info.height, 64);
        let aligned_pitch = round_up(self.info.width * self.info.bit_depth, 512) / 8;
        let yuv_len = aligned_height * aligned_pitch * 3 / 2;

        self.dma_base + u64::from(yuv_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mv_addr_1080p_8bit() {
        let mut buf = DecodedBuffer::new(0, 0x1000_0000);
        buf.update_info(&Vp9FrameParams {
            frame_width_minus_1: 1919,
            frame_height_minus_1: 1079,
            bit_depth: 8,
        });

        // 1088 x 1920 x 3/2 = 3133440
        assert_eq!(buf.info.width, 1920);
        assert_eq!(buf.info.height, 1080);
        assert_eq!(buf.mv_base_addr(), 0x1000_0000 + 3_133_440);
    }

    #[test]
    fn test_mv_addr_height_rounds_up() {
        // 高度 1079 与 1080 对齐到同一 1088, 地址相同
        let mut a = DecodedBuffer::new(0, 0x4000);
        a.update_info(&Vp9FrameParams {
            frame_width_minus_1: 1919,
            frame_height_minus_1: 1078,
            bit_depth: 8,
        });
        let mut b = DecodedBuffer::new(0, 0x4000);
        b.update_info(&Vp9FrameParams {
            frame_width_minus_1: 1919,
            frame_height_minus_1: 1079,
            bit_depth: 8,
        });
        assert_eq!(a.mv_base_addr(), b.mv_base_addr());
    }

    #[test]
    fn test_mv_addr_10bit_pitch() {
        // 3840 x 2160 10bit: 行距 round_up(38400, 512)/8 = 4800 字节
        let mut buf = DecodedBuffer::new(0, 0);
        buf.update_info(&Vp9FrameParams {
            frame_width_minus_1: 3839,
            frame_height_minus_1: 2159,
            bit_depth: 10,
        });
        // 高 2176, 亮度 2176*4800, YUV 共 3/2 倍
        assert_eq!(buf.mv_base_addr(), 2176 * 4800 * 3 / 2);
    }

    #[test]
    fn test_update_info_overwrites() {
        let mut buf = DecodedBuffer::new(7, 0);
        buf.update_info(&Vp9FrameParams {
            frame_width_minus_1: 639,
            frame_height_minus_1: 479,
            bit_depth: 8,
        });
        buf.update_info(&Vp9FrameParams {
            frame_width_minus_1: 1279,
            frame_height_minus_1: 719,
            bit_depth: 10,
        });
        assert_eq!(
            buf.info,
            FrameInfo {
                width: 1280,
                height: 720,
                bit_depth: 10,
            }
        );
    }
}
