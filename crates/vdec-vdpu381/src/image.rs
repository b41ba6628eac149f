//! 寄存器镜像构建.
//!
//! 每个解码任务对应一块按格式定长的寄存器镜像, 硬件 DMA 引擎
//! 原样逐字读取. 镜像创建时全部清零 (保留位因此恒为零), 随后由
//! 任务准备路径按布局表逐字段填写; 一块镜像同一时间只属于一个
//! 在途任务, 本类型不做任何内部同步.

use vdec_core::{BitField, RegWords, VdecError, VdecResult};

use crate::layout;
use crate::mode::DecMode;
use crate::status::TimeoutThreshold;

/// 解码任务寄存器镜像
///
/// 创建时即按格式取定长并写入模式选择字段, 其余字段为零.
///
/// # 示例
/// ```
/// use vdec_vdpu381::{DecMode, RegImage, layout};
///
/// let mut img = RegImage::new(DecMode::Vp9).unwrap();
/// img.set(layout::common::STREAM_LEN, 0x1000);
/// assert_eq!(img.get(layout::common::DEC_MODE), 2);
/// assert_eq!(img.as_bytes().len(), 792);
/// ```
#[derive(Debug, Clone)]
pub struct RegImage {
    mode: DecMode,
    regs: RegWords,
}

impl RegImage {
    /// 创建指定格式的零填充镜像
    ///
    /// AVS2 仅有硬件模式选择值而无布局定义, 返回 `Unsupported`.
    pub fn new(mode: DecMode) -> VdecResult<Self> {
        let Some(words) = layout::image_words(mode) else {
            return Err(VdecError::Unsupported(format!("格式 {mode} 无镜像布局")));
        };

        let mut regs = RegWords::new(words);
        regs.set(layout::common::DEC_MODE, mode.value());
        log::debug!("创建 {mode} 寄存器镜像: {words} 字");

        Ok(Self { mode, regs })
    }

    /// 镜像的解码格式
    pub fn mode(&self) -> DecMode {
        self.mode
    }

    /// 镜像字数
    pub fn word_count(&self) -> usize {
        self.regs.word_count()
    }

    /// 写入字段 (超宽值按硬件语义截断)
    pub fn set(&mut self, field: BitField, value: u32) {
        self.regs.set(field, value);
    }

    /// 读取字段
    pub fn get(&self, field: BitField) -> u32 {
        self.regs.get(field)
    }

    /// 字数组视图
    pub fn as_words(&self) -> &[u32] {
        self.regs.as_words()
    }

    /// 序列化为小端字节流 (提交给硬件的格式)
    pub fn as_bytes(&self) -> Vec<u8> {
        self.regs.to_le_bytes()
    }

    // ========================
    // 任务准备路径每帧必配的公共开关
    // ========================

    /// 写入解码使能
    pub fn set_dec_enable(&mut self, enable: bool) {
        self.set(layout::common::DEC_E, enable as u32);
    }

    /// 写入超时阈值并使能超时检测
    pub fn set_timeout(&mut self, threshold: TimeoutThreshold) {
        self.set(layout::common::DEC_TIMEOUT_E, 1);
        self.set(layout::common::TIMEOUT_THRESHOLD, threshold.value());
    }
}
