//! 硬件状态位与超时阈值.
//!
//! 中断状态寄存器的各状态位由硬件独立置位, 本库只定义其含义;
//! 等待与处置 (重试/中止/复位) 属于外部完成检测逻辑.

use bitflags::bitflags;

/// 解码使能寄存器的 MMIO 字节偏移
pub const REG_DEC_E: usize = 0x028;
/// 解码使能位
pub const DEC_E_BIT: u32 = 1;

/// 重要使能寄存器的 MMIO 字节偏移
pub const REG_IMPORTANT_EN: usize = 0x02c;
/// 中断屏蔽位 (置位则不产生解码中断)
pub const DEC_IRQ_DISABLE: u32 = 1 << 4;

/// 中断状态寄存器的 MMIO 字节偏移
pub const REG_STA_INT: usize = 0x380;

bitflags! {
    /// 中断状态寄存器的状态位
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IrqStatus: u32 {
        /// 解码完成
        const DEC_RDY       = 1 << 2;
        /// 解码错误
        const ERROR         = 1 << 4;
        /// 硬件超时
        const TIMEOUT       = 1 << 5;
        /// 软复位完成
        const SOFTRESET_RDY = 1 << 9;
    }
}

/// 硬件超时阈值档位
///
/// 按预期帧分辨率由外部调用方选择, 取值原样写入公共控制块的
/// timeout_threshold 字段.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TimeoutThreshold {
    /// 1080p 及以下
    Full1080p = 0x00ef_ffff,
    /// 4K
    Uhd4k = 0x02cf_ffff,
    /// 8K
    Uhd8k = 0x04ff_ffff,
    /// 不限 (调试用)
    Max = 0xffff_ffff,
}

impl TimeoutThreshold {
    /// 写入寄存器的阈值取值
    pub const fn value(self) -> u32 {
        self as u32
    }
}
