//! 统一错误类型定义.
//!
//! 所有 Vdec crate 共用的错误类型, 支持跨模块传播.
//!
//! 注意: 寄存器镜像核心刻意不把两类结果当作错误 (参考帧回退、
//! 位域溢出截断), 它们是硬件定义的正常行为; 错误类型只覆盖真正的
//! API 误用.

use thiserror::Error;

/// Vdec 统一错误类型
#[derive(Debug, Error)]
pub enum VdecError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的操作
    #[error("不支持的操作: {0}")]
    Unsupported(String),

    /// 目标缓冲区过小
    #[error("目标缓冲区过小: 需要 {needed} 字节, 实际 {actual} 字节")]
    BufferTooSmall {
        /// 所需字节数
        needed: usize,
        /// 实际字节数
        actual: usize,
    },

    /// 内部错误 (不应发生)
    #[error("内部错误: {0}")]
    Internal(String),
}

/// Vdec 统一 Result 类型
pub type VdecResult<T> = Result<T, VdecError>;
