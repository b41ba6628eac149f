//! # vdec-core
//!
//! Vdec 硬件解码命令接口核心库, 提供寄存器镜像的位域访问原语、
//! 错误处理和对齐工具.
//!
//! 硬件 DMA 引擎按字 (32 位) 逐项读取命令块, 任何位域错位都会导致
//! 静默的解码错误而非崩溃, 因此本 crate 的位域访问必须做到位精确.

pub mod align;
pub mod bitfield;
pub mod error;
pub mod words;

// 重导出常用类型
pub use bitfield::BitField;
pub use error::{VdecError, VdecResult};
pub use words::RegWords;
