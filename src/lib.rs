//! # Vdec
//!
//! 纯 Rust 实现的视频解码硬件加速器命令块接口库.
//!
//! 面向 VDPU381 类多格式解码加速器: 硬件以 DMA 方式读取一块按
//! 格式定长的寄存器镜像获得一次解码任务的全部配置. Vdec 提供:
//! - **布局表**: 三种格式 (H.264 / HEVC / VP9) 的位精确寄存器布局
//! - **镜像构建**: 定长、保留位清零、按硬件语义截断的字段读写
//! - **转换算法**: VP9 概率平面打包、参考帧时间戳解析、
//!   运动矢量辅助平面地址计算
//!
//! 缓冲区队列管理、中断与完成处理、码流解析和任务调度均属外部
//! 协作方, 不在本库范围内.
//!
//! # 快速开始
//!
//! ```rust
//! use vdec::vdpu381::{DecMode, RegImage, TimeoutThreshold, layout};
//!
//! let mut img = RegImage::new(DecMode::H264).unwrap();
//! img.set_timeout(TimeoutThreshold::Full1080p);
//! img.set(layout::common::STREAM_LEN, 0x8000);
//! img.set_dec_enable(true);
//! let bytes = img.as_bytes(); // 提交给硬件的命令块
//! assert_eq!(bytes.len(), 820);
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `vdec-core` | 位域原语、寄存器字缓冲、错误与对齐工具 |
//! | `vdec-vdpu381` | VDPU381 布局表、镜像构建与转换算法 |

/// 核心类型与工具
pub use vdec_core as core;

/// VDPU381 寄存器镜像布局与命令块构建
pub use vdec_vdpu381 as vdpu381;

/// 获取 Vdec 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
