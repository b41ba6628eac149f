//! # vdec-vdpu381
//!
//! VDPU381 多格式视频解码加速器的命令块接口.
//!
//! 硬件以 DMA 方式逐字读取一块固定大小的寄存器镜像来获取一次解码
//! 任务的全部配置: 控制开关、码流几何、参考帧关系和各类缓冲区的
//! DMA 地址. 镜像布局按编解码格式分为三个变体 (H.264 / HEVC / VP9),
//! 共享同一个外层信封:
//!
//! | 区域 | 字偏移 | 说明 |
//! |------|--------|------|
//! | 公共控制块 | 8 | 端序/时钟/错误恢复/几何/超时 |
//! | 格式参数块 | 64 | POC、参考关系, 按格式变体 |
//! | 公共地址块 | 128 | 码流/输出/colmv/RCB 地址 |
//! | 格式地址块 | 160 | 参考帧与熵表地址, 按格式变体 |
//! | POC 高位扩展块 | 200 | 仅 H.264/HEVC |
//!
//! 布局的唯一事实来源是 [`layout`] 模块中的位域常量表;
//! [`image::RegImage`] 在其上提供按格式定长的镜像构建.
//!
//! 除寄存器布局外, 本 crate 还提供填充镜像所需的三个精度敏感的
//! 转换算法: VP9 概率平面打包 ([`coeff`])、按时间戳的参考帧解析
//! ([`refpool`]) 和运动矢量辅助平面的地址计算 ([`buffer`]).

pub mod buffer;
pub mod coeff;
pub mod image;
pub mod layout;
pub mod mode;
pub mod refpool;
pub mod status;

// 重导出常用类型
pub use buffer::{DecodedBuffer, FrameInfo, Vp9FrameParams};
pub use coeff::write_coeff_plane;
pub use image::RegImage;
pub use mode::DecMode;
pub use refpool::{BufferPool, get_ref_buf};
pub use status::{IrqStatus, TimeoutThreshold};
