//! 解码格式模式选择.
//!
//! 写入公共控制块 dec_mode 字段的硬件模式选择值.

use std::fmt;

/// 解码格式模式
///
/// 数值即硬件模式选择器的取值, 不可改动.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DecMode {
    /// H.265 / HEVC
    Hevc = 0,
    /// H.264 / AVC
    H264 = 1,
    /// VP9
    Vp9 = 2,
    /// AVS2 (硬件可选择, 本库不支持构建其镜像)
    Avs2 = 3,
}

impl DecMode {
    /// 硬件模式选择器取值
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// 该模式的镜像是否带 POC 高位扩展块
    ///
    /// H.264/HEVC 的 POC 范围超出参数块字段宽度, 需要扩展块补齐高位;
    /// VP9 不需要.
    pub const fn has_highpoc(self) -> bool {
        matches!(self, Self::Hevc | Self::H264)
    }
}

impl fmt::Display for DecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hevc => "HEVC",
            Self::H264 => "H264",
            Self::Vp9 => "VP9",
            Self::Avs2 => "AVS2",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_values() {
        // 硬件模式选择器的固定取值
        assert_eq!(DecMode::Hevc.value(), 0);
        assert_eq!(DecMode::H264.value(), 1);
        assert_eq!(DecMode::Vp9.value(), 2);
        assert_eq!(DecMode::Avs2.value(), 3);
    }

    #[test]
    fn test_highpoc_presence() {
        assert!(DecMode::Hevc.has_highpoc());
        assert!(DecMode::H264.has_highpoc());
        assert!(!DecMode::Vp9.has_highpoc());
    }
}
