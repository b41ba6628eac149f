//! 公共控制块 (字 8-32).
//!
//! 三种格式共用的控制寄存器: 端序/字节交换、解码使能、中断与时钟
//! 门控、错误恢复模式、帧/片几何、错误 ROI、缩小输出与超时阈值.
//! 未声明的位均为保留位, 必须保持为零.

use vdec_core::BitField;

/// 公共控制块字数 (字 8-32)
pub const COMMON_WORDS: usize = 25;

/// slice_num 字段的上限
pub const MAX_SLICE_NUMBER: u32 = 0x3fff;

// ========================
// reg008: 输入/码流/输出端序与字节交换
// ========================

/// 输入端序
pub const IN_ENDIAN: BitField = BitField::new(8, 0, 1);
/// 输入 32 位交换使能
pub const IN_SWAP32_E: BitField = BitField::new(8, 1, 1);
/// 输入 64 位交换使能
pub const IN_SWAP64_E: BitField = BitField::new(8, 2, 1);
/// 码流端序
pub const STR_ENDIAN: BitField = BitField::new(8, 3, 1);
/// 码流 32 位交换使能
pub const STR_SWAP32_E: BitField = BitField::new(8, 4, 1);
/// 码流 64 位交换使能
pub const STR_SWAP64_E: BitField = BitField::new(8, 5, 1);
/// 输出端序
pub const OUT_ENDIAN: BitField = BitField::new(8, 6, 1);
/// 输出 32 位交换使能
pub const OUT_SWAP32_E: BitField = BitField::new(8, 7, 1);
/// 输出 CbCr 交换
pub const OUT_CBCR_SWAP: BitField = BitField::new(8, 8, 1);
/// 输出 64 位交换使能
pub const OUT_SWAP64_E: BitField = BitField::new(8, 9, 1);

// ========================
// reg009-010: 模式与使能
// ========================

/// 解码格式模式选择 (取值见 [`crate::DecMode`])
pub const DEC_MODE: BitField = BitField::new(9, 0, 10);
/// 解码使能
pub const DEC_E: BitField = BitField::new(10, 0, 1);

// ========================
// reg011: 重要使能
// ========================

/// 解码时钟门控使能
pub const DEC_CLKGATE_E: BitField = BitField::new(11, 1, 1);
/// 码流解析路径时钟门控关闭
pub const DEC_E_STRMD_CLKGATE_DIS: BitField = BitField::new(11, 2, 1);
/// 解码中断屏蔽
pub const DEC_IRQ_DIS: BitField = BitField::new(11, 4, 1);
/// 硬件超时检测使能
pub const DEC_TIMEOUT_E: BitField = BitField::new(11, 5, 1);
/// 码流耗尽中断使能
pub const BUF_EMPTY_EN: BitField = BitField::new(11, 6, 1);
/// dec_e 重写有效
pub const DEC_E_REWRITE_VALID: BitField = BitField::new(11, 10, 1);
/// 软复位脉冲使能
pub const SOFTRST_EN_P: BitField = BitField::new(11, 20, 1);
/// 强制软复位有效
pub const FORCE_SOFTRESET_VALID: BitField = BitField::new(11, 21, 1);
/// 像素范围检测使能
pub const PIX_RANGE_DETECTION_E: BitField = BitField::new(11, 24, 1);

// ========================
// reg012: 次要使能
// ========================

/// 写 DDR 对齐使能
pub const WR_DDR_ALIGN_EN: BitField = BitField::new(12, 0, 1);
/// colmv 压缩使能
pub const COLMV_COMPRESS_EN: BitField = BitField::new(12, 1, 1);
/// 帧缓冲压缩 (FBC) 使能
pub const FBC_E: BitField = BitField::new(12, 2, 1);
/// 总线保护槽关闭
pub const BUSPR_SLOT_DISABLE: BitField = BitField::new(12, 4, 1);
/// 错误信息收集使能
pub const ERROR_INFO_EN: BitField = BitField::new(12, 5, 1);
/// 信息收集使能
pub const INFO_COLLECT_EN: BitField = BitField::new(12, 6, 1);
/// 等待复位使能
pub const WAIT_RESET_EN: BitField = BitField::new(12, 7, 1);
/// 扫描表地址有效使能
pub const SCANLIST_ADDR_VALID_EN: BitField = BitField::new(12, 8, 1);
/// 缩小输出使能
pub const SCALE_DOWN_EN: BitField = BitField::new(12, 9, 1);
/// 错误配置写关闭
pub const ERROR_CFG_WR_DISABLE: BitField = BitField::new(12, 10, 1);

// ========================
// reg013: 模式设置
// ========================

/// 超时模式
pub const TIMEOUT_MODE: BitField = BitField::new(13, 0, 1);
/// 请求超时复位选择
pub const REQ_TIMEOUT_RST_SEL: BitField = BitField::new(13, 1, 1);
/// 通用中断模式
pub const DEC_COMMONIRQ_MODE: BitField = BitField::new(13, 3, 1);
/// 码流错误时等待解码 FIFO 清空
pub const STMERROR_WAITDECFIFO_EMPTY: BitField = BitField::new(13, 6, 1);
/// H.26x 码流解析错误模式
pub const H26X_STREAMD_ERROR_MODE: BitField = BitField::new(13, 9, 1);
/// 允许不写未引用的 B 帧
pub const ALLOW_NOT_WR_UNREF_BFRAME: BitField = BitField::new(13, 12, 1);
/// FBC 输出写关闭
pub const FBC_OUTPUT_WR_DISABLE: BitField = BitField::new(13, 13, 1);
/// colmv 错误模式
pub const COLMV_ERROR_MODE: BitField = BitField::new(13, 15, 1);
/// H.26x 错误模式
pub const H26X_ERROR_MODE: BitField = BitField::new(13, 18, 1);
/// Y cache 读优先
pub const YCACHERD_PRIOR: BitField = BitField::new(13, 21, 1);
/// 当前帧为 IDR
pub const CUR_PIC_IS_IDR: BitField = BitField::new(13, 24, 1);
/// 关闭右边界自动复位
pub const RIGHT_AUTO_RST_DISABLE: BitField = BitField::new(13, 26, 1);
/// 帧尾错误复位标志
pub const FRAME_END_ERR_RST_FLAG: BitField = BitField::new(13, 27, 1);
/// 读优先模式
pub const RD_PRIOR_MODE: BitField = BitField::new(13, 28, 1);
/// 读控制优先模式
pub const RD_CTRL_PRIOR_MODE: BitField = BitField::new(13, 29, 1);
/// 滤波输出缓冲模式
pub const FILTER_OUTBUF_MODE: BitField = BitField::new(13, 31, 1);

// ========================
// reg014: FBC 参数
// ========================

/// FBC 强制不压缩
pub const FBC_FORCE_UNCOMPRESS: BitField = BitField::new(14, 0, 1);
/// 允许 16x8 压缩块
pub const ALLOW_16X8_CP_FLAG: BitField = BitField::new(14, 3, 1);
/// H.264 FBC 4/8 扩展标志
pub const FBC_H264_EXTEN_4OR8_FLAG: BitField = BitField::new(14, 6, 1);

// ========================
// reg015-017: 码流参数
// ========================

/// RLC 模式直写
pub const RLC_MODE_DIRECT_WRITE: BitField = BitField::new(15, 0, 1);
/// RLC 模式
pub const RLC_MODE: BitField = BitField::new(15, 1, 1);
/// 码流起始位偏移
pub const STRM_START_BIT: BitField = BitField::new(15, 5, 7);
/// 码流长度 (字节)
pub const STREAM_LEN: BitField = BitField::word32(16);
/// 片数量 (上限 [`MAX_SLICE_NUMBER`])
pub const SLICE_NUM: BitField = BitField::new(17, 0, 25);

// ========================
// reg018-020: 输出几何
// ========================

/// Y 平面水平虚拟行距 (16 字节单位)
pub const Y_HOR_VIRSTRIDE: BitField = BitField::new(18, 0, 16);
/// UV 平面水平虚拟行距 (16 字节单位)
pub const UV_HOR_VIRSTRIDE: BitField = BitField::new(19, 0, 16);
/// Y 平面总虚拟行距 (16 字节单位)
pub const Y_VIRSTRIDE: BitField = BitField::new(20, 0, 28);

// ========================
// reg021-023: 错误恢复与错误 ROI
// ========================

/// 帧间错误处理模式
pub const INTER_ERROR_PRC_MODE: BitField = BitField::new(21, 0, 1);
/// 帧内错误模式
pub const ERROR_INTRA_MODE: BitField = BitField::new(21, 1, 1);
/// 错误去块滤波使能
pub const ERROR_DEB_EN: BitField = BitField::new(21, 2, 1);
/// 错误替换参考帧索引
pub const PICIDX_REPLACE: BitField = BitField::new(21, 3, 5);
/// 错误扩散使能
pub const ERROR_SPREAD_E: BitField = BitField::new(21, 8, 1);
/// 跨片帧间预测错误
pub const ERROR_INTER_PRED_CROSS_SLICE: BitField = BitField::new(21, 12, 1);
/// ROI 错误 CTU 统计使能
pub const ROI_ERROR_CTU_CAL_EN: BitField = BitField::new(21, 24, 1);

/// 错误 ROI 起始 CTU X 坐标
pub const ROI_X_CTU_OFFSET_ST: BitField = BitField::new(22, 0, 12);
/// 错误 ROI 起始 CTU Y 坐标
pub const ROI_Y_CTU_OFFSET_ST: BitField = BitField::new(22, 16, 12);
/// 错误 ROI 结束 CTU X 坐标
pub const ROI_X_CTU_OFFSET_END: BitField = BitField::new(23, 0, 12);
/// 错误 ROI 结束 CTU Y 坐标
pub const ROI_Y_CTU_OFFSET_END: BitField = BitField::new(23, 16, 12);

// ========================
// reg024-025: CABAC 错误使能
// ========================

/// CABAC 错误使能低 32 位
pub const CABAC_ERR_EN_LOWBITS: BitField = BitField::word32(24);
/// CABAC 错误使能高 30 位
pub const CABAC_ERR_EN_HIGHBITS: BitField = BitField::new(25, 0, 30);

// ========================
// reg026-028: 门控与多核控制
// ========================

/// 各子模块时钟门控使能掩码
pub const BLOCK_GATING_E: BitField = BitField::new(26, 0, 20);
/// 寄存器配置门控使能
pub const REG_CFG_GATING_EN: BitField = BitField::new(26, 31, 1);

/// 多核安全区 X 像素
pub const CORE_SAFE_X_PIXELS: BitField = BitField::new(27, 0, 16);
/// 多核安全区 Y 像素
pub const CORE_SAFE_Y_PIXELS: BitField = BitField::new(27, 16, 16);

/// VP9 概率表写缓冲索引
pub const VP9_WR_PROB_IDX: BitField = BitField::new(28, 0, 3);
/// VP9 概率表读缓冲索引
pub const VP9_RD_PROB_IDX: BitField = BitField::new(28, 4, 3);
/// 参考请求提前标志
pub const REF_REQ_ADVANCE_FLAG: BitField = BitField::new(28, 8, 1);
/// colmv 请求提前标志
pub const COLMV_REQ_ADVANCE_FLAG: BitField = BitField::new(28, 9, 1);
/// 仅 POC 高位标志
pub const POC_ONLY_HIGHBIT_FLAG: BitField = BitField::new(28, 10, 1);
/// POC 仲裁标志
pub const POC_ARB_FLAG: BitField = BitField::new(28, 11, 1);
/// 胶片颗粒索引
pub const FILM_IDX: BitField = BitField::new(28, 16, 10);
/// PU 请求不匹配关闭
pub const PU_REQ_MISMATCH_DIS: BitField = BitField::new(28, 28, 1);
/// colmv 请求不匹配关闭
pub const COLMV_REQ_MISMATCH_DIS: BitField = BitField::new(28, 29, 1);

// ========================
// reg029-031: 缩小输出
// ========================

/// 水平缩小比
pub const SCALE_DOWN_HOR_RATIO: BitField = BitField::new(29, 0, 2);
/// 垂直缩小比
pub const SCALE_DOWN_VRZ_RATIO: BitField = BitField::new(29, 8, 2);
/// Y 缩小输出水平行距
pub const Y_SCALE_DOWN_HOR_STRIDE: BitField = BitField::new(30, 0, 20);
/// UV 缩小输出水平行距
pub const UV_SCALE_DOWN_HOR_STRIDE: BitField = BitField::new(31, 0, 20);

// ========================
// reg032: 超时阈值
// ========================

/// 硬件超时阈值 (取值见 [`crate::TimeoutThreshold`])
pub const TIMEOUT_THRESHOLD: BitField = BitField::word32(32);
