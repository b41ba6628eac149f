//! VP9 系数概率平面打包.
//!
//! 硬件 DMA 通道以固定 32 字节对齐突发读取概率表, 因此 6x6x3 的
//! 系数概率表写入内存时每 27 个数据字节后要空出 5 个填充字节,
//! 凑齐 32 字节步长. 打包器只负责匹配该步长, 不解释系数含义.

use vdec_core::{VdecError, VdecResult};

/// 每组数据字节数
pub const GROUP_DATA_BYTES: usize = 27;
/// 每组填充字节数
pub const GROUP_PAD_BYTES: usize = 5;
/// 系数表总值数 (6x6x3)
pub const COEFF_COUNT: usize = 108;
/// 打包后的总跨度 (4 组 x 32 字节)
pub const COEFF_PLANE_BYTES: usize =
    COEFF_COUNT / GROUP_DATA_BYTES * (GROUP_DATA_BYTES + GROUP_PAD_BYTES);

/// 打包系数概率表
///
/// 按外/中/内索引的行主序连续写出 108 个值, 每写满 27 字节跳过
/// 5 个目标字节. 填充字节不写入, 由调用方预先清零 (或自行定义).
///
/// 目标切片不足 [`COEFF_PLANE_BYTES`] 时返回错误.
pub fn write_coeff_plane(coef: &[[[u8; 3]; 6]; 6], plane: &mut [u8]) -> VdecResult<()> {
    if plane.len() < COEFF_PLANE_BYTES {
        return Err(VdecError::BufferTooSmall {
            needed: COEFF_PLANE_BYTES,
            actual: plane.len(),
        });
    }

    let mut idx = 0;
    let mut byte_count = 0;
    for row in coef {
        for col in row {
            for &p in col {
                plane[idx] = p;
                idx += 1;
                byte_count += 1;
                if byte_count == GROUP_DATA_BYTES {
                    idx += GROUP_PAD_BYTES;
                    byte_count = 0;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 按同一 27/5 步长读回 108 个值
    fn read_coeff_plane(plane: &[u8]) -> [[[u8; 3]; 6]; 6] {
        let mut coef = [[[0u8; 3]; 6]; 6];
        let mut idx = 0;
        let mut byte_count = 0;
        for row in &mut coef {
            for col in row.iter_mut() {
                for p in col.iter_mut() {
                    *p = plane[idx];
                    idx += 1;
                    byte_count += 1;
                    if byte_count == GROUP_DATA_BYTES {
                        idx += GROUP_PAD_BYTES;
                        byte_count = 0;
                    }
                }
            }
        }
        coef
    }

    fn sample_table() -> [[[u8; 3]; 6]; 6] {
        let mut coef = [[[0u8; 3]; 6]; 6];
        let mut v = 0u8;
        for row in &mut coef {
            for col in row.iter_mut() {
                for p in col.iter_mut() {
                    *p = v;
                    v = v.wrapping_add(1);
                }
            }
        }
        coef
    }

    #[test]
    fn test_plane_span() {
        // 108 个值: 4 组数据 + 4 组填充 = 128 字节
        assert_eq!(COEFF_PLANE_BYTES, 128);
    }

    #[test]
    fn test_pack_unpack_roundtrip() {
        let coef = sample_table();
        let mut plane = [0u8; COEFF_PLANE_BYTES];
        write_coeff_plane(&coef, &mut plane).unwrap();
        assert_eq!(read_coeff_plane(&plane), coef);
    }

    #[test]
    fn test_padding_untouched() {
        let coef = sample_table();
        let mut plane = [0xaau8; COEFF_PLANE_BYTES];
        write_coeff_plane(&coef, &mut plane).unwrap();

        // 每 32 字节组的末 5 字节保持原值
        for g in 0..4 {
            for b in 27..32 {
                assert_eq!(plane[g * 32 + b], 0xaa, "组 {g} 填充字节 {b} 被写入");
            }
        }
        // 数据区与填充区边界取样
        assert_eq!(plane[26], 26);
        assert_eq!(plane[32], 27);
    }

    #[test]
    fn test_short_destination() {
        let coef = sample_table();
        let mut plane = [0u8; COEFF_PLANE_BYTES - 1];
        assert!(matches!(
            write_coeff_plane(&coef, &mut plane),
            Err(VdecError::BufferTooSmall { needed: 128, .. })
        ));
    }
}
