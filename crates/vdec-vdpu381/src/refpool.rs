//! 参考帧缓冲区解析.
//!
//! 硬件的每个参考槽都必须填入语法上有效的地址, 但码流合法地会
//! 引用不存在的帧 (纯帧内图像、尚未解码的帧) 或使用少于硬件槽数
//! 的参考. 查找失败时回退到当前输出缓冲区, 这是定义内的正常结果
//! 而非错误.

use crate::buffer::DecodedBuffer;

/// 已解码缓冲池
///
/// 由外部流水线实现, 按展示时间戳查找先前解码的缓冲区.
/// 时间戳由调用方保证池内唯一, 查找不存在歧义.
pub trait BufferPool {
    /// 按时间戳查找缓冲区
    fn find_buffer(&self, timestamp: u64) -> Option<&DecodedBuffer>;
}

/// 切片即最简单的缓冲池
impl BufferPool for [DecodedBuffer] {
    fn find_buffer(&self, timestamp: u64) -> Option<&DecodedBuffer> {
        self.iter().find(|b| b.timestamp == timestamp)
    }
}

/// 解析参考帧缓冲区
///
/// 返回池中时间戳等于 `timestamp` 的缓冲区; 未命中时回退到当前
/// 输出缓冲区 `dst`, 保证参考槽总有有效地址可填.
pub fn get_ref_buf<'a, P>(pool: &'a P, dst: &'a DecodedBuffer, timestamp: u64) -> &'a DecodedBuffer
where
    P: BufferPool + ?Sized,
{
    match pool.find_buffer(timestamp) {
        Some(buf) => buf,
        None => {
            log::trace!("参考帧 ts={timestamp} 不在池中, 回退到当前输出缓冲区");
            dst
        }
    }
}
