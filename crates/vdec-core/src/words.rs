//! 寄存器字缓冲区.
//!
//! 固定长度的 32 位字数组, 即硬件 DMA 引擎逐字读取的命令块原始形态.
//! 所有字段访问经由 [`BitField`] 描述符完成掩码/移位, 写入超宽值时
//! 按硬件语义静默截断 (高位丢弃), 与真实寄存器行为一致.

use crate::BitField;

/// 寄存器字缓冲区
///
/// 创建时全部清零, 因此所有保留位天然为零; 字段写入只触碰自己的位,
/// 不会破坏邻居.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegWords {
    /// 字数组 (每字 32 位)
    words: Vec<u32>,
}

impl RegWords {
    /// 创建指定字数的零填充缓冲区
    pub fn new(word_count: usize) -> Self {
        Self {
            words: vec![0; word_count],
        }
    }

    /// 字数
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// 字节数
    pub fn byte_len(&self) -> usize {
        self.words.len() * 4
    }

    /// 写入字段
    ///
    /// 精确写入 `field.width` 位, 不影响同字的其他位.
    /// 值超出位宽时高位被截断, 与硬件寄存器写入语义一致;
    /// 截断发生时输出 trace 日志便于上游排查.
    pub fn set(&mut self, field: BitField, value: u32) {
        let mask = field.mask();
        if value > field.max_value() {
            log::trace!(
                "字段溢出截断: word={} lsb={} width={} value=0x{:x}",
                field.word,
                field.lsb,
                field.width,
                value,
            );
        }
        let bits = (value & field.max_value()) << field.lsb;
        self.words[field.word] = (self.words[field.word] & !mask) | bits;
    }

    /// 读取字段
    pub fn get(&self, field: BitField) -> u32 {
        (self.words[field.word] & field.mask()) >> field.lsb
    }

    /// 写入整字
    pub fn set_word(&mut self, word: usize, value: u32) {
        self.words[word] = value;
    }

    /// 读取整字
    pub fn word(&self, word: usize) -> u32 {
        self.words[word]
    }

    /// 字数组视图
    pub fn as_words(&self) -> &[u32] {
        &self.words
    }

    /// 序列化为小端字节流 (DMA 引擎的读取格式)
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        for w in &self.words {
            bytes.extend_from_slice(&w.to_le_bytes());
        }
        bytes
    }
}
