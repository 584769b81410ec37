//! Tag programmer abstraction

/// Tag programmer
///
/// Receives the finished block array, block 0 first. The editor does not
/// learn whether programming succeeded; transmission and verification are
/// the implementation's concern.
pub trait TagWriter {
    /// Program `blocks` onto the tag, `blocks.len()` being the block count
    fn write(&mut self, blocks: &[u32]);
}
