pub const MEM_SIZE: usize = 256;

/// Assembled memory image: one byte per address, zero-filled.
///
/// Built once per assembly run and handed to the output emitters
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemImage([u8; MEM_SIZE]);

impl MemImage {
    pub fn new() -> Self {
        MemImage([0; MEM_SIZE])
    }

    pub fn get(&self, addr: u8) -> u8 {
        self.0[addr as usize]
    }

    pub fn set(&mut self, addr: u8, val: u8) {
        self.0[addr as usize] = val;
    }

    pub fn bytes(&self) -> &[u8; MEM_SIZE] {
        &self.0
    }

    /// Iterate `(addr, value)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.0.iter().enumerate().map(|(a, v)| (a as u8, *v))
    }
}

impl Default for MemImage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_filled() {
        let mem = MemImage::new();
        assert!(mem.iter().all(|(_, v)| v == 0));
    }

    #[test]
    fn test_set_get() {
        let mut mem = MemImage::new();
        mem.set(0, 0x12);
        mem.set(255, 0x34);
        assert_eq!(mem.get(0), 0x12);
        assert_eq!(mem.get(255), 0x34);
        assert_eq!(mem.get(1), 0);
        assert_eq!(mem.iter().count(), MEM_SIZE);
    }
}
