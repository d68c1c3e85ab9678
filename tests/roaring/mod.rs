use roaring::RoaringBitmap;

pub fn from_bytes(bytes: &[u8]) -> RoaringBitmap {
    bytes.iter().map(|&b| u32::from(b)).collect()
}
