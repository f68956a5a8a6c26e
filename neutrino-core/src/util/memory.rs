use bytemuck::Pod;

/// Returns the raw bytes of `values`, ready to be copied into a device buffer of the same size
///
/// ```
/// # use neutrino_core::util::*;
/// # use neutrino_core::math::Float4;
/// let offsets: Vec<u32> = vec![3, 6, 9];
/// assert_eq!(as_upload_bytes(&offsets).len(), 12);
/// let links = vec![Float4::new(1.0, 0.0, 0.0, 0.0); 2];
/// assert_eq!(as_upload_bytes(&links).len(), 32);
/// ```
pub fn as_upload_bytes<T: Pod>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

/// Size in bytes that a device buffer for `values` needs
pub fn upload_size<T: Pod>(values: &[T]) -> usize {
    std::mem::size_of_val(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_are_little_endian_values() {
        let values: Vec<u32> = vec![1, 256];
        let bytes = as_upload_bytes(&values);
        assert_eq!(upload_size(&values), bytes.len());
        if cfg!(target_endian = "little") {
            assert_eq!(bytes, &[1, 0, 0, 0, 0, 1, 0, 0]);
        }
    }
}
