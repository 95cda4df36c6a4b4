use crate::utils::error::Result;

/// Byte-level access to wherever the collections are kept.
///
/// A missing file is reported as an `IoError` of kind `NotFound`; callers
/// decide whether that is an error.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn menu_file(&self) -> &str;
    fn orders_file(&self) -> &str;
}
