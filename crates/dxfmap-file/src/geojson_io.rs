//! GeoJSON 输出
//!
//! 以两空格缩进的 UTF-8 JSON 文本写出 FeatureCollection。

use crate::error::FileError;
use crate::ensure_parent_dir;
use dxfmap_core::geojson::FeatureCollection;
use std::io::Write;
use std::path::Path;

/// 序列化为带缩进的 JSON 字符串
pub fn to_string(collection: &FeatureCollection) -> Result<String, FileError> {
    let mut json = serde_json::to_string_pretty(collection)?;
    json.push('\n');
    Ok(json)
}

/// 写出到文件，必要时创建父目录
pub fn write_file(collection: &FeatureCollection, path: &Path) -> Result<(), FileError> {
    ensure_parent_dir(path)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(to_string(collection)?.as_bytes())?;
    Ok(())
}
