//! DXFMAP 文件处理
//!
//! 支持：
//! - `.dxf` 读取（LINE / CIRCLE / LWPOLYLINE）
//! - `.geojson` 导出
//! - `.osm` 导出

pub mod convert;
pub mod error;
pub mod geojson_io;
pub mod osm_xml;
pub mod reader;

pub use convert::{convert_directory, dxf_to_geojson, dxf_to_osm, OsmConfig};
pub use error::FileError;

use std::path::Path;

/// 创建输出文件的父目录（若不存在）
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), FileError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
