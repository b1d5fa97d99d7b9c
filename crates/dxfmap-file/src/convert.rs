//! 转换流程
//!
//! 实体读取 → 几何映射 → 要素/图构建 → 序列化，单次同步遍历。
//! 两条路径互不共享状态：
//! - `dxf_to_geojson`: 不检查输入是否存在，读取失败直接返回错误
//! - `dxf_to_osm`: 输入不存在时记录错误并返回 `Ok(None)`，不写出任何文件

use crate::error::FileError;
use crate::{geojson_io, osm_xml, reader};
use dxfmap_core::geojson::build_feature_collection;
use dxfmap_core::osm::{build_osm, OsmStats};
use dxfmap_core::units::Unit;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 默认输入文件名
pub const DEFAULT_INPUT_FILE: &str = "sample.dxf";

/// OSM 转换配置
#[derive(Debug, Clone, PartialEq)]
pub struct OsmConfig {
    /// 写入 `unit` 标签的单位
    pub unit: Unit,
    /// 输入目录
    pub input_dir: PathBuf,
    /// 输出目录
    pub output_dir: PathBuf,
}

impl Default for OsmConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Mm,
            input_dir: PathBuf::from("DXF"),
            output_dir: PathBuf::from("OSM"),
        }
    }
}

impl OsmConfig {
    /// 默认输入路径 `<input_dir>/sample.dxf`
    pub fn default_input(&self) -> PathBuf {
        self.input_dir.join(DEFAULT_INPUT_FILE)
    }

    /// 输入文件对应的输出路径 `<output_dir>/<stem>.osm`
    pub fn output_for(&self, input: &Path) -> Result<PathBuf, FileError> {
        let stem = input
            .file_stem()
            .ok_or_else(|| FileError::InvalidPath(input.display().to_string()))?;
        let mut name = stem.to_os_string();
        name.push(".osm");
        Ok(self.output_dir.join(name))
    }
}

/// DXF 转 GeoJSON，返回要素数量
pub fn dxf_to_geojson(input: &Path, output: &Path) -> Result<usize, FileError> {
    let entities = reader::read_entities(input)?;
    let collection = build_feature_collection(&entities);

    geojson_io::write_file(&collection, output)?;
    info!("GeoJSON saved to: {}", output.display());

    Ok(collection.len())
}

/// DXF 转 OSM
///
/// 输入文件不存在时返回 `Ok(None)`。
pub fn dxf_to_osm(input: &Path, output: &Path, unit: Unit) -> Result<Option<OsmStats>, FileError> {
    info!("Converting DXF: {} to OSM: {}", input.display(), output.display());

    if !input.exists() {
        error!("DXF file not found at {}", input.display());
        return Ok(None);
    }

    let entities = reader::read_entities(input)?;
    let document = build_osm(&entities, unit);

    osm_xml::write_file(&document, output)?;
    info!("OSM file saved to: {}", output.display());

    let stats = document.stats();
    log_stats(&stats);
    Ok(Some(stats))
}

/// 批量转换目录下的全部 `.dxf` 文件（按文件名排序）
pub fn convert_directory(config: &OsmConfig) -> Result<Vec<(PathBuf, OsmStats)>, FileError> {
    let mut inputs: Vec<PathBuf> = std::fs::read_dir(&config.input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_dxf(path))
        .collect();
    inputs.sort();

    info!(
        "Found {} DXF file(s) in {}",
        inputs.len(),
        config.input_dir.display()
    );

    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let output = config.output_for(&input)?;
        if let Some(stats) = dxf_to_osm(&input, &output, config.unit)? {
            results.push((output, stats));
        }
    }
    Ok(results)
}

fn is_dxf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dxf"))
}

fn log_stats(stats: &OsmStats) {
    info!("Nodes created: {}", stats.nodes);
    info!("Ways created: {}", stats.ways);
    match &stats.bounds {
        Some(bounds) => {
            info!("X range: {:.3} to {:.3}", bounds.min.x, bounds.max.x);
            info!("Y range: {:.3} to {:.3}", bounds.min.y, bounds.max.y);
        }
        None => info!("No nodes, coordinate range unavailable"),
    }
}
