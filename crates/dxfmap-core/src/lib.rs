//! DXFMAP 核心
//!
//! 将 CAD 图纸实体转换为地理交换格式所需的数据结构。
//!
//! # 架构设计
//!
//! 单向数据流，两条导出路径互不共享状态：
//! - `DrawingEntity`: 实体读取器产出的图元（直线、圆、多段线）
//! - `Shape`: 几何映射结果（点、折线、多边形）
//! - `FeatureCollection`: GeoJSON 路径，按顺序平铺的要素列表
//! - `OsmDocument`: OSM 路径，去重后的节点/路径图
//!
//! # 示例
//!
//! ```rust
//! use dxfmap_core::prelude::*;
//!
//! let entities = [DrawingEntity::line(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0))];
//! let doc = build_osm(&entities, Unit::Mm);
//!
//! assert_eq!(doc.nodes.len(), 2);
//! assert_eq!(doc.ways[0].tag("highway"), Some("wall"));
//! ```

pub mod entity;
pub mod geojson;
pub mod geometry;
pub mod math;
pub mod osm;
pub mod units;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::entity::DrawingEntity;
    pub use crate::geojson::{build_feature_collection, Feature, FeatureCollection, GeoJsonGeometry};
    pub use crate::geometry::{map_entity, Shape};
    pub use crate::math::{BoundingBox2, Point2};
    pub use crate::osm::{build_osm, Node, OsmBuilder, OsmDocument, OsmId, OsmStats, Tag, Way};
    pub use crate::units::Unit;
}
