//! GeoJSON 要素构建
//!
//! 将几何形状逐个包装为只含几何、不含属性的 Feature，
//! 按遇到的顺序收集为 FeatureCollection。
//! 此路径不做去重，也不分配标识符。

use crate::entity::DrawingEntity;
use crate::geometry::{map_entity, Shape};
use crate::math::Point2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// GeoJSON 坐标位置 `[x, y]`
pub type Position = [f64; 2];

/// GeoJSON 几何对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
}

impl GeoJsonGeometry {
    /// 从几何形状转换
    ///
    /// 少于两个位置的折线不是合法的 GeoJSON LineString，返回 `None`。
    pub fn from_shape(shape: &Shape) -> Option<Self> {
        match shape {
            Shape::Point(p) => Some(GeoJsonGeometry::Point {
                coordinates: position(p),
            }),
            Shape::LineString(points) => {
                if points.len() < 2 {
                    return None;
                }
                Some(GeoJsonGeometry::LineString {
                    coordinates: points.iter().map(position).collect(),
                })
            }
            Shape::Polygon(points) => {
                let mut ring: Vec<Position> = points.iter().map(position).collect();
                // 线性环首尾必须相同
                if ring.first() != ring.last() {
                    if let Some(first) = ring.first().copied() {
                        ring.push(first);
                    }
                }
                Some(GeoJsonGeometry::Polygon {
                    coordinates: vec![ring],
                })
            }
        }
    }
}

fn position(p: &Point2) -> Position {
    [p.x, p.y]
}

/// 要素 (Feature)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Feature {
    Feature {
        geometry: GeoJsonGeometry,
        /// 始终为空对象
        properties: Map<String, Value>,
    },
}

impl Feature {
    /// 创建只含几何的要素
    pub fn from_geometry(geometry: GeoJsonGeometry) -> Self {
        Feature::Feature {
            geometry,
            properties: Map::new(),
        }
    }

    pub fn geometry(&self) -> &GeoJsonGeometry {
        match self {
            Feature::Feature { geometry, .. } => geometry,
        }
    }
}

/// 要素集合 (FeatureCollection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeatureCollection {
    FeatureCollection { features: Vec<Feature> },
}

impl FeatureCollection {
    pub fn features(&self) -> &[Feature] {
        match self {
            FeatureCollection::FeatureCollection { features } => features,
        }
    }

    pub fn len(&self) -> usize {
        self.features().len()
    }

    pub fn is_empty(&self) -> bool {
        self.features().is_empty()
    }
}

/// 要素集合构建器
#[derive(Debug, Default)]
pub struct FeatureCollectionBuilder {
    features: Vec<Feature>,
    skipped: usize,
}

impl FeatureCollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一个图纸实体
    pub fn add_entity(&mut self, entity: &DrawingEntity) {
        if let Some(shape) = map_entity(entity) {
            self.push_shape(&shape);
        }
    }

    /// 添加一个几何形状
    pub fn push_shape(&mut self, shape: &Shape) {
        match GeoJsonGeometry::from_shape(shape) {
            Some(geometry) => self.features.push(Feature::from_geometry(geometry)),
            None => {
                debug!(
                    "Skipping degenerate {} with {} point(s)",
                    shape.type_name(),
                    shape.points().len()
                );
                self.skipped += 1;
            }
        }
    }

    /// 被跳过的退化形状数量
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn build(self) -> FeatureCollection {
        FeatureCollection::FeatureCollection {
            features: self.features,
        }
    }
}

/// 由实体序列构建要素集合
pub fn build_feature_collection<'a>(
    entities: impl IntoIterator<Item = &'a DrawingEntity>,
) -> FeatureCollection {
    let mut builder = FeatureCollectionBuilder::new();
    for entity in entities {
        builder.add_entity(entity);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_line_feature_collection() {
        let entities = [DrawingEntity::line(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        )];
        let collection = build_feature_collection(&entities);

        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.features()[0].geometry(),
            &GeoJsonGeometry::LineString {
                coordinates: vec![[0.0, 0.0], [10.0, 0.0]],
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        let entities = [DrawingEntity::line(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        )];
        let value = serde_json::to_value(build_feature_collection(&entities)).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[0.0, 0.0], [10.0, 0.0]]
                    },
                    "properties": {}
                }]
            })
        );
    }

    #[test]
    fn test_polygon_ring_is_closed() {
        let entities = [DrawingEntity::polyline(
            [
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ],
            true,
        )];
        let collection = build_feature_collection(&entities);

        match collection.features()[0].geometry() {
            GeoJsonGeometry::Polygon { coordinates } => {
                assert_eq!(coordinates.len(), 1);
                let ring = &coordinates[0];
                assert_eq!(ring.len(), 5);
                assert_eq!(ring.first(), ring.last());
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_already_closed_ring_not_duplicated() {
        let entities = [DrawingEntity::polyline(
            [
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 0.0),
            ],
            true,
        )];
        let collection = build_feature_collection(&entities);

        match collection.features()[0].geometry() {
            GeoJsonGeometry::Polygon { coordinates } => assert_eq!(coordinates[0].len(), 4),
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_encounter_order_and_no_dedup() {
        let entities = [
            DrawingEntity::circle(Point2::new(5.0, 5.0), 1.0),
            DrawingEntity::line(Point2::new(0.0, 0.0), Point2::new(0.0, 0.0)),
            DrawingEntity::circle(Point2::new(5.0, 5.0), 1.0),
        ];
        let collection = build_feature_collection(&entities);

        assert_eq!(collection.len(), 3);
        assert!(matches!(
            collection.features()[0].geometry(),
            GeoJsonGeometry::Point { .. }
        ));
        assert!(matches!(
            collection.features()[1].geometry(),
            GeoJsonGeometry::LineString { .. }
        ));
    }

    #[test]
    fn test_single_point_polyline_skipped() {
        let mut builder = FeatureCollectionBuilder::new();
        builder.add_entity(&DrawingEntity::polyline([Point2::new(1.0, 1.0)], false));
        assert_eq!(builder.skipped(), 1);
        assert!(builder.build().is_empty());
    }
}
