//! OSM 节点/路径图构建
//!
//! 单次遍历实体序列，构建去重后的节点 (node) 与路径 (way)：
//! - 坐标按 (x, y) 精确相等去重，首次出现时分配递增 ID
//! - 节点与路径共用同一个从 1 开始的计数器，路径 ID 与之后分配的节点 ID 同属一个数值空间
//! - 退化几何（零长度直线、不同节点数不足的多段线）静默丢弃
//!
//! 输出顺序：节点按首次出现排列，路径按实体处理顺序排列。
//! 相同输入与单位的两次构建结果完全一致。

use crate::entity::DrawingEntity;
use crate::geometry::{map_entity, Shape};
use crate::math::{BoundingBox2, CoordKey, Point2};
use crate::units::Unit;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// OSM 元素 ID
pub type OsmId = u64;

/// 计数器初始值
pub const FIRST_ID: OsmId = 1;

/// 开放路径所需的最少不同节点数
pub const MIN_OPEN_WAY_NODES: usize = 2;

/// 闭合路径所需的最少不同节点数
pub const MIN_CLOSED_WAY_NODES: usize = 3;

/// 键值标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// 节点
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: OsmId,
    pub position: Point2,
    /// 仅圆心节点带标签
    pub tags: Vec<Tag>,
}

impl Node {
    /// 获取指定键的标签值
    pub fn tag(&self, key: &str) -> Option<&str> {
        find_tag(&self.tags, key)
    }
}

/// 路径
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    pub id: OsmId,
    /// 有序节点引用，闭合路径首尾相同
    pub node_refs: Vec<OsmId>,
    pub closed: bool,
    pub tags: Vec<Tag>,
}

impl Way {
    /// 获取指定键的标签值
    pub fn tag(&self, key: &str) -> Option<&str> {
        find_tag(&self.tags, key)
    }
}

fn find_tag<'a>(tags: &'a [Tag], key: &str) -> Option<&'a str> {
    tags.iter()
        .find(|t| t.key == key)
        .map(|t| t.value.as_str())
}

/// 构建完成的 OSM 图
#[derive(Debug, Clone, PartialEq)]
pub struct OsmDocument {
    pub unit: Unit,
    pub nodes: Vec<Node>,
    pub ways: Vec<Way>,
}

impl OsmDocument {
    /// 统计信息（节点数、路径数、坐标范围）
    pub fn stats(&self) -> OsmStats {
        OsmStats {
            nodes: self.nodes.len(),
            ways: self.ways.len(),
            bounds: BoundingBox2::from_points(self.nodes.iter().map(|n| &n.position)),
        }
    }
}

/// 诊断统计
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsmStats {
    pub nodes: usize,
    pub ways: usize,
    /// 没有节点时为 `None`
    pub bounds: Option<BoundingBox2>,
}

/// OSM 图构建器
///
/// 持有坐标索引与共享计数器，在一次转换中按值传递，不依赖全局状态。
#[derive(Debug)]
pub struct OsmBuilder {
    unit: Unit,
    next_id: OsmId,
    node_index: HashMap<CoordKey, OsmId>,
    nodes: Vec<Node>,
    ways: Vec<Way>,
}

impl OsmBuilder {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            next_id: FIRST_ID,
            node_index: HashMap::new(),
            nodes: Vec::new(),
            ways: Vec::new(),
        }
    }

    /// 处理一个图纸实体
    pub fn add_entity(&mut self, entity: &DrawingEntity) {
        if let Some(shape) = map_entity(entity) {
            self.add_shape(&shape);
        }
    }

    /// 处理一个几何形状
    pub fn add_shape(&mut self, shape: &Shape) {
        match shape {
            Shape::Point(center) => {
                let (id, created) = self.resolve_node(center);
                if created {
                    if let Some(node) = self.nodes.last_mut() {
                        debug_assert_eq!(node.id, id);
                        node.tags.push(Tag::new("highway", "point"));
                        node.tags.push(Tag::new("indoor", "yes"));
                    }
                }
            }
            Shape::LineString(points) => self.add_way(points, false),
            Shape::Polygon(points) => self.add_way(points, true),
        }
    }

    /// 完成构建
    pub fn finish(self) -> OsmDocument {
        OsmDocument {
            unit: self.unit,
            nodes: self.nodes,
            ways: self.ways,
        }
    }

    fn allocate_id(&mut self) -> OsmId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// 解析坐标对应的节点 ID，首次出现时创建节点
    ///
    /// 返回 (ID, 是否新建)。
    fn resolve_node(&mut self, position: &Point2) -> (OsmId, bool) {
        let key = CoordKey::new(position);
        if let Some(&id) = self.node_index.get(&key) {
            return (id, false);
        }

        let id = self.allocate_id();
        self.node_index.insert(key, id);
        self.nodes.push(Node {
            id,
            position: *position,
            tags: Vec::new(),
        });
        (id, true)
    }

    fn add_way(&mut self, points: &[Point2], closed: bool) {
        let mut node_refs: Vec<OsmId> = points.iter().map(|p| self.resolve_node(p).0).collect();

        let distinct = node_refs.iter().collect::<HashSet<_>>().len();
        let required = if closed {
            MIN_CLOSED_WAY_NODES
        } else {
            MIN_OPEN_WAY_NODES
        };
        if distinct < required {
            debug!(
                "Dropping degenerate way: {} distinct node(s), {} required",
                distinct, required
            );
            return;
        }

        if closed {
            node_refs.push(node_refs[0]);
        }

        let id = self.allocate_id();
        let tags = self.way_tags(closed);
        self.ways.push(Way {
            id,
            node_refs,
            closed,
            tags,
        });
    }

    fn way_tags(&self, closed: bool) -> Vec<Tag> {
        let mut tags = Vec::with_capacity(4);
        if closed {
            tags.push(Tag::new("building", "room"));
        } else {
            tags.push(Tag::new("highway", "wall"));
        }
        tags.push(Tag::new("indoor", "yes"));
        tags.push(Tag::new("source", "DXF"));
        tags.push(Tag::new("unit", self.unit.label()));
        tags
    }
}

/// 由实体序列构建 OSM 图
pub fn build_osm<'a>(
    entities: impl IntoIterator<Item = &'a DrawingEntity>,
    unit: Unit,
) -> OsmDocument {
    let mut builder = OsmBuilder::new(unit);
    for entity in entities {
        builder.add_entity(entity);
    }
    builder.finish()
}
