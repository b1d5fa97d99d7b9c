//! 几何映射
//!
//! 将图纸实体映射为导出用的几何形状：
//! - 直线 → 折线 (LineString)，两个端点
//! - 圆 → 点 (Point)，取圆心
//! - 多段线 → 闭合且不少于3个点时为多边形 (Polygon)，否则为折线
//!
//! 映射是纯函数，不产生副作用。

use crate::entity::DrawingEntity;
use crate::math::Point2;

/// 闭合多段线构成多边形所需的最少顶点数
pub const MIN_POLYGON_POINTS: usize = 3;

/// 几何形状
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point2),
    LineString(Vec<Point2>),
    /// 外环顶点，不含重复的闭合点
    Polygon(Vec<Point2>),
}

impl Shape {
    /// 获取形状的全部顶点
    pub fn points(&self) -> &[Point2] {
        match self {
            Shape::Point(p) => std::slice::from_ref(p),
            Shape::LineString(points) | Shape::Polygon(points) => points,
        }
    }

    /// 是否为闭合形状
    pub fn is_closed(&self) -> bool {
        matches!(self, Shape::Polygon(_))
    }

    /// 获取形状的类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Point(_) => "Point",
            Shape::LineString(_) => "LineString",
            Shape::Polygon(_) => "Polygon",
        }
    }
}

/// 将图纸实体映射为几何形状
///
/// 返回 `None` 表示该实体不产生输出。
pub fn map_entity(entity: &DrawingEntity) -> Option<Shape> {
    let shape = match entity {
        DrawingEntity::Line { start, end } => Shape::LineString(vec![*start, *end]),
        DrawingEntity::Circle { center, .. } => Shape::Point(*center),
        DrawingEntity::Polyline { points, closed } => {
            if *closed && points.len() >= MIN_POLYGON_POINTS {
                Shape::Polygon(points.clone())
            } else {
                Shape::LineString(points.clone())
            }
        }
    };
    Some(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_line_maps_to_line_string() {
        let entity = DrawingEntity::line(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let shape = map_entity(&entity).unwrap();
        assert_eq!(
            shape,
            Shape::LineString(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)])
        );
    }

    #[test]
    fn test_circle_maps_to_center_point() {
        let entity = DrawingEntity::circle(Point2::new(5.0, 5.0), 2.5);
        let shape = map_entity(&entity).unwrap();
        assert_eq!(shape, Shape::Point(Point2::new(5.0, 5.0)));
        assert_eq!(shape.points(), &[Point2::new(5.0, 5.0)]);
    }

    #[test]
    fn test_closed_polyline_maps_to_polygon() {
        let entity = DrawingEntity::polyline(square(), true);
        let shape = map_entity(&entity).unwrap();
        assert!(shape.is_closed());
        assert_eq!(shape.points().len(), 4);
    }

    #[test]
    fn test_open_polyline_maps_to_line_string() {
        let entity = DrawingEntity::polyline(square(), false);
        let shape = map_entity(&entity).unwrap();
        assert_eq!(shape.type_name(), "LineString");
        assert_eq!(shape.points(), square().as_slice());
    }

    #[test]
    fn test_closed_polyline_with_two_points_stays_open() {
        let entity =
            DrawingEntity::polyline([Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)], true);
        let shape = map_entity(&entity).unwrap();
        assert!(!shape.is_closed());
    }
}
