//! DXF实体读取
//!
//! DXF 容器的解析完全交给 `dxf` crate，这里只把模型空间实体
//! 转换为 `DrawingEntity`：
//! - LINE
//! - CIRCLE
//! - LWPOLYLINE
//!
//! 其他类型静默跳过。

use crate::error::FileError;
use dxfmap_core::entity::DrawingEntity;
use dxfmap_core::math::Point2;
use std::path::Path;
use tracing::debug;

/// 从DXF文件读取实体
pub fn read_entities(path: &Path) -> Result<Vec<DrawingEntity>, FileError> {
    let drawing = dxf::Drawing::load_file(path).map_err(|e| FileError::Dxf(e.to_string()))?;
    Ok(entities_from_drawing(&drawing))
}

/// 转换已加载图纸中的模型空间实体
pub fn entities_from_drawing(drawing: &dxf::Drawing) -> Vec<DrawingEntity> {
    let mut entities = Vec::new();
    let mut paper_space = 0usize;
    let mut skipped = 0usize;

    for entity in drawing.entities() {
        // 图纸空间（图框、标题栏等）不参与转换
        if entity.common.is_in_paper_space {
            paper_space += 1;
            continue;
        }
        match convert_dxf_entity(entity) {
            Some(e) => entities.push(e),
            None => skipped += 1,
        }
    }

    if paper_space > 0 {
        debug!("Skipped {} paper-space DXF entities", paper_space);
    }
    if skipped > 0 {
        debug!("Skipped {} unsupported DXF entities", skipped);
    }
    entities
}

/// 将DXF实体转换为图纸实体
fn convert_dxf_entity(entity: &dxf::entities::Entity) -> Option<DrawingEntity> {
    match &entity.specific {
        dxf::entities::EntityType::Line(line) => Some(DrawingEntity::line(
            Point2::new(line.p1.x, line.p1.y),
            Point2::new(line.p2.x, line.p2.y),
        )),

        dxf::entities::EntityType::Circle(circle) => Some(DrawingEntity::circle(
            Point2::new(circle.center.x, circle.center.y),
            circle.radius,
        )),

        dxf::entities::EntityType::LwPolyline(lwpoly) => Some(DrawingEntity::polyline(
            lwpoly.vertices.iter().map(|v| Point2::new(v.x, v.y)),
            lwpoly.is_closed(),
        )),

        _ => None,
    }
}
