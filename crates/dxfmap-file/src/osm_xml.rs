//! OSM XML 输出
//!
//! 按 OSM 0.6 的元素形状写出：`osm` 根元素、一个 `meta`、
//! 全部 `node`，然后全部 `way`（含有序 `nd` 引用和 `tag`）。
//! 两空格缩进，UTF-8 编码。

use crate::ensure_parent_dir;
use crate::error::FileError;
use dxfmap_core::osm::{OsmDocument, Tag};
use std::path::Path;

/// OSM API 版本
pub const OSM_VERSION: &str = "0.6";

/// 生成器名称（同时写入 meta 的 author）
pub const GENERATOR: &str = "dxfmap";

/// meta 元素的数据来源
pub const META_SOURCE: &str = "indoor_dwg";

const INDENT: &str = "  ";

/// 序列化为 XML 字符串
pub fn to_string(document: &OsmDocument) -> String {
    let mut xml = String::new();

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<osm version=\"{}\" generator=\"{}\">\n",
        OSM_VERSION, GENERATOR
    ));
    xml.push_str(&format!(
        "{}<meta author=\"{}\" unit=\"{}\" source=\"{}\"/>\n",
        INDENT,
        GENERATOR,
        escape(document.unit.label()),
        META_SOURCE
    ));

    for node in &document.nodes {
        xml.push_str(&format!(
            r#"{}<node id="{}" visible="true" version="1" x="{}" y="{}""#,
            INDENT,
            node.id,
            format_coord(node.position.x),
            format_coord(node.position.y)
        ));
        if node.tags.is_empty() {
            xml.push_str("/>\n");
        } else {
            xml.push_str(">\n");
            write_tags(&mut xml, &node.tags);
            xml.push_str(&format!("{}</node>\n", INDENT));
        }
    }

    for way in &document.ways {
        xml.push_str(&format!(
            "{}<way id=\"{}\" visible=\"true\" version=\"1\">\n",
            INDENT, way.id
        ));
        for node_ref in &way.node_refs {
            xml.push_str(&format!("{}{}<nd ref=\"{}\"/>\n", INDENT, INDENT, node_ref));
        }
        write_tags(&mut xml, &way.tags);
        xml.push_str(&format!("{}</way>\n", INDENT));
    }

    xml.push_str("</osm>\n");
    xml
}

/// 写出到文件，必要时创建父目录
pub fn write_file(document: &OsmDocument, path: &Path) -> Result<(), FileError> {
    ensure_parent_dir(path)?;
    std::fs::write(path, to_string(document).as_bytes())?;
    Ok(())
}

fn write_tags(xml: &mut String, tags: &[Tag]) {
    for tag in tags {
        xml.push_str(&format!(
            "{}{}<tag k=\"{}\" v=\"{}\"/>\n",
            INDENT,
            INDENT,
            escape(&tag.key),
            escape(&tag.value)
        ));
    }
}

/// 坐标文本
///
/// 最短往返十进制，整数值保留一位小数；
/// 十进制指数小于 -4 或不小于 16 时改用指数形式，指数至少两位（`1e+16`、`1.5e-05`）。
pub fn format_coord(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let abs = value.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{:e}", value);
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            None => sci,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// 属性值转义
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
