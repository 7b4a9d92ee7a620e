//! Built-in element schemas

use crate::node::AttrSchema;
use crate::tree::SchemaTree;
use serde_json::json;

/// Schema for overlay images placed on the chart canvas.
///
/// Images form an ordered collection; order decides stacking among
/// elements of the same layer. Every attribute re-renders at collection
/// scope, so the classification lives on the tree and the nodes inherit
/// it.
pub fn image_overlay() -> SchemaTree {
    SchemaTree::new("image")
        .with_description("An image overlaid on the chart canvas")
        .with_default_edit("arraydraw")
        .with_attr(
            AttrSchema::boolean("visible")
                .with_default(json!(true))
                .with_description("Whether this image is drawn at all. Hidden images keep their slot in the collection."),
        )
        .with_attr(
            AttrSchema::string("source")
                .with_description("URL of the image, relative or absolute. Empty means nothing to draw."),
        )
        .with_attr(
            AttrSchema::enumerated("layer", ["below", "above"])
                .with_default(json!("above"))
                .with_description("Draw the image below or above data marks. With both references on paper, below covers the whole plot area."),
        )
        .with_attr(
            AttrSchema::number("sizex")
                .with_description("Horizontal size of the image container, in units of the x reference frame."),
        )
        .with_attr(
            AttrSchema::number("sizey")
                .with_description("Vertical size of the image container, in units of the y reference frame."),
        )
        .with_attr(
            AttrSchema::enumerated("sizing", ["fill", "contain", "stretch"])
                .with_default(json!("contain"))
                .with_description("Which dimension of the image the container constrains."),
        )
        .with_attr(
            AttrSchema::number("opacity")
                .with_range(0.0, 1.0)
                .with_default(json!(1))
                .with_description("Opacity of the image."),
        )
        .with_attr(
            AttrSchema::any("x")
                .with_default(json!(0))
                .with_description("X position. Units depend on xref, so the value is passed through uninterpreted."),
        )
        .with_attr(
            AttrSchema::any("y")
                .with_default(json!(0))
                .with_description("Y position. Units depend on yref, so the value is passed through uninterpreted."),
        )
        .with_attr(
            AttrSchema::enumerated("xanchor", ["left", "center", "right"])
                .with_default(json!("left"))
                .with_description("Which edge of the container the x position anchors."),
        )
        .with_attr(
            AttrSchema::enumerated("yanchor", ["top", "middle", "bottom"])
                .with_default(json!("top"))
                .with_description("Which edge of the container the y position anchors."),
        )
        .with_attr(
            AttrSchema::axis_ref("xref")
                .with_description("X coordinate reference frame: the paper, or an axis id."),
        )
        .with_attr(
            AttrSchema::axis_ref("yref")
                .with_description("Y coordinate reference frame: the paper, or an axis id."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_value, NoAxes};
    use serde_json::json;

    #[test]
    fn test_image_schema_is_self_consistent() {
        image_overlay().self_check().unwrap();
    }

    #[test]
    fn test_image_declaration_order() {
        let tree = image_overlay();
        assert_eq!(
            tree.names(),
            vec![
                "visible", "source", "layer", "sizex", "sizey", "sizing", "opacity", "x", "y",
                "xanchor", "yanchor", "xref", "yref"
            ]
        );
    }

    #[test]
    fn test_image_defaults() {
        let tree = image_overlay();
        assert_eq!(tree.get("visible").unwrap().default, json!(true));
        assert_eq!(tree.get("source").unwrap().default, json!(""));
        assert_eq!(tree.get("layer").unwrap().default, json!("above"));
        assert_eq!(tree.get("sizing").unwrap().default, json!("contain"));
        assert_eq!(tree.get("opacity").unwrap().default, json!(1));
        assert_eq!(tree.get("xref").unwrap().default, json!("paper"));
        assert_eq!(tree.get("yref").unwrap().default, json!("paper"));
    }

    #[test]
    fn test_image_edit_classification_inherited() {
        let tree = image_overlay();
        for attr in tree.iter() {
            assert_eq!(
                tree.effective_edit(attr).map(|e| e.as_str()),
                Some("arraydraw"),
                "attribute {} should inherit the tree classification",
                attr.name
            );
        }
    }

    #[test]
    fn test_image_opacity_bounds() {
        let tree = image_overlay();
        let opacity = tree.get("opacity").unwrap();
        assert!(validate_value(opacity, &json!(0.5), &NoAxes).is_ok());
        assert!(validate_value(opacity, &json!(1.5), &NoAxes).is_err());
    }
}
